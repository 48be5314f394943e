//! `mcp-publisher validate`: pre-flight check, never publishes.

use std::io::Write;

use publisher_config::PublisherConfig;
use publisher_core::{ServerDescriptor, ValidationResult};
use publisher_registry::{RegistryClient, RegistryEndpoint};

use crate::cli::{GlobalFlags, ValidateArgs};
use crate::endpoint::validate_endpoint;
use crate::error::CommandError;
use crate::report::IssueFormatter;

/// Runs one validate request and prints its report.
pub struct ValidateOrchestrator<'a> {
    client: &'a RegistryClient,
    endpoint: &'a RegistryEndpoint,
    formatter: IssueFormatter,
}

impl<'a> ValidateOrchestrator<'a> {
    #[must_use]
    pub fn new(client: &'a RegistryClient, endpoint: &'a RegistryEndpoint) -> Self {
        Self {
            client,
            endpoint,
            formatter: IssueFormatter::default(),
        }
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: IssueFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Validate once and print the report. Warnings on a valid result are
    /// printed but do not fail.
    pub async fn run<W: Write>(
        &self,
        descriptor: &ServerDescriptor,
        out: &mut W,
    ) -> Result<ValidationResult, CommandError> {
        writeln!(out, "Validating against {}...", self.endpoint.base_url())?;

        let result = self
            .client
            .validate(self.endpoint, descriptor)
            .await
            .map_err(CommandError::ValidateRequest)?;

        let report = self.formatter.format(&result, descriptor);
        out.write_all(report.text.as_bytes())?;

        match report.error {
            Some(message) => Err(CommandError::Invalid(message)),
            None => Ok(result),
        }
    }
}

/// Handle `mcp-publisher validate [FILE]`.
pub async fn handle<W: Write>(
    args: &ValidateArgs,
    flags: &GlobalFlags,
    config: &PublisherConfig,
    out: &mut W,
) -> Result<ValidationResult, CommandError> {
    let descriptor = crate::descriptor::load(&args.file)?;
    let endpoint = validate_endpoint(flags.registry.as_deref(), config);
    let client = RegistryClient::new().map_err(CommandError::Client)?;

    let result = ValidateOrchestrator::new(&client, &endpoint)
        .run(&descriptor, out)
        .await?;

    let file_name = args
        .file
        .file_name()
        .map_or_else(|| args.file.display().to_string(), |name| name.to_string_lossy().into_owned());
    writeln!(out, "✅ {file_name} is valid")?;
    Ok(result)
}
