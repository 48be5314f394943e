//! `mcp-publisher publish`: publish, and explain a 422 by asking the
//! validate endpoint what is wrong.

use std::io::Write;

use publisher_config::PublisherConfig;
use publisher_core::{PublishResponse, ServerDescriptor};
use publisher_registry::{RegistryClient, RegistryEndpoint, RegistryError};

use crate::cli::{GlobalFlags, PublishArgs};
use crate::endpoint::publish_endpoint;
use crate::error::CommandError;
use crate::report::IssueFormatter;

/// Status the registry uses to signal "invalid descriptor, ask /validate".
pub const UNPROCESSABLE_ENTITY: u16 = 422;

enum PublishState {
    Publishing,
    ValidatingFallback(RegistryError),
    Done(Result<PublishResponse, CommandError>),
}

/// Drives one publish attempt with an optional diagnostic validate call.
///
/// At most two requests are made, strictly in sequence. The publish itself
/// is never retried.
pub struct PublishOrchestrator<'a> {
    client: &'a RegistryClient,
    endpoint: &'a RegistryEndpoint,
    formatter: IssueFormatter,
}

impl<'a> PublishOrchestrator<'a> {
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

    pub async fn run<W: Write>(
        &self,
        descriptor: &ServerDescriptor,
        out: &mut W,
    ) -> Result<PublishResponse, CommandError> {
        writeln!(out, "Publishing to {}...", self.endpoint.base_url())?;

        let mut state = PublishState::Publishing;
        let response = loop {
            state = match state {
                PublishState::Publishing => {
                    match self.client.publish(self.endpoint, descriptor).await {
                        Ok(response) => PublishState::Done(Ok(response)),
                        Err(error) if error.status() == Some(UNPROCESSABLE_ENTITY) => {
                            writeln!(out, "Validation failed. Checking detailed validation errors...")?;
                            writeln!(out)?;
                            PublishState::ValidatingFallback(error)
                        }
                        Err(error) => PublishState::Done(Err(CommandError::PublishFailed(error))),
                    }
                }
                PublishState::ValidatingFallback(publish_error) => {
                    PublishState::Done(self.diagnose(descriptor, publish_error, out).await)
                }
                PublishState::Done(outcome) => break outcome?,
            };
        };

        writeln!(out, "✓ Successfully published")?;
        writeln!(
            out,
            "✓ Server {} version {}",
            response.server.name, response.server.version
        )?;
        Ok(response)
    }

    /// Fallback after a 422. Always ends in an error; the only question is
    /// which one.
    async fn diagnose<W: Write>(
        &self,
        descriptor: &ServerDescriptor,
        publish_error: RegistryError,
        out: &mut W,
    ) -> Result<PublishResponse, CommandError> {
        let result = match self.client.validate(self.endpoint, descriptor).await {
            Ok(result) => result,
            Err(validate_error) => {
                tracing::warn!(%validate_error, "fallback validation failed; reporting publish error");
                return Err(CommandError::PublishFailed(publish_error));
            }
        };

        let report = self.formatter.format(&result, descriptor);
        out.write_all(report.text.as_bytes())?;

        match report.error {
            Some(message) => Err(CommandError::Invalid(message)),
            None => {
                tracing::debug!(%publish_error, "validate endpoint accepted a descriptor publish rejected");
                Err(CommandError::ValidationFailed)
            }
        }
    }
}

/// Handle `mcp-publisher publish [FILE]`.
pub async fn handle<W: Write>(
    args: &PublishArgs,
    flags: &GlobalFlags,
    config: &PublisherConfig,
    out: &mut W,
) -> Result<PublishResponse, CommandError> {
    let descriptor = crate::descriptor::load(&args.file)?;
    let endpoint = publish_endpoint(flags.registry.as_deref(), config)?;
    let client = RegistryClient::new().map_err(CommandError::Client)?;

    PublishOrchestrator::new(&client, &endpoint)
        .run(&descriptor, out)
        .await
}
