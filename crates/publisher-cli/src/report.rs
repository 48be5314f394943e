//! Turns a [`ValidationResult`] into console diagnostics and one aggregated
//! error message.
//!
//! Schema issues (`$schema` missing, deprecated, or unparseable) get dedicated
//! migration guidance. Only the first one in server order is rendered that
//! way; everything else becomes a numbered list entry.

use std::fmt::Write as _;

use publisher_core::schema::{CURRENT_SCHEMA_URL, MigrationLinks, reference};
use publisher_core::{IssueSeverity, ServerDescriptor, ValidationIssue, ValidationResult};

const SCHEMA_REQUIRED_HEADLINE: &str = "$schema field is required";
const INIT_HINT: &str = "Run 'mcp-publisher init' to create a new server.json with the correct schema, or update your existing server.json file.";
const MIGRATE_HINT: &str = "Migrate to the current schema format for new servers.";

/// Output of [`IssueFormatter::format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    /// Multi-line diagnostics for the console.
    pub text: String,
    /// Aggregated failure message. `None` when the result is valid, even if
    /// warnings were rendered.
    pub error: Option<String>,
}

struct SchemaRemediation {
    text: String,
    message: String,
}

/// Renders validation results, with migration links for schema issues.
#[derive(Debug, Clone)]
pub struct IssueFormatter {
    current_schema: String,
    links: MigrationLinks,
}

impl Default for IssueFormatter {
    fn default() -> Self {
        Self {
            current_schema: CURRENT_SCHEMA_URL.to_string(),
            links: MigrationLinks::default(),
        }
    }
}

impl IssueFormatter {
    /// Formatter pointing at a custom current schema and link set.
    #[must_use]
    pub fn new(current_schema: impl Into<String>, links: MigrationLinks) -> Self {
        Self {
            current_schema: current_schema.into(),
            links,
        }
    }

    /// Build console text and, for an invalid result, the aggregated error.
    #[must_use]
    pub fn format(&self, result: &ValidationResult, descriptor: &ServerDescriptor) -> IssueReport {
        let schema = result
            .first_schema_issue()
            .and_then(|(index, issue)| Some((index, self.schema_remediation(issue, descriptor)?)));

        let mut text = String::new();
        if let Some((_, remediation)) = &schema {
            text.push_str(&remediation.text);
        }

        if result.valid {
            return IssueReport { text, error: None };
        }

        let rendered = schema.as_ref().map(|(index, _)| *index);
        let remaining: Vec<&ValidationIssue> = result
            .issues
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != rendered)
            .map(|(_, issue)| issue)
            .collect();

        let total = result.issues.len();
        let _ = writeln!(text, "❌ Validation failed with {total} issue(s):");
        text.push('\n');
        for (position, issue) in remaining.iter().enumerate() {
            render_issue(&mut text, position + 1, issue);
        }

        let mut parts = Vec::new();
        if let Some((_, remediation)) = schema {
            parts.push(remediation.message);
        }
        if !remaining.is_empty() {
            let entries = remaining
                .iter()
                .enumerate()
                .map(|(position, issue)| summarize_issue(position + 1, issue))
                .collect::<Vec<_>>()
                .join("; ");
            parts.push(format!("validation failed with {total} issue(s): {entries}"));
        }

        let error = if parts.is_empty() {
            String::from("validation failed")
        } else {
            parts.join("\n")
        };
        IssueReport {
            text,
            error: Some(error),
        }
    }

    fn schema_remediation(
        &self,
        issue: &ValidationIssue,
        descriptor: &ServerDescriptor,
    ) -> Option<SchemaRemediation> {
        let links_text = format!(
            "📋 Migration checklist: {}\n📖 Full changelog with examples: {}\n\n",
            self.links.checklist, self.links.changelog
        );
        let links_inline = format!(
            "📋 Migration checklist: {} 📖 Full changelog with examples: {}",
            self.links.checklist, self.links.changelog
        );
        let current = &self.current_schema;
        let issue_message = issue.message.trim_end_matches('.');

        match issue.reference.as_str() {
            reference::SCHEMA_FIELD_REQUIRED => {
                let text = format!(
                    "{SCHEMA_REQUIRED_HEADLINE}.\n\nExpected current schema: {current}\n\n{INIT_HINT}\n\n{links_text}"
                );
                let prefix = if issue_message == SCHEMA_REQUIRED_HEADLINE {
                    String::new()
                } else {
                    format!("{issue_message}. ")
                };
                let message = format!(
                    "{prefix}{SCHEMA_REQUIRED_HEADLINE}. Expected current schema: {current}. {INIT_HINT} {links_inline}"
                );
                Some(SchemaRemediation { text, message })
            }
            reference::SCHEMA_VERSION_DEPRECATED => {
                let schema = &descriptor.schema;
                let notice = if issue.severity == IssueSeverity::Warning {
                    format!("⚠️  Deprecated schema detected: {schema}")
                } else {
                    format!("deprecated schema detected: {schema}.")
                };
                let text = format!(
                    "{notice}\n\nExpected current schema: {current}\n\n{MIGRATE_HINT}\n\n{links_text}"
                );
                let message = format!(
                    "{issue_message}. deprecated schema detected: {schema}. Expected current schema: {current}. {MIGRATE_HINT} {links_inline}"
                );
                Some(SchemaRemediation { text, message })
            }
            reference::SCHEMA_VERSION_EXTRACTION_ERROR => {
                let text = format!("{issue_message}.\n\n{links_text}");
                let message = format!("{issue_message}. {links_inline}");
                Some(SchemaRemediation { text, message })
            }
            _ => None,
        }
    }
}

fn render_issue(text: &mut String, number: usize, issue: &ValidationIssue) {
    let _ = writeln!(
        text,
        "{number}. [{}] {} ({})",
        issue.severity, issue.path, issue.kind
    );
    let _ = writeln!(text, "   {}", issue.message);
    if !issue.reference.is_empty() {
        let _ = writeln!(text, "   Reference: {}", issue.reference);
    }
    text.push('\n');
}

fn summarize_issue(number: usize, issue: &ValidationIssue) -> String {
    let mut entry = format!(
        "{number}. [{}] {} ({}): {}",
        issue.severity, issue.path, issue.kind, issue.message
    );
    if !issue.reference.is_empty() {
        let _ = write!(entry, " (reference: {})", issue.reference);
    }
    entry
}
