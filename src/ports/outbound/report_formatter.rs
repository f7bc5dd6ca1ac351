use crate::application::dto::AuditResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering an audit response
///
/// Serialization is deferred to this boundary: the engine emits typed
/// records and formatters decide how to lay them out.
pub trait ReportFormatter {
    /// Formats the audit response into the output representation
    ///
    /// # Arguments
    /// * `response` - The audit response to format
    ///
    /// # Returns
    /// The formatted output as a string
    fn format(&self, response: &AuditResponse) -> Result<String>;
}
