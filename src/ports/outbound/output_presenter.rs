use crate::shared::Result;

/// OutputPresenter port for presenting formatted output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// from the formatting logic.
pub trait OutputPresenter {
    /// Presents the formatted content to the output destination
    ///
    /// # Arguments
    /// * `content` - The formatted content to present
    fn present(&self, content: &str) -> Result<()>;
}
