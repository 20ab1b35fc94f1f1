/// Logging port for use cases.
///
/// Messages are plain text; the adapter decides level routing and output.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    /// Unexpected failures that need operator attention.
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
