use crate::errors::DetectionError;
use crate::span::Span;

/// Candidate-span producer run over one chunk of a document.
///
/// Offsets in the returned spans are relative to `chunk`; the engine rebases
/// them onto the document. Implementations must be safe to call from several
/// threads at once because chunks may be analyzed in parallel.
pub trait Detector: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Propose candidate spans for `chunk`.
    fn analyze(&self, chunk: &str) -> Result<Vec<Span>, DetectionError>;
}
