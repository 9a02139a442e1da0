use thiserror::Error;

/// Crate-level error type.
///
/// Dispatch and rendering are error-free by design: an unknown template id
/// falls back silently to the default template, and missing optional fields
/// are omitted from the output rather than rejected. The one failure mode
/// left is an inbound payload that does not decode at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid resume payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}
