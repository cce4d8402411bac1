use thiserror::Error;

/// Errors surfaced by the save-to-file path.
///
/// Export failures are non-fatal: they are logged, shown to the user, and
/// leave the in-memory canvas untouched.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The canvas has no drawable pixels yet (never initialized, or the
    /// drawing region was zero-sized).
    #[error("there is no canvas content to save yet")]
    EmptyCanvas,

    /// Encoding or writing the PNG failed (bad path, permissions, disk full).
    #[error("failed to write image: {0}")]
    Write(#[from] image::ImageError),
}
