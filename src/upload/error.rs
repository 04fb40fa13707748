use thiserror::Error;

/// Reasons an upload cycle does not start or does not finish.
///
/// None of these reach the user: rejections leave the dropzone idle and read
/// failures reset it.
#[derive(Error, Debug)]
pub enum UploadError {
    #[error("upload requires a signed-in session")]
    Unauthorized,

    #[error("no file selected")]
    EmptySelection,

    #[error("unsupported file type for {name}: {}", .mime.as_deref().unwrap_or("unknown"))]
    UnsupportedType { name: String, mime: Option<String> },

    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
