mod driver;
mod error;
mod reader;
mod state;
mod types;
mod widget;

pub use driver::UploadDriver;
pub use error::UploadError;
pub use reader::{encode_data_url, read_data_url};
pub use state::{
    UploadPhase, UploadState, ACCEPTED_FORMATS_TEXT, ANALYZING_TEXT, DROPZONE_TEXT,
    REDIRECTING_TEXT, SIGN_IN_TEXT,
};
pub use types::{
    CandidateFile, Command, CycleId, FileSource, ImageKind, SelectedFile, UploadEvent,
    ACCEPTED_EXTENSIONS,
};
pub use widget::{CompletionCallback, UploadWidget};
