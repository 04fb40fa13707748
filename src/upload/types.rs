use super::UploadError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Extensions advertised to the file picker.
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Image formats accepted as floor plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
}

impl ImageKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(Self::Jpeg),
            "image/png" => Some(Self::Png),
            "image/webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
        }
    }
}

/// Where the bytes of a candidate file come from.
#[derive(Debug, Clone)]
pub enum FileSource {
    Path(PathBuf),
    /// Contents handed over directly, as egui does for drops without a path.
    Bytes(Arc<[u8]>),
}

/// A file offered by the picker or a drop, before validation.
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub name: String,
    /// MIME type reported by the source, if any.
    pub mime: Option<String>,
    pub source: FileSource,
}

impl CandidateFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self {
            name,
            mime: None,
            source: FileSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, mime: Option<String>, bytes: Arc<[u8]>) -> Self {
        Self {
            name: name.into(),
            mime,
            source: FileSource::Bytes(bytes),
        }
    }

    /// MIME type to validate against: the reported one, else one inferred
    /// from the file name's extension.
    pub fn resolved_mime(&self) -> Option<String> {
        if let Some(mime) = self.mime.as_deref().filter(|m| !m.trim().is_empty()) {
            return Some(mime.to_string());
        }
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageKind::from_extension)
            .map(|kind| kind.mime().to_string())
    }
}

/// The accepted file of the current upload cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub kind: ImageKind,
}

/// Sequence number tagging one upload cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleId(pub u64);

/// Asynchronous results fed back into the widget.
#[derive(Debug)]
pub enum UploadEvent {
    Tick(CycleId),
    ReadFinished {
        cycle: CycleId,
        result: Result<String, UploadError>,
    },
    ResetDue(CycleId),
}

/// Work the widget asks its driver to perform.
#[derive(Debug)]
pub enum Command {
    StartRead {
        cycle: CycleId,
        file: CandidateFile,
        kind: ImageKind,
    },
    StartTicker {
        cycle: CycleId,
        interval: Duration,
    },
    StopTicker(CycleId),
    ScheduleReset {
        cycle: CycleId,
        after: Duration,
    },
}
