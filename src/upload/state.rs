use super::types::{CycleId, SelectedFile};

pub const ANALYZING_TEXT: &str = "Analyzing Floor Plan...";
pub const REDIRECTING_TEXT: &str = "Redirecting...";
pub const DROPZONE_TEXT: &str = "Click to upload or just drag and drop";
pub const ACCEPTED_FORMATS_TEXT: &str = "Supports JPG, PNG, WEBP";
pub const SIGN_IN_TEXT: &str = "Sign in or sign up to upload your floor plan";

/// Where the current upload cycle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadPhase {
    #[default]
    Idle,
    Processing,
    Completed,
}

/// Transient state of the upload widget. Everything except `is_dragging`
/// belongs to the cycle in flight and is dropped when it ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadState {
    pub selected_file: Option<SelectedFile>,
    pub is_dragging: bool,
    /// Simulated progress, always within `0..=100`.
    pub progress: u8,
    /// Data URL of the selected file once it has been read.
    pub preview: Option<String>,
    pub(crate) cycle: Option<CycleId>,
    pub(crate) completed: bool,
}

impl UploadState {
    pub fn clear(&mut self) {
        let is_dragging = self.is_dragging;
        *self = UploadState {
            is_dragging,
            ..UploadState::default()
        };
    }

    pub fn phase(&self) -> UploadPhase {
        match (&self.selected_file, self.completed) {
            (None, _) => UploadPhase::Idle,
            (Some(_), false) => UploadPhase::Processing,
            (Some(_), true) => UploadPhase::Completed,
        }
    }

    /// True while the dropzone prompt is shown.
    pub fn is_idle(&self) -> bool {
        self.phase() == UploadPhase::Idle
    }

    pub fn current_cycle(&self) -> Option<CycleId> {
        self.cycle
    }

    pub fn get_progress_percentage(&self) -> f32 {
        f32::from(self.progress) / 100.0
    }

    pub fn get_status_text(&self) -> &'static str {
        match self.phase() {
            UploadPhase::Idle => DROPZONE_TEXT,
            UploadPhase::Processing => ANALYZING_TEXT,
            UploadPhase::Completed => REDIRECTING_TEXT,
        }
    }
}
