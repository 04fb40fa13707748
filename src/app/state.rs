use crate::landing::{community_projects, Project};
use tracing::error;

/// UI-only state of the landing screen.
#[derive(Debug, Default)]
pub struct AppState {
    pub projects: Vec<Project>,
    pub error_message: Option<String>,
    /// Anchor to bring into view on the next frame.
    pub scroll_to: Option<&'static str>,
    /// Whether files were hovering the window last frame.
    pub hover_active: bool,
}

impl AppState {
    pub fn load() -> Self {
        let mut state = Self::default();
        match community_projects() {
            Ok(projects) => state.projects = projects,
            Err(e) => {
                error!("Failed to load community projects: {}", e);
                state.error_message = Some(e.to_string());
            }
        }
        state
    }
}
