use super::{Navigator, VISUALIZER_PREFIX};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Visualizer {
        id: String,
    },
}

impl Route {
    /// Recognises `/` and `/visualizer/{id}`; anything else is `None`.
    pub fn parse(path: &str) -> Option<Self> {
        if path.is_empty() || path == "/" {
            return Some(Self::Home);
        }
        let id = path.strip_prefix(VISUALIZER_PREFIX)?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Self::Visualizer { id: id.to_string() })
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Visualizer { id } => super::visualizer_path(id),
        }
    }
}

/// In-memory router backing navigation inside the desktop app.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
    history: Vec<Route>,
}

impl Router {
    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn go_home(&mut self) {
        self.navigate("/");
    }

    pub fn back(&mut self) {
        if let Some(previous) = self.history.pop() {
            self.current = previous;
        }
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) {
        let Some(route) = Route::parse(path) else {
            debug!(path, "Ignoring navigation to unknown route");
            return;
        };
        let previous = std::mem::replace(&mut self.current, route);
        self.history.push(previous);
    }
}
