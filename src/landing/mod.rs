//! Landing page: marketing sections around the upload widget, and the hop to
//! the visualizer once an upload completes.

mod projects;
mod route;
pub mod sections;

pub use projects::{community_projects, Project, ProjectsError, PROJECT_DATE_FORMAT};
pub use route::{Route, Router};

use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

pub const VISUALIZER_PREFIX: &str = "/visualizer/";

pub fn visualizer_path(id: &str) -> String {
    format!("{}{}", VISUALIZER_PREFIX, id)
}

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Client-side navigation target.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

#[derive(Debug)]
pub struct LandingPage<C, N> {
    clock: C,
    navigator: N,
}

impl<C: Clock, N: Navigator> LandingPage<C, N> {
    pub fn new(clock: C, navigator: N) -> Self {
        Self { clock, navigator }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// Sends the user to the visualizer of a freshly uploaded plan.
    ///
    /// The id is the clock reading at call time. Two completions within the
    /// same millisecond get the same id.
    pub fn handle_upload_complete(&mut self, data_url: &str) -> String {
        let id = self.clock.now_millis().to_string();
        let path = visualizer_path(&id);
        info!(%path, bytes = data_url.len(), "Upload finished, opening visualizer");
        self.navigator.navigate(&path);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ScriptedClock {
        readings: Vec<u64>,
        next: Cell<usize>,
    }

    impl ScriptedClock {
        fn new(readings: &[u64]) -> Self {
            Self {
                readings: readings.to_vec(),
                next: Cell::new(0),
            }
        }
    }

    impl Clock for ScriptedClock {
        fn now_millis(&self) -> u64 {
            let i = self.next.get();
            self.next.set(i + 1);
            self.readings[i]
        }
    }

    #[derive(Default)]
    struct RecordingNavigator(Vec<String>);

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.0.push(path.to_string());
        }
    }

    #[test]
    fn each_completion_navigates_once_in_order() {
        let mut page = LandingPage::new(
            ScriptedClock::new(&[1111, 2222, 3333]),
            RecordingNavigator::default(),
        );

        for _ in 0..3 {
            page.handle_upload_complete("data:image/png;base64,AA==");
        }

        assert_eq!(
            page.navigator().0,
            vec!["/visualizer/1111", "/visualizer/2222", "/visualizer/3333"]
        );
    }

    #[test]
    fn ids_are_the_decimal_clock_reading() {
        let mut page = LandingPage::new(
            ScriptedClock::new(&[0, 9_007_199_254_740_991]),
            RecordingNavigator::default(),
        );

        assert_eq!(page.handle_upload_complete(""), "0");
        assert_eq!(page.handle_upload_complete(""), "9007199254740991");
        assert_eq!(
            page.navigator().0,
            vec!["/visualizer/0", "/visualizer/9007199254740991"]
        );
    }

    #[test]
    fn same_millisecond_yields_same_id() {
        let mut page = LandingPage::new(
            ScriptedClock::new(&[42, 42]),
            RecordingNavigator::default(),
        );
        page.handle_upload_complete("");
        page.handle_upload_complete("");
        assert_eq!(page.navigator().0, vec!["/visualizer/42", "/visualizer/42"]);
    }

    #[test]
    fn system_clock_is_non_decreasing() {
        let clock = SystemClock;
        let first = clock.now_millis();
        let second = clock.now_millis();
        assert!(first > 0);
        assert!(second >= first);
    }
}
