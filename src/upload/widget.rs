//! Upload widget state machine.
//!
//! The widget never waits on anything itself. Interactions and asynchronous
//! results come in as method calls, and the work they imply (read the file,
//! tick the progress bar, reset later) goes out as [`Command`]s for the
//! driver. Every cycle carries a [`CycleId`]; events from a superseded or
//! aborted cycle are dropped.
//!
//! Completion needs two things: the progress bar reaching 100 and the read
//! producing a data URL. They may arrive in either order and the callback
//! fires once, after whichever comes last.

use super::state::UploadState;
use super::types::{CandidateFile, Command, CycleId, ImageKind, SelectedFile, UploadEvent};
use super::UploadError;
use crate::auth::SessionStatus;
use crate::constants::{PROGRESS_INCREMENT, PROGRESS_INTERVAL_MS, REDIRECT_DELAY_MS};
use derivative::Derivative;
use std::time::Duration;
use tracing::{debug, info, warn};

pub type CompletionCallback = Box<dyn FnMut(&str)>;

#[derive(Derivative)]
#[derivative(Debug)]
pub struct UploadWidget {
    #[derivative(Debug = "ignore")]
    session: Box<dyn SessionStatus>,
    #[derivative(Debug = "ignore")]
    on_complete: Option<CompletionCallback>,
    state: UploadState,
    last_cycle: u64,
    increment: u8,
    tick_interval: Duration,
    reset_delay: Duration,
}

impl UploadWidget {
    pub fn new(session: impl SessionStatus + 'static) -> Self {
        Self {
            session: Box::new(session),
            on_complete: None,
            state: UploadState::default(),
            last_cycle: 0,
            increment: PROGRESS_INCREMENT,
            tick_interval: Duration::from_millis(PROGRESS_INTERVAL_MS),
            reset_delay: Duration::from_millis(REDIRECT_DELAY_MS),
        }
    }

    /// Called with the data URL each time a cycle completes.
    pub fn on_complete(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    /// Whether the picker is enabled, i.e. the session is signed in.
    pub fn is_enabled(&self) -> bool {
        self.session.is_signed_in()
    }

    /// Files chosen through the picker.
    pub fn select_files(&mut self, files: Vec<CandidateFile>) -> Vec<Command> {
        self.admit_and_start(files)
    }

    pub fn drag_over(&mut self) {
        if self.is_enabled() {
            self.state.is_dragging = true;
        }
    }

    pub fn drag_leave(&mut self) {
        self.state.is_dragging = false;
    }

    pub fn drop_files(&mut self, files: Vec<CandidateFile>) -> Vec<Command> {
        self.state.is_dragging = false;
        self.admit_and_start(files)
    }

    pub fn handle_event(&mut self, event: UploadEvent) -> Vec<Command> {
        match event {
            UploadEvent::Tick(cycle) => self.on_tick(cycle),
            UploadEvent::ReadFinished { cycle, result } => self.on_read_finished(cycle, result),
            UploadEvent::ResetDue(cycle) => {
                if self.is_current(cycle) {
                    debug!(cycle = cycle.0, "Upload widget reset to idle");
                    self.state.clear();
                }
                Vec::new()
            }
        }
    }

    fn admit_and_start(&mut self, files: Vec<CandidateFile>) -> Vec<Command> {
        match self.admit(files) {
            Ok((file, kind)) => self.start_cycle(file, kind),
            Err(e) => {
                debug!("Ignoring selection: {}", e);
                Vec::new()
            }
        }
    }

    /// Picks the first file and checks it may be uploaded.
    fn admit(&self, files: Vec<CandidateFile>) -> Result<(CandidateFile, ImageKind), UploadError> {
        if !self.is_enabled() {
            return Err(UploadError::Unauthorized);
        }

        let file = files
            .into_iter()
            .next()
            .ok_or(UploadError::EmptySelection)?;

        let mime = file.resolved_mime();
        match mime.as_deref().and_then(ImageKind::from_mime) {
            Some(kind) => Ok((file, kind)),
            None => Err(UploadError::UnsupportedType {
                name: file.name,
                mime,
            }),
        }
    }

    fn start_cycle(&mut self, file: CandidateFile, kind: ImageKind) -> Vec<Command> {
        let mut commands = Vec::with_capacity(3);
        if let Some(stale) = self.state.cycle {
            commands.push(Command::StopTicker(stale));
        }

        self.last_cycle += 1;
        let cycle = CycleId(self.last_cycle);
        info!(cycle = cycle.0, file = %file.name, "Starting upload");

        self.state.clear();
        self.state.selected_file = Some(SelectedFile {
            name: file.name.clone(),
            kind,
        });
        self.state.cycle = Some(cycle);

        commands.push(Command::StartRead { cycle, file, kind });
        commands.push(Command::StartTicker {
            cycle,
            interval: self.tick_interval,
        });
        commands
    }

    fn on_tick(&mut self, cycle: CycleId) -> Vec<Command> {
        if !self.is_current(cycle) || self.state.progress >= 100 {
            return Vec::new();
        }

        self.state.progress = self.state.progress.saturating_add(self.increment).min(100);
        if self.state.progress < 100 {
            return Vec::new();
        }

        let mut commands = vec![Command::StopTicker(cycle)];
        commands.extend(self.try_complete(cycle));
        commands
    }

    fn on_read_finished(
        &mut self,
        cycle: CycleId,
        result: Result<String, UploadError>,
    ) -> Vec<Command> {
        if !self.is_current(cycle) {
            return Vec::new();
        }

        match result {
            Ok(data_url) => {
                self.state.preview = Some(data_url);
                self.try_complete(cycle)
            }
            Err(e) => {
                warn!(cycle = cycle.0, "Upload aborted: {}", e);
                self.state.clear();
                vec![Command::StopTicker(cycle)]
            }
        }
    }

    fn try_complete(&mut self, cycle: CycleId) -> Vec<Command> {
        if self.state.completed || self.state.progress < 100 {
            return Vec::new();
        }
        let Some(data_url) = self.state.preview.as_deref() else {
            return Vec::new();
        };

        self.state.completed = true;
        info!(cycle = cycle.0, "Upload complete");
        if let Some(callback) = self.on_complete.as_mut() {
            callback(data_url);
        }

        vec![Command::ScheduleReset {
            cycle,
            after: self.reset_delay,
        }]
    }

    fn is_current(&self, cycle: CycleId) -> bool {
        self.state.cycle == Some(cycle)
    }
}
