mod state;
mod ui;

use crate::auth::{SessionStatus, SignInFlag};
use crate::landing::{LandingPage, Router, SystemClock};
use crate::upload::{CandidateFile, UploadDriver, UploadWidget, ACCEPTED_EXTENSIONS};
use eframe::{egui, App};
use rfd::FileDialog;
pub use state::AppState;
use std::sync::mpsc::{channel, Receiver};
use tracing::info;

pub struct RoomifyApp {
    session: SignInFlag,
    widget: UploadWidget,
    driver: UploadDriver,
    landing: LandingPage<SystemClock, Router>,
    completions: Receiver<String>,
    state: AppState,
}

impl RoomifyApp {
    pub fn new(cc: &eframe::CreationContext<'_>, driver: UploadDriver, session: SignInFlag) -> Self {
        info!("Initializing Roomify");
        let (sender, completions) = channel();
        let widget = UploadWidget::new(session.clone()).on_complete(move |data_url| {
            let _ = sender.send(data_url.to_string());
        });

        Self {
            session,
            widget,
            driver: driver.with_repaint(cc.egui_ctx.clone()),
            landing: LandingPage::new(SystemClock, Router::default()),
            completions,
            state: AppState::load(),
        }
    }

    pub fn pick_file(&mut self) {
        let files: Vec<CandidateFile> = FileDialog::new()
            .add_filter("Floor plan", &ACCEPTED_EXTENSIONS[..])
            .pick_file()
            .map(CandidateFile::from_path)
            .into_iter()
            .collect();
        let commands = self.widget.select_files(files);
        self.driver.execute(commands);
    }

    pub fn toggle_session(&mut self) {
        let signed_in = !self.session.is_signed_in();
        info!(signed_in, "Session changed");
        self.session.set(signed_in);
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        self.handle_file_hover(ctx);

        if self.driver.pump(&mut self.widget) {
            ctx.request_repaint();
        }

        while let Ok(data_url) = self.completions.try_recv() {
            self.landing.handle_upload_complete(&data_url);
        }
    }

    /// Translates egui's per-frame hover/drop input into dropzone events.
    fn handle_file_hover(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (!i.raw.hovered_files.is_empty(), i.raw.dropped_files.clone())
        });

        if !dropped.is_empty() {
            self.state.hover_active = false;
            let files = dropped.into_iter().filter_map(candidate_from_drop).collect();
            let commands = self.widget.drop_files(files);
            self.driver.execute(commands);
        } else if hovering && !self.state.hover_active {
            self.state.hover_active = true;
            self.widget.drag_over();
        } else if !hovering && self.state.hover_active {
            self.state.hover_active = false;
            self.widget.drag_leave();
        }
    }
}

fn candidate_from_drop(file: egui::DroppedFile) -> Option<CandidateFile> {
    match (file.path, file.bytes) {
        (Some(path), _) => Some(CandidateFile::from_path(path)),
        (None, Some(bytes)) => Some(CandidateFile::from_bytes(file.name, None, bytes)),
        (None, None) => None,
    }
}

impl App for RoomifyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
