use super::RoomifyApp;
use crate::config::WORKER_URL;
use crate::constants::{grid_cell_size, IMAGE_RENDER_DIMENSION};
use crate::landing::sections::{
    FOOTER_LINK, HERO, PROJECTS_SUBTITLE, PROJECTS_TITLE, UPLOAD_SHELL,
};
use crate::landing::{Navigator, Route};
use crate::upload::{ACCEPTED_FORMATS_TEXT, SIGN_IN_TEXT};
use crate::utils::color::accent;
use eframe::egui::{self, Align, Color32, RichText, Stroke};
use tracing::error;

impl RoomifyApp {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| self.render_nav(ui));

        let route = self.landing.navigator().current().clone();
        egui::CentralPanel::default().show(ctx, |ui| match route {
            Route::Home => self.render_home(ui),
            Route::Visualizer { id } => self.render_visualizer(ui, &id),
        });
    }

    fn render_nav(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Roomify").strong().size(18.0).color(accent()));
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                let label = if self.widget.is_enabled() {
                    "Sign out"
                } else {
                    "Sign in"
                };
                if ui.button(label).clicked() {
                    self.toggle_session();
                }
            });
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            self.render_hero(ui);
            ui.add_space(30.0);
            self.render_upload_shell(ui);
            ui.add_space(30.0);
            self.render_projects(ui);
            ui.add_space(20.0);
            self.render_footer(ui);
            ui.add_space(15.0);
        });
    }

    fn render_hero(&mut self, ui: &mut egui::Ui) {
        let grid = ui.painter().add(egui::Shape::Noop);

        let rect = ui
            .vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(RichText::new(HERO.badge).small().color(accent()));
                ui.add_space(8.0);
                ui.heading(RichText::new(HERO.title).size(30.0).strong());
                ui.add_space(8.0);
                ui.label(
                    RichText::new(HERO.subtitle)
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
                ui.add_space(16.0);
                let cta = egui::Button::new(HERO.cta_label).min_size(egui::vec2(180.0, 36.0));
                if ui.add(cta).clicked() {
                    self.state.scroll_to = Some(HERO.cta_target);
                }
                ui.add_space(40.0);
            })
            .response
            .rect;

        ui.painter().set(grid, grid_lines(rect, accent().gamma_multiply(0.15)));
    }

    fn render_upload_shell(&mut self, ui: &mut egui::Ui) {
        let shell = ui
            .group(|ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(UPLOAD_SHELL.title);
                    ui.label(
                        RichText::new(UPLOAD_SHELL.subtitle)
                            .color(ui.visuals().text_color().gamma_multiply(0.7)),
                    );
                });
                ui.add_space(12.0);
                self.render_dropzone(ui);
            })
            .response;

        if self.state.scroll_to == Some(UPLOAD_SHELL.anchor) {
            shell.scroll_to_me(Some(Align::TOP));
            self.state.scroll_to = None;
        }
    }

    fn render_dropzone(&mut self, ui: &mut egui::Ui) {
        let state = self.widget.state().clone();
        let enabled = self.widget.is_enabled();
        let border = if state.is_dragging {
            accent()
        } else {
            ui.visuals().widgets.noninteractive.bg_stroke.color
        };

        egui::Frame::none()
            .stroke(Stroke::new(2.0, border))
            .rounding(8.0)
            .inner_margin(24.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| match &state.selected_file {
                    None => {
                        let prompt = if enabled {
                            state.get_status_text()
                        } else {
                            SIGN_IN_TEXT
                        };
                        ui.label(RichText::new(prompt).strong());
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(ACCEPTED_FORMATS_TEXT)
                                .color(ui.visuals().text_color().gamma_multiply(0.6)),
                        );
                        ui.add_space(10.0);
                        ui.add_enabled_ui(enabled, |ui| {
                            if ui.button("📁 Browse Files").clicked() {
                                self.pick_file();
                            }
                        });
                    }
                    Some(file) => {
                        ui.label(RichText::new(&file.name).strong());
                        ui.add_space(8.0);
                        let progress_bar = egui::ProgressBar::new(state.get_progress_percentage())
                            .show_percentage()
                            .animate(false)
                            .fill(accent());
                        ui.add(progress_bar);
                        ui.add_space(4.0);
                        ui.label(state.get_status_text());
                    }
                });
            });
    }

    fn render_projects(&mut self, ui: &mut egui::Ui) {
        ui.heading(PROJECTS_TITLE);
        ui.label(
            RichText::new(PROJECTS_SUBTITLE).color(ui.visuals().text_color().gamma_multiply(0.7)),
        );
        ui.add_space(10.0);

        let mut open = None;
        for project in &self.state.projects {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&project.name).strong());
                    ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                        ui.label(
                            RichText::new(project.display_date())
                                .color(ui.visuals().text_color().gamma_multiply(0.6)),
                        );
                    });
                });
                ui.label(format!("by {}", project.author));
                ui.label(&project.summary);
                if ui.link("Open in visualizer").clicked() {
                    open = Some(project.visualizer_path());
                }
            });
            ui.add_space(6.0);
        }

        if let Some(path) = open {
            self.landing.navigator_mut().navigate(&path);
        }
    }

    fn render_visualizer(&mut self, ui: &mut egui::Ui, id: &str) {
        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            ui.heading("Visualizer");
            ui.add_space(6.0);
            ui.label(format!("Project {}", id));
            ui.add_space(12.0);

            let worker = if WORKER_URL.is_empty() {
                "no render worker configured".to_string()
            } else {
                format!("rendering via {}", WORKER_URL.as_str())
            };
            ui.label(
                RichText::new(format!(
                    "{}x{} render, {}",
                    IMAGE_RENDER_DIMENSION, IMAGE_RENDER_DIMENSION, worker
                ))
                .color(ui.visuals().text_color().gamma_multiply(0.7)),
            );
            ui.add_space(20.0);

            if ui.button("← Back to home").clicked() {
                self.landing.navigator_mut().go_home();
            }
        });
    }

    fn render_footer(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.horizontal(|ui| {
                ui.label("Made with");
                ui.colored_label(accent(), "♥");
                ui.label("by");
                let link = egui::Label::new(RichText::new("Roomify").color(accent()))
                    .sense(egui::Sense::click());
                if ui.add(link).clicked() {
                    if let Err(e) = open::that(FOOTER_LINK) {
                        error!("Failed to open {}: {}", FOOTER_LINK, e);
                    }
                }
            });

            if let Some(error) = &self.state.error_message {
                ui.add_space(5.0);
                ui.colored_label(Color32::from_rgb(220, 50, 50), error);
            }
        });
    }
}

/// Blueprint grid behind the hero, one line every grid cell.
fn grid_lines(rect: egui::Rect, color: Color32) -> egui::Shape {
    let step = grid_cell_size();
    let stroke = Stroke::new(1.0, color);
    let mut lines = Vec::new();

    let mut x = rect.left();
    while x <= rect.right() {
        lines.push(egui::Shape::line_segment(
            [egui::pos2(x, rect.top()), egui::pos2(x, rect.bottom())],
            stroke,
        ));
        x += step;
    }
    let mut y = rect.top();
    while y <= rect.bottom() {
        lines.push(egui::Shape::line_segment(
            [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
            stroke,
        ));
        y += step;
    }

    egui::Shape::Vec(lines)
}
