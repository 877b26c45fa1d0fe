//! egui rendering of the core view model. Nothing here touches state;
//! user input is reported back as [`UiAction`]s.

pub mod home;
pub mod jobs;
pub mod logs;
pub mod nav;
pub mod palette;

use std::path::Path;

use eframe::egui;
use jobwatch_core::{AppViewModel, PageBody, PageView, Route, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Navigate(Route),
    ToggleCompany(String),
    ToggleTheme,
}

pub fn visuals(theme: Theme) -> egui::Visuals {
    let mut visuals = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    visuals.hyperlink_color = palette::accent(theme);
    visuals
}

pub fn show_page(
    ui: &mut egui::Ui,
    view: &AppViewModel,
    logo_dir: Option<&Path>,
    actions: &mut Vec<UiAction>,
) {
    match &view.page {
        PageView::Home(home) => home::show(ui, home, view.theme, logo_dir),
        PageView::Jobs(body) => {
            ui.heading("Jobs");
            ui.add_space(8.0);
            show_body(ui, body, view.theme, |ui, groups| {
                jobs::show(ui, groups, logo_dir, actions)
            });
        }
        PageView::Logs(body) => {
            ui.heading("Logs");
            ui.add_space(8.0);
            show_body(ui, body, view.theme, |ui, lines| logs::show(ui, lines, view.theme));
        }
    }
}

fn show_body<T>(
    ui: &mut egui::Ui,
    body: &PageBody<T>,
    theme: Theme,
    ready: impl FnOnce(&mut egui::Ui, &T),
) {
    match body {
        PageBody::Loading(text) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(text.as_str());
            });
        }
        PageBody::Error(text) => {
            ui.colored_label(palette::error(theme), text.as_str());
        }
        PageBody::Ready(data) => ready(ui, data),
    }
}

/// Draws a company logo when an asset directory is configured.
pub fn logo(ui: &mut egui::Ui, logo_dir: Option<&Path>, path: &str, size: f32) {
    let Some(dir) = logo_dir else {
        return;
    };
    let file = dir.join(path.trim_start_matches('/'));
    ui.add(
        egui::Image::new(format!("file://{}", file.display()))
            .fit_to_exact_size(egui::vec2(size, size)),
    );
}
