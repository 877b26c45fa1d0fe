use eframe::egui;
use jobwatch_core::AppViewModel;

use super::UiAction;

pub fn show(ui: &mut egui::Ui, view: &AppViewModel, actions: &mut Vec<UiAction>) {
    ui.add_space(12.0);
    ui.heading("JobWatch");
    ui.separator();

    for item in &view.nav {
        let label = egui::RichText::new(item.label).size(16.0);
        if ui.selectable_label(item.active, label).clicked() && !item.active {
            actions.push(UiAction::Navigate(item.route));
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        ui.add_space(8.0);
        ui.small(concat!("v", env!("CARGO_PKG_VERSION")));
        let toggle = if view.theme.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        };
        if ui.button(toggle).clicked() {
            actions.push(UiAction::ToggleTheme);
        }
    });
}
