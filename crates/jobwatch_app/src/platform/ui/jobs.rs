use std::path::Path;

use eframe::egui;
use jobwatch_core::CompanyGroupView;

use super::UiAction;

pub fn show(
    ui: &mut egui::Ui,
    groups: &[CompanyGroupView],
    logo_dir: Option<&Path>,
    actions: &mut Vec<UiAction>,
) {
    if groups.is_empty() {
        ui.label("No job data yet");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for group in groups {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        super::logo(ui, logo_dir, group.logo, 24.0);
                        let arrow = if group.expanded { "▼" } else { "▶" };
                        let header =
                            egui::RichText::new(format!("{arrow} {}", group.header)).strong();
                        if ui.selectable_label(group.expanded, header).clicked() {
                            actions.push(UiAction::ToggleCompany(group.company.clone()));
                        }
                    });
                    if group.expanded {
                        ui.indent(("jobs", &group.company), |ui| {
                            for job in &group.jobs {
                                ui.hyperlink_to(job.label.as_str(), &job.link);
                            }
                        });
                    }
                });
                ui.add_space(4.0);
            }
        });
}
