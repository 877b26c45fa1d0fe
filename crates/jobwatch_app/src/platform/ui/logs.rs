use eframe::egui::{self, text::LayoutJob, FontId, TextFormat};
use jobwatch_core::{LogLineView, Theme};

use super::palette;

/// Newest line first, one monospace row per line.
pub fn show(ui: &mut egui::Ui, lines: &[LogLineView], theme: Theme) {
    let default_color = ui.visuals().text_color();
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            for line in lines {
                let mut job = LayoutJob::default();
                for segment in &line.segments {
                    job.append(
                        &segment.text,
                        0.0,
                        TextFormat {
                            font_id: FontId::monospace(13.0),
                            color: palette::span_color(segment.style, theme).unwrap_or(default_color),
                            ..Default::default()
                        },
                    );
                }
                ui.label(job);
            }
        });
}
