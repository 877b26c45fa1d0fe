use std::f32::consts::TAU;
use std::path::Path;

use eframe::egui::{self, Color32, Pos2, RichText, Sense, Shape, Stroke};
use jobwatch_core::{HomeView, PieSlice, Theme, TopJobsView};

use super::palette;

pub fn show(ui: &mut egui::Ui, home: &HomeView, theme: Theme, logo_dir: Option<&Path>) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.heading("Dashboard");
            if let Some(err) = &home.stats_error {
                ui.colored_label(palette::error(theme), err.as_str());
            }
            ui.add_space(8.0);

            egui::Grid::new("stat_cards")
                .num_columns(4)
                .spacing([12.0, 12.0])
                .show(ui, |ui| {
                    stat_card(ui, "Jobs Found", &home.total_jobs.to_string(), None);
                    stat_card(ui, "Companies Scraped", &home.companies.to_string(), None);
                    stat_card(ui, "Total Scrapes", &home.total_scrapes.to_string(), None);
                    stat_card(ui, "Avg Scrape Duration", &home.avg_duration, None);
                    ui.end_row();
                    stat_card(ui, "Last Scrape", &home.last_scrape, None);
                    stat_card(
                        ui,
                        "Warnings",
                        &home.warnings.to_string(),
                        Some(palette::warning(theme)),
                    );
                    stat_card(
                        ui,
                        "Errors",
                        &home.errors.to_string(),
                        Some(palette::error(theme)),
                    );
                    ui.end_row();
                });

            ui.add_space(16.0);
            ui.columns(2, |columns| {
                jobs_per_company(&mut columns[0], &home.pie);
                top_jobs(&mut columns[1], &home.top_jobs, theme, logo_dir);
            });
        });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: &str, color: Option<Color32>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_min_width(160.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(title).small());
            let mut text = RichText::new(value).size(22.0).strong();
            if let Some(color) = color {
                text = text.color(color);
            }
            ui.label(text);
        });
    });
}

fn jobs_per_company(ui: &mut egui::Ui, slices: &[PieSlice]) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Jobs per Company").strong());
        if slices.iter().all(|s| s.value == 0) {
            ui.label("No job data yet");
            return;
        }
        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(egui::vec2(180.0, 180.0), Sense::hover());
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = rect.width().min(rect.height()) / 2.0 - 4.0;
            for (index, slice) in slices.iter().enumerate() {
                for shape in sector_shapes(center, radius, slice, palette::pie_color(index)) {
                    painter.add(shape);
                }
            }

            ui.vertical(|ui| {
                for (index, slice) in slices.iter().enumerate() {
                    ui.horizontal(|ui| {
                        let (swatch, _) =
                            ui.allocate_exact_size(egui::vec2(12.0, 12.0), Sense::hover());
                        ui.painter().rect_filled(swatch, 2.0, palette::pie_color(index));
                        ui.label(format!("{} ({})", slice.label, slice.value));
                    });
                }
            });
        });
    });
}

/// A pie slice as convex polygons of at most a quarter turn each.
fn sector_shapes(center: Pos2, radius: f32, slice: &PieSlice, color: Color32) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let end = slice.start + slice.fraction;
    let mut from = slice.start;
    while from < end {
        let to = (from + 0.25).min(end);
        let steps = ((to - from) * 64.0).ceil().max(1.0) as usize;
        let mut points = vec![center];
        for step in 0..=steps {
            let turn = from + (to - from) * step as f32 / steps as f32;
            // Start at twelve o'clock, go clockwise.
            let angle = turn * TAU - TAU / 4.0;
            points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
        }
        shapes.push(Shape::convex_polygon(points, color, Stroke::NONE));
        from = to;
    }
    shapes
}

fn top_jobs(ui: &mut egui::Ui, view: &TopJobsView, theme: Theme, logo_dir: Option<&Path>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new("Top Jobs").strong());
            if let TopJobsView::Ready { badge, .. } = view {
                ui.label(RichText::new(badge).small().color(palette::accent(theme)));
            }
        });
        ui.add_space(4.0);
        match view {
            TopJobsView::Loading => {
                ui.spinner();
            }
            TopJobsView::Error(text) => {
                ui.colored_label(palette::error(theme), text.as_str());
            }
            TopJobsView::Ready { cards, .. } if cards.is_empty() => {
                ui.label("No matching jobs found");
            }
            TopJobsView::Ready { cards, .. } => {
                for card in cards {
                    ui.horizontal(|ui| {
                        super::logo(ui, logo_dir, card.logo, 32.0);
                        ui.vertical(|ui| {
                            ui.hyperlink_to(card.title.as_str(), &card.link);
                            let mut detail = card.company.clone();
                            if let Some(location) = &card.location {
                                detail.push_str(" · ");
                                detail.push_str(location);
                            }
                            ui.label(RichText::new(detail).small());
                        });
                    });
                    ui.add_space(6.0);
                }
            }
        }
    });
}
