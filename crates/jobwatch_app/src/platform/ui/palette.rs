use eframe::egui::Color32;
use jobwatch_core::{SpanStyle, Theme};

pub const PIE_COLORS: [Color32; 6] = [
    Color32::from_rgb(0x46, 0x6f, 0x5e),
    Color32::from_rgb(0x6f, 0x73, 0x2f),
    Color32::from_rgb(0xb3, 0x8a, 0x58),
    Color32::from_rgb(0x93, 0x2f, 0x2f),
    Color32::from_rgb(0x3b, 0x5b, 0x8c),
    Color32::from_rgb(0x7a, 0x55, 0x8c),
];

pub fn accent(theme: Theme) -> Color32 {
    if theme.is_dark() {
        Color32::from_rgb(0x8f, 0xc1, 0xab)
    } else {
        Color32::from_rgb(0x46, 0x6f, 0x5e)
    }
}

pub fn error(theme: Theme) -> Color32 {
    if theme.is_dark() {
        Color32::from_rgb(0xff, 0x6b, 0x6b)
    } else {
        Color32::from_rgb(0xc0, 0x1c, 0x1c)
    }
}

pub fn warning(theme: Theme) -> Color32 {
    if theme.is_dark() {
        Color32::from_rgb(0xf5, 0xc2, 0x42)
    } else {
        Color32::from_rgb(0xa8, 0x6b, 0x00)
    }
}

/// `None` keeps the default text color.
pub fn span_color(style: SpanStyle, theme: Theme) -> Option<Color32> {
    match style {
        SpanStyle::AlertStrong => Some(error(theme)),
        SpanStyle::AlertWarn => Some(warning(theme)),
        SpanStyle::Muted => Some(Color32::GRAY),
        SpanStyle::Neutral | SpanStyle::Plain => None,
    }
}

pub fn pie_color(index: usize) -> Color32 {
    PIE_COLORS[index % PIE_COLORS.len()]
}
