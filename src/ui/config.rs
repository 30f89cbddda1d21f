use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub ok: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        central_panel: Color32::from_rgb(30, 30, 36),
        side_panel: Color32::from_rgb(25, 25, 25),
        ok: Color32::from_rgb(100, 200, 100),
    },
    side_panel_min_width: 180.0,
};
