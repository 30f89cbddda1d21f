use eframe::egui::{Color32, Context, RichText, Ui, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase() + ":";
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

pub fn rgb_to_color32([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Formats a price with "Trader Precision".
/// - Large (>1000): 2 decimals ($95,123.50)
/// - Medium (1-1000): 4 decimals ($12.4829)
/// - Small (<1): 6 decimals
pub fn format_price(price: f64) -> String {
    let abs_price = price.abs();
    if abs_price >= 1000.0 {
        format!("${:.2}", price)
    } else if abs_price >= 1.0 {
        format!("${:.4}", price)
    } else {
        format!("${:.6}", price)
    }
}

/// Splits user input such as "msft, aapl  goog" into upper-case symbols,
/// keeping their order.
pub fn parse_symbols(text: &str) -> Vec<String> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_symbols_keeps_order_and_uppercases() {
        assert_eq!(
            parse_symbols(" msft, AAPL  goog,,"),
            vec!["MSFT", "AAPL", "GOOG"]
        );
        assert!(parse_symbols(" , ").is_empty());
    }

    #[test]
    fn price_precision_by_magnitude() {
        assert_eq!(format_price(1234.5), "$1234.50");
        assert_eq!(format_price(12.5), "$12.5000");
        assert_eq!(format_price(0.5), "$0.500000");
    }
}
