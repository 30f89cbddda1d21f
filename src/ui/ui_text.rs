/// All user-facing strings in one place
pub struct UiText {
    pub window_title: &'static str,
    pub settings_heading: &'static str,
    pub symbols_label: &'static str,
    pub symbols_hint: &'static str,
    pub interval_label: &'static str,
    pub output_label: &'static str,
    pub display_button: &'static str,
    pub running: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,
    pub empty_chart: &'static str,
    pub source_label: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    window_title: "Trend Viewer",
    settings_heading: "Chart",
    symbols_label: "Symbols",
    symbols_hint: "MSFT, AAPL, GOOG",
    interval_label: "Window",
    output_label: "Image name",
    display_button: "Display",
    running: "Fetching…",
    plot_x_axis: "Observation",
    plot_y_axis: "Close",
    empty_chart: "Press Display to fetch and chart the symbols.",
    source_label: "Source",
};
