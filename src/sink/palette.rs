use colorgrad::Gradient;

use crate::config::PLOT_CONFIG;

/// One RGB colour per symbol, spread evenly along the configured gradient.
pub fn symbol_colors(count: usize) -> Vec<[u8; 3]> {
    let grad = colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.symbol_gradient_colors)
        .build::<colorgrad::LinearGradient>();

    let Ok(grad) = grad else {
        log::error!("Invalid symbol gradient colours, falling back to grey");
        return vec![[90, 90, 90]; count];
    };

    (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let rgba = grad.at(t).to_rgba8();
            [rgba[0], rgba[1], rgba[2]]
        })
        .collect()
}

/// Trend lines share their symbol's hue at reduced brightness.
pub fn dimmed(rgb: [u8; 3]) -> [u8; 3] {
    rgb.map(|c| (c as f32 * PLOT_CONFIG.trend_dim_factor).round() as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_colour_per_symbol() {
        assert_eq!(symbol_colors(3).len(), 3);
        assert!(symbol_colors(0).is_empty());
    }

    #[test]
    fn distinct_symbols_get_distinct_colours() {
        let colors = symbol_colors(3);
        assert_ne!(colors[0], colors[2]);
    }

    #[test]
    fn dimming_darkens() {
        let [r, g, b] = dimmed([200, 100, 50]);
        assert!(r < 200 && g < 100 && b < 50);
    }
}
