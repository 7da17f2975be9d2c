use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Theme {
    // Background transparency setting
    pub transparent_backgrounds: bool,

    // Background colors
    pub base: Option<[u8; 3]>,
    pub surface0: Option<[u8; 3]>,
    pub surface1: Option<[u8; 3]>,

    // Content colors
    pub text: Option<[u8; 3]>,
    pub subtext0: Option<[u8; 3]>,
    pub subtext1: Option<[u8; 3]>,

    // Markers
    pub active: Option<[u8; 3]>,
    pub cta: Option<[u8; 3]>,
    pub transition_next: Option<[u8; 3]>,
    pub transition_prev: Option<[u8; 3]>,
}

impl Theme {
    fn color(&self, rgb: Option<[u8; 3]>, default: Color) -> Color {
        rgb.map_or(default, |[r, g, b]| Color::Rgb(r, g, b))
    }

    pub fn bg_color(&self, rgb: Option<[u8; 3]>) -> Color {
        if self.transparent_backgrounds {
            Color::Reset
        } else {
            self.color(rgb, Color::Reset)
        }
    }

    pub fn base_color(&self) -> Color {
        self.bg_color(self.base)
    }

    pub fn surface0_color(&self) -> Color {
        self.bg_color(self.surface0)
    }

    pub fn surface1_color(&self) -> Color {
        self.bg_color(self.surface1)
    }

    pub fn text_color(&self) -> Color {
        self.color(self.text, Color::White)
    }

    pub fn subtext0_color(&self) -> Color {
        self.color(self.subtext0, Color::Gray)
    }

    pub fn subtext1_color(&self) -> Color {
        self.color(self.subtext1, Color::DarkGray)
    }

    /// Color of the active marker on every nav surface.
    pub fn active_color(&self) -> Color {
        self.color(self.active, Color::Cyan)
    }

    pub fn cta_color(&self) -> Color {
        self.color(self.cta, Color::Yellow)
    }

    pub fn transition_next_color(&self) -> Color {
        self.color(self.transition_next, Color::Green)
    }

    pub fn transition_prev_color(&self) -> Color {
        self.color(self.transition_prev, Color::Magenta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_colors_fall_back() {
        let theme = Theme::default();
        assert_eq!(theme.active_color(), Color::Cyan);
        assert_eq!(theme.base_color(), Color::Reset);
    }

    #[test]
    fn theme_file_overrides_and_transparency() {
        let theme: Theme =
            toml::from_str("transparent_backgrounds = true\nbase = [1, 2, 3]\nactive = [9, 9, 9]")
                .unwrap();
        assert_eq!(theme.active_color(), Color::Rgb(9, 9, 9));
        assert_eq!(theme.base_color(), Color::Reset);
    }
}
