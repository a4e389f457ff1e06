use crate::foundation::core::Rgba8;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Color scheme applied when rendering a wheel.
pub struct Theme {
    /// Background ring color.
    #[serde(default = "default_month_arc_color")]
    pub month_arc_color: Rgba8,
    /// Fallback event arc color for categories without a color.
    #[serde(default = "default_event_arc_color")]
    pub event_arc_color: Rgba8,
    /// Month label color.
    #[serde(default = "default_label_color")]
    pub label_color: Rgba8,
    /// Canvas background color.
    #[serde(default = "default_background_color")]
    pub background_color: Rgba8,
    /// Palette cycled through by categories that carry no color of their own.
    #[serde(default)]
    pub category_colors: Vec<Rgba8>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            month_arc_color: default_month_arc_color(),
            event_arc_color: default_event_arc_color(),
            label_color: default_label_color(),
            background_color: default_background_color(),
            category_colors: Vec::new(),
        }
    }
}

impl Theme {
    /// Color for the `position`-th category when it has no explicit color.
    pub fn fallback_category_color(&self, position: usize) -> Rgba8 {
        if self.category_colors.is_empty() {
            return self.event_arc_color;
        }
        self.category_colors[position % self.category_colors.len()]
    }
}

fn default_month_arc_color() -> Rgba8 {
    Rgba8::rgb(0x53, 0xa0, 0x45)
}

fn default_event_arc_color() -> Rgba8 {
    Rgba8::rgb(0xf6, 0xe4, 0x00)
}

fn default_label_color() -> Rgba8 {
    Rgba8::BLACK
}

fn default_background_color() -> Rgba8 {
    Rgba8::WHITE
}

#[cfg(test)]
#[path = "../../tests/unit/model/theme.rs"]
mod tests;
