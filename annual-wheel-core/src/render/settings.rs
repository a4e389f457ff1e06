use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;

use crate::{
    foundation::core::Month,
    foundation::error::{WheelError, WheelResult},
    layout::radial::DEFAULT_RING_SUBDIVISIONS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Language of the month labels.
pub enum MonthNames {
    /// "January", "February", ...
    #[default]
    English,
    /// "Januari", "Februari", ...
    Swedish,
}

impl MonthNames {
    /// Label text for `month`.
    pub fn label(self, month: Month) -> &'static str {
        match self {
            Self::English => month.english_name(),
            Self::Swedish => month.swedish_name(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Geometry and typography of the rendered wheel.
///
/// Radii are expressed as ratios of the outer radius so the layout stays radius-agnostic.
pub struct RenderSettings {
    /// Width and height of the square wheel area in pixels.
    pub size_px: u32,
    /// Margin around the wheel, leaving room for month labels.
    pub margin_px: u32,
    /// Inner (hole) radius as a fraction of the outer radius.
    pub inner_radius_ratio: f64,
    /// Where the solid outer band of the background ring starts.
    pub ring_inner_ratio: f64,
    /// Angular gap in radians between neighbouring arcs.
    pub pad_angle: f64,
    /// Background ring segments per month.
    pub ring_subdivisions: u32,
    /// Distance of month labels outside the outer radius.
    pub month_label_offset_px: f64,
    /// Month label font size.
    pub month_label_font_px: f64,
    /// Event label font size.
    pub event_label_font_px: f64,
    /// Month label language.
    pub month_names: MonthNames,
    /// Draw the category legend below the wheel.
    pub show_legend: bool,
    /// Flattening tolerance for arc paths.
    pub arc_tolerance: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            size_px: 700,
            margin_px: 50,
            inner_radius_ratio: 0.3,
            ring_inner_ratio: 0.98,
            pad_angle: 0.002,
            ring_subdivisions: DEFAULT_RING_SUBDIVISIONS,
            month_label_offset_px: 20.0,
            month_label_font_px: 14.0,
            event_label_font_px: 12.0,
            month_names: MonthNames::English,
            show_legend: true,
            arc_tolerance: 0.1,
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON file; missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> WheelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open render settings '{}'", path.display()))?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| WheelError::serde(format!("parse render settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate settings invariants.
    pub fn validate(&self) -> WheelResult<()> {
        if self.size_px <= self.margin_px.saturating_mul(2) {
            return Err(WheelError::validation(
                "size_px must be greater than twice margin_px",
            ));
        }
        let ratios_ok = self.inner_radius_ratio.is_finite()
            && self.ring_inner_ratio.is_finite()
            && self.inner_radius_ratio > 0.0
            && self.inner_radius_ratio < self.ring_inner_ratio
            && self.ring_inner_ratio <= 1.0;
        if !ratios_ok {
            return Err(WheelError::validation(
                "radius ratios must satisfy 0 < inner_radius_ratio < ring_inner_ratio <= 1",
            ));
        }
        if !self.pad_angle.is_finite() || self.pad_angle < 0.0 {
            return Err(WheelError::validation("pad_angle must be finite and >= 0"));
        }
        if self.ring_subdivisions == 0 {
            return Err(WheelError::validation("ring_subdivisions must be >= 1"));
        }
        for (name, v) in [
            ("month_label_offset_px", self.month_label_offset_px),
            ("month_label_font_px", self.month_label_font_px),
            ("event_label_font_px", self.event_label_font_px),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(WheelError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        if !self.arc_tolerance.is_finite() || self.arc_tolerance <= 0.0 {
            return Err(WheelError::validation("arc_tolerance must be finite and > 0"));
        }
        Ok(())
    }

    /// Outer radius of the wheel in pixels.
    pub fn outer_radius(&self) -> f64 {
        f64::from(self.size_px.saturating_sub(self.margin_px.saturating_mul(2))) * 0.5
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/settings.rs"]
mod tests;
