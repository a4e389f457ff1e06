use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::{
    foundation::core::{Month, Rgba8},
    foundation::error::{WheelError, WheelResult},
    layout::radial::LayoutInput,
    model::theme::Theme,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// An annual wheel: a named plan for one calendar year.
///
/// This is the JSON-facing shape produced by the data layer. Events live inside their
/// categories; [`Wheel::layout_inputs`] flattens them in category order, which is the order the
/// layout engine sees.
pub struct Wheel {
    /// Persistent wheel id (0 for a wheel that was never saved).
    #[serde(default)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Planned calendar year.
    pub year: i32,
    /// Ordered categories with their events.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Rendering colors.
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A named, colored group of events.
pub struct Category {
    /// Category id (negative while unsaved).
    pub id: i64,
    /// Name, unique within a wheel.
    pub name: String,
    /// Arc color; falls back to the theme palette when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgba8>,
    /// Events in display order.
    #[serde(default)]
    pub events: Vec<WheelEvent>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A single planned event.
pub struct WheelEvent {
    /// Event id (negative while unsaved).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// When the event happens.
    pub month: MonthSpec,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
/// Month of an event as stored by the data layer.
///
/// Stored rows carry either a month enumeration or a start date; both reduce to a [`Month`]
/// before layout.
pub enum MonthSpec {
    /// Zero-based month index.
    Index(i64),
    /// English month name (`"March"`) or ISO calendar date (`"2025-03-14"`).
    Text(String),
}

impl From<Month> for MonthSpec {
    fn from(value: Month) -> Self {
        Self::Index(i64::from(value.index()))
    }
}

impl MonthSpec {
    /// Raw zero-based month index, not yet range-checked for [`MonthSpec::Index`].
    pub fn raw_index(&self, event_id: i64) -> WheelResult<i64> {
        match self {
            Self::Index(i) => Ok(*i),
            Self::Text(s) => {
                if let Some(m) = Month::from_english_name(s) {
                    return Ok(i64::from(m.index()));
                }
                parse_iso_date_month(s).ok_or_else(|| {
                    WheelError::validation(format!(
                        "event {event_id}: month '{s}' is neither a month name nor a YYYY-MM-DD date"
                    ))
                })
            }
        }
    }

    /// Resolve to a validated [`Month`].
    pub fn resolve(&self, event_id: i64) -> WheelResult<Month> {
        Month::for_event(self.raw_index(event_id)?, Some(event_id))
    }
}

// Zero-based month of an ISO calendar date, optionally carrying a time
// (`2025-03-14`, `2025-03-14T08:00:00`, `2025-03-14T08:00:00Z`). The date must exist. An
// out-of-range `MM` field is passed through so `2025-13-01` reports as an invalid month rather
// than an unparseable string.
fn parse_iso_date_month(s: &str) -> Option<i64> {
    let s = s.trim();
    let mm = iso_month_field(s)?;
    if !(1..=12).contains(&mm) {
        return Some(mm - 1);
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date())
        })
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .ok()?;
    if !(1..=9999).contains(&date.year()) {
        return None;
    }
    Some(i64::from(date.month0()))
}

// `MM` of a string shaped `YYYY-MM-...`.
fn iso_month_field(s: &str) -> Option<i64> {
    let b = s.as_bytes();
    if b.len() < 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }
    if !b[..4].iter().chain(&b[5..7]).all(u8::is_ascii_digit) {
        return None;
    }
    s.get(5..7)?.parse().ok()
}

impl Wheel {
    /// Parse a wheel from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> WheelResult<Self> {
        let wheel: Wheel = serde_json::from_reader(r)
            .map_err(|e| WheelError::serde(format!("parse wheel JSON: {e}")))?;
        wheel.validate()?;
        Ok(wheel)
    }

    /// Parse a wheel from a JSON string and validate it.
    pub fn from_json_str(s: &str) -> WheelResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a wheel from a JSON file on disk and validate it.
    pub fn from_path(path: impl AsRef<Path>) -> WheelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open wheel JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> WheelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate wheel invariants.
    pub fn validate(&self) -> WheelResult<()> {
        if self.name.trim().is_empty() {
            return Err(WheelError::validation("wheel name must be non-empty"));
        }
        if !(1..=9999).contains(&self.year) {
            return Err(WheelError::validation(format!(
                "wheel year {} must be in 1..=9999",
                self.year
            )));
        }

        let mut category_names = HashSet::new();
        let mut category_ids = HashSet::new();
        let mut event_ids = HashSet::new();
        for cat in &self.categories {
            let name = cat.name.trim();
            if name.is_empty() {
                return Err(WheelError::validation(format!(
                    "category {} name must be non-empty",
                    cat.id
                )));
            }
            if !category_names.insert(name) {
                return Err(WheelError::validation(format!(
                    "duplicate category name '{name}'"
                )));
            }
            if !category_ids.insert(cat.id) {
                return Err(WheelError::validation(format!(
                    "duplicate category id {}",
                    cat.id
                )));
            }

            for ev in &cat.events {
                if ev.name.trim().is_empty() {
                    return Err(WheelError::validation(format!(
                        "event {} name must be non-empty",
                        ev.id
                    )));
                }
                if !event_ids.insert(ev.id) {
                    return Err(WheelError::validation(format!(
                        "duplicate event id {}",
                        ev.id
                    )));
                }
                ev.month.resolve(ev.id)?;
            }
        }

        Ok(())
    }

    /// Flatten events into layout-engine input, category by category.
    pub fn layout_inputs(&self) -> WheelResult<Vec<LayoutInput>> {
        let mut out = Vec::with_capacity(self.event_count());
        for cat in &self.categories {
            for ev in &cat.events {
                out.push(
                    LayoutInput::new(ev.id, ev.month.raw_index(ev.id)?, ev.name.clone())
                        .with_category(cat.id),
                );
            }
        }
        Ok(out)
    }

    /// Total number of events across categories.
    pub fn event_count(&self) -> usize {
        self.categories.iter().map(|c| c.events.len()).sum()
    }

    /// Look up a category by id.
    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Effective color of a category, applying theme fallbacks.
    pub fn category_color(&self, id: i64) -> Rgba8 {
        match self.categories.iter().position(|c| c.id == id) {
            Some(pos) => self.categories[pos]
                .color
                .unwrap_or_else(|| self.theme.fallback_category_color(pos)),
            None => self.theme.event_arc_color,
        }
    }

    /// Ids of categories and events that still carry temporary (unsaved) ids.
    pub fn pending_ids(&self) -> Vec<i64> {
        let mut out = Vec::new();
        for cat in &self.categories {
            if is_temporary_id(cat.id) {
                out.push(cat.id);
            }
            out.extend(
                cat.events
                    .iter()
                    .map(|e| e.id)
                    .filter(|id| is_temporary_id(*id)),
            );
        }
        out
    }
}

/// Whether `id` was minted by a draft session rather than by storage.
pub fn is_temporary_id(id: i64) -> bool {
    id < 0
}

#[cfg(test)]
#[path = "../../tests/unit/model/wheel.rs"]
mod tests;
