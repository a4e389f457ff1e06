//! Radial timeline layout.
//!
//! Maps a flat list of month-tagged events onto a 12-slice circle. Events that share a month
//! split that month's slice into equal, contiguous sub-spans in input order. Everything here is
//! pure: the same input list (in the same order) always yields the same layout.
//!
//! Two angle conventions meet in this module:
//!
//! - [`month_to_angle`] and [`month_label_angles`] return *screen* angles, measured from the
//!   +x axis (3 o'clock), with January starting at `-π/2`.
//! - [`AngleSpan`]s produced for events and ring segments use the *wheel* convention: 0 is
//!   12 o'clock and angles grow clockwise. The renderer rotates them by `-π/2` when converting
//!   to Cartesian coordinates (see [`crate::polar_to_cartesian`]).

use std::collections::BTreeMap;
use std::f64::consts::FRAC_PI_2;

use crate::foundation::core::{AngleSpan, Month};
use crate::foundation::error::{WheelError, WheelResult};
use crate::foundation::math::RADIANS_PER_MONTH;

/// Ring subdivisions per month used by the default rendering (quarter months).
pub const DEFAULT_RING_SUBDIVISIONS: u32 = 4;

/// One event as handed to the layout engine.
///
/// `month` is the raw value from the data layer; it is validated by every engine entry point
/// and an out-of-range value rejects the whole batch.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutInput {
    /// Event identifier (negative for unsaved draft rows).
    pub id: i64,
    /// Zero-based month index, expected in `0..=11`.
    pub month: i64,
    /// Display name used for labels and tooltips.
    pub name: String,
    /// Owning category, when the event has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
}

impl LayoutInput {
    /// Event without a category.
    pub fn new(id: i64, month: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            month,
            name: name.into(),
            category_id: None,
        }
    }

    /// Attach a category id.
    pub fn with_category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    fn checked_month(&self) -> WheelResult<Month> {
        Month::for_event(self.month, Some(self.id))
    }
}

/// An input event annotated with its month-group size and position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexedEvent<'a> {
    /// The event as supplied.
    pub input: &'a LayoutInput,
    /// Validated month.
    pub month: Month,
    /// Number of events sharing `month` (always >= 1).
    pub item_count: usize,
    /// Zero-based position inside the month group, in input order.
    pub index: usize,
}

impl IndexedEvent<'_> {
    /// Angular span of this event, see [`compute_event_arc`].
    pub fn arc(&self) -> WheelResult<AngleSpan> {
        compute_event_arc(self.month, self.item_count, self.index)
    }
}

/// Final placement of one event.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutResult {
    /// The event as supplied.
    #[serde(flatten)]
    pub input: LayoutInput,
    /// Number of events sharing the month.
    pub item_count: usize,
    /// Position inside the month group.
    pub index: usize,
    /// Placement in wheel angles.
    pub span: AngleSpan,
}

/// One background ring segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RingSegment {
    /// Month the segment belongs to.
    pub month: Month,
    /// Segment position inside the month (`0..subdivisions`).
    pub part: u32,
    /// Placement in wheel angles.
    pub span: AngleSpan,
}

/// Complete layout of one wheel.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WheelLayout {
    /// Event placements in input order.
    pub events: Vec<LayoutResult>,
    /// Background ring segments, month-major.
    pub ring: Vec<RingSegment>,
    /// Screen angle of each month label anchor.
    pub month_labels: [f64; 12],
}

/// Convert a (possibly fractional) month position to a screen angle in radians.
///
/// `i` is the start of month `i`, `i + 0.5` its midpoint and `i + 1` its end. The map is linear
/// and total: nothing is clamped or wrapped, so month 12 lies a full turn after month 0.
pub fn month_to_angle(month_index: f64) -> f64 {
    month_index * RADIANS_PER_MONTH - FRAC_PI_2
}

/// Screen angles of the 12 month-label anchors (slice midpoints).
pub fn month_label_angles() -> [f64; 12] {
    std::array::from_fn(|i| month_to_angle(i as f64 + 0.5))
}

/// Full slice of `month` in wheel angles.
pub fn month_span(month: Month) -> AngleSpan {
    subdivide(month, 1, 0)
}

// Both base angles carry the `+π/2` that moves `month_to_angle` back to the wheel convention.
fn subdivide(month: Month, parts: usize, part: usize) -> AngleSpan {
    let m = month.as_f64();
    let start = month_to_angle(m) + FRAC_PI_2;
    let end = month_to_angle(m + 1.0) + FRAC_PI_2;
    let diff = (end - start) / parts as f64;
    let sub_start = start + diff * part as f64;
    AngleSpan::ordered(sub_start, sub_start + diff)
}

fn group_positions(events: &[LayoutInput]) -> WheelResult<BTreeMap<Month, Vec<usize>>> {
    let mut groups = BTreeMap::<Month, Vec<usize>>::new();
    for (pos, ev) in events.iter().enumerate() {
        groups.entry(ev.checked_month()?).or_default().push(pos);
    }
    Ok(groups)
}

/// Group events by month, keeping input order inside each group.
///
/// Months without events are absent from the map.
pub fn group_by_month(events: &[LayoutInput]) -> WheelResult<BTreeMap<Month, Vec<&LayoutInput>>> {
    Ok(group_positions(events)?
        .into_iter()
        .map(|(month, positions)| (month, positions.into_iter().map(|p| &events[p]).collect()))
        .collect())
}

/// Annotate every event with `(item_count, index)` for its month.
///
/// The output is in input order. Indices depend on input order, not on event identity, so
/// callers wanting stable positions across renders must keep the list order stable.
pub fn assign_layout_indices(events: &[LayoutInput]) -> WheelResult<Vec<IndexedEvent<'_>>> {
    let months = events
        .iter()
        .map(LayoutInput::checked_month)
        .collect::<WheelResult<Vec<_>>>()?;

    let mut counts = [0usize; Month::COUNT];
    for month in &months {
        counts[usize::from(month.index())] += 1;
    }

    let mut next = [0usize; Month::COUNT];
    Ok(events
        .iter()
        .zip(months)
        .map(|(input, month)| {
            let slot = usize::from(month.index());
            let index = next[slot];
            next[slot] += 1;
            IndexedEvent {
                input,
                month,
                item_count: counts[slot],
                index,
            }
        })
        .collect())
}

/// Sub-span `index` of `item_count` equal parts of `month`'s slice, in wheel angles.
pub fn compute_event_arc(month: Month, item_count: usize, index: usize) -> WheelResult<AngleSpan> {
    if item_count == 0 {
        return Err(WheelError::validation("item_count must be >= 1"));
    }
    if index >= item_count {
        return Err(WheelError::validation(format!(
            "index {index} out of range for item_count {item_count}"
        )));
    }

    Ok(subdivide(month, item_count, index))
}

/// Segment `part` of `subdivisions` equal parts of `month`'s slice, in wheel angles.
pub fn month_ring_segment(month: Month, part: u32, subdivisions: u32) -> WheelResult<RingSegment> {
    if subdivisions == 0 {
        return Err(WheelError::validation("ring subdivisions must be >= 1"));
    }
    if part >= subdivisions {
        return Err(WheelError::validation(format!(
            "ring part {part} out of range for {subdivisions} subdivisions"
        )));
    }

    Ok(RingSegment {
        month,
        part,
        span: subdivide(month, subdivisions as usize, part as usize),
    })
}

/// All `12 * subdivisions` background segments, month-major.
pub fn compute_month_ring_segments(subdivisions: u32) -> WheelResult<Vec<RingSegment>> {
    if subdivisions == 0 {
        return Err(WheelError::validation("ring subdivisions must be >= 1"));
    }
    let mut out = Vec::with_capacity(Month::COUNT * subdivisions as usize);
    for month in Month::all() {
        for part in 0..subdivisions {
            out.push(month_ring_segment(month, part, subdivisions)?);
        }
    }
    Ok(out)
}

/// Run the whole layout: indices, event arcs, ring segments and label anchors.
#[tracing::instrument(skip(inputs), fields(events = inputs.len()))]
pub fn layout_wheel(inputs: &[LayoutInput], ring_subdivisions: u32) -> WheelResult<WheelLayout> {
    let indexed = assign_layout_indices(inputs)?;
    let events = indexed
        .iter()
        .map(|ev| {
            Ok(LayoutResult {
                input: ev.input.clone(),
                item_count: ev.item_count,
                index: ev.index,
                span: ev.arc()?,
            })
        })
        .collect::<WheelResult<Vec<_>>>()?;

    let ring = compute_month_ring_segments(ring_subdivisions)?;
    tracing::debug!(
        events = events.len(),
        ring_segments = ring.len(),
        "wheel layout computed"
    );

    Ok(WheelLayout {
        events,
        ring,
        month_labels: month_label_angles(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/layout/radial.rs"]
mod tests;
