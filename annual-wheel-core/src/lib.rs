//! Annual wheel: a radial, year-at-a-glance planning chart.
//!
//! The twelve months are laid out clockwise around a ring starting at 12 o'clock. Each event
//! belongs to one month and occupies a wedge of that month's slice; events sharing a month split
//! the slice evenly in input order.
//!
//! # Pipeline overview
//!
//! 1. **Model**: load a [`Wheel`] (categories, events, theme) from JSON and validate it
//! 2. **Layout**: `&[LayoutInput] -> WheelLayout` via [`layout_wheel`] (pure, deterministic)
//! 3. **Render**: `Wheel + RenderSettings -> SVG` via [`render_svg`]
//! 4. **Rasterize** (optional): `SVG -> PNG` via [`rasterize_png`]
//!
//! Edits in progress go through [`WheelDraft`], which mints temporary negative ids until the
//! wheel is saved.
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the layout engine**: only the model and settings loaders touch the filesystem.
//!
//! See [`crate::guide`] for the angle conventions and a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod edit;
mod foundation;
mod layout;
mod model;
mod render;

/// Standalone documentation for annual wheel concepts and conventions.
pub mod guide;

pub use edit::draft::{DraftIds, NEW_CATEGORY_NAME, NEW_EVENT_NAME, WheelDraft};
pub use foundation::core::{AngleSpan, BezPath, Month, Point, Rgba8, Vec2};
pub use foundation::error::{WheelError, WheelResult};
pub use foundation::math::{RADIANS_PER_MONTH, polar_to_cartesian};
pub use layout::radial::{
    DEFAULT_RING_SUBDIVISIONS, IndexedEvent, LayoutInput, LayoutResult, RingSegment, WheelLayout,
    assign_layout_indices, compute_event_arc, compute_month_ring_segments, group_by_month,
    layout_wheel, month_label_angles, month_ring_segment, month_span, month_to_angle,
};
pub use model::theme::Theme;
pub use model::wheel::{Category, MonthSpec, Wheel, WheelEvent, is_temporary_id};
pub use render::raster::rasterize_png;
pub use render::settings::{MonthNames, RenderSettings};
pub use render::svg::{render_layout_svg, render_svg};
