//! # Annual wheel guide
//!
//! A walkthrough of the data model, the layout engine and the renderer.
//! For command-line usage see the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Wheel`](crate::Wheel): a named plan for one year, made of categories and their events
//! - [`Month`](crate::Month): a validated zero-based month index (`0` = January)
//! - [`LayoutInput`](crate::LayoutInput): the flat, per-event input of the layout engine
//! - [`WheelLayout`](crate::WheelLayout): event wedges, background ring segments and label angles
//! - [`RenderSettings`](crate::RenderSettings): canvas size, radii ratios, fonts, label language
//!
//! The pipeline is staged:
//!
//! 1. Flatten the model: [`Wheel::layout_inputs`](crate::Wheel::layout_inputs)
//! 2. Lay out: [`layout_wheel`](crate::layout_wheel)
//! 3. Draw: [`render_layout_svg`](crate::render_layout_svg), or [`render_svg`](crate::render_svg)
//!    for steps 1 to 3 at once
//! 4. Optionally rasterize: [`rasterize_png`](crate::rasterize_png)
//!
//! ---
//!
//! ## Angles
//!
//! Two conventions are in play and they differ by a quarter turn:
//!
//! - **Screen angles** come from [`month_to_angle`](crate::month_to_angle) and
//!   [`month_label_angles`](crate::month_label_angles). They are measured from the +x axis with
//!   y pointing down, so January starts at `-π/2` (12 o'clock).
//! - **Wheel angles** are stored in every [`AngleSpan`](crate::AngleSpan) of a layout. `0` is
//!   12 o'clock and angles grow clockwise; a full year spans `0..2π`.
//!
//! [`polar_to_cartesian`](crate::polar_to_cartesian) takes wheel angles. Label angles are used
//! directly with `cos`/`sin`.
//!
//! ```rust
//! use annual_wheel::{LayoutInput, layout_wheel, polar_to_cartesian, Point};
//!
//! let inputs = vec![
//!     LayoutInput::new(1, 0, "Kickoff"),
//!     LayoutInput::new(2, 0, "Budget"),
//! ];
//! let layout = layout_wheel(&inputs, 4)?;
//!
//! // Both January events share the first twelfth of the circle.
//! let first = layout.events[0].span;
//! let second = layout.events[1].span;
//! assert_eq!(first.start_angle, 0.0);
//! assert!((second.end_angle - std::f64::consts::TAU / 12.0).abs() < 1e-12);
//!
//! // Wheel angle 0 is straight up.
//! let top = polar_to_cartesian(Point::new(0.0, 0.0), 10.0, first.start_angle);
//! assert!((top.y + 10.0).abs() < 1e-12);
//! # Ok::<(), annual_wheel::WheelError>(())
//! ```
//!
//! ---
//!
//! ## Validation
//!
//! Month indices outside `0..=11` are rejected with
//! [`WheelError::InvalidMonthIndex`](crate::WheelError::InvalidMonthIndex). The layout engine
//! rejects the whole batch rather than dropping the offending event, so a bad row is never
//! silently missing from the chart.
//!
//! ---
//!
//! ## Drafts and temporary ids
//!
//! [`WheelDraft`](crate::WheelDraft) hands out ids `-1, -2, ...` for rows created during an edit.
//! Each draft owns its counter. Anything negative is unsaved
//! ([`is_temporary_id`](crate::is_temporary_id)) and is replaced by storage on save.
//!
//! ```rust
//! use annual_wheel::{Month, WheelDraft, render_svg, RenderSettings};
//!
//! let mut draft = WheelDraft::blank(2025);
//! draft.set_name("Team plan");
//! let ops = draft.add_category(Some("Operations"), None);
//! draft.add_event(ops, Some("Audit"), Month::new(2)?)?;
//! let wheel = draft.finish()?;
//!
//! let svg = render_svg(&wheel, &RenderSettings::default())?;
//! assert!(svg.contains("Audit"));
//! # Ok::<(), annual_wheel::WheelError>(())
//! ```
