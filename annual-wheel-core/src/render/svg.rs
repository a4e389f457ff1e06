use html_escape::encode_text;
use kurbo::{CircleSegment, Shape};

use crate::{
    foundation::core::{AngleSpan, Month, Point, Rgba8, Vec2},
    foundation::error::WheelResult,
    foundation::math::{polar_to_cartesian, to_screen_angle},
    layout::radial::{WheelLayout, layout_wheel},
    model::wheel::Wheel,
    render::settings::RenderSettings,
};

const LEGEND_TITLE: &str = "Categories";
const LEGEND_ROW_PX: f64 = 28.0;
const LEGEND_TITLE_PX: f64 = 32.0;
const LEGEND_CHIP_H: f64 = 22.0;
const LEGEND_FONT_PX: f64 = 13.0;
// Rough glyph advance used to size legend chips without a font database.
const LEGEND_CHAR_W: f64 = 7.5;

/// Lay out `wheel` and render it as a standalone SVG document.
#[tracing::instrument(skip_all, fields(wheel = %wheel.name, events = wheel.event_count()))]
pub fn render_svg(wheel: &Wheel, settings: &RenderSettings) -> WheelResult<String> {
    settings.validate()?;
    let inputs = wheel.layout_inputs()?;
    let layout = layout_wheel(&inputs, settings.ring_subdivisions)?;
    render_layout_svg(wheel, &layout, settings)
}

/// Render an already computed layout. `wheel` supplies names, colors and the legend.
pub fn render_layout_svg(
    wheel: &Wheel,
    layout: &WheelLayout,
    settings: &RenderSettings,
) -> WheelResult<String> {
    settings.validate()?;
    let g = Geometry::new(settings);
    let theme = &wheel.theme;

    let legend_h = if settings.show_legend && !wheel.categories.is_empty() {
        LEGEND_TITLE_PX + LEGEND_ROW_PX * wheel.categories.len() as f64
    } else {
        0.0
    };
    let width = f64::from(settings.size_px);
    let height = width + legend_h;

    let mut out = String::with_capacity(4096 + layout.events.len() * 512);
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = num(width),
        h = num(height),
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<rect class="background" x="0" y="0" width="{}" height="{}"{}/>"#,
        num(width),
        num(height),
        fill_attrs(theme.background_color),
    ));
    out.push('\n');

    // Background ring: a thin solid band on the outside, a translucent band inside it.
    out.push_str(r#"<g class="month-ring">"#);
    out.push('\n');
    for seg in &layout.ring {
        let span = seg.span.padded(settings.pad_angle);
        out.push_str(&format!(
            r#"<path class="month-arc-outer" d="{}"{}/>"#,
            sector_path(g.center, g.ring_inner, g.outer, span, settings.arc_tolerance),
            fill_attrs(theme.month_arc_color),
        ));
        out.push('\n');
    }
    let translucent = Rgba8 {
        a: theme.month_arc_color.a / 2,
        ..theme.month_arc_color
    };
    for seg in &layout.ring {
        let span = seg.span.padded(settings.pad_angle);
        out.push_str(&format!(
            r#"<path class="month-arc" d="{}"{}/>"#,
            sector_path(g.center, g.inner, g.ring_inner, span, settings.arc_tolerance),
            fill_attrs(translucent),
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");

    out.push_str(&format!(
        r#"<g class="month-labels" font-size="{}" text-anchor="middle"{}>"#,
        num(settings.month_label_font_px),
        fill_attrs(theme.label_color),
    ));
    out.push('\n');
    let label_r = g.outer + settings.month_label_offset_px;
    for (month, angle) in Month::all().zip(layout.month_labels) {
        let p = g.center + Vec2::from_angle(angle) * label_r;
        out.push_str(&format!(
            r#"<text class="month-label" transform="translate({},{}) rotate({})" dy="0.35em">{}</text>"#,
            num(p.x),
            num(p.y),
            num(angle.to_degrees() + 90.0),
            encode_text(settings.month_names.label(month)),
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="events">"#);
    out.push('\n');
    for ev in &layout.events {
        let color = match ev.input.category_id {
            Some(id) => wheel.category_color(id),
            None => theme.event_arc_color,
        };
        let span = ev.span.padded(settings.pad_angle);
        out.push_str(&format!(
            r#"<path class="event-arc" data-event-id="{}" d="{}"{}><title>{}</title></path>"#,
            ev.input.id,
            sector_path(g.center, g.inner, g.outer, span, settings.arc_tolerance),
            fill_attrs(color),
            encode_text(&ev.input.name),
        ));
        out.push('\n');

        let mid = ev.span.mid();
        let p = polar_to_cartesian(g.center, (g.inner + g.outer) * 0.5, mid);
        out.push_str(&format!(
            r#"<text class="event-label" font-size="{}" text-anchor="middle" dy="0.35em" transform="translate({},{}) rotate({})"{}>{}</text>"#,
            num(settings.event_label_font_px),
            num(p.x),
            num(p.y),
            num(event_label_rotation(mid)),
            fill_attrs(color.contrast_text()),
            encode_text(&ev.input.name),
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");

    if legend_h > 0.0 {
        write_legend(&mut out, wheel, settings, width);
    }

    out.push_str("</svg>\n");
    tracing::debug!(bytes = out.len(), "svg rendered");
    Ok(out)
}

struct Geometry {
    center: Point,
    inner: f64,
    ring_inner: f64,
    outer: f64,
}

impl Geometry {
    fn new(settings: &RenderSettings) -> Self {
        let outer = settings.outer_radius();
        let c = f64::from(settings.margin_px) + outer;
        Self {
            center: Point::new(c, c),
            inner: outer * settings.inner_radius_ratio,
            ring_inner: outer * settings.ring_inner_ratio,
            outer,
        }
    }
}

/// Annular sector between `inner` and `outer` covering `span` (wheel angles).
pub(crate) fn sector_path(
    center: Point,
    inner: f64,
    outer: f64,
    span: AngleSpan,
    tolerance: f64,
) -> String {
    CircleSegment::new(
        center,
        outer,
        inner,
        to_screen_angle(span.start_angle),
        span.width(),
    )
    .to_path(tolerance)
    .to_svg()
}

/// Rotation in degrees for a radial event label at wheel angle `mid`, flipped so text is never
/// upside down.
pub(crate) fn event_label_rotation(mid: f64) -> f64 {
    let angle = mid.to_degrees() - 90.0;
    if angle > 90.0 {
        angle - 180.0
    } else if angle < -90.0 {
        angle + 180.0
    } else {
        angle
    }
}

fn write_legend(out: &mut String, wheel: &Wheel, settings: &RenderSettings, width: f64) {
    let x0 = f64::from(settings.margin_px);
    let top = width;
    out.push_str(&format!(
        r#"<g class="legend" font-size="{}">"#,
        num(LEGEND_FONT_PX)
    ));
    out.push('\n');
    out.push_str(&format!(
        r#"<text class="legend-title" x="{}" y="{}" font-weight="bold"{}>{}</text>"#,
        num(x0),
        num(top + LEGEND_TITLE_PX * 0.6),
        fill_attrs(wheel.theme.label_color),
        LEGEND_TITLE,
    ));
    out.push('\n');

    for (row, cat) in wheel.categories.iter().enumerate() {
        let color = wheel.category_color(cat.id);
        let y = top + LEGEND_TITLE_PX + LEGEND_ROW_PX * row as f64;
        let chip_w = 24.0 + LEGEND_CHAR_W * cat.name.chars().count() as f64;
        out.push_str(&format!(
            r#"<rect class="legend-chip" x="{}" y="{}" width="{}" height="{}" rx="{}"{}/>"#,
            num(x0),
            num(y),
            num(chip_w),
            num(LEGEND_CHIP_H),
            num(LEGEND_CHIP_H * 0.5),
            fill_attrs(color),
        ));
        out.push_str(&format!(
            r#"<text class="legend-label" x="{}" y="{}" dy="0.35em" font-weight="bold"{}>{}</text>"#,
            num(x0 + 12.0),
            num(y + LEGEND_CHIP_H * 0.5),
            fill_attrs(color.contrast_text()),
            encode_text(&cat.name),
        ));
        out.push('\n');
    }
    out.push_str("</g>\n");
}

fn fill_attrs(c: Rgba8) -> String {
    let rgb = Rgba8 { a: 255, ..c };
    if c.a == 255 {
        format!(r#" fill="{}""#, rgb.to_hex())
    } else {
        format!(r#" fill="{}" fill-opacity="{}""#, rgb.to_hex(), num(c.opacity()))
    }
}

// Fixed precision keeps output stable across platforms; trailing zeros are trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
