use super::*;

#[test]
fn missing_fields_take_defaults() {
    let t: Theme = serde_json::from_str(r##"{ "label_color": "#333333" }"##).unwrap();
    assert_eq!(t.label_color, Rgba8::rgb(0x33, 0x33, 0x33));
    assert_eq!(t.month_arc_color, Theme::default().month_arc_color);
    assert!(t.category_colors.is_empty());
}

#[test]
fn fallback_cycles_palette_then_event_color() {
    let mut t = Theme::default();
    assert_eq!(t.fallback_category_color(3), t.event_arc_color);

    t.category_colors = vec![Rgba8::BLACK, Rgba8::WHITE];
    assert_eq!(t.fallback_category_color(0), Rgba8::BLACK);
    assert_eq!(t.fallback_category_color(1), Rgba8::WHITE);
    assert_eq!(t.fallback_category_color(2), Rgba8::BLACK);
}

#[test]
fn bad_color_is_a_parse_error() {
    assert!(serde_json::from_str::<Theme>(r#"{ "label_color": "blue" }"#).is_err());
}
