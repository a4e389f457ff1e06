use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        WheelError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(WheelError::render("x").to_string().contains("render error:"));
    assert!(
        WheelError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn invalid_month_mentions_index_and_event() {
    let err = WheelError::invalid_month(12, Some(7));
    assert_eq!(err.to_string(), "invalid month index 12 (event 7)");

    let err = WheelError::invalid_month(-1, None);
    assert_eq!(err.to_string(), "invalid month index -1");
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = WheelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: WheelError = serde_json::from_str::<serde_json::Value>("{")
        .unwrap_err()
        .into();
    assert!(matches!(err, WheelError::Serde(_)));
}
