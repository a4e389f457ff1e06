use super::*;

const SAMPLE: &str = r##"
{
  "id": 3,
  "name": "Board plan",
  "year": 2025,
  "categories": [
    {
      "id": 1,
      "name": "Meetings",
      "color": "#55559C",
      "events": [
        { "id": 10, "name": "Kickoff", "month": 0 },
        { "id": 11, "name": "Member meeting", "month": "March" }
      ]
    },
    {
      "id": 2,
      "name": "Campaigns",
      "events": [
        { "id": 20, "name": "Summer campaign", "month": "2025-06-14" },
        { "id": 21, "name": "Autumn push", "month": "2025-09-01T08:00:00Z" }
      ]
    }
  ],
  "theme": { "category_colors": ["#E85429"] }
}
"##;

#[test]
fn parses_and_flattens_in_category_order() {
    let wheel = Wheel::from_json_str(SAMPLE).unwrap();
    assert_eq!(wheel.event_count(), 4);

    let inputs = wheel.layout_inputs().unwrap();
    let ids: Vec<i64> = inputs.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![10, 11, 20, 21]);
    let months: Vec<i64> = inputs.iter().map(|e| e.month).collect();
    assert_eq!(months, vec![0, 2, 5, 8]);
    assert_eq!(inputs[2].category_id, Some(2));
}

#[test]
fn month_variants_agree() {
    let by_index = MonthSpec::Index(2).resolve(1).unwrap();
    let by_name = MonthSpec::Text("March".into()).resolve(1).unwrap();
    let by_date = MonthSpec::Text("2024-03-31".into()).resolve(1).unwrap();
    assert_eq!(by_index, by_name);
    assert_eq!(by_name, by_date);
    assert_eq!(MonthSpec::from(by_index), MonthSpec::Index(2));
}

#[test]
fn invalid_months_are_reported() {
    assert!(matches!(
        MonthSpec::Index(12).resolve(5),
        Err(WheelError::InvalidMonthIndex {
            index: 12,
            event_id: Some(5)
        })
    ));
    assert!(matches!(
        MonthSpec::Text("2025-13-01".into()).resolve(5),
        Err(WheelError::InvalidMonthIndex { index: 12, .. })
    ));
    assert!(matches!(
        MonthSpec::Text("2025-00-01".into()).resolve(5),
        Err(WheelError::InvalidMonthIndex { index: -1, .. })
    ));
    assert!(matches!(
        MonthSpec::Text("Smarch".into()).resolve(5),
        Err(WheelError::Validation(_))
    ));
    assert!(MonthSpec::Text("2025-3-14".into()).resolve(5).is_err());
}

#[test]
fn dates_must_exist_and_be_complete() {
    for bad in [
        "2025-02-31",
        "2025-04-31",
        "2025-02-29",
        "2025-03-14garbage",
        "2025-03-14T25:00:00",
        "0000-06-01",
    ] {
        assert!(
            matches!(
                MonthSpec::Text(bad.into()).resolve(1),
                Err(WheelError::Validation(_))
            ),
            "{bad}"
        );
    }

    for (good, month) in [
        ("2024-02-29", 1),
        ("2025-03-14T08:30:00", 2),
        ("2025-12-31T23:59:59.5", 11),
        ("2025-09-01T08:00:00+02:00", 8),
    ] {
        assert_eq!(
            MonthSpec::Text(good.into()).resolve(1).unwrap().index(),
            month,
            "{good}"
        );
    }
}

#[test]
fn layout_inputs_pass_raw_indices_through() {
    let mut wheel = Wheel::from_json_str(SAMPLE).unwrap();
    wheel.categories[0].events[0].month = MonthSpec::Index(14);
    let inputs = wheel.layout_inputs().unwrap();
    assert_eq!(inputs[0].month, 14);
    assert!(wheel.validate().is_err());
}

#[test]
fn validation_rules() {
    let base = Wheel::from_json_str(SAMPLE).unwrap();

    let mut w = base.clone();
    w.name = "  ".into();
    assert!(w.validate().is_err());

    let mut w = base.clone();
    w.year = 0;
    assert!(w.validate().is_err());

    let mut w = base.clone();
    w.categories[1].name = "Meetings".into();
    assert!(w.validate().is_err());

    let mut w = base.clone();
    w.categories[1].events[0].id = 10;
    assert!(w.validate().is_err());

    let mut w = base.clone();
    w.categories[1].id = 1;
    assert!(w.validate().is_err());

    let mut w = base;
    w.categories[0].events[1].name = String::new();
    assert!(w.validate().is_err());
}

#[test]
fn from_reader_rejects_invalid_wheels() {
    let json = r#"{ "name": "x", "year": 2025, "categories": [
        { "id": 1, "name": "a", "events": [ { "id": 1, "name": "e", "month": 13 } ] } ] }"#;
    assert!(matches!(
        Wheel::from_json_str(json),
        Err(WheelError::InvalidMonthIndex { index: 13, .. })
    ));
    assert!(matches!(
        Wheel::from_json_str("{"),
        Err(WheelError::Serde(_))
    ));
}

#[test]
fn from_path_reports_missing_file() {
    let err = Wheel::from_path("target/does-not-exist/wheel.json").unwrap_err();
    assert!(err.to_string().contains("open wheel JSON"));
}

#[test]
fn category_colors_fall_back_to_theme() {
    let wheel = Wheel::from_json_str(SAMPLE).unwrap();
    assert_eq!(
        wheel.category_color(1),
        Rgba8::from_hex("#55559C").unwrap()
    );
    assert_eq!(
        wheel.category_color(2),
        Rgba8::from_hex("#E85429").unwrap()
    );
    assert_eq!(wheel.category_color(99), wheel.theme.event_arc_color);
}

#[test]
fn json_round_trip_keeps_shape() {
    let wheel = Wheel::from_json_str(SAMPLE).unwrap();
    let again = Wheel::from_json_str(&wheel.to_json_pretty().unwrap()).unwrap();
    assert_eq!(again, wheel);
}

#[test]
fn pending_ids_lists_temporary_rows() {
    let mut wheel = Wheel::from_json_str(SAMPLE).unwrap();
    assert!(wheel.pending_ids().is_empty());
    wheel.categories[1].id = -1;
    wheel.categories[0].events[0].id = -2;
    assert_eq!(wheel.pending_ids(), vec![-2, -1]);
    assert!(is_temporary_id(-1));
    assert!(!is_temporary_id(0));
}
