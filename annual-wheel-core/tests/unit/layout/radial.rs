use std::f64::consts::{PI, TAU};

use super::*;
use crate::{Point, polar_to_cartesian};

const EPS: f64 = 1e-12;

fn ev(id: i64, month: i64, name: &str) -> LayoutInput {
    LayoutInput::new(id, month, name)
}

fn month(i: i64) -> Month {
    Month::new(i).unwrap()
}

#[test]
fn month_width_is_constant() {
    for i in 0..=10 {
        let w = month_to_angle(f64::from(i + 1)) - month_to_angle(f64::from(i));
        assert!((w - TAU / 12.0).abs() < EPS, "month {i} width {w}");
    }
}

#[test]
fn january_starts_at_twelve_oclock() {
    assert!((month_to_angle(0.0) + PI / 2.0).abs() < EPS);
    assert!((month_to_angle(0.5) - (TAU / 24.0 - PI / 2.0)).abs() < EPS);
}

#[test]
fn month_to_angle_does_not_wrap() {
    let dec_end = month_to_angle(12.0);
    let jan_start = month_to_angle(0.0);
    assert!(dec_end > jan_start);
    assert!((dec_end - jan_start - TAU).abs() < EPS);
    assert!(month_to_angle(-1.0) < jan_start);
}

#[test]
fn grouping_keeps_input_order() {
    let events = vec![
        ev(1, 3, "a"),
        ev(2, 0, "b"),
        ev(3, 3, "c"),
        ev(4, 3, "d"),
    ];
    let groups = group_by_month(&events).unwrap();
    assert_eq!(groups.len(), 2);
    let april: Vec<i64> = groups[&month(3)].iter().map(|e| e.id).collect();
    assert_eq!(april, vec![1, 3, 4]);
    assert_eq!(groups[&month(0)].len(), 1);
}

#[test]
fn indices_are_unique_per_month() {
    let events: Vec<LayoutInput> = (0..20)
        .map(|i| ev(i, (i * 7) % 12, &format!("e{i}")))
        .collect();
    let indexed = assign_layout_indices(&events).unwrap();
    assert_eq!(indexed.len(), events.len());

    for m in Month::all() {
        let mut idx: Vec<usize> = indexed
            .iter()
            .filter(|e| e.month == m)
            .map(|e| e.index)
            .collect();
        let n = idx.len();
        for e in indexed.iter().filter(|e| e.month == m) {
            assert_eq!(e.item_count, n);
        }
        idx.sort_unstable();
        assert_eq!(idx, (0..n).collect::<Vec<_>>());
    }
}

#[test]
fn indexing_is_deterministic_and_order_dependent() {
    let events = vec![ev(1, 5, "x"), ev(2, 5, "y")];
    let a = assign_layout_indices(&events).unwrap();
    let b = assign_layout_indices(&events).unwrap();
    assert_eq!(a, b);

    let reversed = vec![events[1].clone(), events[0].clone()];
    let r = assign_layout_indices(&reversed).unwrap();
    assert_eq!(r[0].input.id, 2);
    assert_eq!(r[0].index, 0);
}

#[test]
fn out_of_range_month_rejects_batch() {
    let events = vec![ev(1, 0, "ok"), ev(2, 12, "bad"), ev(3, 1, "ok")];
    let err = assign_layout_indices(&events).unwrap_err();
    assert!(matches!(
        err,
        WheelError::InvalidMonthIndex {
            index: 12,
            event_id: Some(2)
        }
    ));

    assert!(group_by_month(&[ev(9, -1, "neg")]).is_err());
    assert!(layout_wheel(&events, DEFAULT_RING_SUBDIVISIONS).is_err());
}

#[test]
fn sub_spans_partition_the_month() {
    for n in 1..=7usize {
        let m = month(8);
        let full = month_span(m);
        let spans: Vec<AngleSpan> = (0..n)
            .map(|i| compute_event_arc(m, n, i).unwrap())
            .collect();

        assert!((spans[0].start_angle - full.start_angle).abs() < EPS);
        assert!((spans[n - 1].end_angle - full.end_angle).abs() < 1e-9);
        for pair in spans.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < EPS);
        }
        for s in &spans {
            assert!(s.start_angle < s.end_angle);
            assert!((s.width() - full.width() / n as f64).abs() < 1e-9);
        }
    }
}

#[test]
fn single_event_month_is_the_full_slice() {
    for m in Month::all() {
        assert_eq!(compute_event_arc(m, 1, 0).unwrap(), month_span(m));
    }
}

#[test]
fn event_arc_rejects_bad_counts() {
    assert!(compute_event_arc(month(0), 0, 0).is_err());
    assert!(compute_event_arc(month(0), 2, 2).is_err());
}

#[test]
fn two_january_events_split_january() {
    let events = vec![ev(1, 0, "A"), ev(2, 0, "B")];
    let layout = layout_wheel(&events, DEFAULT_RING_SUBDIVISIONS).unwrap();
    let a = &layout.events[0];
    let b = &layout.events[1];

    assert_eq!((a.item_count, a.index), (2, 0));
    assert_eq!((b.item_count, b.index), (2, 1));

    let half = TAU / 24.0;
    assert!(a.span.start_angle.abs() < EPS);
    assert!((a.span.end_angle - half).abs() < EPS);
    assert!((b.span.start_angle - half).abs() < EPS);
    assert!((b.span.end_angle - 2.0 * half).abs() < EPS);
}

#[test]
fn single_may_event_spans_may() {
    let events = vec![ev(1, 4, "X")];
    let layout = layout_wheel(&events, DEFAULT_RING_SUBDIVISIONS).unwrap();
    let x = &layout.events[0];
    assert_eq!((x.item_count, x.index), (1, 0));
    assert!((x.span.start_angle - (month_to_angle(4.0) + PI / 2.0)).abs() < EPS);
    assert!((x.span.end_angle - (month_to_angle(5.0) + PI / 2.0)).abs() < EPS);
}

#[test]
fn quarter_ring_covers_circle_once() {
    let ring = compute_month_ring_segments(4).unwrap();
    assert_eq!(ring.len(), 48);
    for seg in &ring {
        assert!((seg.span.width() - TAU / 48.0).abs() < 1e-12);
    }
    assert!(ring[0].span.start_angle.abs() < EPS);
    assert!((ring[47].span.end_angle - TAU).abs() < 1e-9);
    for pair in ring.windows(2) {
        assert!((pair[0].span.end_angle - pair[1].span.start_angle).abs() < 1e-9);
    }
    let total: f64 = ring.iter().map(|s| s.span.width()).sum();
    assert!((total - TAU).abs() < 1e-9);
}

#[test]
fn ring_subdivisions_are_validated() {
    assert!(compute_month_ring_segments(0).is_err());
    assert!(month_ring_segment(month(0), 4, 4).is_err());
    assert_eq!(compute_month_ring_segments(1).unwrap().len(), 12);
}

#[test]
fn event_arc_overlaps_its_month_slice_on_screen() {
    let center = Point::new(300.0, 300.0);
    let r = 200.0;
    let labels = month_label_angles();
    for m in Month::all() {
        let arc = compute_event_arc(m, 1, 0).unwrap();
        let arc_mid = polar_to_cartesian(center, r, arc.mid());

        let slice_start = month_to_angle(m.as_f64());
        let slice_end = month_to_angle(m.as_f64() + 1.0);
        let slice_mid_angle = (slice_start + slice_end) * 0.5;
        let slice_mid = Point::new(
            center.x + r * slice_mid_angle.cos(),
            center.y + r * slice_mid_angle.sin(),
        );
        assert!((arc_mid - slice_mid).hypot() < 1e-9, "month {m}");

        let label = Point::new(
            center.x + r * labels[usize::from(m.index())].cos(),
            center.y + r * labels[usize::from(m.index())].sin(),
        );
        assert!((label - slice_mid).hypot() < 1e-9, "label {m}");
    }

    // The drawn background ring lines up with the event wedges.
    for seg in compute_month_ring_segments(1).unwrap() {
        let arc = compute_event_arc(seg.month, 1, 0).unwrap();
        let ring_mid = polar_to_cartesian(center, r, seg.span.mid());
        let arc_mid = polar_to_cartesian(center, r, arc.mid());
        assert!((ring_mid - arc_mid).hypot() < 1e-9, "ring {}", seg.month);
    }
    for seg in compute_month_ring_segments(4).unwrap() {
        let arc = compute_event_arc(seg.month, 4, seg.part as usize).unwrap();
        assert_eq!(seg.span, arc, "ring {} part {}", seg.month, seg.part);
    }
}

#[test]
fn indices_follow_input_order_across_interleaved_months() {
    let events = vec![
        ev(1, 3, "a"),
        ev(2, 7, "b"),
        ev(3, 3, "c"),
        ev(4, 3, "d"),
        ev(5, 7, "e"),
    ];
    let indexed = assign_layout_indices(&events).unwrap();
    let got: Vec<_> = indexed
        .iter()
        .map(|e| (e.input.id, e.month.index(), e.index, e.item_count))
        .collect();
    assert_eq!(
        got,
        vec![(1, 3, 0, 3), (2, 7, 0, 2), (3, 3, 1, 3), (4, 3, 2, 3), (5, 7, 1, 2)]
    );
}

#[test]
fn layout_serializes_flat_event_records() {
    let events = vec![ev(1, 2, "Kickoff").with_category(10)];
    let layout = layout_wheel(&events, 2).unwrap();
    let json = serde_json::to_value(&layout).unwrap();
    let first = &json["events"][0];
    assert_eq!(first["id"], 1);
    assert_eq!(first["month"], 2);
    assert_eq!(first["category_id"], 10);
    assert_eq!(first["item_count"], 1);
    assert_eq!(json["ring"].as_array().unwrap().len(), 24);

    let back: WheelLayout = serde_json::from_value(json).unwrap();
    assert_eq!(back.events[0].input, layout.events[0].input);
    assert_eq!(back.ring.len(), layout.ring.len());
}

#[test]
fn empty_input_still_lays_out_the_ring() {
    let layout = layout_wheel(&[], DEFAULT_RING_SUBDIVISIONS).unwrap();
    assert!(layout.events.is_empty());
    assert_eq!(layout.ring.len(), 48);
}
