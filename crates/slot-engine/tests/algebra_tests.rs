//! Tests for the interval algebra: intersect-many and subtract-many.

use slot_engine::algebra::{intersect_all, subtract_all, ClockTime, TimeRange};
use slot_engine::EngineError;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn r(start: &str, end: &str) -> TimeRange {
    TimeRange::parse(start, end).unwrap()
}

// ── Construction invariants ─────────────────────────────────────────────────

#[test]
fn inverted_range_is_rejected() {
    let start: ClockTime = "17:00".parse().unwrap();
    let end: ClockTime = "09:00".parse().unwrap();
    let err = TimeRange::new(start, end).unwrap_err();
    assert!(matches!(err, EngineError::InvalidTimeRange { .. }));
}

#[test]
fn zero_width_range_is_rejected() {
    let at: ClockTime = "12:00".parse().unwrap();
    assert!(TimeRange::new(at, at).is_err());
}

// ── intersect_all ───────────────────────────────────────────────────────────

#[test]
fn single_participant_is_identity() {
    let ranges = vec![r("13:00", "17:00"), r("09:00", "12:00")];
    let result = intersect_all(&[ranges.clone()]);

    // Same set of ranges, canonicalized by start.
    assert_eq!(result, vec![r("09:00", "12:00"), r("13:00", "17:00")]);
}

#[test]
fn pairwise_overlap_keeps_the_common_part() {
    let a = vec![r("09:00", "17:00")];
    let b = vec![r("10:00", "15:00")];

    assert_eq!(intersect_all(&[a, b]), vec![r("10:00", "15:00")]);
}

#[test]
fn intersection_is_commutative() {
    let a = vec![r("09:00", "12:00"), r("13:00", "17:00")];
    let b = vec![r("10:00", "14:00")];

    let ab = intersect_all(&[a.clone(), b.clone()]);
    let ba = intersect_all(&[b, a]);
    assert_eq!(ab, ba);
    assert_eq!(ab, vec![r("10:00", "12:00"), r("13:00", "14:00")]);
}

#[test]
fn three_participants_reduce_associatively() {
    let a = vec![r("08:00", "18:00")];
    let b = vec![r("09:00", "12:00"), r("14:00", "17:00")];
    let c = vec![r("10:00", "16:00")];

    let result = intersect_all(&[a, b, c]);
    assert_eq!(result, vec![r("10:00", "12:00"), r("14:00", "16:00")]);
}

#[test]
fn touching_ranges_do_not_intersect() {
    // [09:00,10:00) and [10:00,11:00) share only a zero-width boundary.
    let a = vec![r("09:00", "10:00")];
    let b = vec![r("10:00", "11:00")];

    assert!(intersect_all(&[a, b]).is_empty());
}

#[test]
fn disjoint_participants_yield_empty() {
    let a = vec![r("09:00", "11:00")];
    let b = vec![r("14:00", "16:00")];

    assert!(intersect_all(&[a, b]).is_empty());
}

#[test]
fn one_empty_participant_empties_the_day() {
    let a = vec![r("09:00", "17:00")];
    let b = vec![];

    assert!(intersect_all(&[a, b]).is_empty());
}

#[test]
fn zero_participants_yield_empty() {
    // Explicit policy: no availability can be asserted with zero participants.
    assert!(intersect_all(&[]).is_empty());
}

// ── subtract_all ────────────────────────────────────────────────────────────

#[test]
fn empty_busy_list_leaves_free_unchanged() {
    let free = vec![r("09:00", "12:00"), r("13:00", "17:00")];
    assert_eq!(subtract_all(&free, &[]), free);
}

#[test]
fn disjoint_busy_range_leaves_free_unchanged() {
    let free = vec![r("09:00", "12:00")];
    let busy = vec![r("13:00", "14:00")];
    assert_eq!(subtract_all(&free, &busy), free);
}

#[test]
fn straddling_busy_range_splits_free_in_two() {
    let free = vec![r("09:00", "17:00")];
    let busy = vec![r("12:00", "13:00")];

    assert_eq!(
        subtract_all(&free, &busy),
        vec![r("09:00", "12:00"), r("13:00", "17:00")]
    );
}

#[test]
fn covering_busy_range_removes_free_entirely() {
    let free = vec![r("09:00", "17:00")];
    let busy = vec![r("00:00", "23:59")];

    assert!(subtract_all(&free, &busy).is_empty());
}

#[test]
fn edge_overlap_truncates_one_side() {
    let free = vec![r("09:00", "17:00")];

    // Busy overhangs the start.
    assert_eq!(
        subtract_all(&free, &[r("08:00", "10:00")]),
        vec![r("10:00", "17:00")]
    );
    // Busy overhangs the end.
    assert_eq!(
        subtract_all(&free, &[r("16:00", "18:00")]),
        vec![r("09:00", "16:00")]
    );
}

#[test]
fn touching_busy_range_removes_nothing() {
    // Half-open ranges: busy ending exactly at free start is not an overlap.
    let free = vec![r("10:00", "12:00")];
    assert_eq!(subtract_all(&free, &[r("09:00", "10:00")]), free);
    assert_eq!(subtract_all(&free, &[r("12:00", "13:00")]), free);
}

#[test]
fn overlapping_busy_ranges_are_tolerated() {
    // Two overlapping busy ranges remove their union, no pre-merge needed.
    let free = vec![r("09:00", "17:00")];
    let busy = vec![r("10:00", "12:00"), r("11:00", "13:00")];

    assert_eq!(
        subtract_all(&free, &busy),
        vec![r("09:00", "10:00"), r("13:00", "17:00")]
    );
}

#[test]
fn busy_application_order_is_irrelevant() {
    let free = vec![r("08:00", "18:00")];
    let forward = vec![r("09:00", "10:00"), r("12:00", "13:00"), r("15:00", "16:00")];
    let backward: Vec<_> = forward.iter().rev().copied().collect();

    assert_eq!(subtract_all(&free, &forward), subtract_all(&free, &backward));
}

#[test]
fn subtracting_from_nothing_stays_empty() {
    assert!(subtract_all(&[], &[r("09:00", "10:00")]).is_empty());
}

// ── The spec'd Monday shape, algebra only ───────────────────────────────────

#[test]
fn intersect_then_subtract_produces_split_windows() {
    let organizer = vec![r("09:00", "17:00")];
    let attendee = vec![r("10:00", "15:00")];

    let common = intersect_all(&[organizer, attendee]);
    let result = subtract_all(&common, &[r("12:00", "13:00")]);

    assert_eq!(result, vec![r("10:00", "12:00"), r("13:00", "15:00")]);
}
