mod common;

use common::standard_course;
use golf_trip_engine::scoring::{allocate_for_course, rounded_handicap, strokes_for_hole};

#[test]
fn test1_nine_handicap_strokes_on_hardest_nine() {
    // Handicap 9 with stroke indexes in natural order: one stroke on stroke
    // index 1-9, none on 10-18.
    for si in 1..=18u8 {
        let expected = i32::from(si <= 9);
        assert_eq!(
            strokes_for_hole(9.0, si, 18),
            expected,
            "stroke index {si} should get {expected} stroke(s)"
        );
    }
}

#[test]
fn test1_sum_equals_rounded_handicap() {
    for handicap in 0..=54 {
        let h = handicap as f32;
        let sum: i32 = (1..=18u8).map(|si| strokes_for_hole(h, si, 18)).sum();
        assert_eq!(sum, handicap, "allocation for handicap {handicap} must sum to {handicap}");
    }
}

#[test]
fn test1_sum_matches_rounding_for_decimal_handicaps() {
    for (handicap, expected) in [(8.4f32, 8), (8.5, 9), (17.9, 18), (0.4, 0)] {
        assert_eq!(rounded_handicap(handicap), expected);
        let sum: i32 = (1..=18u8).map(|si| strokes_for_hole(handicap, si, 18)).sum();
        assert_eq!(sum, expected, "allocation for {handicap} must sum to {expected}");
    }
}

#[test]
fn test1_monotone_in_handicap() {
    for si in 1..=18u8 {
        let mut prev = strokes_for_hole(0.0, si, 18);
        for handicap in 1..=54 {
            let strokes = strokes_for_hole(handicap as f32, si, 18);
            assert!(
                strokes >= prev,
                "strokes at stroke index {si} dropped from {prev} to {strokes} at handicap {handicap}"
            );
            prev = strokes;
        }
    }
}

#[test]
fn test1_high_handicap_wraps_past_eighteen() {
    // 23 = one stroke everywhere plus a second on the 5 hardest holes.
    for si in 1..=18u8 {
        let expected = if si <= 5 { 2 } else { 1 };
        assert_eq!(strokes_for_hole(23.0, si, 18), expected);
    }
}

#[test]
fn test1_plus_player_gives_back_from_easiest_hole() {
    // A plus-2 gives a stroke back on the two easiest holes (highest index).
    for si in 1..=18u8 {
        let expected = if si >= 17 { -1 } else { 0 };
        assert_eq!(strokes_for_hole(-2.0, si, 18), expected);
    }
    let sum: i32 = (1..=18u8).map(|si| strokes_for_hole(-2.0, si, 18)).sum();
    assert_eq!(sum, -2);
}

#[test]
fn test1_allocation_for_course_keyed_by_hole() {
    let course = standard_course();
    let allocation = allocate_for_course(&course, 12.0);
    assert_eq!(allocation.len(), 18);
    // Natural stroke indexes: holes 1-12 take a stroke.
    assert_eq!(allocation[&1], 1);
    assert_eq!(allocation[&12], 1);
    assert_eq!(allocation[&13], 0);
    assert_eq!(allocation.values().sum::<i32>(), 12);
}
