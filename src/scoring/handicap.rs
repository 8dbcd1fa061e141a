use crate::model::CourseSetup;
use std::collections::BTreeMap;

/// Whole strokes a playing handicap is worth over a full round.
#[must_use]
pub fn rounded_handicap(playing_handicap: f32) -> i32 {
    playing_handicap.round() as i32
}

/// Strokes received on one hole under the standard allocation: one stroke on
/// each of the `H mod N` hardest holes (lowest stroke index) plus `H div N`
/// strokes everywhere. Plus players give strokes back the USGA way, starting
/// from the easiest hole (highest stroke index).
#[must_use]
pub fn strokes_for_hole(playing_handicap: f32, stroke_index: u8, holes_in_round: u8) -> i32 {
    debug_assert!(holes_in_round > 0);
    debug_assert!(stroke_index >= 1 && stroke_index <= holes_in_round);

    let total = rounded_handicap(playing_handicap);
    let n = i32::from(holes_in_round);
    let si = i32::from(stroke_index);

    if total >= 0 {
        let every_hole = total / n;
        let extras = total % n;
        every_hole + i32::from(si <= extras)
    } else {
        let owed = -total;
        let every_hole = owed / n;
        let extras = owed % n;
        -(every_hole + i32::from(si > n - extras))
    }
}

/// Full allocation for a tee, keyed by hole number.
#[must_use]
pub fn allocate_for_course(course: &CourseSetup, playing_handicap: f32) -> BTreeMap<u8, i32> {
    let total_holes = course.total_holes();
    course
        .holes
        .iter()
        .map(|h| {
            (
                h.number,
                strokes_for_hole(playing_handicap, h.stroke_index, total_holes),
            )
        })
        .collect()
}
