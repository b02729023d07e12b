//! Safety rules for a single report.
//!
//! A report is safe when its levels move in one direction only and every
//! adjacent step has a magnitude between [`MIN_STEP`] and [`MAX_STEP`].
//! Empty and single-level reports are safe since they have no steps.

use crate::domain::model::Level;
use std::cmp::Ordering;

pub const MIN_STEP: u64 = 1;
pub const MAX_STEP: u64 = 3;

/// Applies the pairwise rule to any ordered run of levels, stopping at the
/// first out-of-range step.
fn levels_are_safe<I>(levels: I) -> bool
where
    I: IntoIterator<Item = Level>,
{
    let mut levels = levels.into_iter();
    let Some(mut prev) = levels.next() else {
        return true;
    };

    let mut all_increasing = true;
    let mut all_decreasing = true;

    for next in levels {
        let step = prev.abs_diff(next);
        if !(MIN_STEP..=MAX_STEP).contains(&step) {
            return false;
        }

        match next.cmp(&prev) {
            Ordering::Greater => all_decreasing = false,
            Ordering::Less => all_increasing = false,
            Ordering::Equal => {}
        }
        prev = next;
    }

    all_increasing || all_decreasing
}

pub fn is_safe(levels: &[Level]) -> bool {
    levels_are_safe(levels.iter().copied())
}

/// Index of the first level whose removal leaves a safe report.
pub fn dampener_index(levels: &[Level]) -> Option<usize> {
    (0..levels.len()).find(|&skip| {
        levels_are_safe(
            levels
                .iter()
                .enumerate()
                .filter(|&(idx, _)| idx != skip)
                .map(|(_, &level)| level),
        )
    })
}

pub fn is_safe_with_dampener(levels: &[Level]) -> bool {
    is_safe(levels) || dampener_index(levels).is_some()
}
