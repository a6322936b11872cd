//! Slot allocation with bounded random retry
//!
//! A slot is drawn uniformly; while the drawn slot is already lit it is
//! redrawn, at most `max_attempts` more times. When the attempts run out the
//! last draw is returned even if lit, so callers must tolerate the odd
//! double allocation.

use rand::Rng;

use super::cube::Cube;

/// Pick a slot index, preferring unlit slots.
///
/// Always returns an index in `0..cubes.len()`.
pub fn pick_unlit_slot<R: Rng + ?Sized>(cubes: &[Cube], max_attempts: u32, rng: &mut R) -> usize {
    debug_assert!(!cubes.is_empty(), "no slots to pick from");
    let count = cubes.len().max(1);

    let mut index = rng.random_range(0..count);
    let mut attempts = 0;
    while attempts < max_attempts && cubes.get(index).is_some_and(Cube::is_lit) {
        index = rng.random_range(0..count);
        attempts += 1;
    }

    if cubes.get(index).is_some_and(Cube::is_lit) {
        log::debug!("slot retries exhausted after {attempts} redraws, reusing lit slot {index}");
    }
    index
}

/// First unlit slot at or after `start`, wrapping around
pub fn next_unlit_slot(cubes: &[Cube], start: usize) -> Option<usize> {
    let count = cubes.len();
    (0..count)
        .map(|offset| (start + offset) % count)
        .find(|&i| !cubes[i].is_lit())
}
