#![forbid(unsafe_code)]

//! Cyclic index normalization.
//!
//! A gallery is treated as a ring: stepping past the last image lands on the
//! first and vice versa. Normalization uses Euclidean remainder, so any `i64`
//! is a valid input, not just `-1` and `len`.

/// Map `index` onto `[0, len)` with wraparound.
///
/// Returns `None` only for an empty sequence, which has no valid position.
#[must_use]
pub fn wrap_index(index: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match i64::try_from(len) {
        // rem_euclid is always in [0, len) for a positive modulus.
        Ok(n) => usize::try_from(index.rem_euclid(n)).ok(),
        // len exceeds i64::MAX, so every non-negative index is already in range.
        Err(_) => usize::try_from(index)
            .ok()
            .or_else(|| Some(len - index.unsigned_abs() as usize)),
    }
}

/// Move `delta` positions from `index` around a ring of `len` elements.
#[must_use]
pub fn step(index: usize, delta: i64, len: usize) -> Option<usize> {
    let n = i64::try_from(len).ok()?;
    let base = i64::try_from(index).ok()?.rem_euclid(n.max(1));
    wrap_index(base.saturating_add(delta), len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_is_identity() {
        for i in 0..5 {
            assert_eq!(wrap_index(i, 5), Some(i as usize));
        }
    }

    #[test]
    fn single_step_edges_wrap() {
        assert_eq!(wrap_index(-1, 3), Some(2));
        assert_eq!(wrap_index(3, 3), Some(0));
    }

    #[test]
    fn far_out_of_range_wraps() {
        assert_eq!(wrap_index(-7, 3), Some(2));
        assert_eq!(wrap_index(10, 4), Some(2));
        assert_eq!(wrap_index(i64::MIN, 1), Some(0));
        assert_eq!(wrap_index(i64::MAX, 2), Some(1));
    }

    #[test]
    fn empty_has_no_position() {
        assert_eq!(wrap_index(0, 0), None);
        assert_eq!(step(0, 1, 0), None);
    }

    #[test]
    fn step_moves_around_ring() {
        assert_eq!(step(2, 1, 3), Some(0));
        assert_eq!(step(0, -1, 3), Some(2));
        assert_eq!(step(1, 0, 3), Some(1));
        assert_eq!(step(0, 1, 1), Some(0));
    }
}
