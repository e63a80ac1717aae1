//! House-offset drishti (aspect) helpers.
//!
//! A graha in house `h` casts its 5th, 7th and 9th drishti on houses
//! `h+4`, `h+6` and `h+8` (mod 12, with 0 read as 12). No orbs, no
//! planet-specific special aspects: placements are house numbers only.

use crate::bhava::nth_house_from;

/// Offsets (in houses, 1-based) of the drishti every graha casts.
pub const DRISHTI_OFFSETS: [u8; 3] = [5, 7, 9];

/// Houses aspected from `house`: its 5th, 7th and 9th.
pub fn aspected_houses(house: u8) -> [u8; 3] {
    DRISHTI_OFFSETS.map(|n| nth_house_from(house, n))
}

/// True if a graha in `from_house` aspects `to_house`.
///
/// Directional by construction; with these offsets the relation also
/// happens to hold in reverse.
pub fn is_aspecting(from_house: u8, to_house: u8) -> bool {
    aspected_houses(from_house).contains(&to_house)
}

/// Same house, or either placement aspects the other.
pub fn is_conjunction_or_aspect(house_a: u8, house_b: u8) -> bool {
    house_a == house_b || is_aspecting(house_a, house_b) || is_aspecting(house_b, house_a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspects_from_fourth() {
        assert_eq!(aspected_houses(4), [8, 10, 12]);
    }

    #[test]
    fn aspects_wrap_past_twelve() {
        assert_eq!(aspected_houses(8), [12, 2, 4]);
        assert_eq!(aspected_houses(12), [4, 6, 8]);
    }

    #[test]
    fn eighth_aspects_fourth_by_ninth_drishti() {
        assert!(is_aspecting(8, 4));
    }

    #[test]
    fn no_self_aspect() {
        for h in 1..=12 {
            assert!(!is_aspecting(h, h));
            assert!(is_conjunction_or_aspect(h, h));
        }
    }

    #[test]
    fn adjacent_houses_do_not_aspect() {
        assert!(!is_conjunction_or_aspect(3, 4));
        assert!(!is_conjunction_or_aspect(12, 1));
    }
}
