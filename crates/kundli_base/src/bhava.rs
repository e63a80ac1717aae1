//! Whole-sign bhava (house) arithmetic.
//!
//! Houses are numbered 1-12 from the ascendant. All offsets wrap with
//! Euclidean modulo, so any integer house number maps onto 1-12.

use crate::dignity::exaltation_rashi;
use crate::graha::Graha;
use crate::rashi::Rashi;

/// Wrap any integer onto a house number 1-12.
pub fn normalize_house(house: i64) -> u8 {
    ((house - 1).rem_euclid(12) + 1) as u8
}

/// The n-th house counted from `house` (1-based offset: n=1 is the same house).
///
/// `nth_house_from(12, 2)` = 1, `nth_house_from(1, 12)` = 12.
pub fn nth_house_from(house: u8, n: u8) -> u8 {
    normalize_house(house as i64 + n as i64 - 1)
}

/// Rashi occupying `house_number` for a given ascendant rashi.
pub fn house_rashi(ascendant: Rashi, house_number: i32) -> Rashi {
    let idx = (ascendant.index() as i64 + house_number as i64 - 1).rem_euclid(12);
    Rashi::from_index(idx as u8)
}

/// Rashi occupying `house_number` for an ascendant named in any vocabulary.
///
/// Returns None when the ascendant name is unrecognised.
pub fn house_sign(ascendant: &str, house_number: i32) -> Option<Rashi> {
    Rashi::from_name(ascendant).map(|asc| house_rashi(asc, house_number))
}

/// Sanskrit name of the sign on `house_number`, or `"Unknown"`.
pub fn house_sign_name(ascendant: &str, house_number: i32) -> &'static str {
    house_sign(ascendant, house_number).map_or("Unknown", Rashi::name)
}

/// Whole-sign house of `rashi` counted from `ascendant`.
pub fn house_of_rashi(ascendant: Rashi, rashi: Rashi) -> u8 {
    ((rashi.index() as i16 - ascendant.index() as i16).rem_euclid(12) + 1) as u8
}

/// True for kendra (angular) houses 1, 4, 7, 10.
pub const fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}

/// True for trikona (trinal) houses 1, 5, 9.
pub const fn is_trikona(house: u8) -> bool {
    matches!(house, 1 | 5 | 9)
}

/// Crude exaltation house: the exaltation sign's natural-zodiac house.
///
/// Returns None for Rahu/Ketu.
pub fn exaltation_house(graha: Graha) -> Option<u8> {
    exaltation_rashi(graha).map(|r| r.index() + 1)
}

/// Strength proxy: the graha sits in its single exaltation house.
pub fn is_planet_strong(graha: Graha, house: u8) -> bool {
    exaltation_house(graha) == Some(house)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rashi::ALL_RASHIS;

    #[test]
    fn normalize_wraps_both_ways() {
        assert_eq!(normalize_house(1), 1);
        assert_eq!(normalize_house(12), 12);
        assert_eq!(normalize_house(13), 1);
        assert_eq!(normalize_house(0), 12);
        assert_eq!(normalize_house(-1), 11);
        assert_eq!(normalize_house(25), 1);
    }

    #[test]
    fn nth_house_wraps() {
        assert_eq!(nth_house_from(12, 2), 1);
        assert_eq!(nth_house_from(1, 12), 12);
        assert_eq!(nth_house_from(4, 5), 8);
    }

    #[test]
    fn first_house_is_the_ascendant() {
        for r in ALL_RASHIS {
            assert_eq!(house_sign(r.name(), 1), Some(r));
            assert_eq!(house_sign(r.western_name(), 1), Some(r));
        }
    }

    #[test]
    fn output_is_sanskrit_for_english_input() {
        assert_eq!(house_sign_name("Aries", 10), "Makara");
        assert_eq!(house_sign_name("Pisces", 2), "Mesha");
    }

    #[test]
    fn periodic_in_twelve() {
        for r in ALL_RASHIS {
            for h in -12..=24 {
                assert_eq!(house_sign(r.name(), h), house_sign(r.name(), h + 12));
            }
            for h in [i32::MAX, i32::MIN] {
                assert_eq!(house_sign(r.name(), h), house_sign(r.name(), h.rem_euclid(12)));
            }
        }
        // i32::MAX is 7 mod 12, i32::MIN is 4 mod 12.
        assert_eq!(house_sign_name("Taurus", i32::MAX), "Vrischika");
        assert_eq!(house_sign("Aries", i32::MIN), Some(Rashi::Karka));
    }

    #[test]
    fn kendra_and_trikona() {
        let kendras: Vec<u8> = (1..=12).filter(|h| is_kendra(*h)).collect();
        let trikonas: Vec<u8> = (1..=12).filter(|h| is_trikona(*h)).collect();
        assert_eq!(kendras, vec![1, 4, 7, 10]);
        assert_eq!(trikonas, vec![1, 5, 9]);
        assert!(!is_trikona(0) && !is_trikona(13));
    }

    #[test]
    fn unknown_ascendant() {
        assert_eq!(house_sign("Nowhere", 4), None);
        assert_eq!(house_sign_name("Nowhere", 4), "Unknown");
    }

    #[test]
    fn house_of_rashi_inverts_house_rashi() {
        for asc in ALL_RASHIS {
            for h in 1..=12u8 {
                assert_eq!(house_of_rashi(asc, house_rashi(asc, h as i32)), h);
            }
        }
    }

    #[test]
    fn strength_proxy() {
        assert!(is_planet_strong(Graha::Surya, 1));
        assert!(is_planet_strong(Graha::Shani, 7));
        assert!(!is_planet_strong(Graha::Shani, 1));
        assert!(!is_planet_strong(Graha::Rahu, 2));
    }
}
