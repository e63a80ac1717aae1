//! Nakshatra (lunar mansion) vocabulary for the 27-fold scheme.
//!
//! Each nakshatra carries a Vimshottari lord; the Ketu-ruled trio
//! (Ashwini, Magha, Mula) is what the career engine flags for Saturn.

use crate::graha::Graha;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lord sequence, repeating every 9 nakshatras.
const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Common alternate spellings, compared after stripping spaces and case.
const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("aswini", Nakshatra::Ashwini),
    ("ashvini", Nakshatra::Ashwini),
    ("kritika", Nakshatra::Krittika),
    ("mrigasira", Nakshatra::Mrigashira),
    ("mrigashirsha", Nakshatra::Mrigashira),
    ("aridra", Nakshatra::Ardra),
    ("pushyami", Nakshatra::Pushya),
    ("aslesha", Nakshatra::Ashlesha),
    ("ashlesa", Nakshatra::Ashlesha),
    ("makha", Nakshatra::Magha),
    ("purvaphalgun", Nakshatra::PurvaPhalguni),
    ("uttaraphalgun", Nakshatra::UttaraPhalguni),
    ("chithra", Nakshatra::Chitra),
    ("swathi", Nakshatra::Swati),
    ("visakha", Nakshatra::Vishakha),
    ("jyestha", Nakshatra::Jyeshtha),
    ("jyeshta", Nakshatra::Jyeshtha),
    ("moola", Nakshatra::Mula),
    ("moolam", Nakshatra::Mula),
    ("purvashadha", Nakshatra::PurvaAshadha),
    ("uttarashadha", Nakshatra::UttaraAshadha),
    ("sravana", Nakshatra::Shravana),
    ("shravan", Nakshatra::Shravana),
    ("dhanishta", Nakshatra::Dhanishtha),
    ("shatabhishak", Nakshatra::Shatabhisha),
    ("satabhisha", Nakshatra::Shatabhisha),
    ("purvabhadra", Nakshatra::PurvaBhadrapada),
    ("uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("revathi", Nakshatra::Revati),
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub fn index(self) -> u8 {
        ALL_NAKSHATRAS
            .iter()
            .position(|n| *n == self)
            .map_or(0, |i| i as u8)
    }

    /// Vimshottari lord of the nakshatra.
    pub fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self.index() % 9) as usize]
    }

    /// Resolve a nakshatra name, ignoring case, spaces, hyphens and underscores.
    pub fn from_name(name: &str) -> Option<Nakshatra> {
        let key: String = name
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        if key.is_empty() {
            return None;
        }
        ALL_NAKSHATRAS
            .iter()
            .copied()
            .find(|n| n.name().replace(' ', "").to_lowercase() == key)
            .or_else(|| {
                NAKSHATRA_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, n)| *n)
            })
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_and_order() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
        assert_eq!(Nakshatra::Revati.index(), 26);
    }

    #[test]
    fn ketu_ruled_trio() {
        let ketu: Vec<_> = ALL_NAKSHATRAS
            .iter()
            .filter(|n| n.lord() == Graha::Ketu)
            .collect();
        assert_eq!(
            ketu,
            vec![&Nakshatra::Ashwini, &Nakshatra::Magha, &Nakshatra::Mula]
        );
    }

    #[test]
    fn names_with_spaces_resolve() {
        assert_eq!(
            Nakshatra::from_name("Purva Phalguni"),
            Some(Nakshatra::PurvaPhalguni)
        );
        assert_eq!(
            Nakshatra::from_name("uttara-bhadrapada"),
            Some(Nakshatra::UttaraBhadrapada)
        );
    }

    #[test]
    fn moola_alias() {
        assert_eq!(Nakshatra::from_name("Moola"), Some(Nakshatra::Mula));
        assert_eq!(Nakshatra::from_name("Mula"), Some(Nakshatra::Mula));
        assert_eq!(Nakshatra::from_name("Nowhere"), None);
    }
}
