//! Rashi (zodiac sign) vocabulary.
//!
//! 12 rashis of 30 deg each, starting from Mesha (Aries). The same ordering
//! array serves lookup and output: a sign named in any vocabulary resolves
//! to a `Rashi`, and `Rashi::name()` always reports the Sanskrit name.

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Spellings outside the two primary vocabularies, lowercase.
const RASHI_ALIASES: &[(&str, Rashi)] = &[
    ("mesh", Rashi::Mesha),
    ("मेष", Rashi::Mesha),
    ("vrishabh", Rashi::Vrishabha),
    ("vrisha", Rashi::Vrishabha),
    ("वृषभ", Rashi::Vrishabha),
    ("mithun", Rashi::Mithuna),
    ("मिथुन", Rashi::Mithuna),
    ("kark", Rashi::Karka),
    ("karkata", Rashi::Karka),
    ("karkat", Rashi::Karka),
    ("कर्क", Rashi::Karka),
    ("singh", Rashi::Simha),
    ("simh", Rashi::Simha),
    ("सिंह", Rashi::Simha),
    ("कन्या", Rashi::Kanya),
    ("तुला", Rashi::Tula),
    ("vrishchika", Rashi::Vrischika),
    ("vrishchik", Rashi::Vrischika),
    ("vrischik", Rashi::Vrischika),
    ("वृश्चिक", Rashi::Vrischika),
    ("dhanus", Rashi::Dhanu),
    ("dhanush", Rashi::Dhanu),
    ("धनु", Rashi::Dhanu),
    ("makar", Rashi::Makara),
    ("मकर", Rashi::Makara),
    ("kumbh", Rashi::Kumbha),
    ("कुंभ", Rashi::Kumbha),
    ("कुम्भ", Rashi::Kumbha),
    ("meen", Rashi::Meena),
    ("मीन", Rashi::Meena),
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// Rashi at a 0-based index, wrapping modulo 12.
    pub const fn from_index(index: u8) -> Rashi {
        ALL_RASHIS[(index % 12) as usize]
    }

    /// Resolve a sign name.
    ///
    /// Tries the Sanskrit vocabulary first, then English, then alternate
    /// transliterations and Devanagari. Case-insensitive.
    pub fn from_name(name: &str) -> Option<Rashi> {
        let key = name.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }
        ALL_RASHIS
            .iter()
            .find(|r| r.name().eq_ignore_ascii_case(&key))
            .or_else(|| {
                ALL_RASHIS
                    .iter()
                    .find(|r| r.western_name().eq_ignore_ascii_case(&key))
            })
            .copied()
            .or_else(|| {
                RASHI_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .map(|(_, rashi)| *rashi)
            })
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
            assert_eq!(Rashi::from_index(i as u8), *r);
        }
    }

    #[test]
    fn from_index_wraps() {
        assert_eq!(Rashi::from_index(12), Rashi::Mesha);
        assert_eq!(Rashi::from_index(23), Rashi::Meena);
    }

    #[test]
    fn both_vocabularies_resolve() {
        for r in ALL_RASHIS {
            assert_eq!(Rashi::from_name(r.name()), Some(r));
            assert_eq!(Rashi::from_name(r.western_name()), Some(r));
        }
    }

    #[test]
    fn alternate_spellings() {
        assert_eq!(Rashi::from_name("vrishchika"), Some(Rashi::Vrischika));
        assert_eq!(Rashi::from_name("KUMBH"), Some(Rashi::Kumbha));
        assert_eq!(Rashi::from_name("सिंह"), Some(Rashi::Simha));
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Rashi::from_name(""), None);
        assert_eq!(Rashi::from_name("   "), None);
        assert_eq!(Rashi::from_name("Ophiuchus"), None);
    }
}
