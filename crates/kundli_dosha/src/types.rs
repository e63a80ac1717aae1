//! Dosha report types.

use serde::Serialize;

/// Dosha severity. Serialises with the variant name (`"Strong"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    None,
    Mild,
    Moderate,
    Strong,
    /// Kaal Sarp with every hemmed planet inside the arc and no breaker.
    Complete,
    /// Kaal Sarp with a benefic breaking the arc.
    Partial,
}

impl Severity {
    /// Severity from a count of afflictions: 0 none, 1 mild, 2 moderate, 3+ strong.
    pub const fn from_count(count: usize) -> Self {
        match count {
            0 => Self::None,
            1 => Self::Mild,
            2 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    /// One step milder on the Mild/Moderate/Strong scale. Mild stays Mild.
    pub const fn milder(self) -> Self {
        match self {
            Self::Strong => Self::Moderate,
            Self::Moderate | Self::Mild => Self::Mild,
            other => other,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::Complete => "Complete",
            Self::Partial => "Partial",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one dosha check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaAnalysis {
    pub present: bool,
    pub severity: Severity,
    pub explanation: String,
    pub remedies: Vec<String>,
    /// Benefic influences that soften the dosha.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cancellations: Vec<String>,
    /// Planets outside the Kaal Sarp arc.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub breakers: Vec<String>,
    /// Individual afflicting combinations found.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub afflictions: Vec<String>,
}

impl DoshaAnalysis {
    /// Not present; no remedies.
    pub fn absent(explanation: impl Into<String>) -> Self {
        Self {
            present: false,
            severity: Severity::None,
            explanation: explanation.into(),
            remedies: Vec::new(),
            cancellations: Vec::new(),
            breakers: Vec::new(),
            afflictions: Vec::new(),
        }
    }

    /// Present with a severity and its remedy list.
    pub fn present(severity: Severity, explanation: impl Into<String>, remedies: &[&str]) -> Self {
        Self {
            present: true,
            severity,
            explanation: explanation.into(),
            remedies: remedies.iter().map(|r| (*r).to_owned()).collect(),
            ..Self::absent(String::new())
        }
    }

    pub fn with_cancellations(mut self, cancellations: Vec<String>) -> Self {
        self.cancellations = cancellations;
        self
    }

    pub fn with_breakers(mut self, breakers: Vec<String>) -> Self {
        self.breakers = breakers;
        self
    }

    pub fn with_afflictions(mut self, afflictions: Vec<String>) -> Self {
        self.afflictions = afflictions;
        self
    }
}

/// All thirteen dosha results.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaReport {
    pub mangal_dosha: DoshaAnalysis,
    pub shani_dosha: DoshaAnalysis,
    pub kaal_sarp_dosha: DoshaAnalysis,
    pub pitra_dosha: DoshaAnalysis,
    pub graha_dosha: DoshaAnalysis,
    pub kemadruma_dosha: DoshaAnalysis,
    pub guru_chandal_dosha: DoshaAnalysis,
    pub matru_dosha: DoshaAnalysis,
    pub shakata_dosha: DoshaAnalysis,
    pub daridra_dosha: DoshaAnalysis,
    pub paap_kartari_dosha: DoshaAnalysis,
    pub punarphoo_dosha: DoshaAnalysis,
    pub rahu_ketu_dosha: DoshaAnalysis,
}

impl DoshaReport {
    /// Every result with its wire name, in report order.
    pub fn entries(&self) -> [(&'static str, &DoshaAnalysis); 13] {
        [
            ("mangalDosha", &self.mangal_dosha),
            ("shaniDosha", &self.shani_dosha),
            ("kaalSarpDosha", &self.kaal_sarp_dosha),
            ("pitraDosha", &self.pitra_dosha),
            ("grahaDosha", &self.graha_dosha),
            ("kemadrumaDosha", &self.kemadruma_dosha),
            ("guruChandalDosha", &self.guru_chandal_dosha),
            ("matruDosha", &self.matru_dosha),
            ("shakataDosha", &self.shakata_dosha),
            ("daridraDosha", &self.daridra_dosha),
            ("paapKartariDosha", &self.paap_kartari_dosha),
            ("punarphooDosha", &self.punarphoo_dosha),
            ("rahuKetuDosha", &self.rahu_ketu_dosha),
        ]
    }

    /// Names of the doshas found present.
    pub fn present_names(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, d)| d.present)
            .map(|(name, _)| name)
            .collect()
    }
}
