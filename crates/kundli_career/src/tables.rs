//! Static narrative tables for the career engine.

use kundli_base::Graha;

/// One row of the 10th-lord placement table.
#[derive(Debug, Clone, Copy)]
pub struct HouseCareerEntry {
    pub analysis: &'static str,
    pub direction: &'static str,
    pub professions: &'static [&'static str],
}

/// 10th-lord placement → career narrative, indexed by house - 1.
pub const TENTH_LORD_BY_HOUSE: [HouseCareerEntry; 12] = [
    HouseCareerEntry {
        analysis: "10th lord in the 1st house: career is driven by personal initiative and self-made identity.",
        direction: "Self-directed leadership",
        professions: &["Entrepreneur", "Politician", "Independent consultant", "Public figure"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 2nd house: earnings flow through family enterprise, speech and accumulated resources.",
        direction: "Finance and family business",
        professions: &["Banker", "Accountant", "Family business owner", "Speaker"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 3rd house: success comes through communication, courage and short travel.",
        direction: "Communication and media",
        professions: &["Journalist", "Writer", "Marketing professional", "Sales executive"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 4th house: work connects to property, vehicles, education or home comforts.",
        direction: "Property and education",
        professions: &["Real estate agent", "Teacher", "Interior designer", "Agriculturist"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 5th house: creativity, intellect and advisory skills shape the profession.",
        direction: "Creative and advisory work",
        professions: &["Artist", "Investment advisor", "Educator", "Entertainer"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 6th house: service, competition and problem solving bring recognition.",
        direction: "Service and healing",
        professions: &["Doctor", "Lawyer", "Civil servant", "Military officer"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 7th house: partnerships, trade and public dealing define the career.",
        direction: "Partnership and trade",
        professions: &["Business partner", "Diplomat", "Trader", "Consultant"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 8th house: research, hidden knowledge and transformation feature in work.",
        direction: "Research and investigation",
        professions: &["Researcher", "Insurance professional", "Occult practitioner", "Surgeon"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 9th house: fortune supports a career in higher learning, law or dharma.",
        direction: "Teaching and guidance",
        professions: &["Professor", "Judge", "Spiritual teacher", "Publisher"],
    },
    HouseCareerEntry {
        analysis: "10th lord in its own house: a strong professional standing and natural authority at work.",
        direction: "Authority and administration",
        professions: &["Administrator", "Executive", "Government officer", "Manager"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 11th house: large networks and steady gains through the profession.",
        direction: "Networks and gains",
        professions: &["Business networker", "Social entrepreneur", "Fund manager", "Organization leader"],
    },
    HouseCareerEntry {
        analysis: "10th lord in the 12th house: foreign lands, institutions or spiritual settings host the career.",
        direction: "Foreign and institutional work",
        professions: &["Overseas professional", "Hospital staff", "NGO worker", "Import-export trader"],
    },
];

/// Row for a 10th-lord house (1-12).
pub fn tenth_lord_entry(house: u8) -> Option<&'static HouseCareerEntry> {
    TENTH_LORD_BY_HOUSE.get((house as usize).checked_sub(1)?)
}

/// Career fields each graha contributes when dominant.
pub fn career_fields(graha: Graha) -> &'static [&'static str] {
    match graha {
        Graha::Surya => &["Government", "Administration", "Politics"],
        Graha::Chandra => &["Hospitality", "Nursing", "Public relations"],
        Graha::Mangal => &["Engineering", "Defense", "Sports", "Surgery"],
        Graha::Buddh => &["Commerce", "Writing", "Information technology"],
        Graha::Guru => &["Teaching", "Law", "Finance", "Counselling"],
        Graha::Shukra => &["Arts", "Fashion", "Entertainment", "Luxury goods"],
        Graha::Shani => &["Labor management", "Mining", "Judiciary", "Manufacturing"],
        Graha::Rahu => &["Technology", "Foreign trade", "Aviation", "Research"],
        Graha::Ketu => &["Spirituality", "Alternative healing", "Programming"],
    }
}

/// Work style per dominant graha, in priority order; first dominant match wins.
pub const WORK_STYLE_PRIORITY: [(Graha, &str); 9] = [
    (Graha::Surya, "Leadership-oriented; thrives with authority and visibility"),
    (Graha::Shani, "Disciplined and methodical; excels in structured, long-term roles"),
    (Graha::Mangal, "Action-oriented; suits competitive, technical or field roles"),
    (Graha::Guru, "Advisory and ethical; suits guiding and teaching roles"),
    (Graha::Buddh, "Analytical and communicative; suits intellectual, multitasking roles"),
    (Graha::Shukra, "Creative and harmonious; suits aesthetic, client-facing roles"),
    (Graha::Chandra, "Empathetic and adaptable; suits public-facing, caring roles"),
    (Graha::Rahu, "Unconventional and ambitious; suits innovative, cross-border roles"),
    (Graha::Ketu, "Detached and research-minded; suits specialised, solitary roles"),
];

/// Work style when no graha is dominant.
pub const BALANCED_WORK_STYLE: &str = "Balanced; no single planet dominates the professional temperament";

/// What a Saturn co-tenant or dignity token adds to the Saturn reading.
pub fn saturn_token_influence(token: &str) -> Option<&'static str> {
    Some(match token {
        "sun" => "Saturn with Sun: friction with authority, eventual success in government or administration",
        "moon" => "Saturn with Moon: emotional restraint, suits public service and caregiving institutions",
        "mars" => "Saturn with Mars: technical grit, suits engineering, construction and defense",
        "mercury" => "Saturn with Mercury: patient analysis, suits accounting, auditing and data work",
        "jupiter" => "Saturn with Jupiter: steady rise through law, finance or advisory roles",
        "venus" => "Saturn with Venus: disciplined artistry, suits design, architecture and luxury trades",
        "rahu" => "Saturn with Rahu: ambition through technology, foreign or unconventional sectors",
        "ketu" => "Saturn with Ketu: research depth, suits spiritual, technical or investigative work",
        "exalted" => "Exalted Saturn: outstanding endurance and authority built over time",
        "own_sign" => "Saturn in own sign: structured success through persistence",
        "friendly" => "Saturn in a friendly sign: cooperative progress in organised settings",
        "enemy" => "Saturn in an enemy sign: delays and pressure that reward perseverance",
        "debilitated" => "Debilitated Saturn: early struggles and obstacles before stability",
        "ketu_nakshatra" => "Saturn in a Ketu nakshatra: inclination toward research and detachment in work",
        _ => return None,
    })
}

/// Remedies for strengthening the 10th lord.
pub fn tenth_lord_remedies(lord: Option<Graha>) -> Vec<String> {
    let lines: &[&str] = match lord {
        Some(Graha::Surya) => &["Offer water to the rising Sun daily", "Recite Aditya Hridayam on Sundays"],
        Some(Graha::Chandra) => &["Offer milk to Lord Shiva on Mondays", "Wear white on Mondays"],
        Some(Graha::Mangal) => &["Recite Hanuman Chalisa on Tuesdays", "Donate red lentils on Tuesdays"],
        Some(Graha::Buddh) => &["Chant the Budh mantra on Wednesdays", "Feed green grass to cows"],
        Some(Graha::Guru) => &["Chant the Guru mantra on Thursdays", "Donate yellow items to teachers"],
        Some(Graha::Shukra) => &["Chant the Shukra mantra on Fridays", "Donate white sweets on Fridays"],
        Some(Graha::Shani) => &["Light a mustard oil lamp on Saturdays", "Serve the elderly and labourers"],
        Some(Graha::Rahu) => &["Chant the Rahu mantra", "Donate to the underprivileged on Saturdays"],
        Some(Graha::Ketu) => &["Chant the Ketu mantra", "Feed stray dogs"],
        None => &["Strengthen the 10th lord after confirming its placement with an astrologer"],
    };
    lines.iter().map(|s| (*s).to_owned()).collect()
}

/// Saturn remedies, used when Saturn is afflicted.
pub const SATURN_REMEDIES: [&str; 3] = [
    "Chant 'Om Sham Shanicharaya Namah' 108 times on Saturdays",
    "Donate black sesame and mustard oil on Saturdays",
    "Serve workers and the elderly without expectation",
];

/// Remedies given for every chart.
pub const GENERAL_REMEDIES: [&str; 3] = [
    "Keep the workplace clean and organised, especially the north direction",
    "Respect superiors and mentors",
    "Begin important work in favourable muhurta",
];
