//! Remedy lists attached to present doshas.

pub const MANGAL_REMEDIES: [&str; 4] = [
    "Recite Hanuman Chalisa on Tuesdays",
    "Perform Kumbh Vivah or Mangal Shanti puja before marriage",
    "Donate red lentils and jaggery on Tuesdays",
    "Match charts with a partner who also carries Mangal dosha",
];

pub const SHANI_REMEDIES: [&str; 3] = [
    "Chant 'Om Sham Shanicharaya Namah' on Saturdays",
    "Light a mustard oil lamp under a peepal tree on Saturdays",
    "Donate black sesame, iron or dark cloth to the needy",
];

pub const KAAL_SARP_REMEDIES: [&str; 3] = [
    "Perform Kaal Sarp Dosh Nivaran puja at Trimbakeshwar or a Shiva temple",
    "Chant the Maha Mrityunjaya mantra daily",
    "Offer milk to a Shiva lingam on Nag Panchami",
];

pub const PITRA_REMEDIES: [&str; 3] = [
    "Perform Shraddha and Tarpan for ancestors during Pitru Paksha",
    "Feed Brahmins, cows and crows on Amavasya",
    "Offer water mixed with black sesame to the Sun",
];

pub const GRAHA_REMEDIES: [&str; 2] = [
    "Perform Navagraha Shanti puja",
    "Chant the mantra of each afflicted planet on its weekday",
];

pub const KEMADRUMA_REMEDIES: [&str; 3] = [
    "Worship Lord Shiva and offer milk on Mondays",
    "Wear a pearl or moonstone after consultation",
    "Chant the Chandra mantra 'Om Som Somaya Namah'",
];

pub const GURU_CHANDAL_REMEDIES: [&str; 3] = [
    "Chant the Guru mantra 'Om Brim Brihaspataye Namah' on Thursdays",
    "Respect teachers and elders; donate yellow items on Thursdays",
    "Perform Guru Chandal Dosh Nivaran puja",
];
