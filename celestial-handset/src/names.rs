//! Display strings for numeric catalog codes.

/// The 88 IAU constellations in alphabetical order; the index is the code.
pub const CONSTELLATIONS: [&str; 88] = [
    "Andromeda",
    "Antlia",
    "Apus",
    "Aquarius",
    "Aquila",
    "Ara",
    "Aries",
    "Auriga",
    "Bootes",
    "Caelum",
    "Camelopardalis",
    "Cancer",
    "Canes Venatici",
    "Canis Major",
    "Canis Minor",
    "Capricornus",
    "Carina",
    "Cassiopeia",
    "Centaurus",
    "Cepheus",
    "Cetus",
    "Chamaeleon",
    "Circinus",
    "Columba",
    "Coma Berenices",
    "Corona Australis",
    "Corona Borealis",
    "Corvus",
    "Crater",
    "Crux",
    "Cygnus",
    "Delphinus",
    "Dorado",
    "Draco",
    "Equuleus",
    "Eridanus",
    "Fornax",
    "Gemini",
    "Grus",
    "Hercules",
    "Horologium",
    "Hydra",
    "Hydrus",
    "Indus",
    "Lacerta",
    "Leo",
    "Leo Minor",
    "Lepus",
    "Libra",
    "Lupus",
    "Lynx",
    "Lyra",
    "Mensa",
    "Microscopium",
    "Monoceros",
    "Musca",
    "Norma",
    "Octans",
    "Ophiuchus",
    "Orion",
    "Pavo",
    "Pegasus",
    "Perseus",
    "Phoenix",
    "Pictor",
    "Pisces",
    "Piscis Austrinus",
    "Puppis",
    "Pyxis",
    "Reticulum",
    "Sagitta",
    "Sagittarius",
    "Scorpius",
    "Sculptor",
    "Scutum",
    "Serpens",
    "Sextans",
    "Taurus",
    "Telescopium",
    "Triangulum",
    "Triangulum Australe",
    "Tucana",
    "Ursa Major",
    "Ursa Minor",
    "Vela",
    "Virgo",
    "Volans",
    "Vulpecula",
];

/// Object-type names; code 2 is the stellar type.
pub const OBJECT_TYPES: [&str; 21] = [
    "Galaxy",
    "Open Cluster",
    "Star",
    "Double Star",
    "Other",
    "Galaxy Pair",
    "Galaxy Triplet",
    "Galaxy Group",
    "Globular Cluster",
    "Planetary Nebula",
    "Nebula",
    "Hii Region",
    "Cluster+Nebula",
    "Asterism",
    "Reflectn Nebula",
    "SuperNova Rmnnt",
    "Emission Nebula",
    "Non Existent",
    "Nova",
    "Duplicate",
    "Dark Nebula",
];

/// Bayer letters α..ω as three-letter abbreviations.
pub const GREEK_LETTERS: [&str; 24] = [
    "Alp", "Bet", "Gam", "Del", "Eps", "Zet", "Eta", "The", "Iot", "Kap", "Lam", "Mu", "Nu",
    "Xi", "Omi", "Pi", "Rho", "Sig", "Tau", "Ups", "Phi", "Chi", "Psi", "Ome",
];

/// Semicolon separating entries of the name and sub-id blobs.
pub const ELEMENT_DELIMITER: char = ';';

fn lookup(table: &'static [&'static str], code: i32) -> &'static str {
    usize::try_from(code)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or("")
}

pub fn constellation_code_to_str(code: i32) -> &'static str {
    lookup(&CONSTELLATIONS, code)
}

pub fn object_type_code_to_str(code: i32) -> &'static str {
    lookup(&OBJECT_TYPES, code)
}

/// Returns the `element`-th (0-based) entry of a `;`-delimited blob, or "".
pub fn get_element_from_string(data: &str, element: usize) -> &str {
    data.split(ELEMENT_DELIMITER).nth(element).unwrap_or("")
}
