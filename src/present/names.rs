//! Display names for regions and locations.

/// Short labels for the region buttons, keyed by hint region name.
const SHORT_NAMES: &[(&str, &str)] = &[
    ("Kokiri Forest", "KF"),
    ("Lost Woods", "LW"),
    ("Sacred Forest Meadow", "SFM"),
    ("Hyrule Field", "HF"),
    ("Lon Lon Ranch", "LLR"),
    ("Market", "MK"),
    ("Temple of Time", "ToT"),
    ("Hyrule Castle", "HC"),
    ("Outside Ganon's Castle", "OGC"),
    ("Kakariko Village", "Kak"),
    ("Graveyard", "GY"),
    ("Death Mountain Trail", "DMT"),
    ("Goron City", "GC"),
    ("Death Mountain Crater", "DMC"),
    ("Zora's River", "ZR"),
    ("Zora's Domain", "ZD"),
    ("Zora's Fountain", "ZF"),
    ("Lake Hylia", "LH"),
    ("Gerudo Valley", "GV"),
    ("Gerudo's Fortress", "GF"),
    ("Haunted Wasteland", "HW"),
    ("Desert Colossus", "Col"),
    ("Deku Tree", "Deku"),
    ("Dodongo's Cavern", "DC"),
    ("Jabu Jabu's Belly", "Jabu"),
    ("Forest Temple", "Forest"),
    ("Fire Temple", "Fire"),
    ("Water Temple", "Water"),
    ("Shadow Temple", "Shadow"),
    ("Spirit Temple", "Spirit"),
    ("Bottom of the Well", "BotW"),
    ("Ice Cavern", "Ice"),
    ("Gerudo Training Ground", "GTG"),
    ("Ganon's Castle", "Ganon"),
];

/// Uppercased short label for a region.
///
/// Regions missing from the table show their full name, uppercased.
#[must_use]
pub fn short_name(region: &str) -> String {
    SHORT_NAMES
        .iter()
        .find(|(name, _)| *name == region)
        .map_or(region, |&(_, short)| short)
        .to_uppercase()
}

/// Drop a leading `"<region> "` from a location name.
///
/// Repeated prefixes are all removed, so applying this twice gives the same
/// result as applying it once.
#[must_use]
pub fn strip_region_prefix<'a>(location: &'a str, region: &str) -> &'a str {
    let mut name = location;
    while let Some(rest) = name
        .strip_prefix(region)
        .and_then(|rest| rest.strip_prefix(' '))
    {
        name = rest;
    }
    name
}
