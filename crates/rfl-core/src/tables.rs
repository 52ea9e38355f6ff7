//! # Trait Tables
//!
//! The fixed name tables shared with the RingsForLoot contract and the Loot
//! contract's `getRing`. Order is significant: ring fields are 1-based
//! indices into these slices, and the table lengths are the moduli used by
//! the generator and the radixes used by the codec. Editing any entry
//! breaks parity with on-chain data.

/// Base ring materials. Field `material` indexes this table.
pub const MATERIALS: &[&str] = &[
    "Gold Ring",
    "Silver Ring",
    "Bronze Ring",
    "Platinum Ring",
    "Titanium Ring",
];

/// "of X" suffixes. Field `suffix` indexes this table.
pub const SUFFIXES: &[&str] = &[
    "of Power",
    "of Giants",
    "of Titans",
    "of Skill",
    "of Perfection",
    "of Brilliance",
    "of Enlightenment",
    "of Protection",
    "of Anger",
    "of Rage",
    "of Fury",
    "of Vitriol",
    "of the Fox",
    "of Detection",
    "of Reflection",
    "of the Twins",
];

/// First half of the two-part proper name. Field `name_prefix` indexes this table.
pub const NAME_PREFIXES: &[&str] = &[
    "Agony", "Apocalypse", "Armageddon", "Beast", "Behemoth", "Blight",
    "Blood", "Bramble", "Brimstone", "Brood", "Carrion", "Cataclysm",
    "Chimeric", "Corpse", "Corruption", "Damnation", "Death", "Demon",
    "Dire", "Dragon", "Dread", "Doom", "Dusk", "Eagle",
    "Empyrean", "Fate", "Foe", "Gale", "Ghoul", "Gloom",
    "Glyph", "Golem", "Grim", "Hate", "Havoc", "Honour",
    "Horror", "Hypnotic", "Kraken", "Loath", "Maelstrom", "Mind",
    "Miracle", "Morbid", "Oblivion", "Onslaught", "Pain", "Pandemonium",
    "Phoenix", "Plague", "Rage", "Rapture", "Rune", "Skull",
    "Sol", "Soul", "Sorrow", "Spirit", "Storm", "Tempest",
    "Torment", "Vengeance", "Victory", "Viper", "Vortex", "Woe",
    "Wrath", "Light's", "Shimmering",
];

/// Second half of the two-part proper name. Field `name_suffix` indexes this table.
pub const NAME_SUFFIXES: &[&str] = &[
    "Bane", "Root", "Bite", "Song", "Roar", "Grasp",
    "Instrument", "Glow", "Bender", "Shadow", "Whisper", "Shout",
    "Growl", "Tear", "Peak", "Form", "Sun", "Moon",
];

/// Look up a 1-based table index. Returns `None` for 0 and for indices past
/// the end of the table.
pub fn entry(table: &'static [&'static str], index: u32) -> Option<&'static str> {
    let i = usize::try_from(index).ok()?.checked_sub(1)?;
    table.get(i).copied()
}

/// Find the 1-based index of an exact table entry.
pub fn position(table: &[&str], value: &str) -> Option<u32> {
    table
        .iter()
        .position(|e| *e == value)
        .and_then(|i| u32::try_from(i + 1).ok())
}

/// Whether `index` is a valid 1-based index into `table`.
pub fn in_range(table: &[&str], index: u32) -> bool {
    index > 0 && usize::try_from(index).map_or(false, |i| i <= table.len())
}
