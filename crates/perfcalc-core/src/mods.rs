use std::fmt;

use bitflags::bitflags;

use crate::error::{PerfError, Result};
use crate::ruleset::Ruleset;

bitflags! {
    /// Legacy mod bits as used by the osu! API (`enabled_mods`).
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Mods: u32 {
        const NOFAIL       = 1 << 0;
        const EASY         = 1 << 1;
        const TOUCHSCREEN  = 1 << 2;
        const HIDDEN       = 1 << 3;
        const HARDROCK     = 1 << 4;
        const SUDDENDEATH  = 1 << 5;
        const DOUBLETIME   = 1 << 6;
        const RELAX        = 1 << 7;
        const HALFTIME     = 1 << 8;
        const NIGHTCORE    = 1 << 9;
        const FLASHLIGHT   = 1 << 10;
        const AUTOPLAY     = 1 << 11;
        const SPUNOUT      = 1 << 12;
        const AUTOPILOT    = 1 << 13;
        const PERFECT      = 1 << 14;
        const KEY4         = 1 << 15;
        const KEY5         = 1 << 16;
        const KEY6         = 1 << 17;
        const KEY7         = 1 << 18;
        const KEY8         = 1 << 19;
        const FADEIN       = 1 << 20;
        const RANDOM       = 1 << 21;
        const CINEMA       = 1 << 22;
        const TARGET       = 1 << 23;
        const KEY9         = 1 << 24;
        const KEYCOOP      = 1 << 25;
        const KEY1         = 1 << 26;
        const KEY3         = 1 << 27;
        const KEY2         = 1 << 28;
        const SCOREV2      = 1 << 29;
        const MIRROR       = 1 << 30;
    }
}

const OSU: u8 = 1 << 0;
const TAIKO: u8 = 1 << 1;
const CATCH: u8 = 1 << 2;
const MANIA: u8 = 1 << 3;
const ALL: u8 = OSU | TAIKO | CATCH | MANIA;

/// Acronym table in display order, with the rulesets each mod exists in.
const TABLE: &[(Mods, &str, u8)] = &[
    (Mods::EASY, "EZ", ALL),
    (Mods::NOFAIL, "NF", ALL),
    (Mods::HALFTIME, "HT", ALL),
    (Mods::HARDROCK, "HR", ALL),
    (Mods::SUDDENDEATH, "SD", ALL),
    (Mods::PERFECT, "PF", ALL),
    (Mods::DOUBLETIME, "DT", ALL),
    (Mods::NIGHTCORE, "NC", ALL),
    (Mods::HIDDEN, "HD", ALL),
    (Mods::FADEIN, "FI", MANIA),
    (Mods::FLASHLIGHT, "FL", ALL),
    (Mods::RELAX, "RX", OSU | TAIKO | CATCH),
    (Mods::AUTOPILOT, "AP", OSU),
    (Mods::SPUNOUT, "SO", OSU),
    (Mods::TOUCHSCREEN, "TD", OSU),
    (Mods::TARGET, "TP", OSU),
    (Mods::RANDOM, "RD", MANIA),
    (Mods::MIRROR, "MR", MANIA),
    (Mods::KEY1, "1K", MANIA),
    (Mods::KEY2, "2K", MANIA),
    (Mods::KEY3, "3K", MANIA),
    (Mods::KEY4, "4K", MANIA),
    (Mods::KEY5, "5K", MANIA),
    (Mods::KEY6, "6K", MANIA),
    (Mods::KEY7, "7K", MANIA),
    (Mods::KEY8, "8K", MANIA),
    (Mods::KEY9, "9K", MANIA),
    (Mods::KEYCOOP, "DS", MANIA),
    (Mods::SCOREV2, "V2", ALL),
    (Mods::AUTOPLAY, "AT", ALL),
    (Mods::CINEMA, "CN", ALL),
];

fn ruleset_bit(ruleset: Ruleset) -> u8 {
    match ruleset {
        Ruleset::Osu => OSU,
        Ruleset::Taiko => TAIKO,
        Ruleset::Catch => CATCH,
        Ruleset::Mania => MANIA,
    }
}

fn lookup(raw: &str) -> Result<(Mods, &'static str, u8)> {
    let raw = raw.trim();
    TABLE
        .iter()
        .find(|(_, acronym, _)| acronym.eq_ignore_ascii_case(raw))
        .copied()
        .ok_or_else(|| PerfError::InvalidMod(raw.to_owned()))
}

impl Mods {
    /// Resolve acronyms case-insensitively. Unknown acronyms and mods that do
    /// not exist in `ruleset` are argument errors.
    pub fn from_acronyms<S: AsRef<str>>(ruleset: Ruleset, acronyms: &[S]) -> Result<Self> {
        let mut mods = Mods::empty();

        for raw in acronyms {
            let (flag, acronym, rulesets) = lookup(raw.as_ref())?;

            if rulesets & ruleset_bit(ruleset) == 0 {
                return Err(PerfError::ModNotInRuleset {
                    acronym: acronym.to_owned(),
                    ruleset,
                });
            }

            mods |= flag.with_implied();
        }

        Ok(mods)
    }

    /// Check that every acronym names some mod, in any ruleset.
    pub fn ensure_known<S: AsRef<str>>(acronyms: &[S]) -> Result<()> {
        for raw in acronyms {
            lookup(raw.as_ref())?;
        }
        Ok(())
    }

    /// Decode API bits, dropping any bit the given ruleset does not know.
    pub fn from_legacy_bits(ruleset: Ruleset, bits: u32) -> Self {
        let mods = Mods::from_bits_truncate(bits);
        let bit = ruleset_bit(ruleset);

        TABLE
            .iter()
            .filter(|(flag, _, rulesets)| rulesets & bit != 0 && mods.contains(*flag))
            .fold(Mods::empty(), |acc, (flag, _, _)| acc | *flag)
    }

    /// NC carries DT and PF carries SD in the legacy encoding.
    fn with_implied(self) -> Self {
        let mut mods = self;
        if mods.contains(Mods::NIGHTCORE) {
            mods |= Mods::DOUBLETIME;
        }
        if mods.contains(Mods::PERFECT) {
            mods |= Mods::SUDDENDEATH;
        }
        mods
    }

    /// Acronyms in display order, without the mods implied by NC/PF.
    pub fn acronyms(self) -> Vec<&'static str> {
        let mut shown = self;
        if shown.contains(Mods::NIGHTCORE) {
            shown.remove(Mods::DOUBLETIME);
        }
        if shown.contains(Mods::PERFECT) {
            shown.remove(Mods::SUDDENDEATH);
        }

        TABLE
            .iter()
            .filter(|(flag, _, _)| shown.contains(*flag))
            .map(|(_, acronym, _)| *acronym)
            .collect()
    }
}

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("None");
        }
        f.write_str(&self.acronyms().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nightcore_implies_doubletime_bit() {
        let mods = Mods::from_acronyms(Ruleset::Osu, &["NC"]).unwrap();
        assert_eq!(mods.bits(), 576);
        assert_eq!(mods.acronyms(), ["NC"]);
    }

    #[test]
    fn known_check_ignores_ruleset() {
        assert!(Mods::ensure_known(&["4k", "HD"]).is_ok());
        assert!(matches!(
            Mods::ensure_known(&["HD", "ZZ"]),
            Err(PerfError::InvalidMod(m)) if m == "ZZ"
        ));
    }

    #[test]
    fn empty_set_displays_none() {
        assert_eq!(Mods::empty().to_string(), "None");
    }
}
