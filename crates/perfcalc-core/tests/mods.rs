use perfcalc_core::{Mods, PerfError, Ruleset};

#[test]
fn acronyms_resolve_case_insensitively() {
    let upper = Mods::from_acronyms(Ruleset::Osu, &["HD", "DT"]).unwrap();
    let lower = Mods::from_acronyms(Ruleset::Osu, &["hd", "dt"]).unwrap();
    let mixed = Mods::from_acronyms(Ruleset::Osu, &["Hd", "dT"]).unwrap();

    assert_eq!(upper, lower);
    assert_eq!(upper, mixed);
    assert_eq!(upper, Mods::HIDDEN | Mods::DOUBLETIME);
}

#[test]
fn order_does_not_matter() {
    let a = Mods::from_acronyms(Ruleset::Osu, &["HR", "HD"]).unwrap();
    let b = Mods::from_acronyms(Ruleset::Osu, &["HD", "HR"]).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.acronyms(), ["HR", "HD"]);
}

#[test]
fn unknown_acronym_is_rejected() {
    let err = Mods::from_acronyms(Ruleset::Osu, &["HD", "XX"]).unwrap_err();
    assert!(matches!(err, PerfError::InvalidMod(ref m) if m == "XX"), "{err}");
}

#[test]
fn mod_outside_ruleset_is_rejected() {
    let err = Mods::from_acronyms(Ruleset::Taiko, &["4K"]).unwrap_err();
    assert!(matches!(err, PerfError::ModNotInRuleset { .. }), "{err}");

    assert!(Mods::from_acronyms(Ruleset::Mania, &["4k"]).is_ok());
}

#[test]
fn legacy_bits_drop_implied_mods_from_display() {
    // HD + DT + NC
    let mods = Mods::from_legacy_bits(Ruleset::Osu, 8 | 64 | 512);
    assert_eq!(mods.acronyms(), ["NC", "HD"]);
    assert_eq!(mods.to_string(), "NC, HD");
}

#[test]
fn legacy_bits_ignore_other_rulesets() {
    // HD + 4K read as osu!
    let mods = Mods::from_legacy_bits(Ruleset::Osu, 8 | (1 << 15));
    assert_eq!(mods, Mods::HIDDEN);
}
