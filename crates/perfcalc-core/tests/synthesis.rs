use perfcalc_core::{BeatmapTotals, HitStatistics, Ruleset, SimulationTarget};

fn objects(n: u32) -> BeatmapTotals {
    BeatmapTotals {
        max_combo: n,
        objects: n,
        ..Default::default()
    }
}

fn acc(accuracy: f64) -> SimulationTarget {
    SimulationTarget {
        accuracy,
        ..Default::default()
    }
}

#[test]
fn osu_full_accuracy_is_all_greats() {
    let stats = Ruleset::Osu.synthesize_statistics(&objects(500), &acc(1.0));
    assert_eq!(stats.great, 500);
    assert_eq!(stats.total(), 500);
    assert_eq!(Ruleset::Osu.accuracy(&stats), 1.0);
}

#[test]
fn osu_synthesis_lands_near_target() {
    let totals = objects(1000);
    for target in [0.99, 0.97, 0.95, 0.9, 0.8] {
        let stats = Ruleset::Osu.synthesize_statistics(&totals, &acc(target));
        assert_eq!(stats.total(), 1000);
        let got = Ruleset::Osu.accuracy(&stats);
        assert!((got - target).abs() < 1e-3, "target={target} got={got}");
    }
}

#[test]
fn osu_small_map_never_goes_negative() {
    // 95% on ten objects cannot be hit exactly; nine greats and one good is closest.
    let stats = Ruleset::Osu.synthesize_statistics(&objects(10), &acc(0.95));
    assert_eq!(
        stats,
        HitStatistics {
            great: 9,
            good: 1,
            ..Default::default()
        }
    );
}

#[test]
fn osu_explicit_counts_take_precedence() {
    let target = SimulationTarget {
        accuracy: 0.5,
        misses: 3,
        goods: Some(10),
        mehs: Some(2),
    };
    let stats = Ruleset::Osu.synthesize_statistics(&objects(100), &target);
    assert_eq!(stats.great, 85);
    assert_eq!(stats.good, 10);
    assert_eq!(stats.meh, 2);
    assert_eq!(stats.miss, 3);
}

#[test]
fn osu_misses_are_subtracted() {
    let target = SimulationTarget {
        accuracy: 1.0,
        misses: 5,
        ..Default::default()
    };
    let stats = Ruleset::Osu.synthesize_statistics(&objects(100), &target);
    assert_eq!(stats.miss, 5);
    assert_eq!(stats.great, 95);
    assert_eq!(stats.total(), 100);
}

#[test]
fn taiko_synthesis_lands_near_target() {
    let stats = Ruleset::Taiko.synthesize_statistics(&objects(1000), &acc(0.96));
    assert_eq!(stats.great, 920);
    assert_eq!(stats.good, 80);
    assert!((Ruleset::Taiko.accuracy(&stats) - 0.96).abs() < 1e-9);
}

#[test]
fn catch_counts_cover_every_object() {
    let totals = BeatmapTotals {
        max_combo: 600,
        objects: 800,
        fruits: 500,
        droplets: 100,
        tiny_droplets: 200,
    };
    let target = SimulationTarget {
        accuracy: 0.98,
        misses: 2,
        ..Default::default()
    };

    let stats = Ruleset::Catch.synthesize_statistics(&totals, &target);
    assert_eq!(stats.great, 500, "misses land on droplets first");
    assert_eq!(stats.ok, 98);
    assert_eq!(stats.miss, 2);
    assert_eq!(stats.meh + stats.good, 200);
    assert_eq!(stats.total(), 800);

    let got = Ruleset::Catch.accuracy(&stats);
    assert!((got - 0.98).abs() < 2e-3, "got={got}");
}

#[test]
fn mania_synthesis_lands_near_target() {
    let totals = objects(2000);
    for target in [1.0, 0.985, 0.95, 0.9] {
        let stats = Ruleset::Mania.synthesize_statistics(&totals, &acc(target));
        assert_eq!(stats.total(), 2000);
        let got = Ruleset::Mania.accuracy(&stats);
        assert!((got - target).abs() < 1e-3, "target={target} got={got}");
    }
}

#[test]
fn legacy_mapping_roundtrips_per_ruleset() {
    let stats = HitStatistics {
        perfect: 7,
        great: 100,
        good: 5,
        ok: 4,
        meh: 3,
        miss: 2,
    };

    for ruleset in [Ruleset::Catch, Ruleset::Mania] {
        assert_eq!(ruleset.from_legacy(&ruleset.to_legacy(&stats)), stats);
    }

    let counts = Ruleset::Osu.to_legacy(&stats);
    assert_eq!((counts.n300, counts.n100, counts.n50, counts.misses), (100, 5, 3, 2));
}

#[test]
fn ruleset_ids_outside_range_are_rejected() {
    assert_eq!(Ruleset::from_id(2).unwrap(), Ruleset::Catch);
    assert!(Ruleset::from_id(4).is_err());
    assert!(Ruleset::from_id(-1).is_err());
}
