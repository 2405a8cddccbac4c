//! Behavioural properties of every generator: determinism, purity, continuity,
//! bounded output, concurrency and configuration parsing.

use std::thread;

use osn_core::{
    Dimension, Mode, NoiseError, NoiseGenerator, NoiseSettings, NoiseSource2, NoiseSource3,
    NoiseSource4,
};

/// Evaluate `generator` at the first `dimension` coordinates of `point`.
fn sample(generator: &NoiseGenerator, [x, y, z, w]: [f64; 4]) -> f64 {
    match generator {
        NoiseGenerator::Two(noise) => noise.evaluate(x, y),
        NoiseGenerator::Three(noise) => noise.evaluate(x, y, z),
        NoiseGenerator::Four(noise) => noise.evaluate(x, y, z, w),
    }
}

/// A deterministic spread of sample points, including negative coordinates and
/// points far from the origin.
fn sample_points() -> impl Iterator<Item = [f64; 4]> {
    (0..500).map(|i| {
        let t = f64::from(i);
        [
            t * 0.731 - 180.0,
            (t * 1.37).sin() * 60.0,
            t * -0.193 + 11.5,
            (t * 0.41).cos() * 250.0 + t,
        ]
    })
}

#[test]
fn equal_seed_and_mode_give_equal_output() {
    for mode in Mode::ALL {
        let a = NoiseGenerator::new(mode, 2024);
        let b = NoiseGenerator::new(mode, 2024);
        for point in sample_points() {
            assert_eq!(sample(&a, point).to_bits(), sample(&b, point).to_bits(), "{mode}");
        }
    }
}

#[test]
fn repeated_calls_are_pure() {
    for mode in Mode::ALL {
        let generator = NoiseGenerator::new(mode, 9);
        let first: Vec<u64> = sample_points().map(|p| sample(&generator, p).to_bits()).collect();
        let second: Vec<u64> = sample_points().map(|p| sample(&generator, p).to_bits()).collect();
        assert_eq!(first, second, "{mode}");
    }
}

#[test]
fn output_stays_in_range() {
    for mode in Mode::ALL {
        let generator = NoiseGenerator::new(mode, 31337);
        let mut max = 0.0f64;
        for i in 0..40 {
            for j in 0..40 {
                let (a, b) = (f64::from(i) * 0.137, f64::from(j) * 0.211);
                let value = sample(&generator, [a, b, a - b, a * 0.5 + b]);
                assert!(value.is_finite(), "{mode}");
                max = max.max(value.abs());
            }
        }
        assert!(max < 2.0, "{mode}: |value| reached {max}");
        assert!(max > 0.05, "{mode}: field looks flat ({max})");
    }
}

#[test]
fn output_changes_smoothly_along_a_line() {
    // Neighbouring samples a tiny step apart must stay close. Exact boundary
    // crossings are checked by the evaluators' unit tests.
    const STEP: f64 = 1e-7;
    const BOUND: f64 = 1e-5;

    for mode in Mode::ALL {
        let generator = NoiseGenerator::new(mode, 5);
        let direction = [0.8191, -0.5736, 0.3907, 0.9205];
        for i in 0..20_000 {
            let t = f64::from(i) * 0.00113 - 9.0;
            let at = |t: f64| direction.map(|d| d * t + 0.25);
            let here = sample(&generator, at(t));
            let next = sample(&generator, at(t + STEP));
            assert!(
                (here - next).abs() < BOUND,
                "{mode} jumps at t = {t}: {here} -> {next}"
            );
        }
    }
}

#[test]
fn nan_input_propagates() {
    for mode in Mode::ALL {
        let generator = NoiseGenerator::new(mode, 0);
        assert!(sample(&generator, [f64::NAN, 0.5, 0.5, 0.5]).is_nan(), "{mode}");
    }
}

#[test]
fn shared_generator_is_consistent_across_threads() {
    for mode in Mode::ALL {
        let generator = NoiseGenerator::new(mode, 77);
        let expected: Vec<u64> = sample_points().map(|p| sample(&generator, p).to_bits()).collect();

        thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        sample_points()
                            .map(|p| sample(&generator, p).to_bits())
                            .collect::<Vec<u64>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().expect("worker panicked"), expected, "{mode}");
            }
        });
    }
}

#[test]
fn settings_parse_from_json() {
    let settings: NoiseSettings =
        serde_json::from_str(r#"{ "mode": "xz_before_y_3d", "seed": 12345 }"#)
            .expect("valid settings");
    assert_eq!(settings, NoiseSettings::new(Mode::XZBeforeY3D, 12345));

    let generator = settings.build();
    assert_eq!(generator.dimension(), Dimension::Three);
    assert_eq!(generator.seed(), 12345);

    let defaults: NoiseSettings = serde_json::from_str("{}").expect("empty settings");
    assert_eq!(defaults, NoiseSettings::default());
}

#[test]
fn settings_reject_unknown_input() {
    assert!(serde_json::from_str::<NoiseSettings>(r#"{ "mode": "classic_5d" }"#).is_err());
    assert!(serde_json::from_str::<NoiseSettings>(r#"{ "seed": 1, "octaves": 4 }"#).is_err());
    assert!(serde_json::from_str::<NoiseSettings>(r#"{ "seed": -1 }"#).is_err());
}

#[test]
fn settings_round_trip_mode_names() {
    for mode in Mode::ALL {
        let json = serde_json::to_string(&NoiseSettings::new(mode, 1)).expect("serializable");
        assert!(json.contains(mode.name()), "{json}");
    }
}

#[test]
fn dimension_mismatch_is_reported_before_evaluation() {
    let settings = NoiseSettings::new(Mode::XBeforeY2D, 3);
    let err = settings.build_4d().expect_err("2D mode built as 4D");
    assert_eq!(
        err,
        NoiseError::DimensionMismatch {
            mode: Mode::XBeforeY2D,
            expected: Dimension::Four,
            found: Dimension::Two,
        }
    );
    assert!(settings.build().into_3d().is_err());
    assert!(settings.build_2d().is_ok());
}
