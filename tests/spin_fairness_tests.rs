//! Statistische Gleichverteilung der Lande-Segmente über viele Spins.

use gluecksrad::SpinController;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;

const DURATION: f32 = 4.0;

/// Simuliert eine komplette Session: Spin starten, bis zum Ende ticken,
/// Rotation am Spin-Ende in [0, 2π) falten (wie der Spin-Handler).
fn run_spins(seed: u64, option_count: usize, spins: usize) -> Vec<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut controller = SpinController::new();
    let mut rotation = 0.0f32;
    let mut now = 0.0f64;
    let mut histogram = vec![0usize; option_count];

    for _ in 0..spins {
        let job = *controller
            .request_spin(&mut rng, option_count, rotation, now, DURATION)
            .expect("Spin sollte starten");

        let tick = controller
            .tick(now + f64::from(DURATION))
            .expect("Abschluss-Tick erwartet");
        assert!(tick.done);
        assert_eq!(tick.rotation, job.target_angle);

        histogram[job.target_index] += 1;
        rotation = tick.rotation.rem_euclid(TAU);
        now += f64::from(DURATION) + 1.0;
    }

    histogram
}

#[test]
fn test_landing_segments_are_uniform_over_many_spins() {
    let option_count = 6;
    let spins = 6000;
    let histogram = run_spins(42, option_count, spins);

    let expected = spins / option_count;
    // ±15 % Toleranz: weit außerhalb jeder plausiblen Schwankung bei
    // echter Gleichverteilung (σ ≈ 29 bei n=6000, p=1/6).
    let tolerance = expected * 15 / 100;

    for (index, &count) in histogram.iter().enumerate() {
        assert!(
            count.abs_diff(expected) <= tolerance,
            "Segment {index}: {count} Treffer, erwartet {expected} ± {tolerance}"
        );
    }
}

#[test]
fn test_uniformity_is_independent_of_list_size() {
    for &option_count in &[2usize, 3, 8, 12] {
        let spins = option_count * 800;
        let histogram = run_spins(7, option_count, spins);

        let expected = spins / option_count;
        let tolerance = expected * 20 / 100;

        for (index, &count) in histogram.iter().enumerate() {
            assert!(
                count.abs_diff(expected) <= tolerance,
                "n={option_count}, Segment {index}: {count} Treffer, erwartet {expected} ± {tolerance}"
            );
        }
    }
}

#[test]
fn test_every_segment_is_reachable() {
    let histogram = run_spins(1234, 5, 500);
    for (index, &count) in histogram.iter().enumerate() {
        assert!(count > 0, "Segment {index} wurde nie getroffen");
    }
}
