//! Mean-distance behaviour over small hand-checked datasets.

mod support;

use chargeplan_core::{
    CancellationToken, DistanceError, DistanceProfile, EARTH_RADIUS_KM, mean_distances,
    mean_distances_cancellable,
};
use rstest::rstest;
use std::f64::consts::PI;
use support::{dataset, site};

const ONE_DEGREE_KM: f64 = EARTH_RADIUS_KM * PI / 180.0;
const TOLERANCE_KM: f64 = 1e-6;

#[rstest]
fn triangle_means_match_hand_computation() {
    let sites = vec![
        site("A", 0.0, 0.0, 10.0),
        site("B", 0.0, 1.0, 10.0),
        site("C", 1.0, 0.0, 10.0),
    ];
    let means = mean_distances(&sites);

    // A sits one degree from both B and C.
    assert!((means[0] - ONE_DEGREE_KM).abs() < TOLERANCE_KM, "got {}", means[0]);
    // B and C are mirror images across the diagonal.
    assert!((means[1] - means[2]).abs() < TOLERANCE_KM);
    assert!(means[1] > means[0]);
}

#[rstest]
#[case::single(1)]
#[case::pair(2)]
#[case::five(5)]
fn co_located_sites_have_zero_mean_distance(#[case] count: usize) {
    let sites: Vec<_> = (0..count)
        .map(|i| site(&format!("S{i}"), 51.5, -0.12, 1.0))
        .collect();
    assert_eq!(mean_distances(&sites), vec![0.0; count]);
}

#[rstest]
fn profile_matches_free_function() {
    let sites = vec![
        site("Leeds", 53.8008, -1.5491, 1.0),
        site("York", 53.9590, -1.0815, 1.0),
        site("Hull", 53.7676, -0.3274, 1.0),
    ];
    let expected = mean_distances(&sites);
    let profile = DistanceProfile::compute(&dataset(sites));

    assert_eq!(profile.mean_distances(), expected.as_slice());
    assert_eq!(profile.len(), 3);
    assert_eq!(profile.get(3), None);
}

#[rstest]
fn cancelled_profile_reports_progress() {
    let token = CancellationToken::new();
    token.cancel();
    let data = dataset(vec![site("A", 0.0, 0.0, 1.0), site("B", 1.0, 1.0, 1.0)]);

    let err = DistanceProfile::compute_cancellable(&data, &token)
        .expect_err("cancelled token must abort");
    assert_eq!(
        err,
        DistanceError::Cancelled {
            completed_rows: 0,
            total_rows: 2,
        }
    );
}

#[rstest]
fn uncancelled_free_function_matches_plain_means() {
    let sites = vec![site("A", 10.0, 10.0, 1.0), site("B", -10.0, -10.0, 1.0)];
    let token = CancellationToken::new();
    let means = mean_distances_cancellable(&sites, &token).expect("not cancelled");
    assert_eq!(means, mean_distances(&sites));
}
