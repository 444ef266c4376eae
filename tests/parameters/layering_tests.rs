//! Integration tests for the layering derivations

use approx::assert_relative_eq;
use swparam_rs::parameters::guards::{check_depth_factor, check_wavelengths};
use swparam_rs::parameters::layering::{
    depth_ftl, depth_ln_depth, depth_ln_thickness, depth_lr, LayeringInputs,
    HALF_SPACE_THICKNESS,
};
use swparam_rs::SwParamError;

#[test]
fn test_wavelength_swap_is_tolerated() {
    let checked = check_wavelengths(30.0, 1.0).unwrap();
    assert_eq!(checked.value, (1.0, 30.0));
    assert_eq!(checked.advisories.len(), 1);
}

#[test]
fn test_depth_factor_clamp() {
    let checked = check_depth_factor(1.0).unwrap();
    assert_eq!(checked.value, 2.0);
    assert_eq!(checked.advisories.len(), 1);

    let checked = check_depth_factor(5.0).unwrap();
    assert_eq!(checked.value, 5.0);
    assert!(checked.is_clean());
}

#[test]
fn test_ln_thickness_partition() {
    let extents = depth_ln_thickness(1.0, 30.0, 3, 2.0, false, 1000).unwrap().value;
    assert_eq!(extents.len(), 3);
    for (min, max) in extents.min.iter().zip(&extents.max) {
        assert_relative_eq!(*min, 1.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(*max, 5.0, epsilon = 1e-12);
    }

    // The partition sums back to dmax
    let total: f64 = extents.max.iter().sum();
    assert_relative_eq!(total, 15.0, epsilon = 1e-12);
}

#[test]
fn test_ln_depth_uses_dmax() {
    let extents = depth_ln_depth(2.0, 40.0, 5, 4.0, 1000).unwrap().value;
    assert_eq!(extents.max, vec![10.0; 5]);
    for min in &extents.min {
        assert_relative_eq!(*min, 2.0 / 3.0, epsilon = 1e-12);
    }
}

#[test]
fn test_ftl_is_not_a_range() {
    let extents = depth_ftl(4, 1.5, 1000).unwrap();
    assert_eq!(extents.min, extents.max);
}

#[test]
fn test_lr_thickness_grows_by_ratio() {
    let ratio = 1.5;
    let extents = depth_lr(1.0, 200.0, ratio, 2.0, 1000).unwrap().value;
    let n = extents.len();

    // Layer 1 may be `ratio` times as thick as layer 0's maximum depth
    assert_relative_eq!(extents.max[1] - extents.max[0], 0.5 * ratio, epsilon = 1e-12);

    // Interior layers keep the ratio; the last two are adjusted at dmax
    for i in 2..n - 2 {
        let thickness = extents.max[i] - extents.max[i - 1];
        let previous = extents.max[i - 1] - extents.max[i - 2];
        assert_relative_eq!(thickness / previous, ratio, epsilon = 1e-9);
    }

    // Each layer starts where the previous one may end
    for i in 1..n {
        assert_eq!(extents.min[i], extents.max[i - 1]);
    }
}

#[test]
fn test_lr_half_space() {
    let inputs = LayeringInputs::check(1.0, 60.0, 3.0).unwrap().value;
    let dmax = inputs.dmax();
    assert_eq!(dmax, 20.0);

    let extents = inputs.lr_depths(2.0, 1000).unwrap();
    let n = extents.len();
    assert_eq!(extents.min[n - 1], dmax);
    assert_eq!(extents.max[n - 1], dmax + HALF_SPACE_THICKNESS);
    assert!(extents.max[..n - 1].iter().all(|&d| d <= dmax));
}

#[test]
fn test_lr_growth_is_capped() {
    let err = depth_lr(1.0, 10_000.0, 1.000_001, 2.0, 1000).unwrap_err();
    assert!(matches!(err, SwParamError::LayerLimitExceeded { limit: 1000 }));
}

#[test]
fn test_lr_narrow_wavelength_range() {
    // dmax = 2 is shallower than the first layer's maximum depth of 2.5
    let err = depth_lr(5.0, 8.0, 2.0, 4.0, 1000).unwrap_err();
    assert!(err.is_value_error());
}
