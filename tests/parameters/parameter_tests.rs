//! Integration tests for the Parameter struct
//!
//! These tests verify that Parameter construction behaves correctly in various scenarios.

use swparam_rs::parameters::{Advisory, Bounds, Envelope, Parameter, Scheme};
use swparam_rs::{ConsistencyCheck, LayeringConfig, SwParamError};

use crate::test_helpers::{assert_invariants, slice_approx_eq};

#[test]
fn test_every_scheme_satisfies_invariants() {
    let params = vec![
        Parameter::from_fixed(300.0).unwrap(),
        Parameter::from_ftl(5, 2.0, 100.0, 200.0, false).unwrap(),
        Parameter::from_ln_thickness(1.0, 30.0, 3, 100.0, 200.0, false, 2.0).unwrap(),
        Parameter::from_lni(1.0, 30.0, 3, 100.0, 200.0, true, 2.0, 1.2).unwrap(),
        Parameter::from_ln_depth(1.0, 30.0, 3, 100.0, 200.0, false, 2.0).unwrap(),
        Parameter::from_lr(1.0, 30.0, 2.0, 100.0, 200.0, false, 2.0).unwrap(),
        Parameter::from_lr(0.8, 55.0, 1.3, 100.0, 200.0, true, 3.0).unwrap(),
    ];

    for param in &params {
        assert_invariants(param);
    }
}

#[test]
fn test_ftl_layers() {
    let param = Parameter::from_ftl(5, 2.0, 100.0, 200.0, false).unwrap();

    assert_eq!(param.nlayers(), 5);
    assert_eq!(param.extent_min(), &[2.0; 5]);
    assert_eq!(param.extent_max(), &[2.0; 5]);
    assert_eq!(param.value_min(), &[100.0; 5]);
    assert_eq!(param.value_max(), &[200.0; 5]);
    assert_eq!(param.reversal_allowed(), &[false; 5]);
}

#[test]
fn test_fixed_value() {
    let param = Parameter::from_fixed(300.0).unwrap();
    assert_eq!(param.nlayers(), 1);
    assert_eq!(param.value_min(), &[300.0]);
    assert_eq!(param.value_max(), &[300.0]);
    assert_eq!(param.reversal_allowed(), &[false]);

    assert!(Parameter::from_fixed(-1.0).unwrap_err().is_value_error());
    assert!(Parameter::from_fixed(f64::NAN).unwrap_err().is_type_error());
}

#[test]
fn test_ln_thickness_bounds() {
    let param = Parameter::from_ln_thickness(1.0, 30.0, 3, 100.0, 200.0, false, 2.0).unwrap();
    assert!(slice_approx_eq(
        param.extent_min(),
        &[1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0],
        1e-12
    ));
    assert!(slice_approx_eq(param.extent_max(), &[5.0, 5.0, 5.0], 1e-12));
}

#[test]
fn test_lni_requires_growth_factor() {
    for factor in [1.0, 0.5, -2.0] {
        let err = Parameter::from_lni(1.0, 30.0, 3, 100.0, 200.0, false, 2.0, factor).unwrap_err();
        assert!(err.is_value_error(), "factor {} should be rejected", factor);
    }
}

#[test]
fn test_lr_ends_in_half_space() {
    for (wmin, wmax, ratio, depth_factor) in [
        (1.0, 30.0, 2.0, 2.0),
        (1.0, 20.0, 3.0, 2.0),
        (2.0, 150.0, 1.2, 2.0),
        (3.0, 90.0, 2.5, 4.0),
    ] {
        let param =
            Parameter::from_lr(wmin, wmax, ratio, 100.0, 400.0, false, depth_factor).unwrap();
        let dmax = wmax / depth_factor;
        let n = param.nlayers();

        assert_eq!(param.extent_min()[n - 1], dmax);
        assert_eq!(param.extent_max()[n - 1], dmax + 1.0);
        assert_eq!(param.extent_max()[n - 2], dmax);
        assert_eq!(param.value_min().len(), n);
        assert_invariants(&param);
    }
}

#[test]
fn test_lr_bad_ratio() {
    let err = Parameter::from_lr(1.0, 30.0, 1.0, 100.0, 400.0, false, 2.0).unwrap_err();
    assert!(err.is_value_error());
}

#[test]
fn test_soft_corrections() {
    let swapped = Parameter::from_lr(30.0, 1.0, 2.0, 100.0, 400.0, false, 2.0).unwrap();
    let ordered = Parameter::from_lr(1.0, 30.0, 2.0, 100.0, 400.0, false, 2.0).unwrap();
    assert_eq!(swapped, ordered);
    assert!(ordered.advisories().is_empty());
    assert!(matches!(
        swapped.advisories(),
        [Advisory::WavelengthsSwapped { .. }]
    ));

    let clamped = Parameter::from_ln_depth(1.0, 30.0, 3, 100.0, 200.0, false, 0.5).unwrap();
    assert_eq!(clamped.extent_max(), &[15.0; 3]);
    assert_eq!(clamped.layering_inputs().unwrap().depth_factor, 2.0);
}

#[test]
fn test_equality_is_structural() {
    let ftl = Parameter::from_ftl(3, 2.0, 100.0, 200.0, false).unwrap();
    let custom = Parameter::new(
        Scheme::Custom,
        vec![2.0; 3],
        vec![2.0; 3],
        vec![100.0; 3],
        vec![200.0; 3],
        vec![false; 3],
    )
    .unwrap();
    assert_eq!(ftl, custom);

    // Any single element differing breaks equality
    let sequences = [
        (vec![2.0, 2.0, 1.0], vec![2.0; 3], vec![100.0; 3], vec![200.0; 3], vec![false; 3]),
        (vec![2.0; 3], vec![2.0, 2.0, 3.0], vec![100.0; 3], vec![200.0; 3], vec![false; 3]),
        (vec![2.0; 3], vec![2.0; 3], vec![100.0, 90.0, 100.0], vec![200.0; 3], vec![false; 3]),
        (vec![2.0; 3], vec![2.0; 3], vec![100.0; 3], vec![200.0, 200.0, 250.0], vec![false; 3]),
        (vec![2.0; 3], vec![2.0; 3], vec![100.0; 3], vec![200.0; 3], vec![false, true, false]),
    ];
    for (emin, emax, vmin, vmax, rev) in sequences {
        let other = Parameter::new(Scheme::Ftl, emin, emax, vmin, vmax, rev).unwrap();
        assert_ne!(ftl, other);
    }
}

#[test]
fn test_equality_ignores_provenance() {
    let a = Parameter::from_lni(1.0, 30.0, 3, 100.0, 200.0, false, 2.0, 1.2).unwrap();
    let b = Parameter::from_lni(1.0, 30.0, 3, 100.0, 200.0, false, 2.0, 1.8).unwrap();
    assert_ne!(a.scheme_aux_value(), b.scheme_aux_value());
    assert_eq!(a, b);

    // LN-depth and LNI produce the same sequences for the same inputs
    let depth = Parameter::from_ln_depth(1.0, 30.0, 3, 100.0, 200.0, false, 2.0).unwrap();
    assert_eq!(a, depth);
}

#[test]
fn test_consistency_policy_is_configurable() {
    let build = |config: &LayeringConfig| {
        Parameter::with_config(
            Scheme::Custom,
            vec![1.0, 2.0],
            vec![2.0, 3.0],
            vec![1.0, 1.0, 1.0],
            vec![2.0, 2.0, 2.0],
            vec![false, false],
            config,
        )
    };

    assert!(build(&LayeringConfig::default()).is_ok());
    let err = build(&LayeringConfig::default().with_consistency(ConsistencyCheck::Strict))
        .unwrap_err();
    assert!(matches!(err, SwParamError::InconsistentLayers { .. }));
}

#[test]
fn test_layer_count_is_capped_for_every_scheme() {
    let n = usize::MAX;
    for result in [
        Parameter::from_ftl(n, 1.0, 1.0, 2.0, false),
        Parameter::from_ln_thickness(1.0, 30.0, n, 1.0, 2.0, false, 2.0),
        Parameter::from_lni(1.0, 30.0, 1001, 1.0, 2.0, false, 2.0, 1.2),
        Parameter::from_ln_depth(1.0, 30.0, n, 1.0, 2.0, false, 2.0),
    ] {
        let err = result.unwrap_err();
        assert!(err.is_value_error());
        assert!(matches!(err, SwParamError::LayerLimitExceeded { limit: 1000 }));
    }
    assert!(Parameter::from_ftl(1000, 1.0, 1.0, 2.0, false).is_ok());
}

#[test]
fn test_lr_rejects_depth_too_large_for_half_space() {
    let err = Parameter::from_lr(1.0, 1e17, 2.0, 100.0, 200.0, false, 2.0).unwrap_err();
    assert!(err.is_value_error());
    assert!(matches!(err, SwParamError::InvalidValue { .. }));
}

#[test]
fn test_envelope_follows_parameter() {
    let param = Parameter::from_ftl(2, 3.0, 100.0, 300.0, false).unwrap();
    let envelope = Envelope::from_parameter(&param);

    assert_eq!(envelope.rectangles().len(), 2);
    assert_eq!(envelope.rectangles()[0].value, Bounds { min: 100.0, max: 300.0 });
    assert_eq!(envelope.max_extent(), 3.0);
    assert_eq!(envelope.example_profile().len(), 4);
}
