//! Integration tests for JSON specs, parameter serialization and the
//! parameterization collection

use swparam_rs::parameters::{Parameter, ParameterSpec, Parameterization, Property, Scheme};
use swparam_rs::{ConsistencyCheck, LayeringConfig};

#[test]
fn test_spec_builds_same_parameter_as_constructor() {
    let spec = ParameterSpec::from_json(
        r#"{"scheme": "LN-thickness", "wmin": 1, "wmax": 30, "nlayers": 3,
            "value_min": 100, "value_max": 200, "depth_factor": 2}"#,
    )
    .unwrap();
    let from_spec = spec.build(&LayeringConfig::default()).unwrap();
    let direct = Parameter::from_ln_thickness(1.0, 30.0, 3, 100.0, 200.0, false, 2.0).unwrap();

    assert_eq!(from_spec, direct);
    assert_eq!(from_spec.scheme(), Scheme::LnThickness);
}

#[test]
fn test_fixed_rejects_non_numeric_value() {
    let err = ParameterSpec::from_json(r#"{"scheme": "FX", "value": "x"}"#).unwrap_err();
    assert!(err.is_type_error());
}

#[test]
fn test_reversal_flags_must_be_booleans() {
    let json = r#"{
        "scheme": "CUSTOM",
        "extent_min": [1.0, 2.0],
        "extent_max": [2.0, 4.0],
        "value_min": [100.0, 100.0],
        "value_max": [200.0, 200.0],
        "reversal_allowed": [1, 0]
    }"#;
    let err = Parameter::from_json(json).unwrap_err();
    assert!(err.is_type_error());

    let json = json.replace("[1, 0]", "[true, false]");
    let param = Parameter::from_json(&json).unwrap();
    assert_eq!(param.reversal_allowed(), &[true, false]);
}

#[test]
fn test_serialized_parameter_restores_provenance() {
    let param = Parameter::from_ftl(4, 2.5, 150.0, 450.0, true).unwrap();
    let back = Parameter::from_json(&param.to_json().unwrap()).unwrap();

    assert_eq!(back, param);
    assert_eq!(back.scheme(), Scheme::Ftl);
    assert_eq!(back.scheme_value(), 4.0);
    assert_eq!(back.scheme_aux_value(), Some(2.5));
}

#[test]
fn test_parameterization_from_specs() {
    let specs = vec![
        (
            Property::Vs,
            ParameterSpec::from_json(
                r#"{"scheme": "LR", "wmin": 1.0, "wmax": 30.0, "ratio": 2.0,
                    "value_min": 100.0, "value_max": 400.0}"#,
            )
            .unwrap(),
        ),
        (
            Property::Pr,
            ParameterSpec::from_json(r#"{"scheme": "FX", "value": 0.33}"#).unwrap(),
        ),
    ];

    let model = Parameterization::from_specs(specs, &LayeringConfig::default()).unwrap();
    assert_eq!(model.len(), 2);
    assert_eq!(model.get(Property::Vs).unwrap().nlayers(), 6);
    assert_eq!(model.get(Property::Pr).unwrap().value_min(), &[0.33]);

    let back = Parameterization::from_json(&model.to_json().unwrap()).unwrap();
    assert_eq!(back, model);
}

#[test]
fn test_lenient_parameter_survives_json() {
    let param = Parameter::new(
        Scheme::Custom,
        vec![1.0, 2.0],
        vec![3.0, 6.0],
        vec![1.0, 1.0],
        vec![2.0, 2.0],
        vec![false, false, true],
    )
    .unwrap();

    let back = Parameter::from_json(&param.to_json().unwrap()).unwrap();
    assert_eq!(back, param);
    assert_eq!(back.consistency(), ConsistencyCheck::Lenient);

    let mut model = Parameterization::new();
    model.insert(Property::Vs, param);
    let back = Parameterization::from_json(&model.to_json().unwrap()).unwrap();
    assert_eq!(back, model);
}

#[test]
fn test_parameterization_json_keeps_error_class() {
    let json = r#"{"params": {
        "vs": {
            "scheme": "CUSTOM",
            "extent_min": [1.0],
            "extent_max": [2.0],
            "value_min": [300.0],
            "value_max": [200.0],
            "reversal_allowed": [false]
        }
    }}"#;
    let err = Parameterization::from_json(json).unwrap_err();
    assert!(err.is_order_error());
    assert!(!err.is_type_error());
}
