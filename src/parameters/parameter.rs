//! Parameter definition and implementation
//!
//! This module provides the [`Parameter`] struct: for one physical property
//! (e.g. shear-wave velocity) across a stack of layers, the permitted range
//! of each layer's thickness or depth, the permitted range of the property
//! value, and whether the value may decrease relative to the layer above.
//!
//! Parameters are only built through constructors that run the same checks,
//! so a `Parameter` in hand always satisfies:
//!
//! - all five sequences describe at least one layer and agree on the count
//!   (subject to [`ConsistencyCheck`]),
//! - `extent_min[i] <= extent_max[i]` and `value_min[i] <= value_max[i]`,
//! - every bound is finite.

use serde::{Deserialize, Serialize};

use crate::config::{ConsistencyCheck, LayeringConfig};
use crate::error::{Result, SwParamError};
use crate::parameters::bounds::{check_layers, Bounds};
use crate::parameters::guards::{check_finite, check_reversal, Advisory};
use crate::parameters::layering::{LayerExtents, LayeringInputs, DEFAULT_INCREASING_FACTOR};
use crate::parameters::scheme::{ParameterSpec, Scheme};

/// Where a parameter's bounds came from.
#[derive(Debug, Clone)]
pub(crate) struct Provenance {
    scheme: Scheme,
    scheme_value: f64,
    scheme_aux_value: Option<f64>,
    inputs: Option<LayeringInputs>,
    advisories: Vec<Advisory>,
}

impl Provenance {
    pub(crate) fn new(scheme: Scheme, scheme_value: f64, scheme_aux_value: Option<f64>) -> Self {
        Self {
            scheme,
            scheme_value,
            scheme_aux_value,
            inputs: None,
            advisories: Vec::new(),
        }
    }

    pub(crate) fn with_inputs(mut self, inputs: LayeringInputs) -> Self {
        self.inputs = Some(inputs);
        self
    }

    pub(crate) fn with_advisories(mut self, advisories: Vec<Advisory>) -> Self {
        self.advisories = advisories;
        self
    }
}

/// Bounds of an inversion parameter across a stack of layers
///
/// Equality compares the five bound/flag sequences only; the scheme, its
/// scalars and any advisories are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawParameter")]
pub struct Parameter {
    scheme: Scheme,

    scheme_value: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    scheme_aux_value: Option<f64>,

    /// Normalized wavelengths and depth factor for the wavelength schemes
    #[serde(skip_serializing_if = "Option::is_none")]
    layering_inputs: Option<LayeringInputs>,

    /// Minimum thickness or depth of each layer, in meters
    extent_min: Vec<f64>,

    /// Maximum thickness or depth of each layer, in meters
    extent_max: Vec<f64>,

    /// Minimum value of the property in each layer
    value_min: Vec<f64>,

    /// Maximum value of the property in each layer
    value_max: Vec<f64>,

    /// Whether layer `i + 1` may take a lower value than layer `i`
    reversal_allowed: Vec<bool>,

    /// Layer-count policy the parameter was accepted under
    consistency: ConsistencyCheck,

    #[serde(skip)]
    advisories: Vec<Advisory>,
}

/// One layer of a [`Parameter`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub extent: Bounds,
    pub value: Bounds,
    pub reversal_allowed: bool,
}

impl Parameter {
    /// Create a parameter from explicit per-layer sequences.
    ///
    /// Uses the lenient layer-count check; see [`Parameter::with_config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::{Parameter, Scheme};
    ///
    /// let param = Parameter::new(
    ///     Scheme::Custom,
    ///     vec![1.0, 2.0],
    ///     vec![3.0, 6.0],
    ///     vec![100.0, 200.0],
    ///     vec![300.0, 500.0],
    ///     vec![false, true],
    /// )
    /// .unwrap();
    /// assert_eq!(param.nlayers(), 2);
    /// ```
    pub fn new(
        scheme: Scheme,
        extent_min: Vec<f64>,
        extent_max: Vec<f64>,
        value_min: Vec<f64>,
        value_max: Vec<f64>,
        reversal_allowed: Vec<bool>,
    ) -> Result<Self> {
        Self::with_config(
            scheme,
            extent_min,
            extent_max,
            value_min,
            value_max,
            reversal_allowed,
            &LayeringConfig::default(),
        )
    }

    /// Create a parameter from explicit per-layer sequences using `config`.
    ///
    /// # Errors
    ///
    /// - a shape error if a lower/upper pair differs in length, if any
    ///   sequence is empty, or if the layer counts disagree under
    ///   `config.consistency`;
    /// - an order error at the first index where a lower bound exceeds its
    ///   upper bound;
    /// - a type error if any bound is not finite.
    pub fn with_config(
        scheme: Scheme,
        extent_min: Vec<f64>,
        extent_max: Vec<f64>,
        value_min: Vec<f64>,
        value_max: Vec<f64>,
        reversal_allowed: Vec<bool>,
        config: &LayeringConfig,
    ) -> Result<Self> {
        Self::assemble(
            Provenance::new(scheme, 0.0, None),
            LayerExtents {
                min: extent_min,
                max: extent_max,
            },
            (value_min, value_max, reversal_allowed),
            config,
        )
    }

    /// Shared construction path: validate the sequences, then attach provenance.
    pub(crate) fn assemble(
        provenance: Provenance,
        extents: LayerExtents,
        values: (Vec<f64>, Vec<f64>, Vec<bool>),
        config: &LayeringConfig,
    ) -> Result<Self> {
        let (value_min, value_max, reversal_allowed) = values;

        let (extent_min, extent_max) =
            check_layers("extent_min", extents.min, "extent_max", extents.max)?;
        let (value_min, value_max) = check_layers("value_min", value_min, "value_max", value_max)?;

        for (name, seq) in [
            ("extent_min", &extent_min),
            ("extent_max", &extent_max),
            ("value_min", &value_min),
            ("value_max", &value_max),
        ] {
            for (index, &val) in seq.iter().enumerate() {
                check_finite(&format!("{}[{}]", name, index), val)?;
            }
        }

        if extent_min.is_empty() || value_min.is_empty() || reversal_allowed.is_empty() {
            return Err(SwParamError::EmptyLayers);
        }

        if !config
            .consistency
            .accepts(extent_min.len(), value_min.len(), reversal_allowed.len())
        {
            return Err(SwParamError::InconsistentLayers {
                extent: extent_min.len(),
                value: value_min.len(),
                reversal: reversal_allowed.len(),
            });
        }

        Ok(Self {
            scheme: provenance.scheme,
            scheme_value: provenance.scheme_value,
            scheme_aux_value: provenance.scheme_aux_value,
            layering_inputs: provenance.inputs,
            extent_min,
            extent_max,
            value_min,
            value_max,
            reversal_allowed,
            consistency: config.consistency,
            advisories: provenance.advisories,
        })
    }

    /// Fixed (FX): one value at all depths, never allowed to change.
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::Parameter;
    ///
    /// let param = Parameter::from_fixed(300.0).unwrap();
    /// assert_eq!(param.value_min(), &[300.0]);
    /// assert_eq!(param.value_max(), &[300.0]);
    /// assert_eq!(param.reversal_allowed(), &[false]);
    ///
    /// assert!(Parameter::from_fixed(-1.0).unwrap_err().is_value_error());
    /// ```
    pub fn from_fixed(value: f64) -> Result<Self> {
        ParameterSpec::Fx { value }.build(&LayeringConfig::default())
    }

    /// Fixed Thickness Layering (FTL): `nlayers` layers of exactly `thickness`
    /// meters, each with the same value range and reversal flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::Parameter;
    ///
    /// let param = Parameter::from_ftl(5, 2.0, 100.0, 200.0, false).unwrap();
    /// assert_eq!(param.nlayers(), 5);
    /// assert_eq!(param.extent_min(), &[2.0; 5]);
    /// assert_eq!(param.extent_max(), &[2.0; 5]);
    /// ```
    pub fn from_ftl(
        nlayers: usize,
        thickness: f64,
        value_min: f64,
        value_max: f64,
        reversal: bool,
    ) -> Result<Self> {
        ParameterSpec::Ftl {
            nlayers,
            thickness,
            value_min,
            value_max,
            reversal,
        }
        .build(&LayeringConfig::default())
    }

    /// Layering by Number (LN) in thickness form.
    ///
    /// Each of the `nlayers` layers may be between `wmin/3` and
    /// `(wmax/depth_factor)/nlayers` thick.
    pub fn from_ln_thickness(
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        reversal: bool,
        depth_factor: f64,
    ) -> Result<Self> {
        ParameterSpec::LnThickness {
            wmin,
            wmax,
            nlayers,
            value_min,
            value_max,
            reversal,
            depth_factor,
        }
        .build(&LayeringConfig::default())
    }

    /// Layering by Number Increasing (LNI).
    ///
    /// Like [`Parameter::from_ln_thickness`] but each layer may be up to
    /// `wmax/depth_factor` thick. `increasing_factor` must exceed 1; it is
    /// kept as the auxiliary scheme value for the inversion to enforce
    /// growth between adjacent layers.
    #[allow(clippy::too_many_arguments)]
    pub fn from_lni(
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        reversal: bool,
        depth_factor: f64,
        increasing_factor: f64,
    ) -> Result<Self> {
        ParameterSpec::Lni {
            wmin,
            wmax,
            nlayers,
            value_min,
            value_max,
            reversal,
            depth_factor,
            increasing_factor,
        }
        .build(&LayeringConfig::default())
    }

    /// Layering by Number in thickness form, choosing LN or LNI.
    ///
    /// With `increasing == false` this is [`Parameter::from_ln_thickness`]
    /// and `increasing_factor` is neither checked nor stored.
    #[allow(clippy::too_many_arguments)]
    pub fn from_ln(
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        reversal: bool,
        depth_factor: f64,
        increasing: Option<f64>,
    ) -> Result<Self> {
        match increasing {
            Some(increasing_factor) => Self::from_lni(
                wmin,
                wmax,
                nlayers,
                value_min,
                value_max,
                reversal,
                depth_factor,
                increasing_factor,
            ),
            None => Self::from_ln_thickness(
                wmin,
                wmax,
                nlayers,
                value_min,
                value_max,
                reversal,
                depth_factor,
            ),
        }
    }

    /// LNI with the default increasing factor of 1.2.
    pub fn from_lni_default(
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        reversal: bool,
        depth_factor: f64,
    ) -> Result<Self> {
        Self::from_lni(
            wmin,
            wmax,
            nlayers,
            value_min,
            value_max,
            reversal,
            depth_factor,
            DEFAULT_INCREASING_FACTOR,
        )
    }

    /// Layering by Number (LN) in depth form.
    ///
    /// Each layer has a minimum thickness of `wmin/3` and a maximum depth of
    /// `wmax/depth_factor`.
    pub fn from_ln_depth(
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        reversal: bool,
        depth_factor: f64,
    ) -> Result<Self> {
        ParameterSpec::LnDepth {
            wmin,
            wmax,
            nlayers,
            value_min,
            value_max,
            reversal,
            depth_factor,
        }
        .build(&LayeringConfig::default())
    }

    /// Layering Ratio (LR), terminated by a half-space at `wmax/depth_factor`.
    ///
    /// The number of layers follows from `ratio`; see
    /// [`LayeringInputs::lr_depths`].
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::Parameter;
    ///
    /// let param = Parameter::from_lr(1.0, 30.0, 2.0, 100.0, 400.0, false, 2.0).unwrap();
    /// let n = param.nlayers();
    /// assert_eq!(param.extent_min()[n - 1], 15.0);
    /// assert_eq!(param.extent_max()[n - 1], 16.0);
    /// ```
    pub fn from_lr(
        wmin: f64,
        wmax: f64,
        ratio: f64,
        value_min: f64,
        value_max: f64,
        reversal: bool,
        depth_factor: f64,
    ) -> Result<Self> {
        ParameterSpec::Lr {
            wmin,
            wmax,
            ratio,
            value_min,
            value_max,
            reversal,
            depth_factor,
        }
        .build(&LayeringConfig::default())
    }

    /// The scheme that produced the bounds
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Main scheme scalar: the value for FX, the layer count for FTL and LN,
    /// the ratio for LR, 0 for custom bounds.
    pub fn scheme_value(&self) -> f64 {
        self.scheme_value
    }

    /// Auxiliary scheme scalar: the thickness for FTL, the increasing factor
    /// for LNI.
    pub fn scheme_aux_value(&self) -> Option<f64> {
        self.scheme_aux_value
    }

    /// Normalized wavelengths and depth factor, for the wavelength schemes
    pub fn layering_inputs(&self) -> Option<&LayeringInputs> {
        self.layering_inputs.as_ref()
    }

    pub fn extent_min(&self) -> &[f64] {
        &self.extent_min
    }

    pub fn extent_max(&self) -> &[f64] {
        &self.extent_max
    }

    pub fn value_min(&self) -> &[f64] {
        &self.value_min
    }

    pub fn value_max(&self) -> &[f64] {
        &self.value_max
    }

    pub fn reversal_allowed(&self) -> &[bool] {
        &self.reversal_allowed
    }

    /// Layer-count policy this parameter was checked with
    pub fn consistency(&self) -> ConsistencyCheck {
        self.consistency
    }

    /// Soft corrections applied to the inputs while building this parameter
    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    /// Number of layers, including any half-space
    pub fn nlayers(&self) -> usize {
        self.extent_min.len()
    }

    /// The `index`-th layer, if the parameter has that many layers
    pub fn layer(&self, index: usize) -> Option<Layer> {
        Some(Layer {
            extent: Bounds {
                min: *self.extent_min.get(index)?,
                max: *self.extent_max.get(index)?,
            },
            value: Bounds {
                min: *self.value_min.get(index)?,
                max: *self.value_max.get(index)?,
            },
            reversal_allowed: *self.reversal_allowed.get(index)?,
        })
    }

    /// Iterate over the layers, top to bottom
    pub fn layers(&self) -> impl Iterator<Item = Layer> + '_ {
        (0..self.nlayers()).map_while(move |index| self.layer(index))
    }

    /// Deepest extent bound over all layers
    pub fn max_extent(&self) -> f64 {
        self.extent_max
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Serialize to pretty JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON text, re-running every construction check.
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::Parameter;
    ///
    /// let json = r#"{
    ///   "scheme": "CUSTOM",
    ///   "scheme_value": 0.0,
    ///   "extent_min": [1.0, 2.0],
    ///   "extent_max": [1.5, 4.0],
    ///   "value_min": [100.0, 150.0],
    ///   "value_max": [200.0, 300.0],
    ///   "reversal_allowed": [1, 0]
    /// }"#;
    ///
    /// let err = Parameter::from_json(json).unwrap_err();
    /// assert!(err.is_type_error());
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawParameter = serde_json::from_str(json)?;
        Self::try_from(raw)
    }
}

impl PartialEq for Parameter {
    fn eq(&self, other: &Self) -> bool {
        self.extent_min == other.extent_min
            && self.extent_max == other.extent_max
            && self.value_min == other.value_min
            && self.value_max == other.value_max
            && self.reversal_allowed == other.reversal_allowed
    }
}

/// Unvalidated serialized form of a [`Parameter`]
#[derive(Debug, Deserialize)]
pub(crate) struct RawParameter {
    scheme: Scheme,
    #[serde(default)]
    scheme_value: f64,
    #[serde(default)]
    scheme_aux_value: Option<f64>,
    #[serde(default)]
    layering_inputs: Option<LayeringInputs>,
    extent_min: Vec<f64>,
    extent_max: Vec<f64>,
    value_min: Vec<f64>,
    value_max: Vec<f64>,
    reversal_allowed: Vec<serde_json::Value>,
    #[serde(default)]
    consistency: ConsistencyCheck,
}

impl TryFrom<RawParameter> for Parameter {
    type Error = SwParamError;

    fn try_from(raw: RawParameter) -> Result<Self> {
        let reversal_allowed = check_reversal(&raw.reversal_allowed)?;
        let mut provenance = Provenance::new(raw.scheme, raw.scheme_value, raw.scheme_aux_value);
        provenance.inputs = raw.layering_inputs;

        // Re-check under the policy the parameter was built with. Text
        // without one gets the same default as `Parameter::new`.
        Self::assemble(
            provenance,
            LayerExtents {
                min: raw.extent_min,
                max: raw.extent_max,
            },
            (raw.value_min, raw.value_max, reversal_allowed),
            &LayeringConfig::default().with_consistency(raw.consistency),
        )
    }
}
