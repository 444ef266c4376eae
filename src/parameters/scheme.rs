//! Layering scheme tags and scheme-specific constructor input
//!
//! [`Scheme`] names the derivation that produced a parameter's bounds.
//! [`ParameterSpec`] is the closed set of ways to build a parameter: one
//! variant per scheme, each carrying only its own scalars. It is what a
//! configuration file deserializes into, and every named constructor on
//! [`Parameter`] goes through [`ParameterSpec::build`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LayeringConfig;
use crate::error::Result;
use crate::parameters::guards::{check_greater_than_one, check_positive};
use crate::parameters::layering::{
    broadcast, depth_ftl, depth_fx, LayeringInputs, DEFAULT_DEPTH_FACTOR,
    DEFAULT_INCREASING_FACTOR,
};
use crate::parameters::parameter::{Parameter, Provenance};

/// How a parameter's layer bounds were defined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scheme {
    /// Fixed value at all depths
    #[serde(rename = "FX")]
    Fx,

    /// Fixed Thickness Layering
    #[serde(rename = "FTL")]
    Ftl,

    /// Layering by Number, thickness form
    #[serde(rename = "LN-thickness")]
    LnThickness,

    /// Layering by Number, increasing thickness
    #[serde(rename = "LNI")]
    Lni,

    /// Layering by Number, depth form
    #[serde(rename = "LN-depth")]
    LnDepth,

    /// Layering Ratio
    #[serde(rename = "LR")]
    Lr,

    /// Bounds supplied directly by the caller
    #[serde(rename = "CUSTOM")]
    Custom,
}

impl Scheme {
    /// Short tag used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Fx => "FX",
            Scheme::Ftl => "FTL",
            Scheme::LnThickness => "LN-thickness",
            Scheme::Lni => "LNI",
            Scheme::LnDepth => "LN-depth",
            Scheme::Lr => "LR",
            Scheme::Custom => "CUSTOM",
        }
    }

    /// True if the extent bounds are depths rather than thicknesses
    pub fn is_depth_based(&self) -> bool {
        matches!(self, Scheme::LnDepth | Scheme::Lr)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_depth_factor() -> f64 {
    DEFAULT_DEPTH_FACTOR
}

fn default_increasing_factor() -> f64 {
    DEFAULT_INCREASING_FACTOR
}

/// Scheme-specific input for building a [`Parameter`]
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::{ParameterSpec, Scheme};
///
/// let spec = ParameterSpec::from_json(
///     r#"{"scheme": "LR", "wmin": 1.0, "wmax": 30.0, "ratio": 2.0,
///         "value_min": 100.0, "value_max": 400.0}"#,
/// )
/// .unwrap();
/// let param = spec.build(&Default::default()).unwrap();
/// assert_eq!(param.scheme(), Scheme::Lr);
/// assert_eq!(param.nlayers(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "scheme")]
pub enum ParameterSpec {
    #[serde(rename = "FX")]
    Fx { value: f64 },

    #[serde(rename = "FTL")]
    Ftl {
        nlayers: usize,
        thickness: f64,
        value_min: f64,
        value_max: f64,
        #[serde(default)]
        reversal: bool,
    },

    #[serde(rename = "LN-thickness")]
    LnThickness {
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        #[serde(default)]
        reversal: bool,
        #[serde(default = "default_depth_factor")]
        depth_factor: f64,
    },

    #[serde(rename = "LNI")]
    Lni {
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        #[serde(default)]
        reversal: bool,
        #[serde(default = "default_depth_factor")]
        depth_factor: f64,
        #[serde(default = "default_increasing_factor")]
        increasing_factor: f64,
    },

    #[serde(rename = "LN-depth")]
    LnDepth {
        wmin: f64,
        wmax: f64,
        nlayers: usize,
        value_min: f64,
        value_max: f64,
        #[serde(default)]
        reversal: bool,
        #[serde(default = "default_depth_factor")]
        depth_factor: f64,
    },

    #[serde(rename = "LR")]
    Lr {
        wmin: f64,
        wmax: f64,
        ratio: f64,
        value_min: f64,
        value_max: f64,
        #[serde(default)]
        reversal: bool,
        #[serde(default = "default_depth_factor")]
        depth_factor: f64,
    },
}

impl ParameterSpec {
    /// Parse a spec from JSON text.
    ///
    /// A wrongly typed field (a string for a number, a fraction for a layer
    /// count, an integer for a boolean) is reported as a type error.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The scheme this spec builds
    pub fn scheme(&self) -> Scheme {
        match self {
            ParameterSpec::Fx { .. } => Scheme::Fx,
            ParameterSpec::Ftl { .. } => Scheme::Ftl,
            ParameterSpec::LnThickness { .. } => Scheme::LnThickness,
            ParameterSpec::Lni { .. } => Scheme::Lni,
            ParameterSpec::LnDepth { .. } => Scheme::LnDepth,
            ParameterSpec::Lr { .. } => Scheme::Lr,
        }
    }

    /// Derive the layer bounds and build the parameter.
    pub fn build(&self, config: &LayeringConfig) -> Result<Parameter> {
        match *self {
            ParameterSpec::Fx { value } => {
                let value = check_positive("value", value)?;
                let extents = depth_fx();
                let provenance = Provenance::new(Scheme::Fx, value, None);
                Parameter::assemble(
                    provenance,
                    extents,
                    (vec![value], vec![value], vec![false]),
                    config,
                )
            }

            ParameterSpec::Ftl {
                nlayers,
                thickness,
                value_min,
                value_max,
                reversal,
            } => {
                let extents = depth_ftl(nlayers, thickness, config.max_layers)?;
                let provenance = Provenance::new(Scheme::Ftl, nlayers as f64, Some(thickness));
                Parameter::assemble(
                    provenance,
                    extents,
                    broadcast(nlayers, value_min, value_max, reversal),
                    config,
                )
            }

            ParameterSpec::LnThickness {
                wmin,
                wmax,
                nlayers,
                value_min,
                value_max,
                reversal,
                depth_factor,
            } => {
                let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
                let extents = checked.value.ln_thickness(nlayers, false, config.max_layers)?;
                let provenance = Provenance::new(Scheme::LnThickness, nlayers as f64, None)
                    .with_inputs(checked.value)
                    .with_advisories(checked.advisories);
                Parameter::assemble(
                    provenance,
                    extents,
                    broadcast(nlayers, value_min, value_max, reversal),
                    config,
                )
            }

            ParameterSpec::Lni {
                wmin,
                wmax,
                nlayers,
                value_min,
                value_max,
                reversal,
                depth_factor,
                increasing_factor,
            } => {
                let increasing_factor =
                    check_greater_than_one("increasing_factor", increasing_factor)?;
                let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
                let extents = checked.value.ln_thickness(nlayers, true, config.max_layers)?;
                let provenance =
                    Provenance::new(Scheme::Lni, nlayers as f64, Some(increasing_factor))
                        .with_inputs(checked.value)
                        .with_advisories(checked.advisories);
                Parameter::assemble(
                    provenance,
                    extents,
                    broadcast(nlayers, value_min, value_max, reversal),
                    config,
                )
            }

            ParameterSpec::LnDepth {
                wmin,
                wmax,
                nlayers,
                value_min,
                value_max,
                reversal,
                depth_factor,
            } => {
                let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
                let extents = checked.value.ln_depth(nlayers, config.max_layers)?;
                let provenance = Provenance::new(Scheme::LnDepth, nlayers as f64, None)
                    .with_inputs(checked.value)
                    .with_advisories(checked.advisories);
                Parameter::assemble(
                    provenance,
                    extents,
                    broadcast(nlayers, value_min, value_max, reversal),
                    config,
                )
            }

            ParameterSpec::Lr {
                wmin,
                wmax,
                ratio,
                value_min,
                value_max,
                reversal,
                depth_factor,
            } => {
                let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
                let extents = checked.value.lr_depths(ratio, config.max_layers)?;
                // The layer count is an output of this scheme.
                let nlayers = extents.len();
                let provenance = Provenance::new(Scheme::Lr, ratio, None)
                    .with_inputs(checked.value)
                    .with_advisories(checked.advisories);
                Parameter::assemble(
                    provenance,
                    extents,
                    broadcast(nlayers, value_min, value_max, reversal),
                    config,
                )
            }
        }
    }
}
