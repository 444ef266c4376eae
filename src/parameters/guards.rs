//! Scalar input guards
//!
//! Every scalar handed to a layering scheme passes through one of the guards
//! in this module. Guards either fail fast with a typed [`SwParamError`] or
//! return the (possibly corrected) value wrapped in [`Checked`], together with
//! any [`Advisory`] describing a soft correction.
//!
//! Two irregularities are corrected instead of rejected:
//!
//! - wavelengths given in the wrong order are swapped,
//! - a depth factor below [`MIN_DEPTH_FACTOR`] is raised to it.
//!
//! Both are reported through `tracing::warn!` as well as in the returned
//! advisories, so callers that do not install a subscriber still see them.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SwParamError};

/// Smallest depth factor accepted by the wavelength based schemes.
pub const MIN_DEPTH_FACTOR: f64 = 2.0;

/// A soft correction applied to an input value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Advisory {
    /// `wmin` was greater than `wmax`; the pair was swapped.
    WavelengthsSwapped { wmin: f64, wmax: f64 },

    /// `depth_factor` was below the minimum and was clamped.
    DepthFactorClamped { given: f64, used: f64 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::WavelengthsSwapped { wmin, wmax } => write!(
                f,
                "Minimum wavelength ({}) must be less than maximum wavelength ({}). Swapping!",
                wmin, wmax
            ),
            Advisory::DepthFactorClamped { given, used } => write!(
                f,
                "`depth_factor` must be >= {}, got {}. Setting `depth_factor` equal to {}.",
                used, given, used
            ),
        }
    }
}

/// A validated value plus the advisories raised while validating it
#[derive(Debug, Clone, PartialEq)]
pub struct Checked<T> {
    /// The validated (possibly corrected) value
    pub value: T,

    /// Soft corrections applied, in the order they happened
    pub advisories: Vec<Advisory>,
}

impl<T> Checked<T> {
    /// Wrap a value that needed no correction
    pub fn clean(value: T) -> Self {
        Self {
            value,
            advisories: Vec::new(),
        }
    }

    /// Wrap a corrected value, logging the advisory
    pub fn corrected(value: T, advisory: Advisory) -> Self {
        warn!("{}", advisory);
        Self {
            value,
            advisories: vec![advisory],
        }
    }

    /// True if no correction was applied
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Transform the value, keeping the advisories
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Checked<U> {
        Checked {
            value: f(self.value),
            advisories: self.advisories,
        }
    }

    /// Split into the value and its advisories, appending the latter to `sink`
    pub fn drain_into(self, sink: &mut Vec<Advisory>) -> T {
        sink.extend(self.advisories);
        self.value
    }
}

/// Fail unless `value` is a finite number.
pub fn check_finite(name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(SwParamError::invalid_type(
            name,
            format!("must be a finite number, not {}", value),
        ));
    }
    Ok(value)
}

/// Fail unless `value` is a finite, strictly positive number.
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::guards::check_positive;
///
/// assert_eq!(check_positive("thickness", 2.0).unwrap(), 2.0);
/// assert!(check_positive("thickness", 0.0).unwrap_err().is_value_error());
/// assert!(check_positive("thickness", f64::NAN).unwrap_err().is_type_error());
/// ```
pub fn check_positive(name: &str, value: f64) -> Result<f64> {
    let value = check_finite(name, value)?;
    if value <= 0.0 {
        return Err(SwParamError::invalid_value(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(value)
}

/// Fail unless a layer count is at least one and at most `max_layers`.
pub fn check_nlayers(nlayers: usize, max_layers: usize) -> Result<usize> {
    if nlayers < 1 {
        return Err(SwParamError::invalid_value(
            "nlayers",
            "number of layers must be >= 1",
        ));
    }
    if nlayers > max_layers {
        return Err(SwParamError::LayerLimitExceeded { limit: max_layers });
    }
    Ok(nlayers)
}

/// Fail unless `value` is finite and strictly greater than 1.
///
/// Used for the layering ratio and the LNI increasing factor.
pub fn check_greater_than_one(name: &str, value: f64) -> Result<f64> {
    let value = check_finite(name, value)?;
    if value <= 1.0 {
        return Err(SwParamError::invalid_value(
            name,
            format!("must be greater than 1, got {}", value),
        ));
    }
    Ok(value)
}

/// Check a wavelength pair.
///
/// Specifically:
/// 1. Both wavelengths are finite numbers.
/// 2. Both wavelengths are > 0.
/// 3. If `wmin > wmax` the pair is swapped and an advisory is raised.
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::guards::check_wavelengths;
///
/// let checked = check_wavelengths(30.0, 1.0).unwrap();
/// assert_eq!(checked.value, (1.0, 30.0));
/// assert!(!checked.is_clean());
/// ```
pub fn check_wavelengths(wmin: f64, wmax: f64) -> Result<Checked<(f64, f64)>> {
    for (name, val) in [("wmin", wmin), ("wmax", wmax)] {
        check_finite(name, val)?;
        if val <= 0.0 {
            return Err(SwParamError::invalid_value(name, "wavelength must be > 0"));
        }
    }

    if wmin > wmax {
        return Ok(Checked::corrected(
            (wmax, wmin),
            Advisory::WavelengthsSwapped { wmin, wmax },
        ));
    }

    Ok(Checked::clean((wmin, wmax)))
}

/// Check the factor used to turn the longest wavelength into a maximum depth.
///
/// Values below [`MIN_DEPTH_FACTOR`] are clamped to it with an advisory.
pub fn check_depth_factor(depth_factor: f64) -> Result<Checked<f64>> {
    let depth_factor = check_finite("depth_factor", depth_factor)?;
    if depth_factor < MIN_DEPTH_FACTOR {
        return Ok(Checked::corrected(
            MIN_DEPTH_FACTOR,
            Advisory::DepthFactorClamped {
                given: depth_factor,
                used: MIN_DEPTH_FACTOR,
            },
        ));
    }
    Ok(Checked::clean(depth_factor))
}

/// Check reversal flags decoded from untyped input.
///
/// Only JSON booleans are accepted; `0`/`1` and every other value are rejected
/// rather than coerced.
pub fn check_reversal(flags: &[serde_json::Value]) -> Result<Vec<bool>> {
    flags
        .iter()
        .enumerate()
        .map(|(index, flag)| {
            flag.as_bool().ok_or_else(|| {
                SwParamError::invalid_type(
                    "reversal_allowed",
                    format!("element {} must be a `bool`, not `{}`", index, flag),
                )
            })
        })
        .collect()
}
