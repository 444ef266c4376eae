//! Per-layer bounds
//!
//! This module provides the [`Bounds`] pair used to describe one layer's
//! permitted extent or property range, and [`check_layers`], the pass-through
//! validator applied to every paired lower/upper bound sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when validating paired bound sequences
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("`{lower_name}` ({lower_len}) and `{upper_name}` ({upper_len}) must be the same length")]
    LengthMismatch {
        lower_name: String,
        lower_len: usize,
        upper_name: String,
        upper_len: usize,
    },

    #[error("`{upper_name}[{index}]` ({upper}) must be greater than `{lower_name}[{index}]` ({lower})")]
    Misordered {
        lower_name: String,
        upper_name: String,
        index: usize,
        lower: f64,
        upper: f64,
    },
}

/// Closed interval `[min, max]` for a single layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower end of the interval
    pub min: f64,

    /// Upper end of the interval
    pub max: f64,
}

impl Bounds {
    /// Create a new interval, failing if `min > max`
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(100.0, 200.0).unwrap();
    /// assert_eq!(bounds.width(), 100.0);
    /// assert!(Bounds::new(2.0, 1.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Misordered {
                lower_name: "min".to_string(),
                upper_name: "max".to_string(),
                index: 0,
                lower: min,
                upper: max,
            });
        }

        Ok(Self { min, max })
    }

    /// Interval holding a single value
    pub fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Distance between the two ends
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Centre of the interval
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Check if a value lies in the interval, ends included
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Check a paired lower/upper bound sequence.
///
/// Specifically:
/// 1. `lower` and `upper` have the same length.
/// 2. `lower[i] <= upper[i]` for every index; the first offending index is
///    reported.
///
/// The inputs are returned unchanged so the check can be chained into a
/// constructor.
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::bounds::check_layers;
///
/// let (lo, hi) = check_layers("lay_min", vec![1.0, 2.0], "lay_max", vec![1.5, 2.0]).unwrap();
/// assert_eq!(lo, vec![1.0, 2.0]);
/// assert_eq!(hi, vec![1.5, 2.0]);
///
/// assert!(check_layers("lay_min", vec![1.0], "lay_max", vec![]).is_err());
/// ```
pub fn check_layers(
    lower_name: &str,
    lower: Vec<f64>,
    upper_name: &str,
    upper: Vec<f64>,
) -> Result<(Vec<f64>, Vec<f64>), BoundsError> {
    if lower.len() != upper.len() {
        return Err(BoundsError::LengthMismatch {
            lower_name: lower_name.to_string(),
            lower_len: lower.len(),
            upper_name: upper_name.to_string(),
            upper_len: upper.len(),
        });
    }

    if let Some((index, (&clower, &cupper))) = lower
        .iter()
        .zip(upper.iter())
        .enumerate()
        .find(|(_, (l, u))| l > u)
    {
        return Err(BoundsError::Misordered {
            lower_name: lower_name.to_string(),
            upper_name: upper_name.to_string(),
            index,
            lower: clower,
            upper: cupper,
        });
    }

    Ok((lower, upper))
}
