//! Layering schemes
//!
//! Pure functions turning a handful of scalar controls into per-layer
//! minimum/maximum thickness or depth arrays:
//!
//! - **FX**: a single placeholder layer, the property never varies.
//! - **FTL**: `nlayers` layers of one fixed thickness.
//! - **LN** (thickness, increasing and depth forms): a fixed number of layers
//!   whose extents come from the measured wavelength range.
//! - **LR**: the layering ratio of Cox and Teague (2016), where each layer may
//!   be `ratio` times thicker than the one above, terminated by a half-space
//!   at the maximum depth of investigation.
//!
//! The wavelength based schemes share [`LayeringInputs`], which carries the
//! validated wavelength pair and depth factor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SwParamError};
use crate::parameters::guards::{
    check_depth_factor, check_greater_than_one, check_nlayers, check_positive, check_wavelengths,
    Checked,
};

/// Placeholder minimum extent of the single FX layer.
pub const FX_EXTENT_MIN: f64 = 1824.0;

/// Placeholder maximum extent of the single FX layer.
pub const FX_EXTENT_MAX: f64 = 1883.0;

/// Nominal thickness of the terminal half-space. The half-space is infinite;
/// this only gives it a drawable extent.
pub const HALF_SPACE_THICKNESS: f64 = 1.0;

/// Default LNI growth factor between adjacent layers.
pub const DEFAULT_INCREASING_FACTOR: f64 = 1.2;

/// Default factor dividing the longest wavelength to estimate the maximum depth.
pub const DEFAULT_DEPTH_FACTOR: f64 = 2.0;

/// Per-layer lower and upper thickness or depth, in meters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerExtents {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl LayerExtents {
    fn uniform(nlayers: usize, min: f64, max: f64) -> Self {
        Self {
            min: vec![min; nlayers],
            max: vec![max; nlayers],
        }
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.min.len()
    }

    /// True if there are no layers
    pub fn is_empty(&self) -> bool {
        self.min.is_empty()
    }
}

/// Validated inputs shared by the wavelength based schemes
///
/// `wmin`/`wmax` are the shortest and longest wavelengths measured from the
/// fundamental-mode Rayleigh dispersion, already ordered; `depth_factor` is
/// already clamped to its minimum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayeringInputs {
    pub wmin: f64,
    pub wmax: f64,
    pub depth_factor: f64,
}

impl LayeringInputs {
    /// Validate a wavelength pair and depth factor.
    ///
    /// Swapped wavelengths and a too small depth factor are corrected and
    /// reported as advisories; any other problem is an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use swparam_rs::parameters::layering::LayeringInputs;
    ///
    /// let checked = LayeringInputs::check(30.0, 1.0, 1.0).unwrap();
    /// assert_eq!(checked.advisories.len(), 2);
    /// assert_eq!(checked.value.wmin, 1.0);
    /// assert_eq!(checked.value.dmax(), 15.0);
    /// ```
    pub fn check(wmin: f64, wmax: f64, depth_factor: f64) -> Result<Checked<Self>> {
        let mut advisories = Vec::new();
        let (wmin, wmax) = check_wavelengths(wmin, wmax)?.drain_into(&mut advisories);
        let depth_factor = check_depth_factor(depth_factor)?.drain_into(&mut advisories);

        Ok(Checked {
            value: Self {
                wmin,
                wmax,
                depth_factor,
            },
            advisories,
        })
    }

    /// Maximum depth of investigation, `wmax / depth_factor`
    pub fn dmax(&self) -> f64 {
        self.wmax / self.depth_factor
    }

    /// Thinnest resolvable layer, `wmin / 3`
    pub fn min_thickness(&self) -> f64 {
        self.wmin / 3.0
    }

    /// Layering by Number in thickness form.
    ///
    /// Every layer gets a minimum thickness of `wmin/3`. The maximum thickness
    /// is `dmax/nlayers` when `increasing` is false (LN) and `dmax` when it
    /// is true (LNI). More than `max_layers` layers fail with
    /// `LayerLimitExceeded`.
    pub fn ln_thickness(
        &self,
        nlayers: usize,
        increasing: bool,
        max_layers: usize,
    ) -> Result<LayerExtents> {
        let nlayers = check_nlayers(nlayers, max_layers)?;
        let dmax = self.dmax();
        let max_thickness = if increasing {
            dmax
        } else {
            dmax / nlayers as f64
        };

        debug!(nlayers, dmax, increasing, "layering by number (thickness)");
        Ok(LayerExtents::uniform(
            nlayers,
            self.min_thickness(),
            max_thickness,
        ))
    }

    /// Layering by Number in depth form.
    ///
    /// Minimum thickness `wmin/3`, maximum depth `dmax`, for every layer.
    pub fn ln_depth(&self, nlayers: usize, max_layers: usize) -> Result<LayerExtents> {
        let nlayers = check_nlayers(nlayers, max_layers)?;
        let dmax = self.dmax();

        debug!(nlayers, dmax, "layering by number (depth)");
        Ok(LayerExtents::uniform(nlayers, self.min_thickness(), dmax))
    }

    /// Layering Ratio depths, terminated by a half-space at `dmax`.
    ///
    /// Layer 0 spans `[wmin/3, wmin/2]`. Each following layer starts where the
    /// previous one may end and may be `ratio` times as thick as it. Layer 0
    /// has no layer above it, so its thickness counts as its full maximum
    /// depth. Growth stops once a layer reaches `dmax`, then:
    ///
    /// - if the gap between `dmax` and the second-to-last maximum depth is
    ///   larger than the second-to-last layer's thickness, the last layer is
    ///   cut back to `dmax` and a half-space is appended below it;
    /// - otherwise the second-to-last layer is stretched down to `dmax` and
    ///   the last layer becomes the half-space.
    ///
    /// The half-space always spans `[dmax, dmax + 1]`.
    ///
    /// # Errors
    ///
    /// - `InvalidValue` if `ratio <= 1` or if `wmin/2 >= dmax`, in which case
    ///   there is no room for a single layer above the half-space.
    /// - `InvalidValue` if `dmax` is so large that `dmax + 1` rounds to `dmax`
    ///   (from 2^53 on), leaving the half-space without thickness.
    /// - `LayerLimitExceeded` if more than `max_layers` layers, half-space
    ///   included, are needed.
    pub fn lr_depths(&self, ratio: f64, max_layers: usize) -> Result<LayerExtents> {
        let ratio = check_greater_than_one("lr", ratio)?;
        let dmax = self.dmax();

        if dmax + HALF_SPACE_THICKNESS <= dmax {
            return Err(SwParamError::invalid_value(
                "wmax",
                format!(
                    "maximum depth {} (wmax / depth_factor) leaves no room for the half-space",
                    dmax
                ),
            ));
        }

        let seed = self.wmin / 2.0;
        if seed >= dmax {
            return Err(SwParamError::invalid_value(
                "wmax",
                format!(
                    "maximum depth {} (wmax / depth_factor) must exceed wmin / 2 = {}",
                    dmax, seed
                ),
            ));
        }

        let mut mindepth = vec![self.min_thickness()];
        let mut maxdepth = vec![seed];

        loop {
            let n = maxdepth.len();
            let last = maxdepth[n - 1];
            if last >= dmax {
                break;
            }
            if n >= max_layers {
                return Err(SwParamError::LayerLimitExceeded { limit: max_layers });
            }

            let thickness = if n == 1 { last } else { last - maxdepth[n - 2] };
            mindepth.push(last);
            maxdepth.push(last + thickness * ratio);
        }

        // The loop ran at least once, so there are two or more layers here.
        let n = maxdepth.len();
        let penultimate = maxdepth[n - 2];
        let penultimate_thickness = if n >= 3 {
            penultimate - maxdepth[n - 3]
        } else {
            penultimate
        };

        if dmax - penultimate > penultimate_thickness {
            if n >= max_layers {
                return Err(SwParamError::LayerLimitExceeded { limit: max_layers });
            }
            maxdepth[n - 1] = dmax;
            mindepth.push(dmax);
            maxdepth.push(dmax + HALF_SPACE_THICKNESS);
        } else {
            maxdepth[n - 2] = dmax;
            mindepth[n - 1] = dmax;
            maxdepth[n - 1] = dmax + HALF_SPACE_THICKNESS;
        }

        debug!(nlayers = maxdepth.len(), dmax, ratio, "layering ratio");
        Ok(LayerExtents {
            min: mindepth,
            max: maxdepth,
        })
    }
}

/// Placeholder extents for Fixed (FX) parameters.
pub fn depth_fx() -> LayerExtents {
    LayerExtents::uniform(1, FX_EXTENT_MIN, FX_EXTENT_MAX)
}

/// Fixed Thickness Layering: `nlayers` layers whose minimum and maximum
/// thickness are both `thickness`.
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::layering::depth_ftl;
///
/// let extents = depth_ftl(3, 2.5, 1000).unwrap();
/// assert_eq!(extents.min, vec![2.5; 3]);
/// assert_eq!(extents.max, vec![2.5; 3]);
/// ```
pub fn depth_ftl(nlayers: usize, thickness: f64, max_layers: usize) -> Result<LayerExtents> {
    let nlayers = check_nlayers(nlayers, max_layers)?;
    let thickness = check_positive("thickness", thickness)?;
    Ok(LayerExtents::uniform(nlayers, thickness, thickness))
}

/// Layering by Number, thickness form, from raw scalars, with the given cap
/// on the layer count.
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::layering::depth_ln_thickness;
///
/// let extents = depth_ln_thickness(1.0, 30.0, 3, 2.0, false, 1000).unwrap().value;
/// assert_eq!(extents.max, vec![5.0; 3]);
/// ```
pub fn depth_ln_thickness(
    wmin: f64,
    wmax: f64,
    nlayers: usize,
    depth_factor: f64,
    increasing: bool,
    max_layers: usize,
) -> Result<Checked<LayerExtents>> {
    let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
    let extents = checked.value.ln_thickness(nlayers, increasing, max_layers)?;
    Ok(checked.map(|_| extents))
}

/// Layering by Number, depth form, from raw scalars, with the given cap on
/// the layer count.
pub fn depth_ln_depth(
    wmin: f64,
    wmax: f64,
    nlayers: usize,
    depth_factor: f64,
    max_layers: usize,
) -> Result<Checked<LayerExtents>> {
    let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
    let extents = checked.value.ln_depth(nlayers, max_layers)?;
    Ok(checked.map(|_| extents))
}

/// Layering Ratio from raw scalars, with the given cap on the layer count.
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::layering::depth_lr;
///
/// let extents = depth_lr(1.0, 30.0, 2.0, 2.0, 1000).unwrap().value;
/// assert_eq!(extents.max, vec![0.5, 1.5, 3.5, 7.5, 15.0, 16.0]);
/// ```
pub fn depth_lr(
    wmin: f64,
    wmax: f64,
    lr: f64,
    depth_factor: f64,
    max_layers: usize,
) -> Result<Checked<LayerExtents>> {
    let checked = LayeringInputs::check(wmin, wmax, depth_factor)?;
    let extents = checked.value.lr_depths(lr, max_layers)?;
    Ok(checked.map(|_| extents))
}

/// Broadcast scalar value bounds and a reversal flag to `nlayers` layers.
pub fn broadcast(
    nlayers: usize,
    value_min: f64,
    value_max: f64,
    reversal: bool,
) -> (Vec<f64>, Vec<f64>, Vec<bool>) {
    (
        vec![value_min; nlayers],
        vec![value_max; nlayers],
        vec![reversal; nlayers],
    )
}
