//! Plotting data for a parameter's permitted domain
//!
//! Nothing here draws. [`Envelope`] turns a [`Parameter`] into plain
//! coordinates that a plotting front end can fill and stroke: one rectangle
//! per layer spanning its value range and extent range, and an example
//! step profile through the middle of every rectangle.

use serde::Serialize;

use crate::parameters::bounds::Bounds;
use crate::parameters::parameter::Parameter;

/// Permitted domain of one layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayerRectangle {
    /// Zero-based layer index
    pub layer: usize,

    /// Thickness or depth range, plotted on the vertical axis
    pub extent: Bounds,

    /// Property range, plotted on the horizontal axis
    pub value: Bounds,
}

impl LayerRectangle {
    /// Corners as `(xs, ys)`, in the order top-left, bottom-left,
    /// bottom-right, top-right.
    pub fn corners(&self) -> ([f64; 4], [f64; 4]) {
        let (left, right) = (self.value.min, self.value.max);
        let (upper, lower) = (self.extent.min, self.extent.max);
        ([left, left, right, right], [upper, lower, lower, upper])
    }
}

/// Rectangles and example profile for one parameter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    rectangles: Vec<LayerRectangle>,
    max_extent: f64,
}

impl Envelope {
    pub fn from_parameter(param: &Parameter) -> Self {
        let rectangles = param
            .layers()
            .enumerate()
            .map(|(layer, l)| LayerRectangle {
                layer,
                extent: l.extent,
                value: l.value,
            })
            .collect();

        Self {
            rectangles,
            max_extent: param.max_extent(),
        }
    }

    pub fn rectangles(&self) -> &[LayerRectangle] {
        &self.rectangles
    }

    /// Deepest extent over all layers; the natural bottom of the plot
    pub fn max_extent(&self) -> f64 {
        self.max_extent
    }

    /// Example profile as `(value, depth)` points.
    ///
    /// Each layer's mid value is held from the previous boundary down to the
    /// midpoint of its own extent range. The profile starts at depth 0 and
    /// the last layer runs down to [`Envelope::max_extent`].
    pub fn example_profile(&self) -> Vec<(f64, f64)> {
        let mut points = Vec::with_capacity(2 * self.rectangles.len());
        let mut top = 0.0;
        let last = self.rectangles.len().saturating_sub(1);

        for (index, rect) in self.rectangles.iter().enumerate() {
            let value = rect.value.midpoint();
            let bottom = if index == last {
                self.max_extent
            } else {
                rect.extent.midpoint()
            };
            points.push((value, top));
            points.push((value, bottom));
            top = bottom;
        }

        points
    }
}
