//! # Parameter System
//!
//! This module provides the parameterization of a layered-earth model for
//! surface-wave inversion. A [`Parameter`] holds, for one physical property,
//! the permitted thickness/depth range and value range of every layer, and
//! whether each layer may reverse (take a lower value than the one above).
//!
//! ## Layering Schemes
//!
//! - **FX** ([`Parameter::from_fixed`]): one value at all depths
//! - **FTL** ([`Parameter::from_ftl`]): a fixed number of layers of fixed thickness
//! - **LN** ([`Parameter::from_ln_thickness`], [`Parameter::from_lni`],
//!   [`Parameter::from_ln_depth`]): a fixed number of layers sized from the
//!   measured wavelength range
//! - **LR** ([`Parameter::from_lr`]): layers growing by a layering ratio down
//!   to a half-space at the maximum depth of investigation
//!
//! ## Core Components
//!
//! - [`Parameter`]: validated per-layer bounds plus the scheme that produced them
//! - [`ParameterSpec`]: scheme-specific inputs, deserializable from JSON
//! - [`Parameterization`]: one parameter per physical [`Property`]
//! - [`Envelope`]: plotting coordinates for a parameter's permitted domain
//! - [`guards`]: scalar input checks and the [`Advisory`] soft corrections
//!
//! ## Example Usage
//!
//! ```rust
//! use swparam_rs::parameters::{Parameter, Scheme};
//!
//! // Shear-wave velocity between 100 and 400 m/s, layered by ratio
//! let vs = Parameter::from_lr(1.0, 30.0, 2.0, 100.0, 400.0, false, 2.0).unwrap();
//! assert_eq!(vs.scheme(), Scheme::Lr);
//!
//! // Swapped wavelengths are corrected, not rejected
//! let vs = Parameter::from_lr(30.0, 1.0, 2.0, 100.0, 400.0, false, 2.0).unwrap();
//! assert_eq!(vs.advisories().len(), 1);
//! ```

pub mod bounds;
pub mod envelope;
pub mod guards;
pub mod layering;
pub mod parameter;
pub mod parameterization;
pub mod scheme;

// Re-export key types
pub use bounds::{check_layers, Bounds, BoundsError};
pub use envelope::{Envelope, LayerRectangle};
pub use guards::{Advisory, Checked};
pub use layering::{LayerExtents, LayeringInputs};
pub use parameter::{Layer, Parameter};
pub use parameterization::{Parameterization, Property};
pub use scheme::{ParameterSpec, Scheme};
