//! # swparam-rs
//!
//! `swparam-rs` defines, validates and serializes the parameterization of a
//! layered-earth model used in surface-wave inversion.
//!
//! The library provides:
//! - Layering schemes turning a few controls (layer count, wavelength range,
//!   layering ratio, fixed thickness) into per-layer thickness or depth bounds
//! - A validated [`Parameter`](parameters::Parameter) aggregate holding those
//!   bounds with per-layer value bounds and reversal flags
//! - Soft correction of noisy inputs, reported as advisories and through `tracing`
//! - JSON text serialization and plotting coordinates for external collaborators
//!
//! ## Basic Usage
//!
//! ```
//! use swparam_rs::parameters::Parameter;
//!
//! let vs = Parameter::from_ln_thickness(1.0, 30.0, 3, 100.0, 400.0, false, 2.0).unwrap();
//! assert_eq!(vs.nlayers(), 3);
//! assert_eq!(vs.extent_max(), &[5.0, 5.0, 5.0]);
//! ```

// Public modules
pub mod config;
pub mod error;

// Parameter system
pub mod parameters;

// Re-exports for convenience
pub use config::{ConsistencyCheck, LayeringConfig};
pub use error::{Result, SwParamError};
pub use parameters::{Parameter, ParameterSpec, Scheme};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
