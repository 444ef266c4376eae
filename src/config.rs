//! Configuration options for building parameters.
//!
//! This module defines how strictly the base constructor checks layer-count
//! consistency and how many layers a layering scheme may produce.

use serde::{Deserialize, Serialize};

/// How the base constructor compares the layer counts implied by extent
/// bounds, value bounds and reversal flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConsistencyCheck {
    /// Fail only when the extent count differs from BOTH the value count and
    /// the reversal count.
    ///
    /// This admits, for example, two extent bounds with two value bounds but
    /// three reversal flags. Existing parameterizations depend on it.
    Lenient,

    /// Fail when any of the three counts differs.
    Strict,
}

impl Default for ConsistencyCheck {
    fn default() -> Self {
        ConsistencyCheck::Lenient
    }
}

impl ConsistencyCheck {
    /// Return true if the three layer counts are acceptable under this policy.
    pub fn accepts(&self, extent: usize, value: usize, reversal: usize) -> bool {
        match self {
            ConsistencyCheck::Lenient => !(extent != value && extent != reversal),
            ConsistencyCheck::Strict => extent == value && extent == reversal,
        }
    }
}

/// Configuration options for parameter construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayeringConfig {
    /// Layer-count consistency policy. Default: Lenient
    pub consistency: ConsistencyCheck,

    /// Maximum number of layers, half-space included. Bounds the
    /// layering-ratio growth loop and the requested layer count of the other
    /// schemes. Default: 1000
    pub max_layers: usize,
}

impl Default for LayeringConfig {
    fn default() -> Self {
        Self {
            consistency: ConsistencyCheck::default(),
            max_layers: 1000,
        }
    }
}

impl LayeringConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layer-count consistency policy.
    pub fn with_consistency(mut self, consistency: ConsistencyCheck) -> Self {
        self.consistency = consistency;
        self
    }

    /// Set the cap on layering-ratio growth.
    pub fn with_max_layers(mut self, max_layers: usize) -> Self {
        self.max_layers = max_layers;
        self
    }

    /// Shorthand for a configuration using [`ConsistencyCheck::Strict`].
    pub fn strict() -> Self {
        Self::default().with_consistency(ConsistencyCheck::Strict)
    }
}
