//! Parameterization implementation
//!
//! This module provides the [`Parameterization`] struct, which groups one
//! [`Parameter`] per physical property of the layered-earth model.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LayeringConfig;
use crate::error::Result;
use crate::parameters::parameter::{Parameter, RawParameter};
use crate::parameters::scheme::ParameterSpec;

/// Physical property described by a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Compression-wave velocity
    #[serde(rename = "vp")]
    Vp,

    /// Poisson's ratio
    #[serde(rename = "pr")]
    Pr,

    /// Shear-wave velocity
    #[serde(rename = "vs")]
    Vs,

    /// Mass density
    #[serde(rename = "rh")]
    Rh,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Vp => "vp",
            Property::Pr => "pr",
            Property::Vs => "vs",
            Property::Rh => "rh",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parameter per physical property
///
/// # Examples
///
/// ```
/// use swparam_rs::parameters::{Parameter, Parameterization, Property};
///
/// let mut model = Parameterization::new();
/// model.insert(Property::Vs, Parameter::from_lr(1.0, 30.0, 2.0, 100.0, 400.0, false, 2.0).unwrap());
/// model.insert(Property::Rh, Parameter::from_fixed(2000.0).unwrap());
///
/// assert_eq!(model.len(), 2);
/// assert_eq!(model.get(Property::Vs).unwrap().nlayers(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameterization {
    params: BTreeMap<Property, Parameter>,
}

impl Parameterization {
    /// Create an empty parameterization
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every spec with `config`, failing on the first invalid one.
    pub fn from_specs<I>(specs: I, config: &LayeringConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (Property, ParameterSpec)>,
    {
        let mut model = Self::new();
        for (property, spec) in specs {
            model.insert(property, spec.build(config)?);
        }
        Ok(model)
    }

    /// Set the parameter for `property`, returning the one it replaces.
    pub fn insert(&mut self, property: Property, param: Parameter) -> Option<Parameter> {
        self.params.insert(property, param)
    }

    pub fn get(&self, property: Property) -> Option<&Parameter> {
        self.params.get(&property)
    }

    pub fn remove(&mut self, property: Property) -> Option<Parameter> {
        self.params.remove(&property)
    }

    pub fn contains(&self, property: Property) -> bool {
        self.params.contains_key(&property)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate in property order (vp, pr, vs, rh)
    pub fn iter(&self) -> impl Iterator<Item = (Property, &Parameter)> {
        self.params.iter().map(|(property, param)| (*property, param))
    }

    /// Serialize to pretty JSON text
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON text; every parameter is re-validated.
    ///
    /// Validation failures keep their own error class rather than surfacing
    /// as JSON errors.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawParameterization = serde_json::from_str(json)?;
        let params = raw
            .params
            .into_iter()
            .map(|(property, param)| Parameter::try_from(param).map(|param| (property, param)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { params })
    }
}

/// Unvalidated serialized form of a [`Parameterization`]
#[derive(Debug, Deserialize)]
struct RawParameterization {
    params: BTreeMap<Property, RawParameter>,
}
