use thiserror::Error;

use crate::parameters::bounds::BoundsError;

/// Error types for the swparam-rs library.
#[derive(Error, Debug)]
pub enum SwParamError {
    /// A scalar or sequence element has the wrong kind of value, e.g. a
    /// non-finite number or a non-boolean reversal flag.
    #[error("Invalid type for `{name}`: {message}")]
    InvalidType { name: String, message: String },

    /// A numeric input is outside its permitted domain.
    #[error("Invalid value for `{name}`: {message}")]
    InvalidValue { name: String, message: String },

    /// A paired bound sequence is malformed.
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// Extent bounds, value bounds and reversal flags disagree on the layer count.
    #[error(
        "Length of all inputs must be consistent: {extent} extent bounds, {value} value bounds, {reversal} reversal flags"
    )]
    InconsistentLayers {
        extent: usize,
        value: usize,
        reversal: usize,
    },

    /// A parameter must describe at least one layer.
    #[error("A parameter must have at least one layer")]
    EmptyLayers,

    /// A layering would need more layers than the configured cap.
    #[error("Layering needs more than {limit} layers")]
    LayerLimitExceeded { limit: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SwParamError {
    pub(crate) fn invalid_type(name: &str, message: impl Into<String>) -> Self {
        SwParamError::InvalidType {
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_value(name: &str, message: impl Into<String>) -> Self {
        SwParamError::InvalidValue {
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Wrong scalar type, including wrongly typed JSON input.
    pub fn is_type_error(&self) -> bool {
        match self {
            SwParamError::InvalidType { .. } => true,
            SwParamError::Json(err) => err.is_data(),
            _ => false,
        }
    }

    /// Numeric input outside of its required domain.
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            SwParamError::InvalidValue { .. } | SwParamError::LayerLimitExceeded { .. }
        )
    }

    /// Sequences of unequal length, or no layers at all.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            SwParamError::Bounds(BoundsError::LengthMismatch { .. })
                | SwParamError::InconsistentLayers { .. }
                | SwParamError::EmptyLayers
        )
    }

    /// A lower bound exceeds its upper bound.
    pub fn is_order_error(&self) -> bool {
        matches!(self, SwParamError::Bounds(BoundsError::Misordered { .. }))
    }
}

/// Result type alias for swparam-rs operations.
pub type Result<T> = std::result::Result<T, SwParamError>;
