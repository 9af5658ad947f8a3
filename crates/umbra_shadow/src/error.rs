//! Request validation errors
//!
//! Culling itself never fails; these describe malformed inputs for callers
//! that want to check a request before handing it to the culler.

use thiserror::Error;

use crate::request::MAX_FRUSTUM_CORNERS;

/// A [`CullingRequest`](crate::CullingRequest) that breaks its preconditions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CullingRequestError {
    #[error("caster bounds are inverted on the {axis} axis (min > max)")]
    InvertedBounds { axis: char },

    #[error("{count} frustum corners supplied, at most {max} are supported", max = MAX_FRUSTUM_CORNERS)]
    TooManyFrustumCorners { count: usize },

    #[error("light rotation is not a unit quaternion (length {length})")]
    NonUnitRotation { length: f32 },

    #[error("non-finite value in {field}")]
    NonFinite { field: &'static str },
}

pub type Result<T> = core::result::Result<T, CullingRequestError>;
