//! Field type categories and their filter stages.

use serde::{Deserialize, Serialize};

/// The declared type category of a label field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    /// A single classification per sample
    Classification,
    /// A list of classifications per sample
    Classifications,
    /// A single detection per sample
    Detection,
    /// A list of detections per sample
    Detections,
}

/// The server-side filter stage a field type routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterStage {
    /// Single-value field filter
    FilterField,
    /// Multi-value classification filter
    FilterClassifications,
    /// Single-detection filter
    Filter,
    /// Multi-detection filter
    FilterDetections,
}

impl FieldType {
    /// The filter stage applied to fields of this type.
    ///
    /// The mapping is total; a field type without a stage cannot be
    /// represented.
    pub fn stage(&self) -> FilterStage {
        match self {
            FieldType::Classification => FilterStage::FilterField,
            FieldType::Classifications => FilterStage::FilterClassifications,
            FieldType::Detection => FilterStage::Filter,
            FieldType::Detections => FilterStage::FilterDetections,
        }
    }
}
