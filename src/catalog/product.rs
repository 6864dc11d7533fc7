use serde::{Deserialize, Serialize};

use crate::catalog::options::{Color, Size};

/// A product as stored in the remote index.
///
/// Owned and persisted entirely by the index service; this side only reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(rename = "imageId")]
    pub image_id: String,
    pub size: Size,
    pub color: Color,
}

/// One match from the index.
///
/// The relevance score is returned by the service and decoded for
/// completeness; nothing here ranks on it. Hits can arrive without
/// metadata and are skipped downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryHit {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub metadata: Option<ProductRecord>,
}
