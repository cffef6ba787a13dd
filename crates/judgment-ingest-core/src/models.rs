//! Data types that flow from the chunker to the vector store.

use serde::{Deserialize, Serialize};

/// A bounded slice of one document's extracted text.
///
/// `index` is the 0-based position of the chunk within its document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
}

/// Payload stored alongside every vector.
///
/// Field names match the payload keys used in the `judgments` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPayload {
    pub judgment_id: String,
    pub chunk_index: usize,
    pub text: String,
}

/// The unit persisted to the vector store: one per [`TextChunk`].
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPoint {
    pub id: String,
    pub vector: Vec<f32>,
    pub payload: PointPayload,
}

impl IndexedPoint {
    /// Build a point with a fresh random id.
    ///
    /// Ids are never derived from content, so indexing the same text twice
    /// produces two distinct points.
    pub fn new(vector: Vec<f32>, payload: PointPayload) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            vector,
            payload,
        }
    }
}

/// A similarity-search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPoint {
    pub payload: PointPayload,
    pub score: f32,
}

/// Derive the judgment id for a document from its path inside an archive.
///
/// Both path separators are replaced with `__`, so `2020/civil/a.pdf`
/// becomes `2020__civil__a.pdf` and every chunk of one file shares an id.
pub fn judgment_id_from_path(relative_path: &str) -> String {
    relative_path.replace('/', "__").replace('\\', "__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgment_id_normalizes_both_separators() {
        assert_eq!(judgment_id_from_path("a.pdf"), "a.pdf");
        assert_eq!(judgment_id_from_path("2020/civil/a.pdf"), "2020__civil__a.pdf");
        assert_eq!(judgment_id_from_path("2020\\civil\\a.pdf"), "2020__civil__a.pdf");
    }

    #[test]
    fn point_ids_are_unique_for_identical_payloads() {
        let payload = PointPayload {
            judgment_id: "j".into(),
            chunk_index: 0,
            text: "same".into(),
        };
        let a = IndexedPoint::new(vec![1.0], payload.clone());
        let b = IndexedPoint::new(vec![1.0], payload);
        assert_ne!(a.id, b.id);
    }
}
