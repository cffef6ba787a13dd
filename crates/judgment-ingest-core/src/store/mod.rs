//! Vector store abstraction.
//!
//! The [`VectorStore`] trait covers every operation the ingest pipeline and
//! the judgment endpoints need from the external vector database. All
//! operations target one fixed collection chosen when the store is built.
//!
//! Implementations must be `Send + Sync` to be shared across workers.

pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{IndexedPoint, PointPayload, ScoredPoint};

/// Abstract vector database for the judgments collection.
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`ensure_collection`](VectorStore::ensure_collection) | Create the collection if missing |
/// | [`upsert_points`](VectorStore::upsert_points) | Batched write of points |
/// | [`search`](VectorStore::search) | Cosine similarity query |
/// | [`points_for_judgment`](VectorStore::points_for_judgment) | All chunks of one judgment |
/// | [`delete_judgment`](VectorStore::delete_judgment) | Remove all chunks of one judgment |
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Create the collection with `dims`-wide cosine vectors.
    ///
    /// Idempotent: an existing collection is left untouched.
    async fn ensure_collection(&self, dims: usize) -> Result<()>;

    /// Write a batch of points in a single request.
    async fn upsert_points(&self, points: Vec<IndexedPoint>) -> Result<()>;

    /// Return the `limit` points most similar to `vector`, best first.
    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<ScoredPoint>>;

    /// Return the payloads of every point tagged with `judgment_id`.
    async fn points_for_judgment(&self, judgment_id: &str) -> Result<Vec<PointPayload>>;

    /// Delete every point tagged with `judgment_id`.
    async fn delete_judgment(&self, judgment_id: &str) -> Result<()>;
}
