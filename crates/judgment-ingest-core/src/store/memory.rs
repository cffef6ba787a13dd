//! In-memory [`VectorStore`] implementation for tests and local runs.
//!
//! Points live in a `Vec` behind `std::sync::RwLock`, with an id index for
//! upserts. Search is brute-force cosine similarity over all stored vectors.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::embedding::cosine_similarity;
use crate::models::{IndexedPoint, PointPayload, ScoredPoint};

use super::VectorStore;

/// In-memory store holding a single collection.
pub struct InMemoryVectorStore {
    dims: RwLock<Option<usize>>,
    points: RwLock<Points>,
}

#[derive(Default)]
struct Points {
    items: Vec<IndexedPoint>,
    /// Position of each point id in `items`.
    by_id: HashMap<String, usize>,
}

impl Points {
    fn upsert(&mut self, point: IndexedPoint) {
        match self.by_id.get(&point.id) {
            Some(&pos) => self.items[pos] = point,
            None => {
                self.by_id.insert(point.id.clone(), self.items.len());
                self.items.push(point);
            }
        }
    }

    fn retain(&mut self, keep: impl Fn(&IndexedPoint) -> bool) {
        self.items.retain(|p| keep(p));
        self.by_id = self
            .items
            .iter()
            .enumerate()
            .map(|(pos, p)| (p.id.clone(), pos))
            .collect();
    }
}

impl InMemoryVectorStore {
    pub fn new() -> Self {
        Self {
            dims: RwLock::new(None),
            points: RwLock::new(Points::default()),
        }
    }

    /// Width fixed by the first `ensure_collection`, if any.
    pub fn dims(&self) -> Option<usize> {
        *self.dims.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every stored point, in insertion order.
    pub fn points(&self) -> Vec<IndexedPoint> {
        self.points
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .items
            .clone()
    }
}

impl Default for InMemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    async fn ensure_collection(&self, dims: usize) -> Result<()> {
        let mut current = self.dims.write().unwrap_or_else(PoisonError::into_inner);
        if current.is_none() {
            *current = Some(dims);
        }
        Ok(())
    }

    async fn upsert_points(&self, points: Vec<IndexedPoint>) -> Result<()> {
        if let Some(dims) = self.dims() {
            if let Some(bad) = points.iter().find(|p| p.vector.len() != dims) {
                bail!(
                    "vector dimension mismatch for point {}: expected {}, got {}",
                    bad.id,
                    dims,
                    bad.vector.len()
                );
            }
        }

        let mut stored = self.points.write().unwrap_or_else(PoisonError::into_inner);
        for point in points {
            stored.upsert(point);
        }
        Ok(())
    }

    async fn search(&self, vector: &[f32], limit: usize) -> Result<Vec<ScoredPoint>> {
        let stored = self.points.read().unwrap_or_else(PoisonError::into_inner);
        let mut hits: Vec<ScoredPoint> = stored
            .items
            .iter()
            .map(|p| ScoredPoint {
                payload: p.payload.clone(),
                score: cosine_similarity(vector, &p.vector),
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        hits.truncate(limit);
        Ok(hits)
    }

    async fn points_for_judgment(&self, judgment_id: &str) -> Result<Vec<PointPayload>> {
        let stored = self.points.read().unwrap_or_else(PoisonError::into_inner);
        let mut payloads: Vec<PointPayload> = stored
            .items
            .iter()
            .filter(|p| p.payload.judgment_id == judgment_id)
            .map(|p| p.payload.clone())
            .collect();
        payloads.sort_by_key(|p| p.chunk_index);
        Ok(payloads)
    }

    async fn delete_judgment(&self, judgment_id: &str) -> Result<()> {
        let mut stored = self.points.write().unwrap_or_else(PoisonError::into_inner);
        stored.retain(|p| p.payload.judgment_id != judgment_id);
        Ok(())
    }
}
