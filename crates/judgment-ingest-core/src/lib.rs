//! # Judgment Ingest Core
//!
//! Shared, I/O-free logic for judgment ingest: the chunk and point models,
//! the fixed-width character chunker, and the [`embedding::Embedder`] and
//! [`store::VectorStore`] traits the pipeline is written against.
//!
//! This crate contains no tokio, HTTP, or filesystem code. Concrete
//! embedding providers and the Qdrant client live in the `judgment-ingest`
//! app crate; the in-memory store here backs tests and local runs.

pub mod chunk;
pub mod embedding;
pub mod models;
pub mod store;
