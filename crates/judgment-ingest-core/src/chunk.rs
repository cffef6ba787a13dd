//! Fixed-width character chunker.
//!
//! Splits extracted document text into [`TextChunk`]s of at most
//! `max_chars` characters. Boundaries fall on a fixed character count
//! (Unicode scalar values, never inside a UTF-8 sequence) and are not
//! word or sentence aware. Each piece is trimmed; pieces that are empty
//! after trimming are dropped and the survivors are numbered from 0.

use crate::models::TextChunk;

/// Chunking error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError {
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,
}

/// Split text into chunks of at most `max_chars` characters.
///
/// Deterministic: the same input always yields the same chunks and indices.
/// Empty or whitespace-only text yields no chunks.
pub fn split_text(text: &str, max_chars: usize) -> Result<Vec<TextChunk>, ChunkError> {
    if max_chars == 0 {
        return Err(ChunkError::InvalidChunkSize);
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut count = 0usize;

    for (pos, _) in text.char_indices() {
        if count == max_chars {
            push_piece(&mut chunks, &text[start..pos]);
            start = pos;
            count = 0;
        }
        count += 1;
    }

    if start < text.len() {
        push_piece(&mut chunks, &text[start..]);
    }

    Ok(chunks)
}

fn push_piece(chunks: &mut Vec<TextChunk>, piece: &str) {
    let trimmed = piece.trim();
    if trimmed.is_empty() {
        return;
    }
    chunks.push(TextChunk {
        index: chunks.len(),
        text: trimmed.to_string(),
    });
}
