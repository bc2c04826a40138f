// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Character-budget text chunking with overlap.
//!
//! Documents are cut into chunks of at most `max_chars` characters,
//! preferring whitespace boundaries, with `overlap` characters carried
//! from the end of each chunk into the next so retrieval does not lose
//! context at cut points.

/// Split `text` into chunks of at most `max_chars` characters with
/// `overlap` characters shared between adjacent chunks.
///
/// Whitespace-trimmed; empty chunks are dropped. `overlap` must be
/// smaller than `max_chars` (enforced by config validation upstream).
pub fn chunk_text(text: &str, max_chars: usize, overlap: usize) -> Vec<String> {
    if max_chars == 0 {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let hard_end = (start + max_chars).min(chars.len());

        // Prefer cutting at the last whitespace inside the window so words
        // stay intact; fall back to the hard boundary for unbroken runs.
        let cut = if hard_end < chars.len() {
            (start..hard_end)
                .rev()
                .find(|&i| chars[i].is_whitespace())
                .filter(|&pos| pos > start)
                .unwrap_or(hard_end)
        } else {
            hard_end
        };

        let chunk: String = chars[start..cut].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if cut >= chars.len() {
            break;
        }

        // Step back by the overlap, but always make forward progress.
        start = cut.saturating_sub(overlap).max(start + 1);
    }

    chunks
}
