// SPDX-FileCopyrightText: 2026 Matricare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite-backed chunk store with embedding BLOB storage.
//!
//! One row per chunk: source path, position, text, and the embedding as a
//! little-endian f32 BLOB. The store is written once at ingestion time and
//! read-only during serving.

use std::path::Path;

use matricare_core::MatricareError;
use tokio_rusqlite::Connection;

/// Helper to convert tokio_rusqlite errors into MatricareError::Storage.
fn storage_err(e: tokio_rusqlite::Error) -> MatricareError {
    MatricareError::Storage {
        source: Box::new(e),
    }
}

/// A chunk ready for insertion.
#[derive(Debug, Clone)]
pub struct NewChunk {
    pub doc_path: String,
    pub chunk_index: usize,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// A chunk as stored, with its row id.
#[derive(Debug, Clone)]
pub struct StoredChunk {
    pub id: i64,
    pub doc_path: String,
    pub chunk_index: usize,
    pub content: String,
    pub embedding: Vec<f32>,
}

/// Persistent store for document chunks in SQLite.
pub struct ChunkStore {
    conn: Connection,
}

impl ChunkStore {
    /// Opens (or creates) the store at `path` and ensures the schema exists.
    pub async fn open(path: &Path) -> Result<Self, MatricareError> {
        let conn = Connection::open(path).await.map_err(storage_err)?;
        let store = Self { conn };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Opens an in-memory store (tests).
    pub async fn open_in_memory() -> Result<Self, MatricareError> {
        let conn = Connection::open_in_memory().await.map_err(storage_err)?;
        let store = Self { conn };
        store.ensure_schema().await?;
        Ok(store)
    }

    async fn ensure_schema(&self) -> Result<(), MatricareError> {
        self.conn
            .call(|conn| {
                conn.execute_batch(
                    "CREATE TABLE IF NOT EXISTS chunks (
                        id INTEGER PRIMARY KEY,
                        doc_path TEXT NOT NULL,
                        chunk_index INTEGER NOT NULL,
                        content TEXT NOT NULL,
                        embedding BLOB NOT NULL
                    );
                    CREATE INDEX IF NOT EXISTS idx_chunks_doc ON chunks(doc_path);",
                )?;
                Ok(())
            })
            .await
            .map_err(storage_err)
    }

    /// Number of chunks in the store.
    pub async fn count(&self) -> Result<usize, MatricareError> {
        self.conn
            .call(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM chunks", [], |row| row.get(0))?;
                Ok(count as usize)
            })
            .await
            .map_err(storage_err)
    }

    /// Insert a batch of chunks in one transaction.
    pub async fn insert_chunks(&self, chunks: Vec<NewChunk>) -> Result<(), MatricareError> {
        self.conn
            .call(move |conn| {
                let tx = conn.transaction()?;
                {
                    let mut stmt = tx.prepare(
                        "INSERT INTO chunks (doc_path, chunk_index, content, embedding) VALUES (?1, ?2, ?3, ?4)",
                    )?;
                    for chunk in &chunks {
                        stmt.execute(rusqlite::params![
                            chunk.doc_path,
                            chunk.chunk_index as i64,
                            chunk.content,
                            vec_to_blob(&chunk.embedding),
                        ])?;
                    }
                }
                tx.commit()?;
                Ok(())
            })
            .await
            .map_err(storage_err)
    }

    /// All chunk embeddings (lightweight, no content) for similarity search.
    pub async fn all_embeddings(&self) -> Result<Vec<(i64, Vec<f32>)>, MatricareError> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare("SELECT id, embedding FROM chunks")?;
                let results = stmt
                    .query_map([], |row| {
                        let id: i64 = row.get(0)?;
                        let blob: Vec<u8> = row.get(1)?;
                        Ok((id, blob_to_vec(&blob)))
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(results)
            })
            .await
            .map_err(storage_err)
    }

    /// Fetch full chunks by row id (batch retrieval after similarity search).
    pub async fn get_by_ids(&self, ids: &[i64]) -> Result<Vec<StoredChunk>, MatricareError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let ids = ids.to_vec();
        self.conn
            .call(move |conn| {
                let placeholders: Vec<String> = (1..=ids.len()).map(|i| format!("?{i}")).collect();
                let sql = format!(
                    "SELECT id, doc_path, chunk_index, content, embedding FROM chunks WHERE id IN ({})",
                    placeholders.join(", ")
                );
                let mut stmt = conn.prepare(&sql)?;

                let params: Vec<&dyn rusqlite::types::ToSql> =
                    ids.iter().map(|id| id as &dyn rusqlite::types::ToSql).collect();
                let chunks = stmt
                    .query_map(params.as_slice(), |row| {
                        let embedding_blob: Vec<u8> = row.get(4)?;
                        Ok(StoredChunk {
                            id: row.get(0)?,
                            doc_path: row.get(1)?,
                            chunk_index: row.get::<_, i64>(2)? as usize,
                            content: row.get(3)?,
                            embedding: blob_to_vec(&embedding_blob),
                        })
                    })?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(chunks)
            })
            .await
            .map_err(storage_err)
    }
}

/// Convert an f32 vector to bytes for SQLite BLOB storage.
pub fn vec_to_blob(vec: &[f32]) -> Vec<u8> {
    vec.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert a SQLite BLOB back to an f32 vector.
pub fn blob_to_vec(blob: &[u8]) -> Vec<f32> {
    blob.chunks_exact(4)
        .map(|chunk| f32::from_le_bytes(chunk.try_into().expect("chunks_exact yields 4 bytes")))
        .collect()
}

/// Cosine similarity between two vectors.
///
/// For L2-normalized vectors (as the embedder produces), this is the
/// dot product. Mismatched lengths score zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}
