//! Optional offset/limit for list endpoints.

use serde::Deserialize;

/// Upper bound applied to any requested `limit`.
pub const MAX_LIMIT: u64 = 500;

/// Largest offset the SQL drivers can bind (they take a signed 64-bit value).
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Pagination parameters. Both absent means "everything".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// rows to skip
    #[serde(default)]
    pub offset: Option<u64>,
    /// maximum rows to return
    #[serde(default)]
    pub limit: Option<u64>,
}

impl Pagination {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset: Some(offset), limit: Some(limit) }
    }

    /// Offset defaulted to 0 and capped at `MAX_OFFSET`, limit clamped into
    /// `1..=MAX_LIMIT` when present.
    pub fn normalize(self) -> (u64, Option<u64>) {
        let offset = self.offset.unwrap_or(0).min(MAX_OFFSET);
        let limit = self.limit.map(|l| l.clamp(1, MAX_LIMIT));
        (offset, limit)
    }

    /// Apply to an already ordered sequence.
    pub fn apply<T>(self, rows: impl IntoIterator<Item = T>) -> Vec<T> {
        let (offset, limit) = self.normalize();
        let rows = rows.into_iter().skip(offset as usize);
        match limit {
            Some(l) => rows.take(l as usize).collect(),
            None => rows.collect(),
        }
    }
}
