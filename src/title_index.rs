use indexmap::IndexMap;
use tracing::debug;

use crate::store::{Item, RowIndex};

/// Trimmed title -> row. The first row carrying a title wins.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    rows: IndexMap<String, RowIndex>,
}

impl TitleIndex {
    pub fn build(items: &[Item]) -> Self {
        let mut rows = IndexMap::with_capacity(items.len());
        let mut shadowed = 0usize;
        for (i, item) in items.iter().enumerate() {
            let title = item.title.trim();
            if rows.contains_key(title) {
                shadowed += 1;
                continue;
            }
            rows.insert(title.to_string(), RowIndex(i));
        }
        if shadowed > 0 {
            debug!(shadowed, "duplicate titles resolve to their first row");
        }
        Self { rows }
    }

    /// Row of `title`. Surrounding whitespace is ignored, empty titles never match.
    #[inline]
    pub fn lookup(&self, title: &str) -> Option<RowIndex> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        self.rows.get(title).copied()
    }

    /// Number of distinct titles
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
