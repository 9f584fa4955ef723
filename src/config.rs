//! Construction-time settings for a [`HashTable`](crate::HashTable).

/// Configuration for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Number of buckets. Fixed for the life of the table; must be non-zero.
    pub capacity: usize,
    /// Log a warning whenever an insert grows a chain past this length.
    pub long_chain_warning: Option<usize>,
}

impl TableConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_long_chain_warning(mut self, threshold: Option<usize>) -> Self {
        self.long_chain_warning = threshold;
        self
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            long_chain_warning: Some(16),
        }
    }
}
