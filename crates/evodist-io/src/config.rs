//! Configuration for table parsing

use serde::{Deserialize, Serialize};

/// How a simulator output table is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableFormat {
    /// Field separator; runs of it count as one
    pub delimiter: u8,
    /// Lines starting with this byte are ignored
    pub comment: Option<u8>,
}

impl Default for TableFormat {
    fn default() -> Self {
        Self {
            delimiter: b' ',
            comment: Some(b'#'),
        }
    }
}

impl TableFormat {
    /// Comma separated values
    pub fn csv() -> Self {
        Self {
            delimiter: b',',
            ..Self::default()
        }
    }

    /// Tab separated values
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            ..Self::default()
        }
    }

    /// Replace the field separator
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replace the comment marker
    pub fn with_comment(mut self, comment: Option<u8>) -> Self {
        self.comment = comment;
        self
    }
}
