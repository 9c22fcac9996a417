//! Offset/limit windowing for list endpoints

use serde::Deserialize;

/// Default number of rows skipped
const DEFAULT_SKIP: i64 = 0;

/// Default maximum rows returned
const DEFAULT_LIMIT: i64 = 10;

/// Offset-based window over an ordered listing.
///
/// Values are handed to the store as-is. SQLite treats a negative
/// limit as unbounded and a negative offset as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub skip: i64,
    pub limit: i64,
}

impl Window {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindowParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl From<WindowParams> for Window {
    fn from(params: WindowParams) -> Self {
        Self::new(
            params.skip.unwrap_or(DEFAULT_SKIP),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
