//! Adaptive column layout for selection rows
//!
//! - `plan`: Shared column-width computation for one record set
//! - `row`: Truncation and colorized row rendering

pub mod plan;
pub mod row;

pub const TIME_COLUMN_WIDTH: usize = 13;
pub const AUTHOR_COLUMN_WIDTH: usize = 15;
pub const COLUMN_GAP: usize = 2;
pub const MIN_MESSAGE_WIDTH: usize = 3;
// Prefix widths include a two character safety margin so rows never wrap.
pub const SEARCH_PREFIX_WIDTH: usize = 5;
pub const RECENT_PREFIX_WIDTH: usize = 7;
