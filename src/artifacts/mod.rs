//! Selection data structures and algorithms
//!
//! This module contains the types the selection flow is built from:
//!
//! - `branch`: Listing records and recency derivation
//! - `layout`: Adaptive column widths, truncation, row rendering

pub mod branch;
pub mod layout;
