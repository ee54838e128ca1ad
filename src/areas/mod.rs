//! Repository access components
//!
//! This module contains the pieces that talk to the working tree:
//!
//! - `git`: Spawned `git` wrappers (listing, point lookup, history, checkout)
//! - `repository`: Working tree discovery and high-level coordination

pub(crate) mod git;
pub mod repository;
