//! Selection workflows
//!
//! Each selection mode is an `impl Repository` method:
//!
//! - `search`: Fuzzy search over every local branch
//! - `recent`: Numbered list of recently visited references
//! - `checkout`: Finalization shared by both modes
//!
//! The mode methods gather records, compute one layout plan, run their
//! prompt, and hand the chosen record to `checkout`.

pub mod checkout;
pub mod recent;
pub mod search;

pub(crate) const NO_BRANCHES_NOTICE: &str = "no local branches found";
