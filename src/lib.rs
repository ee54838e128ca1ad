//! Interactive branch checkout for git
//!
//! `gco` lists local branches (or recently visited references) and lets the
//! user pick one through a fuzzy search prompt or a numbered recency list.
//! The checkout itself is performed by the system `git` binary.

use derive_new::new;
use is_terminal::IsTerminal;

pub mod areas;
pub mod artifacts;
pub mod commands;

pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Search,
    Recent,
}

/// Ambient facts every selection round needs, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct SelectionConfig {
    pub mode: SelectionMode,
    pub terminal_width: usize,
    pub history_depth: usize,
}

impl SelectionConfig {
    /// Builds the config from the environment: terminal width from the
    /// attached terminal, falling back to a conventional 80 columns when
    /// stdout is redirected or the size query fails.
    pub fn detect(mode: SelectionMode) -> Self {
        let terminal_width = if std::io::stdout().is_terminal() {
            crossterm::terminal::size()
                .map(|(columns, _rows)| columns as usize)
                .ok()
                .filter(|columns| *columns > 0)
                .unwrap_or(DEFAULT_TERMINAL_WIDTH)
        } else {
            DEFAULT_TERMINAL_WIDTH
        };

        SelectionConfig::new(
            mode,
            terminal_width,
            artifacts::branch::DEFAULT_HISTORY_DEPTH,
        )
    }
}

/// How a selection round ended. Every variant maps to a zero exit; failures
/// surface as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The working tree now points at the named reference.
    Switched(String),
    /// The selection was already checked out, so git was never invoked.
    AlreadyCurrent(String),
    /// The user backed out; nothing changed.
    Cancelled,
    /// Nothing to offer: no branches, or no usable history.
    NothingToSelect,
}
