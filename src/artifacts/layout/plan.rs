use crate::artifacts::branch::record::BranchRecord;
use crate::artifacts::layout::{
    AUTHOR_COLUMN_WIDTH, COLUMN_GAP, MIN_MESSAGE_WIDTH, TIME_COLUMN_WIDTH,
};
use derive_new::new;

/// Column widths shared by every row of one selection round.
///
/// The name and relative-time columns always render. When the terminal is
/// too narrow for a readable message column, the author column is dropped
/// first, then the name column shrinks below the longest name; the message
/// column takes whatever remains and is the only one allowed to reach zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct LayoutPlan {
    pub name_width: usize,
    pub message_width: usize,
    pub show_author: bool,
}

impl LayoutPlan {
    pub fn plan(records: &[BranchRecord], terminal_width: usize, prefix_width: usize) -> Self {
        let longest_name = records
            .iter()
            .map(|record| record.name.chars().count())
            .max()
            .unwrap_or(0)
            .max(1);

        let message_width = Self::message_budget(terminal_width, prefix_width, longest_name, true);
        if message_width > MIN_MESSAGE_WIDTH {
            return LayoutPlan::new(longest_name, message_width, true);
        }

        let message_width = Self::message_budget(terminal_width, prefix_width, longest_name, false);
        if message_width > MIN_MESSAGE_WIDTH {
            return LayoutPlan::new(longest_name, message_width, false);
        }

        // Narrow terminal: shrink the name column until the message column
        // clears the minimum, but never below one character.
        let overhead = Self::fixed_overhead(prefix_width, false);
        let name_width = terminal_width
            .saturating_sub(overhead + MIN_MESSAGE_WIDTH + 1)
            .clamp(1, longest_name);
        let message_width = terminal_width.saturating_sub(overhead + name_width);

        LayoutPlan::new(name_width, message_width, false)
    }

    fn message_budget(
        terminal_width: usize,
        prefix_width: usize,
        name_width: usize,
        show_author: bool,
    ) -> usize {
        terminal_width.saturating_sub(Self::fixed_overhead(prefix_width, show_author) + name_width)
    }

    fn fixed_overhead(prefix_width: usize, show_author: bool) -> usize {
        let author = if show_author {
            AUTHOR_COLUMN_WIDTH + COLUMN_GAP
        } else {
            0
        };

        prefix_width + TIME_COLUMN_WIDTH + 2 * COLUMN_GAP + author
    }
}
