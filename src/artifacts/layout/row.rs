use crate::artifacts::branch::record::BranchRecord;
use crate::artifacts::layout::plan::LayoutPlan;
use crate::artifacts::layout::{AUTHOR_COLUMN_WIDTH, COLUMN_GAP, TIME_COLUMN_WIDTH};
use colored::Colorize;

const ELLIPSIS: &str = "...";

/// Truncates `text` to at most `width` characters, marking cut text with a
/// trailing `...`. Text already within the width is returned unchanged, so
/// the operation is idempotent for a fixed width.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let kept: String = text
        .chars()
        .take(width.saturating_sub(ELLIPSIS.len()))
        .collect();

    format!("{}{}", kept.trim_end(), ELLIPSIS)
}

/// One rendered selection row: the colorized line shown to the user and its
/// plain counterpart, which fuzzy matching and tests run against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionRow {
    pub record: BranchRecord,
    pub display: String,
    pub plain: String,
}

impl SelectionRow {
    pub fn render(record: &BranchRecord, plan: &LayoutPlan) -> Self {
        let gap = " ".repeat(COLUMN_GAP);
        let name = pad(&truncate(&record.name, plan.name_width), plan.name_width);
        let time = pad(
            &truncate(&record.last_commit, TIME_COLUMN_WIDTH),
            TIME_COLUMN_WIDTH,
        );
        let message = truncate(&record.message, plan.message_width);

        let (display, plain) = if plan.show_author {
            let message = pad(&message, plan.message_width);
            let author = truncate(&record.author, AUTHOR_COLUMN_WIDTH);
            (
                format!(
                    "{}{gap}{}{gap}{}{gap}{}",
                    name.yellow(),
                    time.green(),
                    message.blue(),
                    author.magenta()
                ),
                format!("{name}{gap}{time}{gap}{message}{gap}{author}"),
            )
        } else {
            (
                format!(
                    "{}{gap}{}{gap}{}",
                    name.yellow(),
                    time.green(),
                    message.blue()
                ),
                format!("{name}{gap}{time}{gap}{message}"),
            )
        };

        SelectionRow {
            record: record.clone(),
            display,
            plain,
        }
    }
}

impl std::fmt::Display for SelectionRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display)
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
