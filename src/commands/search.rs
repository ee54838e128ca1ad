use crate::areas::repository::Repository;
use crate::artifacts::layout::SEARCH_PREFIX_WIDTH;
use crate::artifacts::layout::plan::LayoutPlan;
use crate::artifacts::layout::row::SelectionRow;
use crate::commands::NO_BRANCHES_NOTICE;
use crate::{CheckoutOutcome, SelectionConfig};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use inquire::{InquireError, Select};
use std::io::Write;

const PROMPT_MESSAGE: &str = "Select a branch";
const PAGE_SIZE: usize = 10;

impl Repository {
    /// Fuzzy-search selection over every local branch. The scorer matches
    /// the typed input against the whole rendered row, so name, message and
    /// author are all searchable. Esc and Ctrl-C leave the working tree
    /// untouched.
    pub async fn checkout_by_search(
        &self,
        config: &SelectionConfig,
    ) -> anyhow::Result<CheckoutOutcome> {
        let records = self.branch_records().await?;
        if records.is_empty() {
            writeln!(self.writer(), "{NO_BRANCHES_NOTICE}")?;
            return Ok(CheckoutOutcome::NothingToSelect);
        }

        let plan = LayoutPlan::plan(&records, config.terminal_width, SEARCH_PREFIX_WIDTH);
        let rows: Vec<SelectionRow> = records
            .iter()
            .map(|record| SelectionRow::render(record, &plan))
            .collect();

        let matcher = SkimMatcherV2::default();
        let selection = Select::new(PROMPT_MESSAGE, rows)
            .with_page_size(PAGE_SIZE)
            .with_scorer(&|input, row, _value, _index| score_row(&matcher, input, row))
            .prompt();

        match selection {
            Ok(row) => self.checkout_selection(&row.record).await,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                Ok(CheckoutOutcome::Cancelled)
            }
            Err(error) => Err(error.into()),
        }
    }
}

/// Empty input keeps every candidate with the same score; anything else is
/// fuzzy matched against the row's plain rendering.
fn score_row(matcher: &SkimMatcherV2, input: &str, row: &SelectionRow) -> Option<i64> {
    if input.is_empty() {
        return Some(0);
    }

    matcher.fuzzy_match(&row.plain, input)
}
