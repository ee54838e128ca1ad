use crate::areas::repository::Repository;
use crate::artifacts::branch::recency::{RecencyResolver, recent_targets};
use crate::artifacts::layout::RECENT_PREFIX_WIDTH;
use crate::artifacts::layout::plan::LayoutPlan;
use crate::artifacts::layout::row::SelectionRow;
use crate::commands::NO_BRANCHES_NOTICE;
use crate::{CheckoutOutcome, SelectionConfig};
use std::io::{BufRead, Write};

const NO_HISTORY_NOTICE: &str = "no recent checkouts found";

impl Repository {
    /// Numbered recent-checkout selection: prints the resolved history once,
    /// then reads an index from `reader` until it is valid or input ends.
    pub async fn checkout_by_recency(
        &self,
        config: &SelectionConfig,
        reader: &mut impl BufRead,
    ) -> anyhow::Result<CheckoutOutcome> {
        let records = self.branch_records().await?;
        if records.is_empty() {
            writeln!(self.writer(), "{NO_BRANCHES_NOTICE}")?;
            return Ok(CheckoutOutcome::NothingToSelect);
        }

        let history = self.git().reference_history(config.history_depth).await?;
        let targets = recent_targets(&history, config.history_depth)?;
        let mut resolver = RecencyResolver::new();
        let resolved = resolver.resolve(self, &targets, &records).await;

        if resolved.is_empty() {
            writeln!(self.writer(), "{NO_HISTORY_NOTICE}")?;
            return Ok(CheckoutOutcome::NothingToSelect);
        }

        let plan = LayoutPlan::plan(&resolved, config.terminal_width, RECENT_PREFIX_WIDTH);
        for (index, record) in resolved.iter().enumerate() {
            let row = SelectionRow::render(record, &plan);
            writeln!(self.writer(), " {index:>2}) {row}")?;
        }

        let selection = read_selection_index(reader, &mut *self.writer(), resolved.len())?;

        match selection {
            Some(index) => self.checkout_selection(&resolved[index]).await,
            None => Ok(CheckoutOutcome::Cancelled),
        }
    }
}

/// Prompts until the input line parses to an index in `[0, count)`. `None`
/// means input ended, which callers treat as cancellation.
fn read_selection_index(
    reader: &mut impl BufRead,
    writer: &mut dyn Write,
    count: usize,
) -> anyhow::Result<Option<usize>> {
    loop {
        write!(writer, "Checkout which branch [0-{}]? ", count - 1)?;
        writer.flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            writeln!(writer)?;
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(index) if index < count => return Ok(Some(index)),
            _ => writeln!(writer, "invalid selection: {}", line.trim())?,
        }
    }
}
