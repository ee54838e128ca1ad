use crate::CheckoutOutcome;
use crate::areas::repository::Repository;
use crate::artifacts::branch::record::BranchRecord;
use std::io::Write;

impl Repository {
    /// Finalizes a selection: a target that is already checked out is
    /// acknowledged without touching git, anything else goes to
    /// `git checkout`.
    pub async fn checkout_selection(
        &self,
        record: &BranchRecord,
    ) -> anyhow::Result<CheckoutOutcome> {
        let target = record.name.trim();

        if record.is_current {
            writeln!(self.writer(), "Already on '{target}'")?;
            return Ok(CheckoutOutcome::AlreadyCurrent(target.to_string()));
        }

        self.git().checkout(target).await?;

        Ok(CheckoutOutcome::Switched(target.to_string()))
    }
}
