use crate::areas::repository::Repository;
use crate::artifacts::branch::REFERENCE_CHANGE_REGEX;
use crate::artifacts::branch::record::BranchRecord;
use anyhow::Context;
use derive_new::new;
use std::collections::{HashMap, HashSet};

/// Extracts checkout targets from reflog subjects, most recent first.
///
/// Subjects of the shape `<description> to <target>` contribute the token
/// after their last ` to ` separator; anything else (plain commits, merges)
/// is skipped. Duplicates keep their first, most recent position and the
/// result is capped at `depth` entries.
pub fn recent_targets(raw: &str, depth: usize) -> anyhow::Result<Vec<String>> {
    let re = regex::Regex::new(REFERENCE_CHANGE_REGEX)
        .with_context(|| format!("invalid reference change regex: {REFERENCE_CHANGE_REGEX}"))?;

    let mut seen = HashSet::new();
    let mut targets = Vec::new();

    for line in raw.lines() {
        if targets.len() >= depth {
            break;
        }

        let Some(caps) = re.captures(line.trim()) else {
            continue;
        };
        let target = caps[1].to_string();

        if seen.insert(target.clone()) {
            targets.push(target);
        }
    }

    Ok(targets)
}

/// Resolves extracted targets to records, caching point lookups so a target
/// that reappears never costs a second external call.
#[derive(Debug, new)]
pub struct RecencyResolver {
    #[new(default)]
    lookups: HashMap<String, BranchRecord>,
}

impl RecencyResolver {
    /// Matches each target against the listing by name, falling back to a
    /// point lookup for bare commit references. Targets that resolve to
    /// nothing are skipped; resolved names stay unique, first one wins.
    pub async fn resolve(
        &mut self,
        repository: &Repository,
        targets: &[String],
        listing: &[BranchRecord],
    ) -> Vec<BranchRecord> {
        let mut resolved = Vec::new();
        let mut names = HashSet::new();

        for target in targets {
            let record = match listing.iter().find(|record| &record.name == target) {
                Some(record) => Some(record.clone()),
                None => self.lookup(repository, target).await,
            };

            if let Some(record) = record
                && names.insert(record.name.clone())
            {
                resolved.push(record);
            }
        }

        resolved
    }

    async fn lookup(&mut self, repository: &Repository, target: &str) -> Option<BranchRecord> {
        if let Some(record) = self.lookups.get(target) {
            return Some(record.clone());
        }

        let record = repository.lookup_record(target).await?;
        self.lookups.insert(target.to_string(), record.clone());

        Some(record)
    }
}
