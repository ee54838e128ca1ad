use crate::artifacts::branch::{CURRENT_MARKER, FIELD_SEPARATOR};
use derive_new::new;

/// A single selectable reference derived from one listing line.
///
/// `name` never carries the current-branch marker: when the listing flags a
/// reference as checked out, the marker is stripped and `is_current` records
/// the fact instead. History entries that resolve to bare commits reuse the
/// same shape with the full commit hash as the name.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct BranchRecord {
    pub name: String,
    pub last_commit: String,
    pub message: String,
    pub author: String,
    pub is_current: bool,
}

impl BranchRecord {
    /// Parses `for-each-ref` output of the form
    /// `name|marked-name|relative-time|subject|author`, one record per line.
    /// Short lines yield empty fields; lines without a usable name are
    /// dropped. An entirely empty listing is an error.
    pub fn parse_listing(raw: &str) -> anyhow::Result<Vec<BranchRecord>> {
        if raw.trim().is_empty() {
            anyhow::bail!("branch listing is empty");
        }

        let records = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Self::parse_line)
            .collect();

        Ok(records)
    }

    fn parse_line(line: &str) -> Option<BranchRecord> {
        let mut fields = line.split(FIELD_SEPARATOR);
        let plain_name = fields.next().unwrap_or_default().trim();
        let marked_name = fields.next().unwrap_or_default().trim();
        let last_commit = fields.next().unwrap_or_default();
        let message = fields.next().unwrap_or_default();
        let author = fields.next().unwrap_or_default();

        let (marked_name, is_current) = match marked_name.strip_prefix(CURRENT_MARKER) {
            Some(stripped) => (stripped, true),
            None => (marked_name, false),
        };
        let name = if marked_name.is_empty() {
            plain_name
        } else {
            marked_name
        };

        if name.is_empty() {
            return None;
        }

        Some(BranchRecord::new(
            name.to_string(),
            last_commit.to_string(),
            message.to_string(),
            author.to_string(),
            is_current,
        ))
    }

    /// Parses one `log -1` line of the form `hash|relative-time|subject|author`.
    pub fn parse_point_lookup(line: &str) -> Option<BranchRecord> {
        let mut fields = line.trim().split(FIELD_SEPARATOR);
        let hash = fields.next().unwrap_or_default().trim();

        if hash.is_empty() {
            return None;
        }

        Some(BranchRecord::new(
            hash.to_string(),
            fields.next().unwrap_or_default().to_string(),
            fields.next().unwrap_or_default().to_string(),
            fields.next().unwrap_or_default().to_string(),
            false,
        ))
    }
}
