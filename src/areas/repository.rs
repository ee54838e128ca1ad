use crate::areas::git::Git;
use crate::artifacts::branch::record::BranchRecord;
use std::cell::{RefCell, RefMut};
use std::path::PathBuf;

pub struct Repository {
    git: Git,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Repository {
    /// Wraps an already resolved working tree root; `discover` is the
    /// validating entry point.
    pub fn new(root: PathBuf, writer: Box<dyn std::io::Write>) -> Self {
        Repository {
            git: Git::new(root.into_boxed_path()),
            writer: RefCell::new(writer),
        }
    }

    /// Opens the repository enclosing the current directory. Runs before any
    /// listing or selection work so a missing repository fails fast.
    pub async fn discover(writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir()?;
        let root = Git::toplevel(&cwd).await?;

        Ok(Repository::new(root, writer))
    }

    pub(crate) fn git(&self) -> &Git {
        &self.git
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Parsed branch listing, most recently active first; empty when the
    /// repository has no local branches yet.
    pub async fn branch_records(&self) -> anyhow::Result<Vec<BranchRecord>> {
        let raw = self.git.branch_listing().await?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        BranchRecord::parse_listing(&raw)
    }

    /// Resolves `reference` to a synthetic record named by its full commit
    /// hash. Unresolvable references yield `None` so stale history entries
    /// can be skipped without failing the whole selection.
    pub async fn lookup_record(&self, reference: &str) -> Option<BranchRecord> {
        let raw = self.git.point_lookup(reference).await.ok()?;

        BranchRecord::parse_point_lookup(raw.lines().next()?)
    }
}
