use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

const LISTING_FORMAT: &str =
    "%(refname:short)|%(HEAD)%(refname:short)|%(committerdate:relative)|%(subject)|%(authorname)";
const POINT_LOOKUP_FORMAT: &str = "%H|%cr|%s|%an";
const HISTORY_FORMAT: &str = "%gs";

/// Macro for debug logging of spawned git commands, enabled with the
/// debug_git feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(any(feature = "debug_git"))]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Thin wrapper around the system `git` binary, pinned to one working tree.
#[derive(Debug, new)]
pub struct Git {
    root: Box<Path>,
}

impl Git {
    /// Resolves the enclosing working tree root, starting from `dir`.
    pub async fn toplevel(dir: &Path) -> anyhow::Result<PathBuf> {
        debug_log!("git rev-parse --show-toplevel");

        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(dir)
            .output()
            .await
            .context("failed to spawn git rev-parse")?;

        if !output.status.success() {
            anyhow::bail!("not a git repository (or any of the parent directories)");
        }

        Ok(PathBuf::from(
            String::from_utf8_lossy(&output.stdout).trim(),
        ))
    }

    /// Local branches, most recently active first, one pipe-delimited record
    /// per line.
    pub async fn branch_listing(&self) -> anyhow::Result<String> {
        self.capture(&[
            "for-each-ref",
            "--sort=-committerdate",
            "refs/heads",
            &format!("--format={LISTING_FORMAT}"),
        ])
        .await
    }

    /// One `hash|relative-time|subject|author` line for `reference`, if it
    /// resolves to a commit.
    pub async fn point_lookup(&self, reference: &str) -> anyhow::Result<String> {
        self.capture(&[
            "log",
            "-1",
            &format!("--format={POINT_LOOKUP_FORMAT}"),
            reference,
            "--",
        ])
        .await
    }

    /// Subjects of the last `depth` reference changes, newest first.
    pub async fn reference_history(&self, depth: usize) -> anyhow::Result<String> {
        self.capture(&[
            "reflog",
            "show",
            &format!("--format={HISTORY_FORMAT}"),
            "-n",
            &depth.to_string(),
        ])
        .await
    }

    /// Hands the terminal to `git checkout` so its success or failure output
    /// reaches the user verbatim.
    pub async fn checkout(&self, reference: &str) -> anyhow::Result<()> {
        debug_log!("git checkout {reference}");

        let status = Command::new("git")
            .args(["checkout", reference])
            .current_dir(&self.root)
            .stdin(Stdio::null())
            .status()
            .await
            .context("failed to spawn git checkout")?;

        if !status.success() {
            anyhow::bail!("checkout of '{reference}' failed");
        }

        Ok(())
    }

    async fn capture(&self, args: &[&str]) -> anyhow::Result<String> {
        debug_log!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.root)
            .output()
            .await
            .with_context(|| format!("failed to spawn git {}", args.join(" ")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git {} failed: {}", args.join(" "), stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
