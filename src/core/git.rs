use crate::utils::error::{GreetError, Result};
use tokio::process::Command;

/// Result of a commit-and-push run that did not error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitOutcome {
    Committed,
    /// The working tree was clean; push was skipped.
    NothingToCommit,
}

/// Stages everything, commits with `message`, and pushes to the configured
/// remote. Git failures are surfaced to the caller and never retried.
pub async fn commit_and_push(message: &str) -> Result<GitOutcome> {
    let add = run_git(&["add", "."]).await?;
    if !add.status.success() {
        return Err(git_error("git add failed", &add));
    }
    tracing::debug!("Git add output: {}", String::from_utf8_lossy(&add.stdout));

    let commit = run_git(&["commit", "-m", message]).await?;
    let outcome = commit_outcome(
        commit.status.success(),
        &String::from_utf8_lossy(&commit.stdout),
        &String::from_utf8_lossy(&commit.stderr),
    )?;

    if outcome == GitOutcome::NothingToCommit {
        tracing::info!("No changes to commit");
        return Ok(outcome);
    }

    let push = run_git(&["push"]).await?;
    if !push.status.success() {
        return Err(git_error("git push failed", &push));
    }
    tracing::debug!("Git push output: {}", String::from_utf8_lossy(&push.stdout));

    tracing::info!("Successfully committed and pushed with message: '{}'", message);
    Ok(GitOutcome::Committed)
}

/// Interprets a `git commit` result. A non-zero exit whose output contains
/// "nothing to commit" is the benign clean-tree case.
fn commit_outcome(success: bool, stdout: &str, stderr: &str) -> Result<GitOutcome> {
    if success {
        return Ok(GitOutcome::Committed);
    }
    if stdout.contains("nothing to commit") || stderr.contains("nothing to commit") {
        return Ok(GitOutcome::NothingToCommit);
    }
    Err(GreetError::Git {
        message: format!("git commit failed: {}", combined_output(stdout, stderr)),
    })
}

async fn run_git(args: &[&str]) -> Result<std::process::Output> {
    Command::new("git")
        .args(args)
        .output()
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => GreetError::Git {
                message: "git command not found; please ensure Git is installed".to_string(),
            },
            _ => GreetError::Io(e),
        })
}

fn git_error(context: &str, output: &std::process::Output) -> GreetError {
    GreetError::Git {
        message: format!(
            "{}: {}",
            context,
            combined_output(
                &String::from_utf8_lossy(&output.stdout),
                &String::from_utf8_lossy(&output.stderr),
            )
        ),
    }
}

fn combined_output(stdout: &str, stderr: &str) -> String {
    let text = if stderr.trim().is_empty() {
        stdout
    } else {
        stderr
    };
    text.trim().to_string()
}
