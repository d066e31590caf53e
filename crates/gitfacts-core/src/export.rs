//! Export run orchestration.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

use gitfacts_config::Settings;
use gitfacts_extractor::builtin::{self, DEFAULT_COLUMNS};
use gitfacts_git::{CommitSource, DiffSource, Repository};
use tracing::{debug, info};

use crate::{CoreError, CoreResult, Diagnostics, Pipeline, RowSink, WorkArea, commits_since};

/// Stages of an export run, in order. `Failed` can follow any stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Nothing acquired yet.
    Idle,
    /// The remote has been cloned into the working area.
    CloneAcquired,
    /// Rows are being extracted and written.
    Extracting,
    /// The working area is being removed.
    Cleanup,
    /// The run completed.
    Done,
    /// The run stopped on a fatal error.
    Failed,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::CloneAcquired => "clone-acquired",
            Self::Extracting => "extracting",
            Self::Cleanup => "cleanup",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Outcome of a completed export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Rows written to the output.
    pub rows_written: usize,
    /// Rows that could not be written.
    pub rows_failed: usize,
    /// Values replaced by an empty field after an extractor failed.
    pub extraction_failures: usize,
}

/// Clones a remote, exports one CSV row per qualifying commit, and removes
/// the clone again.
pub struct Exporter {
    settings: Settings,
    work_root: Option<PathBuf>,
}

impl Exporter {
    /// Creates an exporter for the given settings.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            work_root: None,
        }
    }

    /// Creates working areas under `root` instead of the system temp dir.
    #[must_use]
    pub fn with_work_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.work_root = Some(root.into());
        self
    }

    /// Returns the columns that will be exported, in order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownColumn`] for a name with no extractor.
    pub fn columns(&self) -> CoreResult<Vec<String>> {
        let columns: Vec<String> = if self.settings.columns.is_empty() {
            DEFAULT_COLUMNS.iter().map(ToString::to_string).collect()
        } else {
            self.settings.columns.clone()
        };

        if let Some(unknown) = columns.iter().find(|name| !builtin::is_known(name)) {
            return Err(CoreError::UnknownColumn(unknown.clone()));
        }
        Ok(columns)
    }

    /// Runs the export.
    ///
    /// The working area is removed whether or not the export succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the columns are invalid, the working area cannot
    /// be created, the clone fails, the output cannot be opened, or the
    /// history cannot be read. Failed values and rows are only reported to
    /// `diagnostics`.
    pub fn run(&self, diagnostics: &dyn Diagnostics) -> CoreResult<ExportSummary> {
        self.run_with(
            |dest| {
                let repo = Repository::clone_from(&self.settings.remote, dest)?;
                debug!(path = ?repo.path(), "cloned remote");
                Ok(repo)
            },
            diagnostics,
        )
    }

    /// Runs the export against whatever `acquire` produces in the working
    /// area.
    fn run_with<R, F>(
        &self,
        acquire: F,
        diagnostics: &dyn Diagnostics,
    ) -> CoreResult<ExportSummary>
    where
        R: CommitSource + DiffSource,
        F: FnOnce(&Path) -> CoreResult<R>,
    {
        debug!(phase = %RunPhase::Idle, remote = %self.settings.remote, "starting export");
        let columns = self.columns()?;

        let area = match &self.work_root {
            Some(root) => WorkArea::acquire_in(root),
            None => WorkArea::acquire(),
        }
        .map_err(CoreError::WorkArea)?;

        let outcome = acquire(area.path()).and_then(|repo| {
            debug!(phase = %RunPhase::CloneAcquired, "working copy ready");
            self.export_from(&repo, &columns, diagnostics)
        });

        debug!(phase = %RunPhase::Cleanup, "releasing working area");
        area.release(diagnostics);

        match &outcome {
            Ok(summary) => info!(
                phase = %RunPhase::Done,
                rows = summary.rows_written,
                failed_rows = summary.rows_failed,
                failed_values = summary.extraction_failures,
                output = ?self.settings.output,
                "export finished"
            ),
            Err(err) => debug!(phase = %RunPhase::Failed, %err, "export failed"),
        }
        outcome
    }

    fn export_from<R>(
        &self,
        repo: &R,
        columns: &[String],
        diagnostics: &dyn Diagnostics,
    ) -> CoreResult<ExportSummary>
    where
        R: CommitSource + DiffSource,
    {
        let extractors = columns
            .iter()
            .map(|name| {
                builtin::create(name, repo).ok_or_else(|| CoreError::UnknownColumn(name.clone()))
            })
            .collect::<CoreResult<Vec<_>>>()?;
        let pipeline = Pipeline::new(extractors);

        let file = File::create(&self.settings.output)?;
        let mut sink = RowSink::open(file, &pipeline.schema())?;

        debug!(phase = %RunPhase::Extracting, cutoff = %self.settings.cutoff, "extracting rows");
        let commits = commits_since(repo, self.settings.cutoff, self.settings.chunk_size);
        let mut extraction_failures = 0;
        for row in pipeline.rows(commits, diagnostics) {
            let row = row?;
            extraction_failures += row.failures();
            sink.write(&row, diagnostics);
        }

        let stats = sink.finish()?;
        Ok(ExportSummary {
            rows_written: stats.written,
            rows_failed: stats.failed,
            extraction_failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{FixedOffset, TimeZone};
    use git2::{Repository as Git2Repository, Signature, Time};
    use gitfacts_commit::{CommitRecord, Cutoff};
    use gitfacts_git::{GitError, GitResult};
    use tempfile::TempDir;

    use crate::TracingDiagnostics;

    /// 2024-01-01T00:00:00Z
    const JAN_1: i64 = 1_704_067_200;

    fn create_commit(repo: &Git2Repository, file: &str, content: &str, message: &str, time: Time) {
        let workdir = repo.workdir().unwrap().to_path_buf();
        std::fs::write(workdir.join(file), content).unwrap();

        let mut index = repo.index().unwrap();
        index.add_path(Path::new(file)).unwrap();
        index.write().unwrap();
        let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();

        let sig = Signature::new("Test User", "test@example.com", &time).unwrap();
        let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap();
    }

    /// A remote with commits on 2024-01-01, 01-02 and 01-03 (UTC noon).
    fn three_day_remote() -> TempDir {
        let dir = TempDir::new().unwrap();
        let repo = Git2Repository::init(dir.path()).unwrap();
        for day in 0..3 {
            create_commit(
                &repo,
                "notes.txt",
                &format!("day {}\n", day + 1),
                &format!("day {}\n\nbody, with comma", day + 1),
                Time::new(JAN_1 + 43_200 + day * 86_400, 0),
            );
        }
        dir
    }

    fn settings(remote: &Path, output: &Path) -> Settings {
        Settings {
            remote: remote.to_str().unwrap().to_string(),
            cutoff: Cutoff::Beginning,
            output: output.to_path_buf(),
            chunk_size: 2,
            columns: Vec::new(),
        }
    }

    fn read_rows(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
        let mut reader = csv::Reader::from_path(path).unwrap();
        let header = reader.headers().unwrap().iter().map(String::from).collect();
        let rows = reader
            .records()
            .map(|record| record.unwrap().iter().map(String::from).collect())
            .collect();
        (header, rows)
    }

    fn is_empty_dir(path: &Path) -> bool {
        std::fs::read_dir(path).unwrap().next().is_none()
    }

    #[test]
    fn test_exports_every_commit_by_default() {
        let remote = three_day_remote();
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let output = out.path().join("output.csv");

        let summary = Exporter::new(settings(remote.path(), &output))
            .with_work_root(work.path())
            .run(&TracingDiagnostics)
            .unwrap();

        assert_eq!(summary.rows_written, 3);
        assert_eq!(summary.rows_failed, 0);
        assert_eq!(summary.extraction_failures, 0);

        let (header, rows) = read_rows(&output);
        assert_eq!(header, ["message", "authored_at", "diff"]);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert_eq!(rows[0][0], "day 3\n\nbody, with comma");
        assert_eq!(rows[0][1], "2024-01-03T12:00:00+00:00");
    }

    #[test]
    fn test_cutoff_keeps_later_commits_newest_first() {
        let remote = three_day_remote();
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let output = out.path().join("output.csv");

        let mut settings = settings(remote.path(), &output);
        settings.cutoff = "2024-01-01".parse::<Cutoff>().unwrap();
        settings.columns = vec!["authored_at".to_string(), "message".to_string()];

        Exporter::new(settings)
            .with_work_root(work.path())
            .run(&TracingDiagnostics)
            .unwrap();

        let (header, rows) = read_rows(&output);
        assert_eq!(header, ["authored_at", "message"]);
        let dates: Vec<_> = rows.iter().map(|row| row[0].as_str()).collect();
        assert_eq!(
            dates,
            ["2024-01-03T12:00:00+00:00", "2024-01-02T12:00:00+00:00"]
        );
    }

    #[test]
    fn test_root_commit_diff_shows_added_content() {
        let remote = three_day_remote();
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let output = out.path().join("output.csv");

        let mut settings = settings(remote.path(), &output);
        settings.columns = vec!["diff".to_string()];
        Exporter::new(settings)
            .with_work_root(work.path())
            .run(&TracingDiagnostics)
            .unwrap();

        let (_, rows) = read_rows(&output);
        let root_diff = &rows[2][0];
        assert!(root_diff.contains("new file mode"));
        assert!(root_diff.contains("+day 1\n"));

        let latest_diff = &rows[0][0];
        assert!(latest_diff.contains("-day 2\n"));
        assert!(latest_diff.contains("+day 3\n"));
    }

    #[test]
    fn test_work_area_removed_after_success() {
        let remote = three_day_remote();
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();

        Exporter::new(settings(remote.path(), &out.path().join("output.csv")))
            .with_work_root(work.path())
            .run(&TracingDiagnostics)
            .unwrap();

        assert!(is_empty_dir(work.path()));
    }

    #[test]
    fn test_clone_failure_cleans_up_and_writes_nothing() {
        let missing = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let output = out.path().join("output.csv");

        let result = Exporter::new(settings(&missing.path().join("nope"), &output))
            .with_work_root(work.path())
            .run(&TracingDiagnostics);

        assert!(matches!(
            result,
            Err(CoreError::Git(gitfacts_git::GitError::Clone { .. }))
        ));
        assert!(is_empty_dir(work.path()));
        assert!(!output.exists());
    }

    #[test]
    fn test_output_failure_still_cleans_up() {
        let remote = three_day_remote();
        let work = TempDir::new().unwrap();
        let output = remote.path().join("missing-dir").join("output.csv");

        let result = Exporter::new(settings(remote.path(), &output))
            .with_work_root(work.path())
            .run(&TracingDiagnostics);

        assert!(matches!(result, Err(CoreError::Io(_))));
        assert!(is_empty_dir(work.path()));
    }

    /// Serves one full page, then fails on the next request.
    struct BreaksAfterFirstPage;

    impl CommitSource for BreaksAfterFirstPage {
        fn fetch_page(&self, skip: usize, limit: usize) -> GitResult<Vec<CommitRecord>> {
            if skip > 0 {
                return Err(GitError::Git2(git2::Error::from_str("pack corrupted")));
            }
            let offset = FixedOffset::east_opt(0).unwrap();
            Ok((0..limit)
                .map(|n| {
                    let at = offset.timestamp_opt(JAN_1 - 86_400 * 10, 0).unwrap();
                    CommitRecord::new(format!("c{n}"), at, format!("commit {n}"))
                })
                .collect())
        }
    }

    impl DiffSource for BreaksAfterFirstPage {
        fn diff_against_parent(&self, _commit: &CommitRecord) -> GitResult<String> {
            Ok(String::new())
        }
    }

    #[test]
    fn test_history_failure_keeps_written_rows_and_cleans_up() {
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let output = out.path().join("output.csv");

        let mut settings = settings(Path::new("/srv/git/x"), &output);
        settings.columns = vec!["message".to_string()];

        let result = Exporter::new(settings)
            .with_work_root(work.path())
            .run_with(
                |dest| {
                    std::fs::write(dest.join("HEAD"), "ref: refs/heads/main\n")?;
                    Ok(BreaksAfterFirstPage)
                },
                &TracingDiagnostics,
            );

        assert!(matches!(result, Err(CoreError::Git(GitError::Git2(_)))));
        let (header, rows) = read_rows(&output);
        assert_eq!(header, ["message"]);
        assert_eq!(rows, [["commit 0"], ["commit 1"]]);
        assert!(is_empty_dir(work.path()));
    }

    #[test]
    fn test_unknown_column_rejected_before_clone() {
        let remote = three_day_remote();
        let out = TempDir::new().unwrap();
        let work = TempDir::new().unwrap();
        let output = out.path().join("output.csv");

        let mut settings = settings(remote.path(), &output);
        settings.columns = vec!["message".to_string(), "churn".to_string()];

        let result = Exporter::new(settings)
            .with_work_root(work.path())
            .run(&TracingDiagnostics);

        assert!(matches!(result, Err(CoreError::UnknownColumn(name)) if name == "churn"));
        assert!(is_empty_dir(work.path()));
        assert!(!output.exists());
    }

    #[test]
    fn test_default_columns() {
        let exporter = Exporter::new(settings(Path::new("/srv/git/x"), Path::new("o.csv")));
        assert_eq!(exporter.columns().unwrap(), ["message", "authored_at", "diff"]);
    }

    #[test]
    fn test_run_phase_display() {
        assert_eq!(RunPhase::CloneAcquired.to_string(), "clone-acquired");
        assert_eq!(RunPhase::Failed.to_string(), "failed");
    }
}
