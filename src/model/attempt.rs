//! Commit attempt model
//!
//! One loop iteration: the step drawn, the resulting commit time, and the
//! message handed to the version-control collaborator.

use chrono::NaiveDateTime;

use super::RunId;

/// Fixed prefix of every generated commit message
pub const COMMIT_MESSAGE_PREFIX: &str = "AutoCommit_";

/// Format of the human-readable commit time (`HH.MM.SS_MM.DD.YYYY`)
const TIMESTAMP_LABEL_FORMAT: &str = "%H.%M.%S_%m.%d.%Y";

/// ISO-8601 format handed to git (whole seconds, local time)
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A single commit attempt within a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitAttempt {
    /// Sequence index (1-based)
    pub index: usize,
    /// Minutes drawn for this step
    pub step_minutes: u32,
    /// Total minutes from the run start, including this step
    pub cumulative_minutes: u64,
    /// Computed commit time (run start + cumulative minutes)
    pub commit_time: NaiveDateTime,
    /// Commit message (`AutoCommit_<hex>`)
    pub message: String,
}

impl CommitAttempt {
    /// Build the commit message for a random hex suffix
    pub fn message_for(suffix: &str) -> String {
        format!("{COMMIT_MESSAGE_PREFIX}{suffix}")
    }

    /// Commit time as `HH.MM.SS_MM.DD.YYYY`
    pub fn timestamp_label(&self) -> String {
        self.commit_time.format(TIMESTAMP_LABEL_FORMAT).to_string()
    }

    /// Commit time as ISO-8601, used for author and committer dates
    pub fn iso_timestamp(&self) -> String {
        self.commit_time.format(ISO_FORMAT).to_string()
    }

    /// The line appended to the run log for this attempt
    pub fn log_line(&self, run_id: &RunId) -> String {
        format!(
            "COMMIT_MESSAGE:{} [Run {}] [Time:{}] [Step:{}min] [Run_ID:{}]",
            self.message,
            self.index,
            self.timestamp_label(),
            self.step_minutes,
            run_id
        )
    }

    /// Progress line shown before the attempt is committed
    pub fn progress_line(&self, total: usize) -> String {
        format!(
            "Run {}/{} | Commit Time: {} | Step: {} min",
            self.index,
            total,
            self.timestamp_label(),
            self.step_minutes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample_attempt() -> CommitAttempt {
        CommitAttempt {
            index: 3,
            step_minutes: 1440,
            cumulative_minutes: 4320,
            commit_time: NaiveDate::from_ymd_opt(2024, 1, 4)
                .unwrap()
                .and_hms_opt(9, 5, 7)
                .unwrap(),
            message: CommitAttempt::message_for("a1b2c3"),
        }
    }

    #[test]
    fn test_message_prefix() {
        assert_eq!(CommitAttempt::message_for("ff00aa"), "AutoCommit_ff00aa");
    }

    #[test]
    fn test_timestamp_label_format() {
        insta::assert_snapshot!(sample_attempt().timestamp_label(), @"09.05.07_01.04.2024");
    }

    #[test]
    fn test_iso_timestamp_format() {
        insta::assert_snapshot!(sample_attempt().iso_timestamp(), @"2024-01-04T09:05:07");
    }

    #[test]
    fn test_log_line_format() {
        let mut rng = StdRng::seed_from_u64(0);
        let run_id = RunId::generate(&mut rng);
        let line = sample_attempt().log_line(&run_id);
        assert_eq!(
            line,
            format!(
                "COMMIT_MESSAGE:AutoCommit_a1b2c3 [Run 3] [Time:09.05.07_01.04.2024] [Step:1440min] [Run_ID:{run_id}]"
            )
        );
    }

    #[test]
    fn test_progress_line_format() {
        insta::assert_snapshot!(
            sample_attempt().progress_line(5),
            @"Run 3/5 | Commit Time: 09.05.07_01.04.2024 | Step: 1440 min"
        );
    }
}
