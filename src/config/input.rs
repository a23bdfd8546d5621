//! Raw run input and its validation

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use thiserror::Error;

use super::Settings;
use crate::model::{RunConfig, StepBounds};

/// Strict `YYYY-MM-DD` shape; calendar validity is checked by chrono
static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

/// Input fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    RepoPath,
    ProfileUrl,
    StartDate,
    EndDate,
    MaxCommits,
    MinStep,
    MaxStep,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::RepoPath,
        Field::ProfileUrl,
        Field::StartDate,
        Field::EndDate,
        Field::MaxCommits,
        Field::MinStep,
        Field::MaxStep,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::RepoPath => "Repository path",
            Field::ProfileUrl => "Profile URL",
            Field::StartDate => "Start date",
            Field::EndDate => "End date",
            Field::MaxCommits => "Max commits",
            Field::MinStep => "Min step (minutes)",
            Field::MaxStep => "Max step (minutes)",
        }
    }

    /// Placeholder shown when the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::RepoPath => "/path/to/repository",
            Field::ProfileUrl => "optional, e.g. https://github.com/you",
            Field::StartDate => "YYYY-MM-DD, blank for now",
            Field::EndDate => "YYYY-MM-DD, blank for yesterday",
            Field::MaxCommits => "e.g. 50",
            Field::MinStep => "e.g. 100",
            Field::MaxStep => "e.g. 3000",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single configuration problem
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{field}: '{value}' is not a valid YYYY-MM-DD date")]
    InvalidDate { field: Field, value: String },

    #[error("{field}: '{value}' is not a whole number")]
    InvalidNumber { field: Field, value: String },

    #[error("Max commits must be greater than 0")]
    NonPositiveMaxCommits,

    #[error("{0} must not be negative")]
    NegativeMinutes(Field),

    #[error("Min step ({min}) must not exceed max step ({max})")]
    InvertedStepBounds { min: u32, max: u32 },

    #[error("Repository path '{0}' is not a directory")]
    RepoNotFound(String),

    #[error("Profile URL '{0}' is not a valid http(s) URL")]
    InvalidUrl(String),
}

impl ConfigError {
    /// The field this error is about, if any
    pub fn field(&self) -> Option<Field> {
        match self {
            ConfigError::Missing(field)
            | ConfigError::NegativeMinutes(field)
            | ConfigError::InvalidDate { field, .. }
            | ConfigError::InvalidNumber { field, .. } => Some(*field),
            ConfigError::NonPositiveMaxCommits => Some(Field::MaxCommits),
            ConfigError::InvertedStepBounds { .. } => Some(Field::MinStep),
            ConfigError::RepoNotFound(_) => Some(Field::RepoPath),
            ConfigError::InvalidUrl(_) => Some(Field::ProfileUrl),
        }
    }
}

/// Every problem found in one validation pass (never empty)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", join_lines(.0))]
pub struct ConfigErrors(pub Vec<ConfigError>);

fn join_lines(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl ConfigErrors {
    pub fn iter(&self) -> impl Iterator<Item = &ConfigError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw text for every field, as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunInput {
    pub repo_path: String,
    pub profile_url: String,
    pub start_date: String,
    pub end_date: String,
    pub max_commits: String,
    pub min_step_minutes: String,
    pub max_step_minutes: String,
}

impl RunInput {
    /// Prefill from settings (dates and max commits stay blank)
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            repo_path: settings
                .repo_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            profile_url: settings.profile_url.clone().unwrap_or_default(),
            min_step_minutes: settings.min_step_minutes.to_string(),
            max_step_minutes: settings.max_step_minutes.to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::RepoPath => &self.repo_path,
            Field::ProfileUrl => &self.profile_url,
            Field::StartDate => &self.start_date,
            Field::EndDate => &self.end_date,
            Field::MaxCommits => &self.max_commits,
            Field::MinStep => &self.min_step_minutes,
            Field::MaxStep => &self.max_step_minutes,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::RepoPath => &mut self.repo_path,
            Field::ProfileUrl => &mut self.profile_url,
            Field::StartDate => &mut self.start_date,
            Field::EndDate => &mut self.end_date,
            Field::MaxCommits => &mut self.max_commits,
            Field::MinStep => &mut self.min_step_minutes,
            Field::MaxStep => &mut self.max_step_minutes,
        };
        *slot = value.into();
    }

    /// Validate every field against `now`
    ///
    /// Start defaults to `now`, end to the day before `now`. Remote and log
    /// directory come from `settings`.
    pub fn validate(
        &self,
        settings: &Settings,
        now: NaiveDateTime,
    ) -> Result<RunConfig, ConfigErrors> {
        let mut errors = Vec::new();

        let repo_path = self.repo_path.trim();
        if repo_path.is_empty() {
            errors.push(ConfigError::Missing(Field::RepoPath));
        } else if !Path::new(repo_path).is_dir() {
            errors.push(ConfigError::RepoNotFound(repo_path.to_string()));
        }

        let profile_url = self.profile_url.trim();
        if !profile_url.is_empty() && !is_http_url(profile_url) {
            errors.push(ConfigError::InvalidUrl(profile_url.to_string()));
        }

        let start = parse_optional_date(Field::StartDate, &self.start_date, &mut errors)
            .map(|d| d.and_time(NaiveTime::MIN));
        let end_date = parse_optional_date(Field::EndDate, &self.end_date, &mut errors);

        let max_commits = match parse_int(Field::MaxCommits, &self.max_commits, &mut errors) {
            Some(n) if n <= 0 => {
                errors.push(ConfigError::NonPositiveMaxCommits);
                None
            }
            Some(n) => usize::try_from(n).ok(),
            None => None,
        };

        let min = parse_minutes(Field::MinStep, &self.min_step_minutes, &mut errors);
        let max = parse_minutes(Field::MaxStep, &self.max_step_minutes, &mut errors);
        let steps = match (min, max) {
            (Some(min), Some(max)) => {
                let bounds = StepBounds::new(min, max);
                if bounds.is_none() {
                    errors.push(ConfigError::InvertedStepBounds { min, max });
                }
                bounds
            }
            _ => None,
        };

        if !errors.is_empty() {
            return Err(ConfigErrors(errors));
        }

        let (Some(max_commits), Some(steps)) = (max_commits, steps) else {
            return Err(ConfigErrors(vec![ConfigError::Missing(Field::MaxCommits)]));
        };

        Ok(RunConfig {
            repo_path: PathBuf::from(repo_path),
            remote: settings.remote.clone(),
            profile_url: (!profile_url.is_empty()).then(|| profile_url.to_string()),
            start: start.unwrap_or(now),
            end_date: end_date.unwrap_or_else(|| yesterday(now)),
            max_commits,
            steps,
            log_dir: settings.log_dir.clone(),
        })
    }
}

fn yesterday(now: NaiveDateTime) -> NaiveDate {
    let today = now.date();
    today.pred_opt().unwrap_or(today)
}

fn is_http_url(value: &str) -> bool {
    reqwest::Url::parse(value)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}

fn parse_optional_date(
    field: Field,
    raw: &str,
    errors: &mut Vec<ConfigError>,
) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = DATE_REGEX
        .is_match(raw)
        .then(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
        .flatten();
    if parsed.is_none() {
        errors.push(ConfigError::InvalidDate {
            field,
            value: raw.to_string(),
        });
    }
    parsed
}

fn parse_int(field: Field, raw: &str, errors: &mut Vec<ConfigError>) -> Option<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.push(ConfigError::Missing(field));
        return None;
    }
    match raw.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(ConfigError::InvalidNumber {
                field,
                value: raw.to_string(),
            });
            None
        }
    }
}

fn parse_minutes(field: Field, raw: &str, errors: &mut Vec<ConfigError>) -> Option<u32> {
    let n = parse_int(field, raw, errors)?;
    if n < 0 {
        errors.push(ConfigError::NegativeMinutes(field));
        return None;
    }
    match u32::try_from(n) {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(ConfigError::InvalidNumber {
                field,
                value: raw.trim().to_string(),
            });
            None
        }
    }
}
