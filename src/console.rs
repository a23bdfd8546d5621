//! Console control surface
//!
//! Collects missing values with stdin prompts, runs in the background, and
//! prints every log line as it arrives. Ctrl-C requests cancellation; the
//! attempt in flight finishes first.

use std::io::{self, BufRead, Write};

use chrono::Local;
use color_eyre::eyre::{self, WrapErr};

use crate::config::{RunInput, Settings};
use crate::generator::CancelToken;
use crate::model::{LogLevel, RunEvent, RunReport};
use crate::reporter::{ConsoleReporter, Reporter};
use crate::worker::RunHandle;

/// Prompt for the number of commits
pub const MAX_COMMITS_PROMPT: &str = "How many commits do you want to make? ";

/// Prompt for the optional start date
pub const START_DATE_PROMPT: &str = "Enter start date (YYYY-MM-DD) or leave blank for today: ";

/// Values given on the command line; anything missing is prompted or defaulted
#[derive(Debug, Clone, Default)]
pub struct ConsoleArgs {
    pub repo_path: Option<String>,
    pub profile_url: Option<String>,
    pub max_commits: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_step_minutes: Option<String>,
    pub max_step_minutes: Option<String>,
}

/// Build the raw input from arguments, settings and prompts
///
/// Only the commit count and the start date are prompted. The end date
/// defaults to yesterday and the step bounds to the settings.
pub fn collect_input<R: BufRead, W: Write>(
    args: &ConsoleArgs,
    settings: &Settings,
    input: &mut R,
    output: &mut W,
) -> io::Result<RunInput> {
    let mut run_input = RunInput::from_settings(settings);

    if let Some(repo) = &args.repo_path {
        run_input.repo_path.clone_from(repo);
    }
    if let Some(url) = &args.profile_url {
        run_input.profile_url.clone_from(url);
    }
    if let Some(end) = &args.end_date {
        run_input.end_date.clone_from(end);
    }
    if let Some(min) = &args.min_step_minutes {
        run_input.min_step_minutes.clone_from(min);
    }
    if let Some(max) = &args.max_step_minutes {
        run_input.max_step_minutes.clone_from(max);
    }

    run_input.max_commits = match &args.max_commits {
        Some(n) => n.clone(),
        None => prompt(input, output, &format!("\n{MAX_COMMITS_PROMPT}"))?,
    };
    run_input.start_date = match &args.start_date {
        Some(date) => date.clone(),
        None => prompt(input, output, START_DATE_PROMPT)?,
    };

    Ok(run_input)
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> io::Result<String> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Run in console mode
///
/// Configuration errors are printed together and returned as an error
/// before anything runs.
pub fn run(args: &ConsoleArgs, settings: &Settings) -> eyre::Result<RunReport> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let run_input = collect_input(args, settings, &mut stdin.lock(), &mut stdout)
        .wrap_err("failed to read input")?;

    let mut reporter = ConsoleReporter::default();

    let config = match run_input.validate(settings, Local::now().naive_local()) {
        Ok(config) => config,
        Err(errors) => {
            for error in errors.iter() {
                reporter.log(LogLevel::Error, &error.to_string());
            }
            eyre::bail!("invalid configuration ({} problem(s))", errors.len());
        }
    };

    println!();
    let mut handle = RunHandle::spawn(config, settings).wrap_err("failed to start run")?;
    let runtime = listen_for_interrupt(handle.cancel_token())?;

    while let Some(event) = handle.recv() {
        match event {
            RunEvent::Log { level, message } => reporter.log(level, &message),
            RunEvent::Progress { done, total } => reporter.progress(done, total),
            RunEvent::Finished(_) => break,
        }
    }
    handle.join();
    runtime.shutdown_background();

    handle
        .report()
        .cloned()
        .ok_or_else(|| eyre::eyre!("run ended without a report"))
}

/// Cancel `token` on Ctrl-C
///
/// Returns the runtime hosting the listener; keep it alive for the run.
fn listen_for_interrupt(token: CancelToken) -> eyre::Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("backfill-signal")
        .enable_all()
        .build()
        .wrap_err("failed to start signal listener")?;

    runtime.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!(
                "{} Interrupt received. Stopping after the current attempt.",
                LogLevel::Warning.prefix()
            );
            token.cancel();
        }
    });

    Ok(runtime)
}
