//! Render command implementation.
//!
//! Reads a run file (a JSON array of `{test, response, result}` records
//! produced by the execution engine), resolves the run stamp, and writes
//! one report per record through the [`ResultWriter`].

use crate::cli::RenderArgs;
use crate::config::{CliOverrides, Config};
use crate::error::{Result, VerdictError};
use crate::model::{Response, TestCase, TestResult};
use crate::writer::{ResultWriter, TextFileWriter, WriteOutcome};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// One completed test in a run file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    pub test: TestCase,
    pub response: Response,
    pub result: TestResult,
}

/// Execute the render command.
///
/// # Errors
///
/// Returns an error if the run file cannot be read or parsed, if the
/// configured stamp is blank, or if any report failed to write (after
/// attempting every record).
pub fn execute(args: &RenderArgs, json: bool, use_color: bool) -> Result<()> {
    let overrides = CliOverrides {
        out: args.out.clone(),
        stamp: args.stamp.clone(),
    };
    let config = Config::resolve(&overrides);
    let stamp = config.run_stamp()?;

    let records = load_run_file(&args.run_file)?;
    info!(count = records.len(), stamp = %stamp, "rendering run reports");

    let writer = TextFileWriter;
    let mut outcomes: Vec<(RunRecord, WriteOutcome)> = Vec::with_capacity(records.len());
    let mut failures = 0usize;

    for mut record in records {
        if let Some(folder) = &config.result_folder {
            record.test.result_folder.clone_from(folder);
        }
        let outcome = writer.write_results(&record.test, &record.response, &record.result, &stamp);
        if let Some(err) = &outcome.error {
            error!(test = %record.test.name, "{err}");
            if outcome.path.is_none() {
                failures += 1;
            }
        }
        outcomes.push((record, outcome));
    }

    if json {
        print_json(&outcomes)?;
    } else {
        print_human(&outcomes, failures, use_color);
    }

    if failures > 0 {
        return Err(VerdictError::ReportsFailed { count: failures });
    }
    Ok(())
}

fn load_run_file(path: &Path) -> Result<Vec<RunRecord>> {
    let contents = fs::read_to_string(path).map_err(|source| VerdictError::RunFile {
        path: path.to_path_buf(),
        reason: source.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|source| VerdictError::RunFile {
        path: path.to_path_buf(),
        reason: source.to_string(),
    })
}

fn print_json(outcomes: &[(RunRecord, WriteOutcome)]) -> Result<()> {
    let reports: Vec<serde_json::Value> = outcomes
        .iter()
        .map(|(record, outcome)| {
            json!({
                "test": record.test.name,
                "passed": record.result.passed,
                "path": outcome.path.as_ref().map(|p| p.display().to_string()),
                "error": outcome.error.as_ref().map(ToString::to_string),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}

fn print_human(outcomes: &[(RunRecord, WriteOutcome)], failures: usize, use_color: bool) {
    for (record, outcome) in outcomes {
        match (&outcome.path, &outcome.error) {
            (Some(path), None) => {
                println!(
                    "{} {} -> {}",
                    mark("✓", use_color, false),
                    record.test.name,
                    path.display()
                );
            }
            (Some(path), Some(err)) => {
                println!(
                    "{} {} -> {} ({err})",
                    mark("✓", use_color, false),
                    record.test.name,
                    path.display()
                );
            }
            (None, Some(err)) => {
                println!(
                    "{} {}: {err}",
                    mark("✗", use_color, true),
                    record.test.name
                );
            }
            (None, None) => {}
        }
    }

    let written = outcomes.iter().filter(|(_, o)| o.path.is_some()).count();
    println!("Reports: {written} written, {failures} failed");
}

fn mark(symbol: &str, use_color: bool, failed: bool) -> String {
    if !use_color {
        return symbol.to_string();
    }
    if failed {
        symbol.red().to_string()
    } else {
        symbol.green().to_string()
    }
}
