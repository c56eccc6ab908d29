//! Interactive planner loop: load, list, look up, exit.

use crate::render::{format_course, format_header, listing, not_found};
use anyhow::Result;
use course_core::{CourseTable, TableConfig};
use course_ingest::{load_courses, IngestOptions};
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::warn;

const MENU: &str = "\
Welcome to the course planner.
  1. Load Data Structure.
  2. Print Course List.
  3. Print Course.
  9. Exit
What would you like to do?";

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Runs until `9` or end of input. Loading replaces any previously loaded table.
pub fn run<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    file: &Path,
    cfg: &TableConfig,
    opts: &IngestOptions,
) -> Result<()> {
    let mut table: Option<CourseTable> = None;
    loop {
        writeln!(out, "{MENU}")?;
        let Some(choice) = read_line(&mut input)? else { break };
        match choice.as_str() {
            "1" => {
                let mut fresh = cfg.build()?;
                match load_courses(file, &mut fresh, opts) {
                    Ok(report) => {
                        writeln!(out, "Loaded {} courses from {}", report.inserted, file.display())?;
                        if let Some(columns) = &report.header {
                            writeln!(out, "{}", format_header(columns))?;
                        }
                        table = Some(fresh);
                    }
                    Err(e) => {
                        warn!("load failed: {e:#}");
                        writeln!(out, "Could not load {}: {e:#}", file.display())?;
                    }
                }
            }
            "2" => match &table {
                Some(t) => {
                    for line in listing(t) {
                        writeln!(out, "{line}")?;
                    }
                }
                None => writeln!(out, "No courses loaded.")?,
            },
            "3" => {
                writeln!(out, "Enter course id:")?;
                let Some(id) = read_line(&mut input)? else { break };
                match table.as_ref().and_then(|t| t.find(&id)) {
                    Some(rec) => writeln!(out, "{}", format_course(rec))?,
                    None => writeln!(out, "{}", not_found(&id))?,
                }
            }
            "9" => break,
            other => writeln!(out, "{other} is not a valid option.")?,
        }
    }
    writeln!(out, "Good bye.")?;
    Ok(())
}
