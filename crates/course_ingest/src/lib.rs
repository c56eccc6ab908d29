use anyhow::{bail, Context, Result};
use course_core::{CourseRecord, CourseTable};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

const MIN_FIELDS: usize = 2;
const MAX_FIELDS: usize = 4;

#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Skip the first non-blank line as a column header.
    pub has_header: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self { has_header: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFile {
    pub header: Option<Vec<String>>,
    pub records: Vec<CourseRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub inserted: usize,
    pub header: Option<Vec<String>>,
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|f| f.trim().to_string()).collect()
}

/// Parses one `id,name[,prereq1[,prereq2]]` row. Blank lines yield `None`.
pub fn parse_row(line: &str, line_no: usize) -> Result<Option<CourseRecord>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    let mut fields = split_fields(line);
    if fields.len() < MIN_FIELDS || fields.len() > MAX_FIELDS {
        bail!(
            "line {line_no}: expected {MIN_FIELDS}..={MAX_FIELDS} fields, found {}",
            fields.len()
        );
    }
    if fields[0].is_empty() {
        bail!("line {line_no}: empty course id");
    }
    fields.resize(MAX_FIELDS, String::new());
    let mut it = fields.into_iter();
    let mut next = || it.next().unwrap_or_default();
    Ok(Some(CourseRecord {
        id: next(),
        name: next(),
        prerequisite1: next(),
        prerequisite2: next(),
    }))
}

pub fn read_courses<R: BufRead>(reader: R, opts: &IngestOptions) -> Result<CourseFile> {
    let mut out = CourseFile::default();
    let mut want_header = opts.has_header;
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.with_context(|| format!("reading line {line_no}"))?;
        let line = if i == 0 { line.trim_start_matches('\u{feff}') } else { line.as_str() };
        if want_header && !line.trim().is_empty() {
            out.header = Some(split_fields(line));
            want_header = false;
            continue;
        }
        if let Some(rec) = parse_row(line, line_no)? {
            out.records.push(rec);
        }
    }
    debug!(rows = out.records.len(), "parsed course rows");
    Ok(out)
}

/// Inserts records in order, applying the table's key policy.
pub fn insert_all(table: &mut CourseTable, records: Vec<CourseRecord>) -> Result<usize> {
    let mut inserted = 0;
    for rec in records {
        let id = rec.id.clone();
        table
            .try_insert(rec)
            .with_context(|| format!("inserting course {id:?}"))?;
        inserted += 1;
    }
    Ok(inserted)
}

pub fn load_courses(path: &Path, table: &mut CourseTable, opts: &IngestOptions) -> Result<LoadReport> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let file = read_courses(BufReader::new(f), opts)
        .with_context(|| format!("parsing {}", path.display()))?;
    let inserted = insert_all(table, file.records)?;
    info!(path = %path.display(), inserted, "loaded courses");
    Ok(LoadReport {
        inserted,
        header: file.header,
    })
}
