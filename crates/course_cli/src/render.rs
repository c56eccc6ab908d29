use course_core::{CourseRecord, CourseTable};
use serde::Serialize;

#[derive(Serialize)]
struct EntryView<'a> {
    bucket: usize,
    #[serde(flatten)]
    course: &'a CourseRecord,
}

/// `key : id | name | p1 , p2`, one line of the full listing.
pub fn format_entry(bucket: usize, rec: &CourseRecord) -> String {
    format!(
        "{bucket} : {} | {} | {} , {}",
        rec.id, rec.name, rec.prerequisite1, rec.prerequisite2
    )
}

pub fn format_course(rec: &CourseRecord) -> String {
    format!(
        "{} : {} | {} , {}",
        rec.id, rec.name, rec.prerequisite1, rec.prerequisite2
    )
}

/// Header columns as `courseId | courseName | ...`.
pub fn format_header(columns: &[String]) -> String {
    columns.join(" | ")
}

pub fn not_found(id: &str) -> String {
    format!("Course Id {id} not found.")
}

pub fn listing(table: &CourseTable) -> Vec<String> {
    table.entries().map(|(b, r)| format_entry(b, r)).collect()
}

pub fn listing_json(table: &CourseTable) -> serde_json::Result<String> {
    let rows: Vec<_> = table
        .entries()
        .map(|(bucket, course)| EntryView { bucket, course })
        .collect();
    serde_json::to_string_pretty(&rows)
}
