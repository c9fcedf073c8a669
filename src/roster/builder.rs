//! Roster construction from tabular and JSON inputs.
//!
//! # Responsibilities
//! - Reject inputs whose mandatory columns cannot be resolved
//! - Apply the best-effort row policy (skip, never fail, on bad rows)
//! - Normalize phone cells and derive per-teacher-unique record ids
//!
//! # Design Decisions
//! - Teacher and per-teacher student order is input order; sorting is a
//!   presentation concern and happens elsewhere
//! - Record ids are `teacher:name`, with `#<ordinal>` appended when the
//!   same name repeats under one teacher

use serde_json::Value;

use crate::roster::columns::detect_columns;
use crate::roster::error::RosterError;
use crate::roster::phone::normalize_phone;
use crate::roster::types::{Roster, StudentRecord};

/// Build a [`Roster`] from a header row plus data rows.
///
/// Teacher and name columns are mandatory; the error names every
/// mandatory field that failed to resolve. Phone columns are optional
/// and default to empty. Rows with fewer than two cells, or whose
/// teacher or name cell trims to empty, are skipped silently.
pub fn build_roster<H, S, R>(headers: &[H], rows: &[R]) -> Result<Roster, RosterError>
where
    H: AsRef<str>,
    S: AsRef<str>,
    R: AsRef<[S]>,
{
    let columns = detect_columns(headers);
    let missing = columns.missing_mandatory();
    if !missing.is_empty() {
        return Err(RosterError::ColumnDetectionFailure { missing });
    }
    if rows.is_empty() {
        return Err(RosterError::EmptyInput);
    }

    let mut roster = Roster::new();
    for row in rows {
        let cells = row.as_ref();
        if cells.len() < 2 {
            continue;
        }
        let teacher = cell(cells, columns.teacher);
        let name = cell(cells, columns.name);
        if teacher.is_empty() || name.is_empty() {
            continue;
        }
        append_record(
            &mut roster,
            teacher,
            name,
            cell(cells, columns.parent_phone),
            cell(cells, columns.student_phone),
        );
    }
    Ok(roster)
}

/// Build a [`Roster`] from an already-JSON-shaped payload.
///
/// Accepts either an object mapping teacher name to a list of student
/// objects, or a flat list of student objects each carrying its own
/// `teacher` field. The same skip rules as [`build_roster`] apply to
/// entries without a usable teacher or name.
pub fn roster_from_json(value: &Value) -> Result<Roster, RosterError> {
    match value {
        Value::Object(map) => {
            if map.is_empty() {
                return Err(RosterError::EmptyInput);
            }
            let mut roster = Roster::new();
            for (teacher, students) in map {
                let teacher = teacher.trim();
                if teacher.is_empty() {
                    continue;
                }
                let Some(entries) = students.as_array() else {
                    continue;
                };
                for entry in entries {
                    push_student_object(&mut roster, teacher, entry);
                }
            }
            Ok(roster)
        }
        Value::Array(entries) => {
            if entries.is_empty() {
                return Err(RosterError::EmptyInput);
            }
            let mut roster = Roster::new();
            for entry in entries {
                let teacher = str_field(entry, &["teacher", "담당", "담당선생"])
                    .unwrap_or_default();
                let teacher = teacher.trim();
                if teacher.is_empty() {
                    continue;
                }
                push_student_object(&mut roster, teacher, entry);
            }
            Ok(roster)
        }
        _ => Err(RosterError::EmptyInput),
    }
}

fn push_student_object(roster: &mut Roster, teacher: &str, entry: &Value) {
    let Some(name) = str_field(entry, &["name", "이름", "학생이름"]) else {
        return;
    };
    let name = name.trim();
    if name.is_empty() {
        return;
    }
    let parent = str_field(entry, &["parentPhone", "parent_phone"]).unwrap_or_default();
    // "phone" alone is treated as the student's number.
    let student = str_field(entry, &["studentPhone", "student_phone", "phone"])
        .unwrap_or_default();
    append_record(roster, teacher, name, &parent, &student);
}

fn append_record(roster: &mut Roster, teacher: &str, name: &str, parent: &str, student: &str) {
    let existing = roster.students(teacher).unwrap_or(&[]);
    let id = unique_id(existing, teacher, name);
    roster.push(
        teacher,
        StudentRecord {
            name: name.to_string(),
            parent_phone: normalize_phone(parent),
            student_phone: normalize_phone(student),
            id,
        },
    );
}

/// `teacher:name`, disambiguated with `#<ordinal>` when the base id is
/// already taken under this teacher.
fn unique_id(existing: &[StudentRecord], teacher: &str, name: &str) -> String {
    let base = format!("{teacher}:{name}");
    if !existing.iter().any(|r| r.id == base) {
        return base;
    }
    let mut ordinal = existing.len();
    loop {
        let candidate = format!("{base}#{ordinal}");
        if !existing.iter().any(|r| r.id == candidate) {
            return candidate;
        }
        ordinal += 1;
    }
}

fn cell<'a, S: AsRef<str>>(cells: &'a [S], index: Option<usize>) -> &'a str {
    index
        .and_then(|i| cells.get(i))
        .map(|s| s.as_ref().trim())
        .unwrap_or("")
}

fn str_field(entry: &Value, keys: &[&str]) -> Option<String> {
    let obj = entry.as_object()?;
    for key in keys {
        if let Some(v) = obj.get(*key) {
            match v {
                Value::String(s) => return Some(s.clone()),
                Value::Number(n) => return Some(n.to_string()),
                _ => {}
            }
        }
    }
    None
}
