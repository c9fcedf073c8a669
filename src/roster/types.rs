//! Canonical roster data model.

use serde::{Serialize, Serializer};

/// A single normalized student entry.
///
/// Phone fields hold digits only (possibly empty); `id` is unique within
/// the owning teacher's list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub name: String,
    pub parent_phone: String,
    pub student_phone: String,
    pub id: String,
}

/// One teacher and their students, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeacherGroup {
    pub teacher: String,
    pub students: Vec<StudentRecord>,
}

/// Insertion-ordered mapping from teacher name to student records.
///
/// A `Roster` is built fresh from each input payload and never mutated
/// afterwards; callers receive it by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    groups: Vec<TeacherGroup>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record under the given teacher, creating the teacher
    /// entry on first sight. Teacher order and per-teacher student order
    /// both follow insertion order.
    pub fn push(&mut self, teacher: &str, record: StudentRecord) {
        match self.groups.iter_mut().find(|g| g.teacher == teacher) {
            Some(group) => group.students.push(record),
            None => self.groups.push(TeacherGroup {
                teacher: teacher.to_string(),
                students: vec![record],
            }),
        }
    }

    /// Students for a teacher, if present.
    pub fn students(&self, teacher: &str) -> Option<&[StudentRecord]> {
        self.groups
            .iter()
            .find(|g| g.teacher == teacher)
            .map(|g| g.students.as_slice())
    }

    /// All teacher groups in insertion order.
    pub fn groups(&self) -> &[TeacherGroup] {
        &self.groups
    }

    /// Teacher names in insertion order.
    pub fn teachers(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.teacher.as_str())
    }

    /// Total number of student records across all teachers.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.students.len()).sum()
    }

    pub fn teacher_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

// Serializes as the bare group list; the wrapper adds no information.
impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.groups.serialize(serializer)
    }
}
