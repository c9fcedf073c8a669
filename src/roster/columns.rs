//! Header column detection.
//!
//! # Responsibilities
//! - Normalize header labels (case, whitespace, punctuation)
//! - Match each label against per-field synonym sets
//! - Resolve the first matching column, left to right, per field
//!
//! # Design Decisions
//! - Normalization keeps only ASCII alphanumerics and Hangul syllables,
//!   so "학생 이름", "학생이름" and " 학생-이름 " all match the same synonym
//! - Fields resolve independently; the synonym sets are disjoint in
//!   practice so a column never has to serve two fields
//! - No fuzzy matching; unrecognized labels are simply not found

use serde::Serialize;

/// The four roster fields a column can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Teacher,
    Name,
    ParentPhone,
    StudentPhone,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Teacher => "teacher",
            Field::Name => "name",
            Field::ParentPhone => "parentPhone",
            Field::StudentPhone => "studentPhone",
        }
    }

    fn synonyms(self) -> &'static [&'static str] {
        match self {
            Field::Teacher => &[
                "담당",
                "담당선생",
                "담당선생님",
                "선생님",
                "teacher",
                "tch",
                "담당자",
            ],
            Field::Name => &["학생이름", "이름", "name", "student", "학생", "성명"],
            Field::ParentPhone => &[
                "학부모전화",
                "학부모연락처",
                "부모전화",
                "학부모",
                "parentphone",
                "parent",
                "보호자연락처",
                "보호자",
            ],
            Field::StudentPhone => &[
                "학생전화",
                "학생연락처",
                "학생폰",
                "studentphone",
                "phone",
                "전화번호",
                "연락처",
            ],
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved column positions, one per field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnMap {
    pub teacher: Option<usize>,
    pub name: Option<usize>,
    pub parent_phone: Option<usize>,
    pub student_phone: Option<usize>,
}

impl ColumnMap {
    /// Mandatory fields (teacher, name) that failed to resolve.
    pub fn missing_mandatory(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.teacher.is_none() {
            missing.push(Field::Teacher);
        }
        if self.name.is_none() {
            missing.push(Field::Name);
        }
        missing
    }
}

/// Lowercase a header label and keep only ASCII alphanumerics and
/// Hangul syllables (U+AC00..=U+D7A3).
fn normalize_header(label: &str) -> String {
    label
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || ('\u{AC00}'..='\u{D7A3}').contains(c))
        .collect()
}

/// Scan a header row and resolve the column position of each field.
///
/// The first column (left to right) whose normalized label appears in a
/// field's synonym set wins for that field. Fields are independent.
pub fn detect_columns<S: AsRef<str>>(headers: &[S]) -> ColumnMap {
    let mut map = ColumnMap::default();

    for (index, raw) in headers.iter().enumerate() {
        let label = normalize_header(raw.as_ref());
        if label.is_empty() {
            continue;
        }
        for field in [
            Field::Teacher,
            Field::Name,
            Field::ParentPhone,
            Field::StudentPhone,
        ] {
            let slot = match field {
                Field::Teacher => &mut map.teacher,
                Field::Name => &mut map.name,
                Field::ParentPhone => &mut map.parent_phone,
                Field::StudentPhone => &mut map.student_phone,
            };
            if slot.is_none() && field.synonyms().contains(&label.as_str()) {
                *slot = Some(index);
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_strips_noise() {
        assert_eq!(normalize_header("  학생 이름 "), "학생이름");
        assert_eq!(normalize_header("Teacher!"), "teacher");
        assert_eq!(normalize_header("TCH"), "tch");
        assert_eq!(normalize_header("학부모-전화"), "학부모전화");
        assert_eq!(normalize_header("***"), "");
    }

    #[test]
    fn test_detect_korean_headers() {
        let headers = ["담당선생", "학생이름", "학부모전화", "학생전화"];
        let map = detect_columns(&headers);
        assert_eq!(map.teacher, Some(0));
        assert_eq!(map.name, Some(1));
        assert_eq!(map.parent_phone, Some(2));
        assert_eq!(map.student_phone, Some(3));
    }

    #[test]
    fn test_detect_english_headers_any_order() {
        let headers = [" Name ", "PHONE", "Teacher"];
        let map = detect_columns(&headers);
        assert_eq!(map.teacher, Some(2));
        assert_eq!(map.name, Some(0));
        assert_eq!(map.student_phone, Some(1));
        assert_eq!(map.parent_phone, None);
    }

    #[test]
    fn test_first_match_wins() {
        // Two columns both satisfy the teacher set; the left one wins.
        let headers = ["담당", "선생님", "이름"];
        let map = detect_columns(&headers);
        assert_eq!(map.teacher, Some(0));
        assert_eq!(map.name, Some(2));
    }

    #[test]
    fn test_unrecognized_headers() {
        let map = detect_columns(&["foo", "bar"]);
        assert_eq!(
            map.missing_mandatory(),
            vec![Field::Teacher, Field::Name]
        );
    }
}
