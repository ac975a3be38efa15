//! Subjects, grades, and class sections.
//!
//! Long-lived reference data maintained by administrative flows and
//! consumed read-only by the engine.

use serde::{Deserialize, Serialize};

/// A school subject (e.g., Mathematics, Physical Education).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Short code, unique across subjects (2-6 alphanumeric chars).
    pub code: String,
    /// Display color (hex or named).
    pub color: String,
}

/// A grade level (year group).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    /// Unique grade identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Numeric level, used as sort key.
    pub level: i32,
}

/// A class section: a concrete group of students within a grade.
///
/// The student count drives room capacity requirements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSection {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g., "7B").
    pub name: String,
    /// Grade this section belongs to.
    pub grade_id: String,
    /// Number of students.
    pub student_count: u32,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(id: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: code.into(),
            color: String::new(),
        }
    }

    /// Sets the subject name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Whether the code matches the expected shape (2-6 alphanumeric chars).
    pub fn has_valid_code(&self) -> bool {
        (2..=6).contains(&self.code.len()) && self.code.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl Grade {
    /// Creates a new grade.
    pub fn new(id: impl Into<String>, level: i32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            level,
        }
    }

    /// Sets the grade name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl ClassSection {
    /// Creates a new class section in a grade.
    pub fn new(id: impl Into<String>, grade_id: impl Into<String>, student_count: u32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            grade_id: grade_id.into(),
            student_count,
        }
    }

    /// Sets the section name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_builder() {
        let s = Subject::new("S1", "MATH").with_name("Mathematics").with_color("#1f77b4");
        assert_eq!(s.id, "S1");
        assert_eq!(s.code, "MATH");
        assert_eq!(s.name, "Mathematics");
    }

    #[test]
    fn test_subject_code_shape() {
        assert!(Subject::new("S1", "PE").has_valid_code());
        assert!(Subject::new("S2", "MATH01").has_valid_code());
        assert!(!Subject::new("S3", "M").has_valid_code());
        assert!(!Subject::new("S4", "TOOLONGCODE").has_valid_code());
        assert!(!Subject::new("S5", "MA-TH").has_valid_code());
    }

    #[test]
    fn test_class_section() {
        let c = ClassSection::new("C1", "G7", 28).with_name("7B");
        assert_eq!(c.grade_id, "G7");
        assert_eq!(c.student_count, 28);
    }
}
