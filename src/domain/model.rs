use std::fmt;
use std::path::PathBuf;

/// A student's display name, `"Firstname Lastname"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Student(String);

impl Student {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self(format!("{} {}", first_name, last_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Student {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Students in CSV row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAssignment {
    slots: Vec<Vec<Student>>,
}

impl SlotAssignment {
    pub fn new(slots: Vec<Vec<Student>>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Vec<Student>] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn student_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone)]
pub struct SeedImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    /// 由 acquisition 下載的暫存檔，結束時會被清除
    pub temporary: bool,
}

#[derive(Debug, Clone)]
pub struct PreparedRun {
    pub roster: Roster,
    pub seed: i64,
    pub seed_image: Option<SeedImage>,
}

#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub assignment: SlotAssignment,
    pub seed: i64,
    pub seed_image: Option<SeedImage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output_path: String,
    pub seed: i64,
}
