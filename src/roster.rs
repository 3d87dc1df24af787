//! Arrays vs. growable lists.
//!
//! Fixed-size arrays and slices cover sorting, searching and copying;
//! [`Roster`] is the growable list of students the lesson builds up.

use std::cmp::{Ordering, Reverse};
use std::fmt;

use itertools::Itertools;

// =============================================================================
// Rendering and searching helpers
// =============================================================================

/// Render items as `[a, b, c]`.
pub fn format_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    format!("[{}]", items.into_iter().join(", "))
}

/// Binary search reporting a miss as `-(insertion_point) - 1`.
///
/// Only meaningful on a sorted slice.
pub fn signed_binary_search<T: Ord>(sorted: &[T], key: &T) -> i64 {
    match sorted.binary_search(key) {
        Ok(index) => index as i64,
        Err(insertion) => -(insertion as i64) - 1,
    }
}

// =============================================================================
// Student
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub grade: u32,
}

impl Student {
    pub fn new(name: impl Into<String>, grade: u32) -> Self {
        Self {
            name: name.into(),
            grade,
        }
    }

    /// Ascending grade, then name.
    pub fn by_grade_then_name(a: &Student, b: &Student) -> Ordering {
        a.grade.cmp(&b.grade).then_with(|| a.name.cmp(&b.name))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.grade)
    }
}

// =============================================================================
// Roster
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn get(&self, index: usize) -> Option<&Student> {
        self.students.get(index)
    }

    /// Replace the student at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, student: Student) -> Option<Student> {
        let slot = self.students.get_mut(index)?;
        Some(std::mem::replace(slot, student))
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Drop every student below `min`.
    pub fn retain_at_least(&mut self, min: u32) {
        self.students.retain(|s| s.grade >= min);
    }

    pub fn sort_by_grade_then_name(&mut self) {
        self.students.sort_by(Student::by_grade_then_name);
    }

    pub fn sort_by_grade_desc_then_name(&mut self) {
        self.students
            .sort_by(|a, b| Reverse(a.grade).cmp(&Reverse(b.grade)).then_with(|| a.name.cmp(&b.name)));
    }

    pub fn average_grade(&self) -> Option<f64> {
        if self.students.is_empty() {
            return None;
        }
        let total: u64 = self.students.iter().map(|s| u64::from(s.grade)).sum();
        Some(total as f64 / self.students.len() as f64)
    }

    /// First student (in list order) whose name starts with `initial`,
    /// ignoring case.
    pub fn first_with_initial(&self, initial: char) -> Option<&Student> {
        let wanted: Vec<char> = initial.to_lowercase().collect();
        self.students.iter().find(|s| {
            s.name
                .chars()
                .next()
                .is_some_and(|first| first.to_lowercase().eq(wanted.iter().copied()))
        })
    }
}

impl FromIterator<Student> for Roster {
    fn from_iter<I: IntoIterator<Item = Student>>(iter: I) -> Self {
        Self {
            students: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.students.iter()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_list(&self.students))
    }
}
