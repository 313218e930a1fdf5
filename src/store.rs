// Core data module: an in-memory store of students and their grades.
// It is intentionally small and synchronous; the interactive menu in
// `ui` drives it one operation at a time and maps the returned
// `Result`/`Option` values to display text.

use log::debug;
use thiserror::Error;

/// A single student record. Grades are append-only and keep insertion
/// order, although the order carries no meaning for the statistics.
#[derive(Debug, Clone)]
pub struct Student {
    pub name: String,
    pub grades: Vec<u32>,
}

impl Student {
    /// Average grade rounded half-up to one decimal place, or `None`
    /// when no grades have been recorded yet (shown as "N/A").
    pub fn average(&self) -> Option<f64> {
        self.mean().map(round_half_up)
    }

    // Unrounded mean, used as the comparison key for the top performer.
    fn mean(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        Some(self.grades.iter().sum::<u32>() as f64 / self.grades.len() as f64)
    }
}

/// Why a student name was rejected. Both variants carry the trimmed
/// name so the UI can echo it back to the user.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum NameError {
    /// Empty, outside 2..=50 characters, or containing anything other
    /// than letters, spaces, hyphens or apostrophes.
    #[error("invalid name: {0:?}")]
    Invalid(String),
    /// A student with the identical name is already stored.
    #[error("student {0} already exists")]
    Duplicate(String),
}

/// Why a grade entry was rejected.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GradeError {
    #[error("no student with that name")]
    StudentNotFound,
    #[error("not a number")]
    NotANumber,
    #[error("grade must be between 0 and 100")]
    OutOfRange,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TopPerformerError {
    /// The store has no students at all.
    #[error("no student found")]
    Empty,
    /// The winning student has no grades, so no average can be shown.
    #[error("not enough grades")]
    Undetermined,
}

/// One line of the full report: a student and their rounded average.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub average: Option<f64>,
}

/// Aggregates over the students that have at least one grade. Only
/// produced when such a student exists; see [`Report::summary`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    pub max_average: f64,
    pub min_average: f64,
    pub overall_average: f64,
}

/// Full report: one row per student in insertion order. `summary` is
/// `None` when the store is empty or no student has any grades, in
/// which case the max/min sentinels must never be shown as real values.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub summary: Option<ReportSummary>,
}

/// The top performer selected by [`GradeStore::find_top_performer`].
#[derive(Debug, Clone, PartialEq)]
pub struct TopPerformer {
    pub name: String,
    pub average: f64,
}

/// In-memory collection of student records. Lives for one process run;
/// nothing is persisted. Iteration order is always insertion order.
#[derive(Debug, Default)]
pub struct GradeStore {
    students: Vec<Student>,
}

impl GradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and inserts a new student with an empty grade list.
    ///
    /// Leading/trailing spaces, hyphens and apostrophes are trimmed
    /// from `raw` before any check. Duplicates are detected against the
    /// trimmed name with a case-sensitive exact match.
    pub fn add_student(&mut self, raw: &str) -> Result<(), NameError> {
        let name = raw.trim_matches(|c| matches!(c, ' ' | '-' | '\''));
        if self.students.iter().any(|s| s.name == name) {
            return Err(NameError::Duplicate(name.to_string()));
        }
        if !is_name_valid(name) {
            return Err(NameError::Invalid(name.to_string()));
        }
        debug!("adding student {:?}", name);
        self.students.push(Student {
            name: name.to_string(),
            grades: Vec::new(),
        });
        Ok(())
    }

    /// Parses `raw` as an integer grade and appends it to the named
    /// student. The name must match exactly; the caller is responsible
    /// for intercepting the "done" sentinel before calling this.
    pub fn add_grade(&mut self, name: &str, raw: &str) -> Result<(), GradeError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or(GradeError::StudentNotFound)?;
        let value: i64 = raw.trim().parse().map_err(|_| GradeError::NotANumber)?;
        if !(0..=100).contains(&value) {
            return Err(GradeError::OutOfRange);
        }
        debug!("recording grade {} for {:?}", value, name);
        student.grades.push(value as u32);
        Ok(())
    }

    /// Whether a student with exactly this name exists. The UI checks
    /// this before entering the grade-entry sub-loop.
    pub fn contains(&self, name: &str) -> bool {
        self.students.iter().any(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Builds the full report. Per-student rows always come out in
    /// insertion order; the summary aggregates the rounded averages of
    /// the students that have at least one grade. When nobody has a
    /// grade the summary is withheld (`None`) instead of reporting the
    /// raw 0/100 sentinels or dividing by zero.
    pub fn generate_report(&self) -> Report {
        let mut rows = Vec::with_capacity(self.students.len());
        let mut max_average = 0.0_f64;
        let mut min_average = 100.0_f64;
        let mut overall = 0.0_f64;
        let mut count = 0_u32;

        for student in &self.students {
            let average = student.average();
            if let Some(avg) = average {
                count += 1;
                overall += avg;
                max_average = max_average.max(avg);
                min_average = min_average.min(avg);
            }
            rows.push(ReportRow {
                name: student.name.clone(),
                average,
            });
        }

        let summary = if count == 0 {
            None
        } else {
            Some(ReportSummary {
                max_average,
                min_average,
                overall_average: round_half_up(overall / count as f64),
            })
        };
        Report { rows, summary }
    }

    /// Finds the student with the highest average. Students without
    /// grades compete with a key of 0; if such a student still wins,
    /// the result is `Undetermined` rather than a made-up average.
    /// Ties go to the student inserted first.
    pub fn find_top_performer(&self) -> Result<TopPerformer, TopPerformerError> {
        let mut best: Option<&Student> = None;
        let mut best_key = f64::NEG_INFINITY;
        for student in &self.students {
            // The comparison uses the unrounded mean; strictly-greater
            // keeps the earliest student on ties.
            let key = student.mean().unwrap_or(0.0);
            if key > best_key {
                best_key = key;
                best = Some(student);
            }
        }
        let top = best.ok_or(TopPerformerError::Empty)?;
        match top.average() {
            Some(average) => Ok(TopPerformer {
                name: top.name.clone(),
                average,
            }),
            None => Err(TopPerformerError::Undetermined),
        }
    }
}

// Name rules: 2 to 50 characters, letters plus space, hyphen and
// apostrophe only. Emptiness is covered by the lower length bound.
fn is_name_valid(name: &str) -> bool {
    let len = name.chars().count();
    if !(2..=50).contains(&len) {
        return false;
    }
    name.chars()
        .all(|ch| ch.is_alphabetic() || matches!(ch, ' ' | '-' | '\''))
}

// Round half-up to one decimal: exact halves go toward the next
// increment, not to even. 87.25 -> 87.3, 87.24 -> 87.2.
fn round_half_up(x: f64) -> f64 {
    (x * 10.0 + 0.5).floor() / 10.0
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
