//! Course and exam filtering
//!
//! [`CourseMatcher`] is a plain membership test. [`CourseFilter`] applies a
//! user's include/exclude lists on top of it:
//!
//! ```text
//! excludeCourses → includeCourses → coursesSettings[name].excludeExams → includeExams
//! ```
//!
//! An empty include list admits everything that is not excluded.

use crate::config::{CourseCustomization, CourseRule};

/// Exact-match membership test over an ordered list of identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct CourseMatcher;

impl CourseMatcher {
    /// True if `identifier` equals any element of `identifiers`.
    /// Stops at the first match.
    pub fn matches<S: AsRef<str>>(identifier: &str, identifiers: &[S]) -> bool {
        identifiers.iter().any(|candidate| candidate.as_ref() == identifier)
    }
}

/// Shorthand for [`CourseMatcher::matches`].
pub fn cmp_course<S: AsRef<str>>(course: &str, course_list: &[S]) -> bool {
    CourseMatcher::matches(course, course_list)
}

/// Include/exclude decisions for one user's courses and exams.
#[derive(Debug, Clone, Copy)]
pub struct CourseFilter<'a> {
    custom: &'a CourseCustomization,
}

impl<'a> CourseFilter<'a> {
    pub fn new(custom: &'a CourseCustomization) -> Self {
        Self { custom }
    }

    /// Whether the course should be worked on at all.
    pub fn admits_course(&self, course: &str) -> bool {
        if CourseMatcher::matches(course, &self.custom.exclude_courses) {
            return false;
        }

        self.custom.include_courses.is_empty()
            || CourseMatcher::matches(course, &self.custom.include_courses)
    }

    /// First rule configured for `course`, if any.
    pub fn rule_for(&self, course: &str) -> Option<&'a CourseRule> {
        self.custom
            .courses_settings
            .iter()
            .find(|rule| rule.name == course)
    }

    /// Whether `exam` inside `course` should be taken.
    pub fn admits_exam(&self, course: &str, exam: &str) -> bool {
        let Some(rule) = self.rule_for(course) else {
            return true;
        };

        if CourseMatcher::matches(exam, &rule.exclude_exams) {
            return false;
        }

        rule.include_exams.is_empty() || CourseMatcher::matches(exam, &rule.include_exams)
    }
}
