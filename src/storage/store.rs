//! # Store
//!
//! The storage service itself: two record collections plus the enrollment
//! pair set, with cascade delete keeping the relation consistent. One store
//! instance is created per process (or per test); all mutation goes through
//! these operations.

use super::collection::Collection;
use super::errors::{StorageError, StorageResult};
use super::records::{
    Course, CoursePatch, Enrollment, NewCourse, NewStudent, Student, StudentPatch,
};

/// Demo dataset used by [`Store::seed`]
const SEED_STUDENTS: [(&str, &str); 3] = [
    ("Alice", "alice@example.com"),
    ("Bob", "bob@example.com"),
    ("Charlie", "charlie@example.com"),
];

const SEED_COURSES: [(&str, &str); 3] = [
    ("Math", "Mr. Smith"),
    ("Physics", "Dr. Brown"),
    ("History", "Ms. Clark"),
];

/// In-memory store for students, courses, and enrollments
#[derive(Debug, Default)]
pub struct Store {
    students: Collection<Student>,
    courses: Collection<Course>,
    enrollments: Vec<Enrollment>,
}

impl Store {
    /// Create an empty store with both id counters at 1
    pub fn new() -> Self {
        Self {
            students: Collection::new(),
            courses: Collection::new(),
            enrollments: Vec::new(),
        }
    }

    // ==================
    // Students
    // ==================

    /// All students in insertion order
    pub fn students(&self) -> &[Student] {
        self.students.items()
    }

    /// Look up a student by id
    pub fn student(&self, id: u64) -> StorageResult<&Student> {
        self.students.get(id).ok_or(StorageError::StudentNotFound)
    }

    /// Create a student, enforcing email uniqueness
    ///
    /// On a duplicate email nothing is created and the id counter does not
    /// move.
    pub fn create_student(&mut self, payload: NewStudent) -> StorageResult<Student> {
        if self.email_in_use(&payload.email, None) {
            return Err(StorageError::EmailTaken);
        }

        let student = Student {
            id: self.students.allocate_id(),
            name: payload.name,
            email: payload.email,
        };
        self.students.push(student.clone());
        Ok(student)
    }

    /// Apply a field-level patch to a student and return the new state
    ///
    /// Changing the email to one held by a different student is rejected;
    /// re-submitting the student's own email is allowed.
    pub fn update_student(&mut self, id: u64, patch: StudentPatch) -> StorageResult<Student> {
        if !self.students.contains(id) {
            return Err(StorageError::StudentNotFound);
        }
        if let Some(email) = &patch.email {
            if self.email_in_use(email, Some(id)) {
                return Err(StorageError::EmailTaken);
            }
        }

        // Lookup can no longer fail; checked above.
        let student = self
            .students
            .get_mut(id)
            .ok_or(StorageError::StudentNotFound)?;
        if let Some(name) = patch.name {
            student.name = name;
        }
        if let Some(email) = patch.email {
            student.email = email;
        }
        Ok(student.clone())
    }

    /// Delete a student, cascading its enrollments
    ///
    /// Existing enrollments never block the delete; they are removed with it.
    pub fn remove_student(&mut self, id: u64) -> StorageResult<()> {
        self.students
            .remove(id)
            .ok_or(StorageError::StudentNotFound)?;
        self.enrollments.retain(|e| e.student_id != id);
        Ok(())
    }

    // ==================
    // Courses
    // ==================

    /// All courses in insertion order
    pub fn courses(&self) -> &[Course] {
        self.courses.items()
    }

    /// Look up a course by id
    pub fn course(&self, id: u64) -> StorageResult<&Course> {
        self.courses.get(id).ok_or(StorageError::CourseNotFound)
    }

    /// Create a course
    ///
    /// Duplicate titles are allowed here; only the update path enforces
    /// title uniqueness.
    pub fn create_course(&mut self, payload: NewCourse) -> StorageResult<Course> {
        let course = Course {
            id: self.courses.allocate_id(),
            title: payload.title,
            teacher: payload.teacher,
        };
        self.courses.push(course.clone());
        Ok(course)
    }

    /// Apply a field-level patch to a course and return the new state
    ///
    /// Changing the title to one held by a different course is rejected.
    pub fn update_course(&mut self, id: u64, patch: CoursePatch) -> StorageResult<Course> {
        if !self.courses.contains(id) {
            return Err(StorageError::CourseNotFound);
        }
        if let Some(title) = &patch.title {
            if self.title_in_use(title, id) {
                return Err(StorageError::TitleTaken);
            }
        }

        let course = self
            .courses
            .get_mut(id)
            .ok_or(StorageError::CourseNotFound)?;
        if let Some(title) = patch.title {
            course.title = title;
        }
        if let Some(teacher) = patch.teacher {
            course.teacher = teacher;
        }
        Ok(course.clone())
    }

    /// Delete a course, cascading its enrollments
    pub fn remove_course(&mut self, id: u64) -> StorageResult<()> {
        self.courses
            .remove(id)
            .ok_or(StorageError::CourseNotFound)?;
        self.enrollments.retain(|e| e.course_id != id);
        Ok(())
    }

    // ==================
    // Enrollments
    // ==================

    /// All enrollment pairs in insertion order
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Enroll a student in a course
    ///
    /// Validation order: course exists, student exists, pair not already
    /// present.
    pub fn enroll(&mut self, student_id: u64, course_id: u64) -> StorageResult<()> {
        if !self.courses.contains(course_id) {
            return Err(StorageError::CourseNotFound);
        }
        if !self.students.contains(student_id) {
            return Err(StorageError::StudentNotFound);
        }
        if self.is_enrolled(student_id, course_id) {
            return Err(StorageError::AlreadyEnrolled);
        }

        self.enrollments.push(Enrollment {
            student_id,
            course_id,
        });
        Ok(())
    }

    /// Remove the exact (student, course) pair
    pub fn unenroll(&mut self, student_id: u64, course_id: u64) -> StorageResult<()> {
        let idx = self
            .enrollments
            .iter()
            .position(|e| e.student_id == student_id && e.course_id == course_id)
            .ok_or(StorageError::EnrollmentNotFound)?;
        self.enrollments.remove(idx);
        Ok(())
    }

    /// Courses the student is enrolled in, in enrollment insertion order
    ///
    /// A dangling course reference is skipped; cascade delete keeps these
    /// from occurring through the documented operations.
    pub fn student_courses(&self, student_id: u64) -> Vec<Course> {
        self.enrollments
            .iter()
            .filter(|e| e.student_id == student_id)
            .filter_map(|e| self.courses.get(e.course_id).cloned())
            .collect()
    }

    /// Students enrolled in the course, in enrollment insertion order
    pub fn course_students(&self, course_id: u64) -> Vec<Student> {
        self.enrollments
            .iter()
            .filter(|e| e.course_id == course_id)
            .filter_map(|e| self.students.get(e.student_id).cloned())
            .collect()
    }

    // ==================
    // Lifecycle
    // ==================

    /// Wipe all three collections and restart both id counters at 1
    pub fn reset(&mut self) {
        self.students.reset();
        self.courses.reset();
        self.enrollments.clear();
    }

    /// Populate the fixed demo dataset: 3 students, 3 courses, no enrollments
    ///
    /// Goes through the normal create path, so the uniqueness and id-counter
    /// rules apply to seed data like any other.
    pub fn seed(&mut self) {
        for (name, email) in SEED_STUDENTS {
            let _ = self.create_student(NewStudent {
                name: name.to_string(),
                email: email.to_string(),
            });
        }
        for (title, teacher) in SEED_COURSES {
            let _ = self.create_course(NewCourse {
                title: title.to_string(),
                teacher: teacher.to_string(),
            });
        }
    }

    // ==================
    // Internal checks
    // ==================

    fn email_in_use(&self, email: &str, exclude_id: Option<u64>) -> bool {
        self.students
            .items()
            .iter()
            .any(|s| s.email == email && Some(s.id) != exclude_id)
    }

    fn title_in_use(&self, title: &str, exclude_id: u64) -> bool {
        self.courses
            .items()
            .iter()
            .any(|c| c.title == title && c.id != exclude_id)
    }

    fn is_enrolled(&self, student_id: u64, course_id: u64) -> bool {
        self.enrollments
            .iter()
            .any(|e| e.student_id == student_id && e.course_id == course_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> Store {
        let mut store = Store::new();
        store.seed();
        store
    }

    #[test]
    fn test_seed_shape() {
        let store = seeded_store();
        assert_eq!(store.students().len(), 3);
        assert_eq!(store.students()[0].name, "Alice");
        assert_eq!(store.courses().len(), 3);
        assert!(store.enrollments().is_empty());
    }

    #[test]
    fn test_update_student_applies_only_provided_fields() {
        let mut store = seeded_store();
        let updated = store
            .update_student(
                1,
                StudentPatch {
                    name: Some("Alicia".to_string()),
                    email: None,
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email, "alice@example.com");
        // The canonical copy changed, not just the returned one.
        assert_eq!(store.student(1).unwrap().name, "Alicia");
    }

    #[test]
    fn test_update_student_keeps_own_email() {
        let mut store = seeded_store();
        let patch = StudentPatch {
            name: None,
            email: Some("alice@example.com".to_string()),
        };
        assert!(store.update_student(1, patch).is_ok());
    }

    #[test]
    fn test_update_student_rejects_taken_email() {
        let mut store = seeded_store();
        let patch = StudentPatch {
            name: None,
            email: Some("bob@example.com".to_string()),
        };
        assert_eq!(store.update_student(1, patch), Err(StorageError::EmailTaken));
    }

    #[test]
    fn test_update_course_rejects_duplicate_title() {
        let mut store = seeded_store();
        let patch = CoursePatch {
            title: Some("Physics".to_string()),
            teacher: None,
        };
        assert_eq!(store.update_course(1, patch), Err(StorageError::TitleTaken));
    }

    #[test]
    fn test_create_course_allows_duplicate_title() {
        let mut store = seeded_store();
        let duplicate = store
            .create_course(NewCourse {
                title: "Math".to_string(),
                teacher: "Someone".to_string(),
            })
            .unwrap();
        assert_eq!(duplicate.title, "Math");
        assert_eq!(store.courses().len(), 4);
    }

    #[test]
    fn test_update_missing_records() {
        let mut store = seeded_store();
        assert_eq!(
            store.update_student(99, StudentPatch::default()),
            Err(StorageError::StudentNotFound)
        );
        assert_eq!(
            store.update_course(99, CoursePatch::default()),
            Err(StorageError::CourseNotFound)
        );
    }

    #[test]
    fn test_enroll_validation_order() {
        let mut store = seeded_store();
        // Both ids missing: the course check fires first.
        assert_eq!(store.enroll(99, 98), Err(StorageError::CourseNotFound));
        assert_eq!(store.enroll(99, 1), Err(StorageError::StudentNotFound));
    }

    #[test]
    fn test_projection_orders_follow_enrollment_order() {
        let mut store = seeded_store();
        store.enroll(1, 3).unwrap();
        store.enroll(1, 2).unwrap();

        let titles: Vec<String> = store
            .student_courses(1)
            .into_iter()
            .map(|c| c.title)
            .collect();
        assert_eq!(titles, vec!["History", "Physics"]);
    }
}
