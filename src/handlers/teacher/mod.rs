// handlers/teacher/mod.rs - Teacher-scoped handlers
//
// Middleware: token verification + role check (AccessPolicy::TEACHER).

pub mod classes;
pub mod grades;

pub use classes::{classroom_students_get, classrooms_by_subject_get, student_get};
pub use grades::{grade_post, student_grades_get};
