// handlers/admin/mod.rs - Administrative handlers
//
// Middleware: token verification + admin flag check (AccessPolicy::Admin).
// Full management of users, classrooms, subjects and enrollments.

pub mod catalog;
pub mod enrollments;
pub mod users;
pub mod validation;

pub use catalog::{classroom_post, classrooms_get, subject_post, subjects_get};
pub use enrollments::{
    student_classroom_change, student_subject_add, student_subject_remove, student_subjects_put, teacher_data_get,
    teacher_subject_add, teacher_subject_remove, user_classrooms_get, user_subjects_get,
};
pub use users::{
    classroom_students_get, student_put, students_get, teacher_put, teachers_get, user_get, user_post,
};
