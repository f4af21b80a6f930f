//! One function per query or mutation. Every function takes its executor
//! explicitly so callers can run it on the pool or inside a transaction.

pub mod classrooms;
pub mod enrollments;
pub mod grades;
pub mod subjects;
pub mod users;
