pub mod classroom;
pub mod grade;
pub mod subject;
pub mod user;
pub mod user_subject;

pub use classroom::Classroom;
pub use grade::{Grade, NewGrade};
pub use subject::Subject;
pub use user::{NewUser, ProfileUpdate, Role, User};
pub use user_subject::UserSubject;
