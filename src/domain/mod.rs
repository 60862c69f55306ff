//! Domain layer: entity identities, validated commands, and defaults.
//!
//! The process holds no entity state; these types only describe what a
//! request is allowed to ask the store to do.

pub mod course;
pub mod enrollment;
pub mod ids;
pub mod student;
pub mod validation;

pub use course::NewCourse;
pub use enrollment::{DEFAULT_SCORE, DEFAULT_STATUS, EnrollmentStatus, NewEnrollment};
pub use ids::{CourseId, EnrollmentId, StudentId};
pub use student::NewStudent;
