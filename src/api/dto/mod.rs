//! Data Transfer Objects for REST request/response serialization.
//!
//! Field names are camelCase on the wire. Required request fields are
//! modelled as `Option` so that a missing field reaches validation and
//! produces a 400 naming the field.

pub mod course_dto;
pub mod enrollment_dto;
pub mod student_dto;

pub use course_dto::*;
pub use enrollment_dto::*;
pub use student_dto::*;
