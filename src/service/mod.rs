//! Service layer: one store call per operation, with logging.
//!
//! [`SchoolService`] receives validated domain commands from the REST
//! handlers and forwards each to the [`crate::persistence::SchoolStore`].

pub mod school_service;

pub use school_service::SchoolService;
