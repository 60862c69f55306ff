//! # enrollment-gateway
//!
//! REST API over a relational schema of students, courses, and
//! enrollments.
//!
//! Each route validates a small set of required fields, issues exactly one
//! parameterized statement through the shared connection pool, and maps
//! the result (or error) to a JSON response. The store is the single
//! source of truth; the process keeps no entity state between requests.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── SchoolService (service/)
//!     ├── Commands + defaults (domain/)
//!     │
//!     └── SchoolStore → PostgreSQL (persistence/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
