//! Domain building blocks shared by the database and API crates.
//!
//! Nothing in here knows about HTTP or SQL.

pub mod assets;
pub mod error;
pub mod naming;
pub mod roles;
pub mod types;
