//! Environment-driven configuration.
//!
//! Each submodule owns one concern and loads itself with a `from_env`
//! constructor (or, for the database, builds the pool directly).
//!
//! - [`cors`]: allowed browser origins
//! - [`database`]: PostgreSQL connection pool
//! - [`jwt`]: session token signing secret and expiry
//! - [`payment`]: payment processor credentials and endpoint

pub mod cors;
pub mod database;
pub mod jwt;
pub mod payment;
