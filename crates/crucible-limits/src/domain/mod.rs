//! # Limit Domain
//!
//! Position state, limit computations, migration preview, and route
//! resolution.

pub mod errors;
pub mod limits;
pub mod migration;
pub mod position;
pub mod routes;
