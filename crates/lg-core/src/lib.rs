//! lg-core: stable foundation for the lattice-gas workspace.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LgError, LgResult};
pub use numeric::*;
