//! RTV Math - the vector kernel under the RTV ray tracer.
//!
//! Everything here is a pure function over plain `Copy` values: no state,
//! no I/O, safe to call from any thread.

mod error;
mod ray;
mod vector;

pub use error::{MathError, Result};
pub use ray::Ray;
pub use vector::Vector;

// Re-export glam for callers converting at the f32 boundary
pub use glam;
