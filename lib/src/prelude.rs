//! Prelude.
//!
//! Brings the chunk traits into scope with a single glob import:
//!
//! ```
//! # #![allow(unused_imports)]
//! use libwamap::prelude::*;
//! ```
pub use crate::chunk::{Chunk, ChunkExt};
