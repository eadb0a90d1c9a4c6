//! longvec Core Library
//!
//! Fixed-size vectors of 64-bit signed integers (`Long2`, `Long3`, `Long4`)
//! with component-wise arithmetic, comparison masks, bitwise operators,
//! named conversions, lane reordering and a deterministic hash scheme.
//!
//! # Hashing
//!
//! Every vector width has a narrow hash (one `u64`) and a wide hash (one
//! `u64` per lane). See [`vector_hash`] for the construction.
//!
//! ```
//! use longvec_core::{Long2, VectorHash};
//!
//! let v = Long2::new(3, -7);
//! assert_eq!(v.hash(), VectorHash::hash(v));
//! assert_ne!(v.hash(), Long2::new(-7, 3).hash());
//! ```

// Lane loops index the constant tables and the lanes side by side
#![allow(clippy::needless_range_loop)]

#[macro_use]
mod macros;

// =============================================================================
// Core modules - always available
// =============================================================================

pub mod bool_vector;
pub mod hash_constants;
pub mod lane_ops;
pub mod long2;
pub mod long3;
pub mod long4;
pub mod status;
pub mod unsigned_vector;
pub mod vector_hash;

// =============================================================================
// C API
// =============================================================================

#[cfg(feature = "c-api")]
pub mod c_api;

// =============================================================================
// Core re-exports
// =============================================================================

pub use bool_vector::{Bool2, Bool3, Bool4};
pub use hash_constants::{HashConstants, LONG2_HASH, LONG3_HASH, LONG4_HASH};
pub use long2::Long2;
pub use long3::Long3;
pub use long4::Long4;
pub use status::{LongVecError, Result};
pub use unsigned_vector::{ULong2, ULong3, ULong4};
pub use vector_hash::{narrow_hash, wide_hash, VectorHash};
