//! Signal shaping math
//!
//! Stateless scalar functions used to condition raw inputs and to ramp
//! the commanded power. Every function is pure and reentrant.
//!
//! None of these functions guard against degenerate arguments (equal range
//! bounds, zero divisors). Such calls follow IEEE-754 and produce
//! infinities or NaN; see the `# Contract` section on each function.

pub mod ease;
pub mod shaping;
pub mod vector;

pub use ease::ease_toward_target;
pub use shaping::{bucket_index, clamp, median_with_deadzone, remap, remap_with_floor};
pub use vector::{scalar_magnitude, sign_of};
