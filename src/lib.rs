//! OOP Lessons - Runnable Examples
//!
//! This crate contains the building blocks for three introductory lessons:
//!
//! - [`animal`]: a small closed hierarchy of animals (inheritance, overriding,
//!   constructor chaining, encapsulation, members that cannot be overridden)
//! - [`traffic_light`]: an enum whose constants carry their own data
//! - [`roster`]: arrays vs. growable lists, with a `Student` record
//!
//! Run any lesson with:
//! ```bash
//! cargo run --bin inheritance
//! cargo run --bin enums
//! cargo run --bin arrays
//! ```

pub mod animal;
pub mod logging;
pub mod roster;
pub mod traffic_light;
