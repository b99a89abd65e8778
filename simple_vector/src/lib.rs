#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod collections;
pub mod errors;

pub use collections::growth::next_capacity;
pub use collections::reserve::{reserve, ReserveRequest};
pub use collections::vector::{IntoIter, SimpleVector};
pub use errors::{Error, Result};
