#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

#[cfg(test)]
extern crate alloc;

pub mod errors;
pub mod outcome;
pub mod unit;

pub use errors::PreconditionViolation;
pub use outcome::Outcome;
pub use unit::Unit;
