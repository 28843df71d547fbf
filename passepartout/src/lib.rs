mod common;
mod image;
mod ops;
mod statistics;

pub mod batch;
pub mod prelude;

pub use prelude::*;
