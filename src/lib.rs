//! Partition a slice into chunk views.
//!
//! [`split`] keeps the historical boundary, where every chunk holds at most one
//! element taken at a multiple of the chunk size. [`split_bounded`] produces
//! chunks of up to `chunk_size` elements that cover the whole input.

pub mod error;
pub mod splitter;

pub use error::{Result, SplitError};
pub use splitter::{split, split_bounded, split_mut, split_to_vec, Boundary, Splitter};
