//! Dataset folder processing
//!
//! Pairs images with masks, runs patch extraction on each pair and writes
//! the accepted patches.

pub mod pairing;
pub mod writer;
pub mod batch;
#[cfg(test)]
mod tests;

pub use pairing::{pair_samples, PairListing, SamplePair};
pub use writer::{PatchNaming, PatchWriter};
pub use batch::{BatchSummary, DatasetProcessor};
