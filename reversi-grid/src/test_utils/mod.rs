//! Utilities used for testing and benchmarking.

mod perft;
pub use perft::{perft, run_perft};
