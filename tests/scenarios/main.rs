//! Lexis Scenario Test Suite
//!
//! End-to-end scenarios through the public `lexis` API.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test scenarios
//! ```

mod test_utils;

mod detection;
mod round_trip;
mod properties;
mod statistics;
