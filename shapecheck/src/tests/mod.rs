//! Test module for shapecheck
//!
//! This module contains property-based tests using proptest
//! to validate the laws schemas, modifiers and helpers must obey.

#[cfg(test)]
pub mod strategies;



#[cfg(test)]
pub mod message_tests;

#[cfg(test)]
pub mod util_tests;

#[cfg(test)]
pub mod pattern_tests;
