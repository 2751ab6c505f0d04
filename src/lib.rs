//! Galaxy slicer library.
//!
//! Scores system tiles, deals them into six player slices, rebalances the
//! slices until none is materially stronger or weaker than another, and
//! places each slice's tiles around the player's home system.

pub mod catalog;
pub mod generate;
pub mod report;
pub mod slice;
