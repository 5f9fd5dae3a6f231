//! Contains the types and functions that spell pitches in a key and voice chords.

pub mod chords;
pub mod chromatic;
pub mod circle_fifths;
pub mod intervals;
pub mod key_signature;
pub mod modes;
pub mod notes;
