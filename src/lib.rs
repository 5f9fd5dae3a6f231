//! enharmony spells pitches the way they are written in a given key and builds the chords practiced
//! in that key.
//!
//! A pitch is just a number of semitones, but on paper the same pitch can be written in several
//! ways: the black key above G is G♯ in E major and A♭ in F minor. Given a root and a mode, a
//! [`KeySignature`] spells each of the seven scale notes with a different letter, falls back to a
//! fixed chromatic spelling for the other five pitch classes, and decides which accidental must be
//! printed next to a note head on a staff that already carries the key signature.
//!
//! Keys are usually enumerated with the circle of fifths. [`root_at`] returns the root that lies a
//! number of steps away from the key without sharps or flats, and the chord functions build and
//! invert three-note voicings on those roots:
//!
//! ```
//! use enharmony::{build_chord, invert, root_at, ChordKind, KeySignature, Mode};
//!
//! let root = root_at(-3, Mode::MAJOR).unwrap();
//! let key = KeySignature::new(root, Mode::MAJOR);
//! assert_eq!(key.to_string(), "E♭ major");
//! assert_eq!(key.engrave(-1).unwrap().to_string(), "bn,");
//!
//! let chord = invert(1, build_chord(root.pitch_class(), ChordKind::Minor));
//! assert_eq!(chord.pitches(), [-18, -14, -9]);
//! assert_eq!(ChordKind::Minor.display_name(&root), "E♭m");
//! ```
//!
//! Every value in this crate is immutable and free of global state, so key signatures can be built
//! and queried from any number of threads.

pub mod error;
pub mod music;

pub use error::{Result, TheoryError};
pub use music::{
    chords::{build_chord, invert, Chord, ChordKind},
    chromatic::ChromaticScale,
    circle_fifths::{chord_roots, key_roots, root_at},
    key_signature::{KeySignature, KeyDefinition},
    modes::Mode,
    notes::{Accidental, EngravingInfo, Letter, NoteName, Pitch},
};
