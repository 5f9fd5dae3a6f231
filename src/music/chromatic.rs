//! Defines the spelling of every pitch class outside of any key.
//!
//! Black keys are spelled with sharps. Key signatures only fall back to this table for the five
//! pitch classes outside their scale, so the choice never affects the spelling of scale notes.

use crate::music::notes::{octave, pitch_class, Accidental, EngravingInfo, NoteName, Pitch};

/// The context-free spelling of the twelve pitch classes.
pub struct ChromaticScale;

impl ChromaticScale {
    /// The name of each pitch class, indexed by pitch class.
    pub const NAMES: [NoteName; 12] = [
        NoteName::C,
        NoteName::C_SHARP,
        NoteName::D,
        NoteName::D_SHARP,
        NoteName::E,
        NoteName::F,
        NoteName::F_SHARP,
        NoteName::G,
        NoteName::G_SHARP,
        NoteName::A,
        NoteName::A_SHARP,
        NoteName::B,
    ];

    /// Returns the default name of the pitch, ignoring its octave.
    #[must_use]
    pub fn name(pitch: Pitch) -> NoteName {
        Self::NAMES[pitch_class(pitch) as usize]
    }

    /// Returns the label of the pitch with no key signature in effect. Every black key carries its
    /// sharp and every white key is left bare.
    #[must_use]
    pub fn engrave(pitch: Pitch) -> EngravingInfo {
        let template = Self::name(pitch);
        EngravingInfo {
            letter: template.letter,
            accidental: template.accidental,
            octave: octave(pitch),
        }
    }

    /// Returns whether the default spelling of the pitch uses an accidental.
    #[must_use]
    pub fn is_black_key(pitch: Pitch) -> bool {
        Self::name(pitch).accidental != Accidental::None
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::music::notes::Letter;

    /// Verifies that every entry in the table names its own pitch class.
    #[test]
    fn names_match_pitch_classes() {
        for (class, name) in ChromaticScale::NAMES.iter().enumerate() {
            assert_eq!(name.pitch_class(), class as i32);
        }
    }

    /// Verifies that black keys are spelled with sharps.
    #[test]
    fn black_keys_use_sharps() {
        for pitch in [1, 3, 6, 8, 10] {
            assert!(ChromaticScale::is_black_key(pitch));
            assert!(matches!(
                ChromaticScale::name(pitch).accidental,
                Accidental::Sharp
            ));
        }
        for pitch in [0, 2, 4, 5, 7, 9, 11] {
            assert!(!ChromaticScale::is_black_key(pitch));
        }
    }

    /// Verifies engraving pitches in different octaves.
    #[test]
    fn engrave() {
        let info = ChromaticScale::engrave(-11);
        assert_eq!(info.letter, Letter::C);
        assert!(matches!(info.accidental, Accidental::Sharp));
        assert_eq!(info.octave, -1);

        let info = ChromaticScale::engrave(28);
        assert_eq!(info.letter, Letter::E);
        assert!(matches!(info.accidental, Accidental::None));
        assert_eq!(info.octave, 2);
        assert_eq!(info.pitch(), 28);
    }
}
