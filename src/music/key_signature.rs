//! Computes the spelling of all twelve pitch classes inside a key.
//!
//! A key is a root and a mode. The seven pitch classes of its scale are spelled so that every
//! letter appears exactly once, starting with the letter of the root. The five remaining pitch
//! classes keep their chromatic spelling. The engraving of a pitch then only prints the accidentals
//! that the key signature does not already imply.

use std::fmt::{Display, Formatter, Result as FmtResult};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TheoryError},
    music::{
        chromatic::ChromaticScale,
        modes::Mode,
        notes::{
            octave, pitch_class, Accidental, EngravingInfo, Letter, NoteName, Pitch,
            DIATONIC_SCALE,
        },
    },
};

/// The accidentals tried, in order, when spelling a scale note with its assigned letter. Naturals
/// are never tried, so an unaltered letter is always labeled with `Accidental::None`.
const SPELLING_CANDIDATES: [Accidental; 5] = [
    Accidental::None,
    Accidental::Flat,
    Accidental::Sharp,
    Accidental::DoubleFlat,
    Accidental::DoubleSharp,
];

/// The root and mode that define a key. Used to store and load key signatures, which rebuild their
/// spelling table when they are deserialized.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct KeyDefinition {
    /// The root of the key.
    pub root: NoteName,

    /// The mode of the key.
    pub mode: Mode,
}

/// The spelling of every pitch class inside a key. Immutable once built.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(try_from = "KeyDefinition", into = "KeyDefinition")]
pub struct KeySignature {
    /// The pitch class of the root.
    root: i32,

    /// The mode of the key.
    mode: Mode,

    /// The pitch classes of the scale, starting from the root.
    scale: [i32; 7],

    /// The name of each pitch class, indexed by pitch class.
    names: [NoteName; 12],
}

/// Returns the name of the pitch class written with the given letter, or `None` if the letter is
/// more than two semitones away from it.
fn spell(letter: Letter, class: i32) -> Option<NoteName> {
    SPELLING_CANDIDATES
        .into_iter()
        .map(|accidental| NoteName::new(letter, accidental))
        .find(|candidate| candidate.pitch_class() == class)
}

impl KeySignature {
    /// Builds the key signature of the given root and mode.
    ///
    /// # Panics
    ///
    /// Panics if a scale note would need more than two sharps or flats, which can only happen for
    /// roots spelled with a double accidental. Use [`KeySignature::try_new`] for roots that do not
    /// come from [`root_at`](crate::music::circle_fifths::root_at).
    #[must_use]
    pub fn new(root: NoteName, mode: Mode) -> Self {
        Self::try_new(root, mode).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Builds the key signature of the given root and mode, or returns
    /// [`TheoryError::UnspellableKey`] if a scale note would need more than two sharps or flats.
    pub fn try_new(root: NoteName, mode: Mode) -> Result<Self> {
        let root_class = root.pitch_class();
        let diatonic_root = root_class - DIATONIC_SCALE[mode.index()];
        let scale: [i32; 7] = std::array::from_fn(|degree| {
            (diatonic_root + DIATONIC_SCALE[(degree + mode.index()) % 7]).rem_euclid(12)
        });

        // Pitch classes outside the scale keep their chromatic name.
        let mut names = ChromaticScale::NAMES;
        for (degree, &class) in scale.iter().enumerate() {
            let name = spell(root.letter.step(degree), class)
                .ok_or(TheoryError::UnspellableKey { root, mode })?;
            trace!("degree {} of {root} {mode} is {name}", degree + 1);
            names[class as usize] = name;
        }

        let key = Self {
            root: root_class,
            mode,
            scale,
            names,
        };
        debug!(
            "built key signature {key} with {} sharps and {} flats",
            key.count_scale_accidentals(Accidental::Sharp),
            key.count_scale_accidentals(Accidental::Flat),
        );
        Ok(key)
    }

    /// Returns how many scale notes are spelled with the given accidental.
    fn count_scale_accidentals(&self, accidental: Accidental) -> usize {
        self.scale_names()
            .iter()
            .filter(|name| name.accidental == accidental)
            .count()
    }

    /// Returns the root of the key, spelled as in the key.
    #[must_use]
    pub fn root(&self) -> NoteName {
        self.names[self.root as usize]
    }

    /// Returns the pitch class of the root.
    #[must_use]
    pub fn root_pitch_class(&self) -> i32 {
        self.root
    }

    /// Returns the mode of the key.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the pitch classes of the scale, starting from the root.
    #[must_use]
    pub fn scale(&self) -> &[i32; 7] {
        &self.scale
    }

    /// Returns the names of the scale notes, starting from the root.
    #[must_use]
    pub fn scale_names(&self) -> [NoteName; 7] {
        self.scale.map(|class| self.names[class as usize])
    }

    /// Returns whether the pitch belongs to the scale, in any octave.
    #[must_use]
    pub fn contains(&self, pitch: Pitch) -> bool {
        self.scale.contains(&pitch_class(pitch))
    }

    /// Returns the name of the pitch in this key, ignoring its octave.
    #[must_use]
    pub fn name(&self, pitch: Pitch) -> NoteName {
        self.names[pitch_class(pitch) as usize]
    }

    /// Returns the label used to draw the pitch on a staff carrying this key signature.
    ///
    /// Scale notes are drawn without an accidental, since the key signature already carries it.
    /// Other notes show their sharp or flat, or a natural sign when their plain letter would
    /// otherwise be altered by the key signature.
    ///
    /// Only major and minor keys can be engraved.
    ///
    /// # Panics
    ///
    /// Panics if a note outside the scale is labeled with a natural or a double accidental, which
    /// the chromatic table never does.
    pub fn engrave(&self, pitch: Pitch) -> Result<EngravingInfo> {
        if !self.mode.supports_engraving() {
            return Err(TheoryError::UnsupportedEngravingMode(self.mode));
        }

        let template = self.name(pitch);
        let accidental = if self.contains(pitch) {
            Accidental::None
        } else {
            match template.accidental {
                Accidental::None => Accidental::Natural,
                Accidental::Sharp | Accidental::Flat => template.accidental,
                Accidental::Natural | Accidental::DoubleFlat | Accidental::DoubleSharp => panic!(
                    "out-of-key note {template} must be spelled with a plain letter, sharp, or flat"
                ),
            }
        };

        Ok(EngravingInfo {
            letter: template.letter,
            accidental,
            octave: octave(pitch),
        })
    }

    /// Returns the name of the key signature in the text notation format, for example `ef_major`
    /// or `fs_minor`. Only major and minor keys have one.
    pub fn notation_name(&self) -> Result<String> {
        if !self.mode.supports_engraving() {
            return Err(TheoryError::UnsupportedEngravingMode(self.mode));
        }
        let root = self.root();
        Ok(format!(
            "{}{}_{}",
            root.letter.to_lowercase(),
            root.accidental.notation_code(),
            self.mode.common_name()
        ))
    }
}

impl Display for KeySignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.root(), self.mode.common_name())
    }
}

impl TryFrom<KeyDefinition> for KeySignature {
    type Error = TheoryError;

    fn try_from(definition: KeyDefinition) -> Result<Self> {
        KeySignature::try_new(definition.root, definition.mode)
    }
}

impl From<KeySignature> for KeyDefinition {
    fn from(key: KeySignature) -> Self {
        KeyDefinition {
            root: key.root(),
            mode: key.mode,
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    /// Returns the names of the scale notes as strings.
    fn scale_strings(key: &KeySignature) -> Vec<String> {
        key.scale_names().iter().map(ToString::to_string).collect()
    }

    /// Verifies the spelling of a few well-known scales.
    #[test]
    fn known_scales() {
        let key = KeySignature::new(NoteName::E_FLAT, Mode::MAJOR);
        assert_eq!(scale_strings(&key), vec!["E♭", "F", "G", "A♭", "B♭", "C", "D"]);

        let key = KeySignature::new(NoteName::F_SHARP, Mode::MINOR);
        assert_eq!(
            scale_strings(&key),
            vec!["F♯", "G♯", "A", "B", "C♯", "D", "E"]
        );

        let key = KeySignature::new(NoteName::D, Mode::Dorian);
        assert_eq!(scale_strings(&key), vec!["D", "E", "F", "G", "A", "B", "C"]);

        let key = KeySignature::new(NoteName::C_SHARP, Mode::Lydian);
        assert_eq!(
            scale_strings(&key),
            vec!["C♯", "D♯", "E♯", "F𝄪", "G♯", "A♯", "B♯"]
        );

        let key = KeySignature::new(NoteName::C_FLAT, Mode::Locrian);
        assert_eq!(
            scale_strings(&key),
            vec!["C♭", "D𝄫", "E𝄫", "F♭", "G𝄫", "A𝄫", "B𝄫"]
        );
    }

    /// Verifies that the same pitch class is spelled differently depending on the key.
    #[test]
    fn enharmonic_spelling_depends_on_key() {
        let sharp_key = KeySignature::new(NoteName::E, Mode::MAJOR);
        let flat_key = KeySignature::new(NoteName::A_FLAT, Mode::MAJOR);
        assert!(sharp_key.name(8).same_spelling(&NoteName::G_SHARP));
        assert!(flat_key.name(8).same_spelling(&NoteName::A_FLAT));

        let key = KeySignature::new(NoteName::F_SHARP, Mode::MAJOR);
        assert!(key.name(5).same_spelling(&NoteName::E_SHARP));
        let key = KeySignature::new(NoteName::G_FLAT, Mode::MAJOR);
        assert!(key.name(11).same_spelling(&NoteName::C_FLAT));
    }

    /// Verifies that notes outside the scale keep their chromatic spelling.
    #[test]
    fn out_of_scale_names_are_chromatic() {
        let key = KeySignature::new(NoteName::B_FLAT, Mode::MAJOR);
        for pitch in 0..12 {
            if !key.contains(pitch) {
                assert!(key.name(pitch).same_spelling(&ChromaticScale::name(pitch)));
            }
        }
        assert!(key.name(11).same_spelling(&NoteName::B));
        assert!(key.name(1).same_spelling(&NoteName::C_SHARP));
    }

    /// Verifies that naming a pitch ignores its octave.
    #[test]
    fn name_ignores_octave() {
        let key = KeySignature::new(NoteName::D_FLAT, Mode::MAJOR);
        assert!(key.name(-11).same_spelling(&NoteName::D_FLAT));
        assert!(key.name(25).same_spelling(&NoteName::D_FLAT));
    }

    /// Verifies engraving scale notes and chromatic notes in a flat key.
    #[test]
    fn engrave_in_flat_key() -> anyhow::Result<()> {
        let key = KeySignature::new(NoteName::F, Mode::MAJOR);

        let info = key.engrave(10)?;
        assert_eq!(info.letter, Letter::B);
        assert!(matches!(info.accidental, Accidental::None));
        assert_eq!(info.octave, 0);

        let info = key.engrave(-1)?;
        assert_eq!(info.letter, Letter::B);
        assert!(info.accidental.is_natural_sign());
        assert_eq!(info.octave, -1);
        assert_eq!(info.to_string(), "bn,");

        let info = key.engrave(13)?;
        assert_eq!(info.letter, Letter::C);
        assert!(matches!(info.accidental, Accidental::Sharp));
        assert_eq!(info.to_string(), "cs'");
        Ok(())
    }

    /// Verifies that every engraving in major and minor keys points back to its pitch.
    #[test]
    fn engraving_preserves_pitch() -> anyhow::Result<()> {
        for root in ChromaticScale::NAMES {
            for mode in [Mode::MAJOR, Mode::MINOR] {
                let key = KeySignature::new(root, mode);
                for pitch in -24..24 {
                    let info = key.engrave(pitch)?;
                    let drawn = if matches!(info.accidental, Accidental::None) {
                        key.name(pitch)
                    } else {
                        NoteName::new(info.letter, info.accidental)
                    };
                    assert_eq!(drawn.pitch_class(), pitch_class(pitch));
                    assert_eq!(info.octave, octave(pitch));
                }
            }
        }
        Ok(())
    }

    /// Verifies that keys in other modes cannot be engraved.
    #[test]
    fn engrave_other_modes() {
        for mode in Mode::iter().filter(|mode| !mode.supports_engraving()) {
            let key = KeySignature::new(NoteName::D, mode);
            assert_eq!(
                key.engrave(2).unwrap_err(),
                TheoryError::UnsupportedEngravingMode(mode)
            );
            assert!(key.notation_name().is_err());
        }
    }

    /// Verifies the notation names of a few keys.
    #[test]
    fn notation_name() -> anyhow::Result<()> {
        assert_eq!(
            KeySignature::new(NoteName::C, Mode::MAJOR).notation_name()?,
            "c_major"
        );
        assert_eq!(
            KeySignature::new(NoteName::E_FLAT, Mode::MAJOR).notation_name()?,
            "ef_major"
        );
        assert_eq!(
            KeySignature::new(NoteName::F_SHARP, Mode::MINOR).notation_name()?,
            "fs_minor"
        );
        Ok(())
    }

    /// Verifies the accessors and the display of a key.
    #[test]
    fn accessors() {
        let key = KeySignature::new(NoteName::A, Mode::MINOR);
        assert!(key.root().same_spelling(&NoteName::A));
        assert_eq!(key.root_pitch_class(), 9);
        assert_eq!(key.mode(), Mode::Aeolian);
        assert_eq!(key.scale(), &[9, 11, 0, 2, 4, 5, 7]);
        assert!(key.contains(-3));
        assert!(!key.contains(1));
        assert_eq!(key.to_string(), "A minor");
        assert_eq!(
            KeySignature::new(NoteName::B_FLAT, Mode::Mixolydian).to_string(),
            "B♭ mixolydian"
        );
    }

    /// Verifies that a key signature is stored as its root and mode and rebuilt when loaded.
    #[test]
    fn serialization() -> anyhow::Result<()> {
        let key = KeySignature::new(NoteName::D_FLAT, Mode::MAJOR);
        let json = serde_json::to_string(&key)?;
        assert_eq!(
            json,
            r#"{"root":{"letter":"D","accidental":"Flat"},"mode":"ionian"}"#
        );

        let loaded: KeySignature = serde_json::from_str(&json)?;
        assert!(loaded.root().same_spelling(&NoteName::D_FLAT));
        for pitch in 0..12 {
            assert!(loaded.name(pitch).same_spelling(&key.name(pitch)));
        }

        let loaded: KeySignature =
            serde_json::from_str(r#"{"root":{"letter":"A","accidental":"None"},"mode":"minor"}"#)?;
        assert_eq!(loaded.mode(), Mode::Aeolian);
        Ok(())
    }

    /// Verifies that roots whose scale needs triple accidentals are rejected.
    #[test]
    fn unspellable_keys() -> anyhow::Result<()> {
        let root: NoteName = "Gx".parse()?;
        assert_eq!(
            KeySignature::try_new(root, Mode::MAJOR).unwrap_err(),
            TheoryError::UnspellableKey {
                root,
                mode: Mode::Ionian
            }
        );

        let root: NoteName = "Fbb".parse()?;
        assert!(matches!(
            KeySignature::try_new(root, Mode::MINOR),
            Err(TheoryError::UnspellableKey { .. })
        ));

        // Double accidentals are fine as long as every degree stays within two.
        let key = KeySignature::try_new("Bbb".parse()?, Mode::MAJOR)?;
        assert_eq!(
            scale_strings(&key),
            vec!["B𝄫", "C♭", "D♭", "E𝄫", "F♭", "G♭", "A♭"]
        );
        Ok(())
    }

    /// Verifies that the infallible constructor panics on a root it cannot spell.
    #[test]
    #[should_panic(expected = "cannot spell the G𝄪 major scale")]
    fn new_panics_on_unspellable_key() {
        let _ = KeySignature::new(NoteName::new(Letter::G, Accidental::DoubleSharp), Mode::MAJOR);
    }

    /// Verifies that loading an unspellable key fails instead of panicking.
    #[test]
    fn deserialize_unspellable_key() {
        let loaded = serde_json::from_str::<KeySignature>(
            r#"{"root":{"letter":"G","accidental":"DoubleSharp"},"mode":"major"}"#,
        );
        assert!(loaded.is_err());
    }
}
