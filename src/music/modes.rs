//! Defines the seven modes of the diatonic scale.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::music::notes::DIATONIC_SCALE;

/// One of the seven musical modes. Each one starts the major scale pattern on a different degree.
/// Major and Minor correspond to the Ionian and Aeolian modes, respectively.
///
/// Modes parse case-insensitively from their own names and from "major" and "minor".
#[derive(
    Clone,
    Copy,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
    Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum Mode {
    #[strum(to_string = "ionian", serialize = "major")]
    #[serde(alias = "major")]
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    #[strum(to_string = "aeolian", serialize = "minor")]
    #[serde(alias = "minor")]
    Aeolian,
    Locrian,
}

impl Mode {
    /// The major mode.
    pub const MAJOR: Mode = Mode::Ionian;

    /// The minor mode.
    pub const MINOR: Mode = Mode::Aeolian;

    /// Returns the scale degree of the major scale on which the mode starts, counting from zero.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Mode::Ionian => 0,
            Mode::Dorian => 1,
            Mode::Phrygian => 2,
            Mode::Lydian => 3,
            Mode::Mixolydian => 4,
            Mode::Aeolian => 5,
            Mode::Locrian => 6,
        }
    }

    /// Returns the semitone offset of each scale degree from the root of the mode.
    #[must_use]
    pub fn intervals(self) -> [i32; 7] {
        let start = DIATONIC_SCALE[self.index()];
        std::array::from_fn(|degree| {
            (DIATONIC_SCALE[(degree + self.index()) % 7] - start).rem_euclid(12)
        })
    }

    /// Returns whether notes in a key of this mode can be engraved. Only major and minor key
    /// signatures are drawn.
    #[must_use]
    pub fn supports_engraving(self) -> bool {
        matches!(self, Mode::Ionian | Mode::Aeolian)
    }

    /// Returns the name musicians use for keys in this mode, which is "major" and "minor" for the
    /// Ionian and Aeolian modes.
    #[must_use]
    pub fn common_name(self) -> &'static str {
        match self {
            Mode::Ionian => "major",
            Mode::Dorian => "dorian",
            Mode::Phrygian => "phrygian",
            Mode::Lydian => "lydian",
            Mode::Mixolydian => "mixolydian",
            Mode::Aeolian => "minor",
            Mode::Locrian => "locrian",
        }
    }
}
