//! Builds three-note chords and their inversions.
//!
//! Chords are voiced two octaves below their root, the register of the bass buttons they are
//! practiced on. Moving a voicing up to the treble staff is a plain transposition.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::Index,
};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{
    error::Result,
    music::{
        intervals::Interval,
        key_signature::KeySignature,
        notes::{EngravingInfo, NoteName, Pitch},
    },
};

/// The shift applied to the root of every chord built by [`build_chord`].
pub const CHORD_REGISTER_SHIFT: Pitch = -24;

/// The shift that moves a chord from the bass staff to the treble staff.
pub const TREBLE_SHIFT: Pitch = 24;

/// The kinds of chords that can be built.
#[derive(
    Clone, Copy, Debug, strum::Display, EnumIter, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum ChordKind {
    Major,
    Minor,
    Seventh,
    Diminished,
}

impl ChordKind {
    /// Returns the intervals between the root and each note of the chord. The seventh chord leaves
    /// out its fifth and the diminished chord stacks a diminished seventh, written as a major sixth.
    #[must_use]
    pub fn intervals(self) -> [Interval; 3] {
        match self {
            ChordKind::Major => [
                Interval::Unison,
                Interval::MajorThird,
                Interval::PerfectFifth,
            ],
            ChordKind::Minor => [
                Interval::Unison,
                Interval::MinorThird,
                Interval::PerfectFifth,
            ],
            ChordKind::Seventh => [
                Interval::Unison,
                Interval::MajorThird,
                Interval::MinorSeventh,
            ],
            ChordKind::Diminished => [
                Interval::Unison,
                Interval::MinorThird,
                Interval::MajorSixth,
            ],
        }
    }

    /// Returns the semitone offsets of the notes of the chord from its root.
    #[must_use]
    pub fn offsets(self) -> [i32; 3] {
        self.intervals().map(Interval::semitones)
    }

    /// Returns the chord's intervals in the short notation of harmony textbooks, for example
    /// `P1 m3 P5` for a minor chord.
    #[must_use]
    pub fn formula(self) -> String {
        self.intervals().map(Interval::abbreviation).join(" ")
    }

    /// Returns the full names of the chord's intervals, for example
    /// `Unison, Minor Third, Perfect Fifth`.
    #[must_use]
    pub fn interval_names(self) -> String {
        self.intervals().map(|interval| interval.to_string()).join(", ")
    }

    /// Returns the suffix appended to the root in the name of the chord.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            ChordKind::Major => "",
            ChordKind::Minor => "m",
            ChordKind::Seventh => "7",
            ChordKind::Diminished => "°",
        }
    }

    /// Returns the name of the chord of this kind built on the given root, for example `F♯m`.
    #[must_use]
    pub fn display_name(self, root: &NoteName) -> String {
        format!("{root}{}", self.suffix())
    }
}

/// Three pitches played together, from lowest to highest in root position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Chord(pub [Pitch; 3]);

impl Chord {
    /// Builds the chord of the given kind on the pitch class of the named root.
    #[must_use]
    pub fn from_root_name(root: &NoteName, kind: ChordKind) -> Self {
        build_chord(root.pitch_class(), kind)
    }

    /// Returns the pitches of the chord.
    #[must_use]
    pub fn pitches(&self) -> [Pitch; 3] {
        self.0
    }

    /// Returns the chord after `n` inversions. Each inversion moves the lowest note up an octave,
    /// so three inversions give back the root position one octave higher.
    ///
    /// Pitches that would leave the range of [`Pitch`] wrap around.
    #[must_use]
    pub fn invert(self, n: u32) -> Self {
        let octaves = (n / 3).wrapping_mul(12) as Pitch;
        let rotation = (n % 3) as usize;

        let mut pitches = self.0.map(|pitch| pitch.wrapping_add(octaves));
        pitches.rotate_left(rotation);
        // The notes rotated past the top moved up one more octave.
        for pitch in &mut pitches[3 - rotation..] {
            *pitch = pitch.wrapping_add(12);
        }
        Chord(pitches)
    }

    /// Returns the chord moved by the given number of semitones.
    #[must_use]
    pub fn transpose(self, semitones: i32) -> Self {
        Chord(self.0.map(|pitch| pitch + semitones))
    }

    /// Returns the labels used to draw the notes of the chord in the given key.
    pub fn engrave(&self, key: &KeySignature) -> Result<Vec<EngravingInfo>> {
        self.0.iter().map(|&pitch| key.engrave(pitch)).collect()
    }
}

impl Index<usize> for Chord {
    type Output = Pitch;

    fn index(&self, index: usize) -> &Pitch {
        &self.0[index]
    }
}

impl Display for Chord {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

/// Builds the chord of the given kind on the root, voiced [`CHORD_REGISTER_SHIFT`] semitones below
/// it.
#[must_use]
pub fn build_chord(root: Pitch, kind: ChordKind) -> Chord {
    Chord(kind.offsets().map(|offset| root + CHORD_REGISTER_SHIFT + offset))
}

/// Returns the chord after `n` inversions.
#[must_use]
pub fn invert(n: u32, chord: Chord) -> Chord {
    chord.invert(n)
}
