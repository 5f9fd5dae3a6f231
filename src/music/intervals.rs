//! Defines the musical intervals used to build chords.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Defines the different musical intervals up to the octave.
#[derive(Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[allow(missing_docs)]
pub enum Interval {
    Unison,
    #[strum(to_string = "Minor Second")]
    MinorSecond,
    #[strum(to_string = "Major Second")]
    MajorSecond,
    #[strum(to_string = "Minor Third")]
    MinorThird,
    #[strum(to_string = "Major Third")]
    MajorThird,
    #[strum(to_string = "Perfect Fourth")]
    PerfectFourth,
    Tritone,
    #[strum(to_string = "Perfect Fifth")]
    PerfectFifth,
    #[strum(to_string = "Minor Sixth")]
    MinorSixth,
    #[strum(to_string = "Major Sixth")]
    MajorSixth,
    #[strum(to_string = "Minor Seventh")]
    MinorSeventh,
    #[strum(to_string = "Major Seventh")]
    MajorSeventh,
    Octave,
}

impl Interval {
    /// Returns the size of the interval in semitones.
    #[must_use]
    pub fn semitones(self) -> i32 {
        match self {
            Interval::Unison => 0,
            Interval::MinorSecond => 1,
            Interval::MajorSecond => 2,
            Interval::MinorThird => 3,
            Interval::MajorThird => 4,
            Interval::PerfectFourth => 5,
            Interval::Tritone => 6,
            Interval::PerfectFifth => 7,
            Interval::MinorSixth => 8,
            Interval::MajorSixth => 9,
            Interval::MinorSeventh => 10,
            Interval::MajorSeventh => 11,
            Interval::Octave => 12,
        }
    }

    /// Returns the short name of the interval, as used in harmony textbooks.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            Interval::Unison => "P1",
            Interval::MinorSecond => "m2",
            Interval::MajorSecond => "M2",
            Interval::MinorThird => "m3",
            Interval::MajorThird => "M3",
            Interval::PerfectFourth => "P4",
            Interval::Tritone => "TT",
            Interval::PerfectFifth => "P5",
            Interval::MinorSixth => "m6",
            Interval::MajorSixth => "M6",
            Interval::MinorSeventh => "m7",
            Interval::MajorSeventh => "M7",
            Interval::Octave => "P8",
        }
    }
}
