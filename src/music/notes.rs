//! Defines pitches, letters, accidentals, and the note names built from them.
//!
//! A [`Pitch`] is a plain semitone count. The spelling of a pitch (which letter and which
//! accidental are used to write it) is not part of the pitch itself. It is decided by a
//! [`NoteName`], either from the chromatic table or from a key signature.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    mem::discriminant,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::error::TheoryError;

/// An absolute pitch counted in semitones from the reference C. Pitches below it are negative.
pub type Pitch = i32;

/// The semitone offsets of the major scale from its tonic. Every mode is a rotation of it.
pub const DIATONIC_SCALE: [i32; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Returns the pitch class of the pitch, always in the range 0 to 11.
#[must_use]
pub fn pitch_class(pitch: Pitch) -> i32 {
    pitch.rem_euclid(12)
}

/// Returns the octave of the pitch. Octave 0 starts at the reference C and octave -1 ends right
/// below it.
#[must_use]
pub fn octave(pitch: Pitch) -> i32 {
    pitch.div_euclid(12)
}

/// The seven letters used to name notes, in alphabetical order.
#[derive(
    Clone, Copy, Debug, strum::Display, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Letter {
    /// All the letters in alphabetical order.
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Returns the pitch class of the unaltered letter.
    #[must_use]
    pub fn semitones(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Returns the letter found `steps` positions later in the alphabet, wrapping from G to A.
    #[must_use]
    pub fn step(self, steps: usize) -> Letter {
        Self::ALL[(self as usize + steps) % Self::ALL.len()]
    }

    /// Returns the lowercase character used by text-based notation formats.
    #[must_use]
    pub fn to_lowercase(self) -> char {
        match self {
            Letter::A => 'a',
            Letter::B => 'b',
            Letter::C => 'c',
            Letter::D => 'd',
            Letter::E => 'e',
            Letter::F => 'f',
            Letter::G => 'g',
        }
    }

    /// Parses a letter in either case.
    #[must_use]
    pub fn from_char(c: char) -> Option<Letter> {
        Self::ALL
            .into_iter()
            .find(|l| l.to_lowercase() == c.to_ascii_lowercase())
    }
}

/// The alterations that can be applied to a letter.
///
/// `None` and `Natural` both leave the letter unaltered and therefore compare and hash as equal.
/// They stay distinct values because a natural sign is drawn while `None` is not, which is what
/// [`Accidental::is_natural_sign`] and [`Accidental::notation_code`] tell apart.
#[derive(Clone, Copy, Debug, EnumIter, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Accidental {
    None,
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Folds `Natural` into `None` so both share a single identity.
    fn normalized(self) -> Accidental {
        match self {
            Accidental::Natural => Accidental::None,
            other => other,
        }
    }

    /// Returns the change in semitones applied to the letter.
    #[must_use]
    pub fn offset(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::None | Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Returns the Unicode symbol of the accidental, or an empty string for `None`.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Accidental::None => "",
            Accidental::DoubleFlat => "𝄫",
            Accidental::Flat => "♭",
            Accidental::Natural => "♮",
            Accidental::Sharp => "♯",
            Accidental::DoubleSharp => "𝄪",
        }
    }

    /// Returns the ASCII code of the accidental in the text engraving format, where a flat is
    /// written `f`, a sharp `s`, and a drawn natural `n`.
    #[must_use]
    pub fn notation_code(self) -> &'static str {
        match self {
            Accidental::None => "",
            Accidental::DoubleFlat => "ff",
            Accidental::Flat => "f",
            Accidental::Natural => "n",
            Accidental::Sharp => "s",
            Accidental::DoubleSharp => "ss",
        }
    }

    /// Returns whether this is an explicit natural sign. Unlike `==`, this tells `Natural` apart
    /// from `None`.
    #[must_use]
    pub fn is_natural_sign(self) -> bool {
        matches!(self, Accidental::Natural)
    }

    /// Parses the accidental part of a note name, written with glyphs, ASCII symbols, notation
    /// codes, or the suffixes produced by [`NoteName::to_ascii_string`].
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Accidental> {
        match suffix {
            "" => Some(Accidental::None),
            "♮" | "n" | "_natural" => Some(Accidental::Natural),
            "♯" | "#" | "s" | "_sharp" => Some(Accidental::Sharp),
            "𝄪" | "##" | "x" | "ss" | "_double_sharp" => Some(Accidental::DoubleSharp),
            "♭" | "b" | "f" | "_flat" => Some(Accidental::Flat),
            "𝄫" | "bb" | "ff" | "_double_flat" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

impl PartialEq for Accidental {
    fn eq(&self, other: &Self) -> bool {
        discriminant(&self.normalized()) == discriminant(&other.normalized())
    }
}

impl Eq for Accidental {}

impl Hash for Accidental {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(&self.normalized()).hash(state);
    }
}

impl Display for Accidental {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.glyph())
    }
}

/// A letter together with an accidental.
///
/// Two names are equal when they sound the same, so `C♯ == D♭`. Use
/// [`NoteName::same_spelling`] to compare how the names are written.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct NoteName {
    /// The letter of the note.
    pub letter: Letter,

    /// The alteration applied to the letter.
    pub accidental: Accidental,
}

#[allow(missing_docs)]
impl NoteName {
    pub const A: NoteName = NoteName::new(Letter::A, Accidental::None);
    pub const A_FLAT: NoteName = NoteName::new(Letter::A, Accidental::Flat);
    pub const A_SHARP: NoteName = NoteName::new(Letter::A, Accidental::Sharp);
    pub const B: NoteName = NoteName::new(Letter::B, Accidental::None);
    pub const B_FLAT: NoteName = NoteName::new(Letter::B, Accidental::Flat);
    pub const B_SHARP: NoteName = NoteName::new(Letter::B, Accidental::Sharp);
    pub const C: NoteName = NoteName::new(Letter::C, Accidental::None);
    pub const C_FLAT: NoteName = NoteName::new(Letter::C, Accidental::Flat);
    pub const C_SHARP: NoteName = NoteName::new(Letter::C, Accidental::Sharp);
    pub const D: NoteName = NoteName::new(Letter::D, Accidental::None);
    pub const D_FLAT: NoteName = NoteName::new(Letter::D, Accidental::Flat);
    pub const D_SHARP: NoteName = NoteName::new(Letter::D, Accidental::Sharp);
    pub const E: NoteName = NoteName::new(Letter::E, Accidental::None);
    pub const E_FLAT: NoteName = NoteName::new(Letter::E, Accidental::Flat);
    pub const E_SHARP: NoteName = NoteName::new(Letter::E, Accidental::Sharp);
    pub const F: NoteName = NoteName::new(Letter::F, Accidental::None);
    pub const F_FLAT: NoteName = NoteName::new(Letter::F, Accidental::Flat);
    pub const F_SHARP: NoteName = NoteName::new(Letter::F, Accidental::Sharp);
    pub const G: NoteName = NoteName::new(Letter::G, Accidental::None);
    pub const G_FLAT: NoteName = NoteName::new(Letter::G, Accidental::Flat);
    pub const G_SHARP: NoteName = NoteName::new(Letter::G, Accidental::Sharp);

    /// Creates a note name from its parts.
    #[must_use]
    pub const fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    /// Returns the pitch class the name refers to, in the range 0 to 11.
    #[must_use]
    pub fn pitch_class(&self) -> i32 {
        (self.letter.semitones() + self.accidental.offset()).rem_euclid(12)
    }

    /// Returns whether both names are written with the same letter and accidental. `None` and
    /// `Natural` still count as the same spelling.
    #[must_use]
    pub fn same_spelling(&self, other: &NoteName) -> bool {
        self.letter == other.letter && self.accidental == other.accidental
    }

    /// Returns a representation of the name without Unicode characters for use in file names and
    /// other contexts where Unicode is harder or impossible to use.
    #[must_use]
    pub fn to_ascii_string(&self) -> String {
        let suffix = match self.accidental {
            Accidental::None => "",
            Accidental::DoubleFlat => "_double_flat",
            Accidental::Flat => "_flat",
            Accidental::Natural => "_natural",
            Accidental::Sharp => "_sharp",
            Accidental::DoubleSharp => "_double_sharp",
        };
        format!("{}{suffix}", self.letter)
    }
}

impl PartialEq for NoteName {
    fn eq(&self, other: &Self) -> bool {
        self.pitch_class() == other.pitch_class()
    }
}

impl Eq for NoteName {}

impl Hash for NoteName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pitch_class().hash(state);
    }
}

impl Display for NoteName {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}{}", self.letter, self.accidental)
    }
}

impl FromStr for NoteName {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| TheoryError::InvalidNoteName(s.to_string()))?;
        let accidental = Accidental::from_suffix(chars.as_str())
            .ok_or_else(|| TheoryError::InvalidNoteName(s.to_string()))?;
        Ok(NoteName::new(letter, accidental))
    }
}

/// The label used to draw a single pitch on a staff: a letter, the accidental to print next to
/// it, and the octave.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EngravingInfo {
    /// The letter, which decides the line or space of the note head.
    pub letter: Letter,

    /// The accidental drawn in front of the note head. `None` draws nothing.
    pub accidental: Accidental,

    /// The octave of the pitch. Octave 0 starts at the reference C.
    pub octave: i32,
}

impl EngravingInfo {
    /// Returns the pitch that this label was engraved from.
    #[must_use]
    pub fn pitch(&self) -> Pitch {
        self.octave * 12 + NoteName::new(self.letter, self.accidental).pitch_class()
    }
}

/// Writes the label in the text format consumed by the notation backend: the lowercase letter,
/// the accidental code, then one `'` per octave above octave 0 or one `,` per octave below it.
/// For example, `fs'` or `bn,,`.
impl Display for EngravingInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let marks = if self.octave >= 0 {
            "'".repeat(self.octave.unsigned_abs() as usize)
        } else {
            ",".repeat(self.octave.unsigned_abs() as usize)
        };
        write!(
            f,
            "{}{}{marks}",
            self.letter.to_lowercase(),
            self.accidental.notation_code()
        )
    }
}
