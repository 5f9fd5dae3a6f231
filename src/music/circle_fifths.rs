//! Maps positions in the circle of fifths to key roots.
//!
//! Step 0 is the key of the mode with no sharps or flats (C for major, A for minor). Each step up
//! adds a sharp to the key signature and each step down adds a flat, so steps -7 to 7 cover every
//! key that can be written with single accidentals.

use crate::{
    error::{Result, TheoryError},
    music::{
        modes::Mode,
        notes::{Accidental, Letter, NoteName},
    },
};

/// The letters in the order in which sharps are added to a key signature.
const CIRCLE_OF_FIFTHS: [Letter; 7] = [
    Letter::F,
    Letter::C,
    Letter::G,
    Letter::D,
    Letter::A,
    Letter::E,
    Letter::B,
];

/// The widest step in either direction that keeps key signatures to single accidentals.
pub const MAX_STEP: i32 = 7;

/// Returns the position in [`CIRCLE_OF_FIFTHS`] of the root of the mode's key without sharps or
/// flats.
fn circle_offset(mode: Mode) -> i32 {
    match mode {
        Mode::Lydian => 0,
        Mode::Ionian => 1,
        Mode::Mixolydian => 2,
        Mode::Dorian => 3,
        Mode::Aeolian => 4,
        Mode::Phrygian => 5,
        Mode::Locrian => 6,
    }
}

/// Returns the root of the key of the given mode that lies `step` positions away from the key with
/// no sharps or flats. Positive steps move clockwise (toward sharps) and negative steps move
/// counter-clockwise (toward flats).
///
/// Roots that would need a double sharp or double flat are rejected.
pub fn root_at(step: i32, mode: Mode) -> Result<NoteName> {
    let index = step
        .checked_add(circle_offset(mode))
        .ok_or(TheoryError::StepOutOfRange { step, mode })?;
    let rank = index.div_euclid(7);
    let letter = CIRCLE_OF_FIFTHS[index.rem_euclid(7) as usize];

    let accidental = match rank {
        -1 => Accidental::Flat,
        0 => Accidental::None,
        1 => Accidental::Sharp,
        _ => return Err(TheoryError::StepOutOfRange { step, mode }),
    };
    Ok(NoteName::new(letter, accidental))
}

/// Returns the step at which the root appears in the circle of fifths of the given mode, if it
/// appears in the range of single-accidental keys. The spelling of the root matters, so C♯ and D♭
/// are found at different steps.
#[must_use]
pub fn step_of(root: &NoteName, mode: Mode) -> Option<i32> {
    (-MAX_STEP..=MAX_STEP).find(|&step| {
        root_at(step, mode).is_ok_and(|candidate| candidate.same_spelling(root))
    })
}

/// Returns the root one step clockwise from the given root, or `None` if it lies at the sharp end
/// of the circle or outside of it.
#[must_use]
pub fn clockwise(root: &NoteName, mode: Mode) -> Option<NoteName> {
    let step = step_of(root, mode)?;
    if step >= MAX_STEP {
        return None;
    }
    root_at(step + 1, mode).ok()
}

/// Returns the root one step counter-clockwise from the given root, or `None` if it lies at the flat
/// end of the circle or outside of it.
#[must_use]
pub fn counter_clockwise(root: &NoteName, mode: Mode) -> Option<NoteName> {
    let step = step_of(root, mode)?;
    if step <= -MAX_STEP {
        return None;
    }
    root_at(step - 1, mode).ok()
}

/// Returns the roots of the fifteen keys of the mode, starting with the key without sharps or flats
/// and then alternating between the key with one more sharp and the key with one more flat.
pub fn key_roots(mode: Mode) -> Result<Vec<NoteName>> {
    std::iter::once(0)
        .chain((1..=MAX_STEP).flat_map(|step| [step, -step]))
        .map(|step| root_at(step, mode))
        .collect()
}

/// Returns one major root per pitch class for building chords: the sharp keys up to B and then the
/// flat keys from G♭ to F.
pub fn chord_roots() -> Result<Vec<NoteName>> {
    (0..6)
        .chain(-6..0)
        .map(|step| root_at(step, Mode::MAJOR))
        .collect()
}
