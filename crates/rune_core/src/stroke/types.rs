use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StrokeError;

/// 획 종류
///
/// Turn-angle buckets produced by [`classify`](super::classify). `None` only appears inside pattern
/// definitions; the tokenizer never emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum StrokeClass {
    None = 0,
    Line = 1,         // 171-180
    LineReversed = 2, // 0-15
    CurveLow = 3,     // 141-170
    CurveMedium = 4,  // 121-140
    CurveHigh = 5,    // 101-120
    TurnCubic = 6,    // 81-100
    TurnSharp = 7,    // 16-80
}

impl StrokeClass {
    pub const ALL: [StrokeClass; 8] = [
        StrokeClass::None,
        StrokeClass::Line,
        StrokeClass::LineReversed,
        StrokeClass::CurveLow,
        StrokeClass::CurveMedium,
        StrokeClass::CurveHigh,
        StrokeClass::TurnCubic,
        StrokeClass::TurnSharp,
    ];

    /// Bit of this class inside a [`StrokeClassSet`]
    #[inline]
    pub const fn bit(self) -> u16 {
        1 << (self as u16)
    }

    /// Line classes carry their direction in the class itself
    #[inline]
    pub const fn is_line(self) -> bool {
        matches!(self, StrokeClass::Line | StrokeClass::LineReversed)
    }
}

/// 분류된 획 하나
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Stroke {
    class: StrokeClass,
    reversed: bool,
}

impl Stroke {
    /// Build a stroke, rejecting reversed line classes and the sentinel.
    pub fn new(class: StrokeClass, reversed: bool) -> Result<Self, StrokeError> {
        if class == StrokeClass::None {
            return Err(StrokeError::SentinelClass);
        }
        if class.is_line() && reversed {
            return Err(StrokeError::ReversedLine { class });
        }
        Ok(Self { class, reversed })
    }

    /// Infallible form for classifier output; lines drop the flag.
    #[inline]
    pub(crate) fn classified(class: StrokeClass, reversed: bool) -> Self {
        debug_assert!(class != StrokeClass::None);
        Self { class, reversed: reversed && !class.is_line() }
    }

    #[inline]
    pub fn class(&self) -> StrokeClass {
        self.class
    }

    #[inline]
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Same class with the reversal flag cleared
    #[inline]
    pub(crate) fn normalized(self) -> Self {
        Self { class: self.class, reversed: false }
    }
}

impl fmt::Display for Stroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.class as u8, if self.reversed { "r" } else { "" })
    }
}

const B_LINE: u16 = StrokeClass::Line.bit();
const B_LINE_REV: u16 = StrokeClass::LineReversed.bit();
const B_CURVE_L: u16 = StrokeClass::CurveLow.bit();
const B_CURVE_M: u16 = StrokeClass::CurveMedium.bit();
const B_CURVE_H: u16 = StrokeClass::CurveHigh.bit();
const B_CUBIC: u16 = StrokeClass::TurnCubic.bit();
const B_SHARP: u16 = StrokeClass::TurnSharp.bit();

const CLASS_MASK: u16 = 0x00FF;
const F_ELIDABLE: u16 = 1 << 8;
const F_REVERSED: u16 = 1 << 9;

/// 패턴 슬롯 하나가 허용하는 획 종류 집합
///
/// Low byte is one bit per [`StrokeClass`]; two flag bits sit above it:
/// `MayBeElided` (the slot may be absent from a candidate) and
/// `RequireReversed` (the candidate stroke must carry the reversal flag).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeClassSet(u16);

impl StrokeClassSet {
    pub const EMPTY: Self = Self(0);

    pub const LINE: Self = Self(B_LINE);
    pub const LINE_OR_NOTHING: Self = Self(B_LINE | F_ELIDABLE);
    pub const LINE_REV: Self = Self(B_LINE_REV);

    pub const LINE_OR_CURVE_L: Self = Self(B_LINE | B_CURVE_L);
    pub const LINE_OR_CURVE_M: Self = Self(B_LINE | B_CURVE_M);
    pub const LINE_OR_CURVE_LM: Self = Self(B_LINE | B_CURVE_L | B_CURVE_M);

    pub const CURVE_L: Self = Self(B_CURVE_L);
    pub const CURVE_L_R: Self = Self(B_CURVE_L | F_REVERSED);
    pub const CURVE_LM: Self = Self(B_CURVE_L | B_CURVE_M);
    pub const CURVE_LM_R: Self = Self(B_CURVE_L | B_CURVE_M | F_REVERSED);
    pub const CURVE_M: Self = Self(B_CURVE_M);
    pub const CURVE_M_R: Self = Self(B_CURVE_M | F_REVERSED);
    pub const CURVE_MH: Self = Self(B_CURVE_M | B_CURVE_H);
    pub const CURVE_MH_R: Self = Self(B_CURVE_M | B_CURVE_H | F_REVERSED);
    pub const CURVE_H: Self = Self(B_CURVE_H);
    pub const CURVE_H_R: Self = Self(B_CURVE_H | F_REVERSED);
    pub const CUBIC: Self = Self(B_CUBIC);
    pub const CUBIC_R: Self = Self(B_CUBIC | F_REVERSED);
    pub const CUBIC_OR_CURVE_M: Self = Self(B_CUBIC | B_CURVE_M);
    pub const CUBIC_OR_CURVE_M_R: Self = Self(B_CUBIC | B_CURVE_M | F_REVERSED);
    pub const CUBIC_OR_CURVE_H: Self = Self(B_CUBIC | B_CURVE_H);
    pub const CUBIC_OR_CURVE_H_R: Self = Self(B_CUBIC | B_CURVE_H | F_REVERSED);
    pub const CUBIC_OR_SHARP: Self = Self(B_CUBIC | B_SHARP);
    pub const CUBIC_OR_SHARP_R: Self = Self(B_CUBIC | B_SHARP | F_REVERSED);
    pub const SHARP: Self = Self(B_SHARP);
    pub const SHARP_R: Self = Self(B_SHARP | F_REVERSED);

    pub const CURVE_LMH: Self = Self(B_CURVE_L | B_CURVE_M | B_CURVE_H);
    pub const CURVE_LMH_R: Self = Self(B_CURVE_L | B_CURVE_M | B_CURVE_H | F_REVERSED);
    pub const CURVE_CMH: Self = Self(B_CUBIC | B_CURVE_M | B_CURVE_H);
    pub const CURVE_CMH_R: Self = Self(B_CUBIC | B_CURVE_M | B_CURVE_H | F_REVERSED);
    pub const CURVE_CLMH: Self = Self(B_CURVE_L | B_CURVE_M | B_CURVE_H | B_CUBIC);
    pub const CURVE_CLMH_R: Self = Self(B_CURVE_L | B_CURVE_M | B_CURVE_H | B_CUBIC | F_REVERSED);
    pub const CURVE_ANY: Self = Self(B_CURVE_L | B_CURVE_M | B_CURVE_H | B_CUBIC | B_SHARP);
    pub const CURVE_ANY_R: Self =
        Self(B_CURVE_L | B_CURVE_M | B_CURVE_H | B_CUBIC | B_SHARP | F_REVERSED);

    /// Both line classes. A mask, never a slot on its own.
    pub const LINE_TYPES: Self = Self(B_LINE | B_LINE_REV);

    /// The only combinations a catalog slot may use.
    pub const SANCTIONED: [StrokeClassSet; 34] = [
        Self::LINE,
        Self::LINE_OR_NOTHING,
        Self::LINE_REV,
        Self::LINE_OR_CURVE_L,
        Self::LINE_OR_CURVE_M,
        Self::LINE_OR_CURVE_LM,
        Self::CURVE_L,
        Self::CURVE_L_R,
        Self::CURVE_LM,
        Self::CURVE_LM_R,
        Self::CURVE_M,
        Self::CURVE_M_R,
        Self::CURVE_MH,
        Self::CURVE_MH_R,
        Self::CURVE_H,
        Self::CURVE_H_R,
        Self::CUBIC,
        Self::CUBIC_R,
        Self::CUBIC_OR_CURVE_M,
        Self::CUBIC_OR_CURVE_M_R,
        Self::CUBIC_OR_CURVE_H,
        Self::CUBIC_OR_CURVE_H_R,
        Self::CUBIC_OR_SHARP,
        Self::CUBIC_OR_SHARP_R,
        Self::SHARP,
        Self::SHARP_R,
        Self::CURVE_LMH,
        Self::CURVE_LMH_R,
        Self::CURVE_CMH,
        Self::CURVE_CMH_R,
        Self::CURVE_CLMH,
        Self::CURVE_CLMH_R,
        Self::CURVE_ANY,
        Self::CURVE_ANY_R,
    ];

    /// Raw bits, including the flag bits
    #[inline]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Only the class portion, flags stripped
    #[inline]
    pub const fn classes(self) -> Self {
        Self(self.0 & CLASS_MASK)
    }

    #[inline]
    pub const fn contains_class(self, class: StrokeClass) -> bool {
        self.0 & CLASS_MASK & class.bit() != 0
    }

    #[inline]
    pub const fn is_elidable(self) -> bool {
        self.0 & F_ELIDABLE != 0
    }

    #[inline]
    pub const fn requires_reversed(self) -> bool {
        self.0 & F_REVERSED != 0
    }

    /// Slot lists `Line` or `LineReversed` among its classes
    #[inline]
    pub const fn accepts_line_types(self) -> bool {
        self.0 & Self::LINE_TYPES.0 != 0
    }

    /// Slot agrees with the stroke on both class and reversal
    #[inline]
    pub fn admits(self, stroke: &Stroke) -> bool {
        self.requires_reversed() == stroke.is_reversed() && self.contains_class(stroke.class())
    }

    /// Lowest drawable class in the set
    pub fn representative(self) -> Option<StrokeClass> {
        StrokeClass::ALL
            .into_iter()
            .filter(|c| *c != StrokeClass::None)
            .find(|c| self.contains_class(*c))
    }

    pub fn is_sanctioned(self) -> bool {
        Self::SANCTIONED.contains(&self)
    }
}

impl fmt::Debug for StrokeClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let classes: Vec<_> =
            StrokeClass::ALL.into_iter().filter(|c| self.contains_class(*c)).collect();
        write!(f, "StrokeClassSet({classes:?}")?;
        if self.is_elidable() {
            write!(f, " | MayBeElided")?;
        }
        if self.requires_reversed() {
            write!(f, " | RequireReversed")?;
        }
        write!(f, ")")
    }
}
