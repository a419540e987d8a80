//! Built-in rune and runeword tables
//!
//! Each rune may be drawn several ways, one entry per variant. Order matters:
//! an entry's position is its [`PatternId`](super::PatternId), and ties in
//! runeword selection resolve in table order.

use super::types::{Rune, Runeword};
use crate::stroke::StrokeClassSet as S;

pub const PATTERN_COUNT: usize = 82;
pub const RUNEWORD_COUNT: usize = 39;

/// 룬 획 패턴 테이블
pub static RUNE_PATTERNS: [(Rune, &[S]); PATTERN_COUNT] = [
    // EL1
    (
        Rune::El,
        &[
            S::CURVE_MH,
            S::CURVE_LM,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::LINE,
            S::CURVE_LM,
            S::CURVE_LM,
        ],
    ),
    // EL2
    (Rune::El, &[S::CURVE_MH, S::CURVE_LMH_R, S::SHARP_R, S::LINE_OR_CURVE_LM, S::CURVE_LMH]),
    // ELD1
    (
        Rune::Eld,
        &[
            S::CURVE_L,
            S::LINE_REV,
            S::LINE,
            S::CURVE_LM,
            S::CURVE_MH,
            S::LINE_REV,
            S::CURVE_LM,
            S::SHARP,
        ],
    ),
    // ELD2
    (Rune::Eld, &[S::CURVE_L, S::LINE_REV, S::LINE_OR_CURVE_L, S::CURVE_MH, S::CURVE_LM]),
    // TIR1
    (
        Rune::Tir,
        &[
            S::SHARP,
            S::LINE,
            S::SHARP_R,
            S::LINE,
            S::SHARP_R,
            S::SHARP_R,
            S::CURVE_LM,
            S::CURVE_MH,
            S::CURVE_L,
        ],
    ),
    // TIR2
    (
        Rune::Tir,
        &[
            S::SHARP,
            S::LINE_OR_NOTHING,
            S::SHARP_R,
            S::LINE_OR_NOTHING,
            S::SHARP_R,
            S::SHARP,
            S::LINE_OR_NOTHING,
        ],
    ),
    // NEF
    (
        Rune::Nef,
        &[
            S::CUBIC_OR_SHARP,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::CUBIC_OR_SHARP,
            S::CURVE_LMH_R,
        ],
    ),
    // ETH1
    (
        Rune::Eth,
        &[
            S::LINE_OR_CURVE_LM,
            S::LINE_REV,
            S::CUBIC_OR_SHARP_R,
            S::CUBIC_OR_SHARP_R,
            S::CUBIC_OR_SHARP_R,
        ],
    ),
    // ETH2
    (
        Rune::Eth,
        &[
            S::LINE_OR_CURVE_LM,
            S::LINE_REV,
            S::CUBIC_OR_SHARP,
            S::CUBIC_OR_SHARP_R,
            S::CUBIC_OR_SHARP_R,
        ],
    ),
    // ITH1
    (
        Rune::Ith,
        &[
            S::CURVE_MH,
            S::LINE_OR_NOTHING,
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::LINE_OR_NOTHING,
            S::CURVE_MH,
        ],
    ),
    // ITH2
    (
        Rune::Ith,
        &[
            S::CURVE_MH,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::CURVE_MH_R,
            S::CUBIC_OR_SHARP_R,
            S::LINE_OR_NOTHING,
            S::CURVE_MH,
        ],
    ),
    // TAL1
    (Rune::Tal, &[S::SHARP, S::LINE, S::SHARP_R, S::SHARP, S::LINE]),
    // TAL2
    (Rune::Tal, &[S::LINE, S::SHARP, S::SHARP, S::LINE, S::SHARP_R]),
    // TAL3
    (Rune::Tal, &[S::SHARP, S::SHARP, S::LINE, S::SHARP_R, S::SHARP]),
    // RAL
    (Rune::Ral, &[S::CURVE_LMH, S::CURVE_LMH_R, S::CURVE_MH, S::CURVE_LMH, S::CURVE_MH]),
    // ORT1
    (
        Rune::Ort,
        &[
            S::CURVE_LM,
            S::CURVE_MH_R,
            S::SHARP_R,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::CURVE_MH_R,
            S::CURVE_LM_R,
        ],
    ),
    // ORT2
    (
        Rune::Ort,
        &[
            S::CURVE_LMH,
            S::SHARP_R,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::CURVE_LMH_R,
        ],
    ),
    // ORT3
    (
        Rune::Ort,
        &[
            S::CURVE_LMH,
            S::SHARP_R,
            S::CURVE_LM_R,
            S::LINE_OR_NOTHING,
            S::CURVE_LM,
            S::SHARP_R,
            S::CURVE_LMH_R,
        ],
    ),
    // THUL
    (
        Rune::Thul,
        &[
            S::LINE,
            S::SHARP,
            S::LINE_OR_NOTHING,
            S::SHARP_R,
            S::SHARP_R,
            S::LINE_OR_NOTHING,
        ],
    ),
    // AMN
    (
        Rune::Amn,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CURVE_LMH,
            S::CURVE_MH,
            S::CUBIC_OR_SHARP,
            S::CUBIC_OR_SHARP_R,
            S::LINE_OR_CURVE_L,
        ],
    ),
    // SOL
    (Rune::Sol, &[S::SHARP, S::CUBIC_OR_SHARP_R, S::CURVE_LMH, S::CURVE_LMH, S::CURVE_ANY_R]),
    // SHAEL1
    (
        Rune::Shael,
        &[
            S::CURVE_MH,
            S::CUBIC_OR_SHARP,
            S::LINE_REV,
            S::LINE,
            S::LINE_REV,
            S::CUBIC_OR_SHARP_R,
            S::CURVE_ANY_R,
        ],
    ),
    // SHAEL2
    (
        Rune::Shael,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::LINE,
            S::LINE_REV,
            S::CUBIC_OR_SHARP_R,
        ],
    ),
    // DOL1
    (Rune::Dol, &[S::CURVE_LMH, S::CURVE_LMH, S::CURVE_LMH, S::CUBIC_OR_SHARP, S::LINE, S::LINE]),
    // DOL2
    (
        Rune::Dol,
        &[
            S::CUBIC_OR_SHARP,
            S::CURVE_LMH,
            S::CUBIC_OR_CURVE_H,
            S::CURVE_MH,
            S::LINE_OR_CURVE_L,
            S::LINE_OR_CURVE_L,
        ],
    ),
    // HEL1
    (Rune::Hel, &[S::CURVE_M, S::CURVE_M, S::CURVE_M, S::CURVE_M, S::CURVE_M, S::CURVE_M]),
    // HEL2
    (Rune::Hel, &[S::CURVE_H, S::CURVE_H, S::CURVE_H, S::CURVE_H, S::CURVE_H]),
    // IO1
    (
        Rune::Io,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CURVE_LM_R,
            S::CUBIC_OR_CURVE_H_R,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::LINE_REV,
            S::LINE,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // IO2
    (
        Rune::Io,
        &[
            S::CURVE_MH,
            S::CUBIC_OR_SHARP,
            S::CURVE_LMH_R,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP,
            S::LINE_OR_CURVE_L,
            S::SHARP_R,
            S::LINE_OR_CURVE_L,
            S::CUBIC_OR_CURVE_H_R,
        ],
    ),
    // IO3
    (
        Rune::Io,
        &[
            S::CURVE_ANY,
            S::LINE_OR_CURVE_L,
            S::CUBIC_OR_CURVE_H,
            S::SHARP,
            S::CURVE_LMH,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // LUM
    (Rune::Lum, &[S::CURVE_MH, S::CUBIC, S::CURVE_LM, S::CURVE_LMH, S::CURVE_ANY_R]),
    // KO
    (
        Rune::Ko,
        &[
            S::CUBIC_OR_SHARP,
            S::CURVE_LMH,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::CUBIC_OR_SHARP,
            S::CURVE_LMH,
            S::CURVE_LMH_R,
        ],
    ),
    // FAL1
    (Rune::Fal, &[S::SHARP, S::LINE, S::CURVE_CMH_R, S::CUBIC_OR_SHARP, S::CURVE_CMH, S::LINE]),
    // FAL2
    (Rune::Fal, &[S::LINE, S::CURVE_CMH, S::CUBIC_OR_SHARP, S::CURVE_CMH, S::LINE, S::SHARP_R]),
    // FAL3
    (Rune::Fal, &[S::CURVE_CMH, S::CUBIC_OR_SHARP, S::CURVE_CMH, S::LINE, S::SHARP_R, S::SHARP]),
    // FAL4
    (Rune::Fal, &[S::CUBIC_OR_SHARP, S::CURVE_CMH, S::LINE, S::SHARP_R, S::SHARP, S::LINE]),
    // FAL5
    (Rune::Fal, &[S::CURVE_CMH, S::LINE, S::SHARP_R, S::SHARP, S::LINE, S::CURVE_CMH_R]),
    // FAL6
    (Rune::Fal, &[S::LINE, S::SHARP, S::SHARP, S::LINE, S::CURVE_CMH_R, S::CUBIC_OR_SHARP]),
    // LEM1
    (
        Rune::Lem,
        &[
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::LINE,
            S::LINE_REV,
            S::CUBIC_R,
            S::CUBIC_R,
            S::LINE_REV,
            S::LINE,
        ],
    ),
    // LEM2
    (
        Rune::Lem,
        &[
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
        ],
    ),
    // LEM3
    (
        Rune::Lem,
        &[
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // LEM4
    (
        Rune::Lem,
        &[
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H_R,
        ],
    ),
    // PUL
    (
        Rune::Pul,
        &[
            S::CURVE_LM,
            S::CUBIC_OR_SHARP,
            S::CURVE_CMH,
            S::SHARP,
            S::CURVE_CMH,
            S::CUBIC_OR_SHARP,
            S::CURVE_LM,
        ],
    ),
    // UM1
    (Rune::Um, &[S::CURVE_CMH, S::SHARP_R, S::SHARP_R, S::LINE_REV, S::CURVE_LM, S::SHARP]),
    // UM2
    (Rune::Um, &[S::CURVE_CMH, S::SHARP_R, S::SHARP_R, S::SHARP_R, S::CURVE_LM_R, S::SHARP]),
    // UM3
    (Rune::Um, &[S::CURVE_CMH, S::SHARP_R, S::SHARP_R, S::SHARP_R, S::CURVE_LM_R, S::SHARP]),
    // MAL1
    (Rune::Mal, &[S::SHARP, S::SHARP_R, S::LINE_OR_CURVE_L, S::LINE_REV, S::CURVE_LM]),
    // MAL2
    (Rune::Mal, &[S::SHARP, S::SHARP_R, S::LINE_OR_CURVE_L, S::SHARP_R, S::CURVE_LM_R]),
    // IST
    (Rune::Ist, &[S::CURVE_LM, S::CURVE_LM, S::CUBIC_OR_SHARP, S::CURVE_CMH_R, S::CURVE_CMH_R]),
    // GUL1
    (Rune::Gul, &[S::CURVE_M, S::CURVE_MH_R, S::LINE_REV, S::CURVE_LMH, S::LINE_OR_NOTHING]),
    // GUL2
    (Rune::Gul, &[S::CURVE_M, S::CURVE_MH_R, S::LINE_REV, S::CURVE_LMH, S::LINE_OR_NOTHING]),
    // GUL3
    (Rune::Gul, &[S::CURVE_M, S::CURVE_MH_R, S::LINE_REV, S::CURVE_LMH, S::LINE_OR_NOTHING]),
    // VEX1
    (
        Rune::Vex,
        &[
            S::CUBIC_OR_CURVE_H,
            S::LINE,
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H_R,
            S::CUBIC_OR_CURVE_H,
            S::SHARP,
        ],
    ),
    // VEX2
    (
        Rune::Vex,
        &[
            S::CUBIC_OR_CURVE_H,
            S::LINE,
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H_R,
            S::CUBIC_OR_CURVE_H,
            S::SHARP_R,
        ],
    ),
    // VEX3
    (
        Rune::Vex,
        &[
            S::CUBIC_OR_CURVE_H,
            S::LINE,
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H_R,
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
        ],
    ),
    // VEX4
    (
        Rune::Vex,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CUBIC_OR_CURVE_H,
            S::SHARP,
            S::CUBIC_OR_CURVE_H,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // VEX5
    (
        Rune::Vex,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CUBIC_OR_CURVE_H,
            S::SHARP_R,
            S::CUBIC_OR_CURVE_H_R,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // VEX6
    (
        Rune::Vex,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CUBIC_OR_CURVE_H,
            S::LINE_REV,
            S::CUBIC_OR_CURVE_H,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // OHM
    (Rune::Ohm, &[S::SHARP, S::CUBIC_OR_SHARP_R, S::CUBIC_OR_SHARP_R, S::CURVE_LM, S::CURVE_MH]),
    // LO1
    (
        Rune::Lo,
        &[
            S::CUBIC_OR_SHARP,
            S::LINE_REV,
            S::CUBIC_OR_SHARP,
            S::LINE_REV,
            S::CUBIC_OR_SHARP,
            S::LINE_REV,
            S::CUBIC_OR_SHARP,
        ],
    ),
    // LO2
    (
        Rune::Lo,
        &[
            S::CUBIC_OR_SHARP,
            S::SHARP_R,
            S::CUBIC_OR_SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP_R,
        ],
    ),
    // LO3
    (
        Rune::Lo,
        &[
            S::SHARP,
            S::LINE,
            S::SHARP,
            S::LINE,
            S::SHARP,
            S::LINE,
            S::SHARP,
            S::LINE,
            S::SHARP,
        ],
    ),
    // LO4
    (
        Rune::Lo,
        &[
            S::LINE,
            S::SHARP,
            S::LINE,
            S::SHARP,
            S::LINE,
            S::SHARP,
            S::LINE,
            S::SHARP,
            S::LINE,
        ],
    ),
    // SUR1
    (
        Rune::Sur,
        &[
            S::CUBIC_OR_CURVE_H,
            S::SHARP_R,
            S::LINE_REV,
            S::CURVE_LM,
            S::SHARP_R,
            S::CUBIC_OR_SHARP_R,
        ],
    ),
    // SUR2
    (
        Rune::Sur,
        &[
            S::CUBIC_OR_CURVE_H,
            S::SHARP_R,
            S::SHARP_R,
            S::CURVE_LM_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP_R,
        ],
    ),
    // BER
    (
        Rune::Ber,
        &[
            S::CUBIC_OR_CURVE_H,
            S::CUBIC,
            S::LINE_REV,
            S::LINE_OR_NOTHING,
            S::LINE_OR_CURVE_L,
            S::LINE_REV,
            S::CUBIC,
            S::CUBIC_OR_CURVE_H,
        ],
    ),
    // JAH1
    (Rune::Jah, &[S::SHARP, S::LINE, S::SHARP_R, S::LINE, S::LINE_REV, S::CURVE_M, S::LINE]),
    // JAH2
    (Rune::Jah, &[S::SHARP, S::LINE, S::CURVE_M, S::LINE_REV, S::LINE, S::SHARP_R, S::LINE]),
    // JAH3
    (Rune::Jah, &[S::LINE, S::SHARP, S::SHARP, S::LINE, S::SHARP_R, S::LINE]),
    // JAH4
    (Rune::Jah, &[S::LINE, S::SHARP, S::LINE, S::SHARP_R, S::SHARP, S::LINE]),
    // JAH5
    (Rune::Jah, &[S::SHARP, S::LINE, S::SHARP_R, S::SHARP, S::LINE, S::CURVE_M]),
    // CHAM1
    (
        Rune::Cham,
        &[
            S::CUBIC_OR_SHARP,
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
        ],
    ),
    // CHAM2
    (
        Rune::Cham,
        &[
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
        ],
    ),
    // CHAM3
    (
        Rune::Cham,
        &[
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
        ],
    ),
    // CHAM4
    (
        Rune::Cham,
        &[
            S::CUBIC_OR_SHARP,
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP,
            S::LINE,
        ],
    ),
    // CHAM5
    (
        Rune::Cham,
        &[
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP,
            S::LINE,
            S::LINE_OR_NOTHING,
        ],
    ),
    // CHAM6
    (
        Rune::Cham,
        &[
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP,
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
        ],
    ),
    // CHAM7
    (
        Rune::Cham,
        &[
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP,
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::SHARP,
        ],
    ),
    // CHAM8
    (
        Rune::Cham,
        &[
            S::SHARP,
            S::SHARP_R,
            S::CUBIC_OR_SHARP,
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::SHARP,
            S::SHARP_R,
        ],
    ),
    // CHAM9
    (
        Rune::Cham,
        &[
            S::SHARP,
            S::CUBIC_OR_SHARP,
            S::LINE,
            S::LINE_OR_NOTHING,
            S::CUBIC_OR_SHARP,
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
        ],
    ),
    // ZOD1
    (
        Rune::Zod,
        &[
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_CURVE_H_R,
            S::SHARP_R,
            S::CURVE_LMH,
            S::CURVE_LMH_R,
        ],
    ),
    // ZOD2
    (
        Rune::Zod,
        &[
            S::SHARP,
            S::SHARP_R,
            S::SHARP_R,
            S::CUBIC_OR_SHARP_R,
            S::SHARP_R,
            S::CURVE_LMH,
            S::CURVE_LMH_R,
        ],
    ),
];

/// 룬워드 테이블 (KO KO MAL 같은 중복 조합은 제외)
pub static RUNEWORDS: [(Runeword, &[Rune]); RUNEWORD_COUNT] = [
    (Runeword::Steel, &[Rune::Tir, Rune::El]),
    (Runeword::Nadir, &[Rune::Nef, Rune::Tir]),
    (Runeword::Malice, &[Rune::Ith, Rune::El, Rune::Eth]),
    (Runeword::Stealth, &[Rune::Tal, Rune::Eth]),
    (Runeword::Leaf, &[Rune::Tir, Rune::Ral]),
    (Runeword::Zephyr, &[Rune::Ort, Rune::Eth]),
    (Runeword::AncientsPledge, &[Rune::Ral, Rune::Ort, Rune::Tal]),
    (Runeword::Strength, &[Rune::Amn, Rune::Tir]),
    (Runeword::Edge, &[Rune::Tir, Rune::Tal, Rune::Amn]),
    (Runeword::KingsGrace, &[Rune::Amn, Rune::Ral, Rune::Thul]),
    (Runeword::Radiance, &[Rune::Nef, Rune::Sol, Rune::Ith]),
    (Runeword::Lore, &[Rune::Ort, Rune::Sol]),
    (Runeword::Rhyme, &[Rune::Shael, Rune::Eth]),
    (Runeword::Peace, &[Rune::Shael, Rune::Thul, Rune::Amn]),
    (Runeword::Myth, &[Rune::Hel, Rune::Amn, Rune::Nef]),
    (Runeword::Black, &[Rune::Thul, Rune::Io, Rune::Nef]),
    (Runeword::White, &[Rune::Dol, Rune::Io]),
    (Runeword::Smoke, &[Rune::Nef, Rune::Lum]),
    (Runeword::Splendor, &[Rune::Eth, Rune::Lum]),
    (Runeword::Melody, &[Rune::Shael, Rune::Ko, Rune::Nef]),
    (Runeword::Lionheart, &[Rune::Hel, Rune::Lum, Rune::Fal]),
    (Runeword::Treachery, &[Rune::Shael, Rune::Thul, Rune::Lem]),
    (Runeword::Wealth, &[Rune::Lem, Rune::Ko, Rune::Tir]),
    (Runeword::Lawbringer, &[Rune::Amn, Rune::Lem, Rune::Ko]),
    (Runeword::Enlightenment, &[Rune::Pul, Rune::Ral, Rune::Sol]),
    (Runeword::CrescentMoon, &[Rune::Shael, Rune::Um, Rune::Tir]),
    (Runeword::Duress, &[Rune::Shael, Rune::Lum, Rune::Thul]),
    (Runeword::Gloom, &[Rune::Fal, Rune::Um, Rune::Pul]),
    (Runeword::Prudence, &[Rune::Mal, Rune::Tir]),
    (Runeword::Rain, &[Rune::Ort, Rune::Mal, Rune::Ith]),
    (Runeword::Venom, &[Rune::Tal, Rune::Dol, Rune::Mal]),
    (Runeword::Delirium, &[Rune::Lem, Rune::Ist, Rune::Io]),
    (Runeword::Principle, &[Rune::Ral, Rune::Gul, Rune::Eld]),
    (Runeword::Chaos, &[Rune::Fal, Rune::Ohm, Rune::Um]),
    (Runeword::Wind, &[Rune::Sur, Rune::El]),
    (Runeword::Dragon, &[Rune::Sur, Rune::Lo, Rune::Sol]),
    (Runeword::Dream, &[Rune::Io, Rune::Jah, Rune::Pul]),
    (Runeword::Fury, &[Rune::Jah, Rune::Gul, Rune::Eth]),
    (Runeword::Enigma, &[Rune::Jah, Rune::Ith, Rune::Ber]),
];
