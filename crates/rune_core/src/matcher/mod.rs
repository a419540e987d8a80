// 매칭 엔진
// sequence: 획 시퀀스 ↔ 룬 패턴 퍼지 정렬
// composite: 보유 룬 ↔ 룬워드 조합 포함 검사

pub mod composite;
pub mod sequence;

pub use composite::{contains, novel_candidates};
pub use sequence::{
    matches, Alignment, Direction, MatchDetail, SequenceMatcher, DEFAULT_UNMATCH_TOLERANCE,
};
