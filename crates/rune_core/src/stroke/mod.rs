// 획 토큰화
// 웨이포인트 경로 → 분류된 획 시퀀스

pub mod classifier;
pub mod tokenizer;
pub mod types;

pub use classifier::{classify, ReversalTracker};
pub use tokenizer::{
    tokenize, Tokenization, Tokenizer, DEFAULT_COLLAPSE_RATIO, MAX_PATH_POINTS, MIN_PATH_POINTS,
};
pub use types::{Stroke, StrokeClass, StrokeClassSet};
