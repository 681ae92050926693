//! 자모 기반 어체(종결어미 격식) 분석 모듈

mod classifier;
pub mod patterns;

pub use classifier::{
    classify, dominant, recommend_register, Dominance, Register, RegisterClassifier,
    RegisterCount, RegisterReport, RegisterVerdict, DEFAULT_CONSISTENCY_THRESHOLD,
};
pub use patterns::{Auxiliary, EndingTemplate, ExampleGroup, SentenceType, SpeechLevel};
