//! 절:구 비율 검증 모듈
//!
//! 구(Phrase) 수는 이 모듈이 계산하지 않습니다. 외부에서 센 값을 받아
//! 시스템이 계산한 절 수와의 비율을 목표 범위와 비교합니다.

mod config;
mod validator;

pub use config::RatioConfig;
pub use validator::{validate_ratio, RatioAction, RatioOutcome, RatioValidator};
