//! 한글 음절/자모 변환 핵심 모듈

pub mod converter;
pub mod jamo_mapper;
pub mod unicode;
