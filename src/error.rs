//! 감사 오류 타입

use std::path::PathBuf;

use thiserror::Error;

/// 감사 작업 오류
#[derive(Debug, Error)]
pub enum AuditError {
    /// 구 수가 0 이하
    #[error("구 수는 1 이상이어야 합니다 (입력: {0})")]
    InvalidPhraseCount(i64),

    /// 입력 파일 읽기 실패
    #[error("파일 읽기 오류 {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 설정 파일 파싱 실패
    #[error("설정 파싱 오류: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuditError>;
