//! 설정 파일 로드 (JSON)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};
use crate::ratio::RatioConfig;
use crate::register::DEFAULT_CONSISTENCY_THRESHOLD;

/// 감사 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuditConfig {
    /// 단일 어체 유지로 판정할 주 어체 최소 비율
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,
    /// 절:구 비율 목표
    #[serde(default)]
    pub ratio: RatioConfig,
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            ratio: RatioConfig::default(),
        }
    }
}

/// 기본 설정 파일 경로: $XDG_CONFIG_HOME/hangeul-audit/config.json (없으면 ~/.config)
pub fn config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .filter(|p| p.is_absolute())
                .map(|home| home.join(".config"))
        })?;
    Some(base.join("hangeul-audit").join("config.json"))
}

/// 설정 파일 읽기 및 파싱
pub fn try_load_config(path: &Path) -> Result<AuditConfig> {
    let content = fs::read_to_string(path).map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
///
/// 직접 지정한 경로가 없으면 경고, 기본 경로가 없으면 디버그 로그만 남김
pub fn load_config(path: Option<&Path>) -> AuditConfig {
    let explicit = path.is_some();
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(path) => path,
        None => return AuditConfig::default(),
    };
    if !path.exists() {
        log::log!(
            missing_file_level(explicit),
            "설정 파일 없음, 기본값 사용: {}",
            path.display()
        );
        return AuditConfig::default();
    }
    try_load_config(&path).unwrap_or_else(|e| {
        log::warn!("설정 로드 실패, 기본값 사용: {}", e);
        AuditConfig::default()
    })
}

fn missing_file_level(explicit: bool) -> log::Level {
    if explicit {
        log::Level::Warn
    } else {
        log::Level::Debug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AuditConfig::default();
        assert!((config.consistency_threshold - 0.9).abs() < f64::EPSILON);
        assert_eq!(config.ratio, RatioConfig::default());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = AuditConfig {
            consistency_threshold: 0.8,
            ratio: RatioConfig::new().with_target(1.5),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AuditConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        // ratio 항목이 없는 이전 설정 파일
        let json = r#"{"consistency_threshold": 0.95}"#;
        let config: AuditConfig = serde_json::from_str(json).unwrap();
        assert!((config.consistency_threshold - 0.95).abs() < f64::EPSILON);
        assert_eq!(config.ratio, RatioConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config(Some(Path::new("/nonexistent/hangeul-audit.json")));
        assert_eq!(config, AuditConfig::default());
    }

    #[test]
    fn test_missing_explicit_path_warns() {
        assert_eq!(missing_file_level(true), log::Level::Warn);
        assert_eq!(missing_file_level(false), log::Level::Debug);
    }

    #[test]
    fn test_try_load_reports_io_error() {
        let err = try_load_config(Path::new("/nonexistent/hangeul-audit.json")).unwrap_err();
        assert!(matches!(err, AuditError::Io { .. }));
    }
}
