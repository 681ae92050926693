//! 절:구 비율 검증
//!
//! 절 수는 시스템이 계산하고, 구 수는 외부(사람 또는 에이전트)가 직접 세어 입력합니다.

use std::fmt;

use serde::Serialize;

use super::config::RatioConfig;
use crate::error::{AuditError, Result};

/// 비율 실패 시 수정 지시
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum RatioAction {
    /// 구가 부족 (비율이 상한 초과)
    Add(u64),
    /// 구가 과다 (비율이 하한 미만)
    Reduce(u64),
}

impl fmt::Display for RatioAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatioAction::Add(n) => write!(f, "add {} phrases", n),
            RatioAction::Reduce(n) => write!(f, "remove/expand {} phrases", n),
        }
    }
}

/// 비율 검증 결과
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatioOutcome {
    pub clause_count: usize,
    pub phrase_count: i64,
    pub ratio: f64,
    pub pass: bool,
    /// 실패 시에만 존재
    pub action: Option<RatioAction>,
    pub min_ratio: f64,
    pub max_ratio: f64,
}

/// 절:구 비율 검증기
#[derive(Debug, Clone, Default)]
pub struct RatioValidator {
    config: RatioConfig,
}

impl RatioValidator {
    /// 기본 설정(2.0 ± 0.3)으로 생성
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RatioConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatioConfig {
        &self.config
    }

    /// 절 수와 구 수의 비율 검증
    ///
    /// 구 수가 0 이하이면 `AuditError::InvalidPhraseCount`.
    ///
    /// # Examples
    /// ```
    /// use hangeul_audit::ratio::{RatioAction, RatioValidator};
    ///
    /// let outcome = RatioValidator::new().validate(20, 5).unwrap();
    /// assert!(!outcome.pass);
    /// assert_eq!(outcome.action, Some(RatioAction::Add(5)));
    /// ```
    pub fn validate(&self, clause_count: usize, phrase_count: i64) -> Result<RatioOutcome> {
        if phrase_count <= 0 {
            return Err(AuditError::InvalidPhraseCount(phrase_count));
        }

        let ratio = clause_count as f64 / phrase_count as f64;
        let min_ratio = self.config.min_ratio();
        let max_ratio = self.config.max_ratio();
        let pass = (min_ratio..=max_ratio).contains(&ratio);

        let action = if pass {
            None
        } else {
            let ideal = self.config.ideal_phrase_count(clause_count);
            if ratio > max_ratio {
                Some(RatioAction::Add(non_negative(ideal - phrase_count)))
            } else {
                Some(RatioAction::Reduce(non_negative(phrase_count - ideal)))
            }
        };

        log::debug!(
            "절:구 비율 {:.2} (절 {}, 구 {}), 통과: {}",
            ratio,
            clause_count,
            phrase_count,
            pass
        );

        Ok(RatioOutcome {
            clause_count,
            phrase_count,
            ratio,
            pass,
            action,
            min_ratio,
            max_ratio,
        })
    }
}

fn non_negative(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

/// 기본 설정으로 절:구 비율 검증
pub fn validate_ratio(clause_count: usize, phrase_count: i64) -> Result<RatioOutcome> {
    RatioValidator::new().validate(clause_count, phrase_count)
}

impl fmt::Display for RatioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.pass { "PASS" } else { "FAIL" };
        writeln!(
            f,
            "[절:구] {}: 절 {}개, 구 {}개, 비율 {:.2}:1 (허용 범위: {}~{})",
            verdict,
            self.clause_count,
            self.phrase_count,
            self.ratio,
            self.min_ratio,
            self.max_ratio
        )?;
        if let Some(action) = self.action {
            let hint = match action {
                RatioAction::Add(_) => "복합 명사구/부사구 사용 권장",
                RatioAction::Reduce(_) => "일부 구를 완전한 문장으로 전개 권장",
            };
            writeln!(f, "[수정 지시] {} ({})", action, hint)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_pass() {
        let outcome = validate_ratio(20, 10).unwrap();
        assert!(outcome.pass);
        assert!((outcome.ratio - 2.0).abs() < f64::EPSILON);
        assert_eq!(outcome.action, None);
    }

    #[test]
    fn test_band_is_inclusive() {
        assert!(validate_ratio(17, 10).unwrap().pass);
        assert!(validate_ratio(23, 10).unwrap().pass);
        assert!(!validate_ratio(24, 10).unwrap().pass);
        assert!(!validate_ratio(16, 10).unwrap().pass);
    }

    #[test]
    fn test_too_few_phrases() {
        let outcome = validate_ratio(20, 5).unwrap();
        assert!(!outcome.pass);
        assert!((outcome.ratio - 4.0).abs() < f64::EPSILON);
        assert_eq!(outcome.action, Some(RatioAction::Add(5)));
        assert_eq!(outcome.action.unwrap().to_string(), "add 5 phrases");
    }

    #[test]
    fn test_too_many_phrases() {
        // 10 / 10 = 1.0, 이상적인 구 수 5
        let outcome = validate_ratio(10, 10).unwrap();
        assert!(!outcome.pass);
        assert_eq!(outcome.action, Some(RatioAction::Reduce(5)));
        assert_eq!(outcome.action.unwrap().to_string(), "remove/expand 5 phrases");
    }

    #[test]
    fn test_zero_clauses() {
        let outcome = validate_ratio(0, 4).unwrap();
        assert!(!outcome.pass);
        assert_eq!(outcome.action, Some(RatioAction::Reduce(4)));
    }

    #[test]
    fn test_invalid_phrase_count() {
        assert!(matches!(
            validate_ratio(10, 0),
            Err(AuditError::InvalidPhraseCount(0))
        ));
        assert!(matches!(
            validate_ratio(10, -3),
            Err(AuditError::InvalidPhraseCount(-3))
        ));
    }

    #[test]
    fn test_custom_config() {
        let validator = RatioValidator::with_config(RatioConfig::new().with_target(1.0));
        let outcome = validator.validate(10, 10).unwrap();
        assert!(outcome.pass);
    }

    #[test]
    fn test_display() {
        let text = validate_ratio(20, 5).unwrap().to_string();
        assert!(text.contains("FAIL"));
        assert!(text.contains("4.00:1"));
        assert!(text.contains("add 5 phrases"));
    }
}
