//! 텍스트 한 편에 대한 종합 감사
//!
//! 절 수, 어체 일관성, 어휘, (구 수가 주어지면) 절:구 비율을 한 번에 계산합니다.
//! 입력은 태그가 제거된 평문이어야 합니다.

use std::fmt;

use serde::Serialize;

use crate::clause::{count_clauses, ClauseReport};
use crate::config::AuditConfig;
use crate::core::converter::decompose;
use crate::error::Result;
use crate::lexicon::{audit_lexicon, LexicalReport};
use crate::ratio::{RatioOutcome, RatioValidator};
use crate::register::{RegisterClassifier, RegisterReport, RegisterVerdict};

/// 종합 감사 보고서
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub clauses: ClauseReport,
    pub register: RegisterReport,
    pub lexicon: LexicalReport,
    /// 구 수가 주어졌을 때만 존재
    pub ratio: Option<RatioOutcome>,
}

impl AuditReport {
    /// 전체 통과 여부
    /// 어체 판정 불가는 실패로 보지 않음
    pub fn passed(&self) -> bool {
        !matches!(self.register.verdict, RegisterVerdict::Mixed { .. })
            && self.lexicon.passed()
            && self.ratio.map_or(true, |r| r.pass)
    }
}

/// 종합 감사기
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    classifier: RegisterClassifier,
    validator: RatioValidator,
    config: AuditConfig,
}

impl Auditor {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            classifier: RegisterClassifier::with_threshold(config.consistency_threshold),
            validator: RatioValidator::with_config(config.ratio),
            config,
        }
    }

    /// 평문 감사
    ///
    /// 구 수가 0 이하로 주어지면 `AuditError::InvalidPhraseCount`.
    pub fn audit(&self, text: &str, phrase_count: Option<i64>) -> Result<AuditReport> {
        let jamo = decompose(text);
        let clauses = count_clauses(text);
        let register = self.classifier.report(jamo.as_str());
        let lexicon = audit_lexicon(text);
        let ratio = phrase_count
            .map(|phrases| self.validator.validate(clauses.total, phrases))
            .transpose()?;

        log::info!(
            "감사 완료: 절 {}개, 어체 매치 {}개, 금지 어휘 {}개",
            clauses.total,
            register.total,
            lexicon.stale.len()
        );

        Ok(AuditReport {
            clauses: ClauseReport::new(clauses, self.config.ratio),
            register,
            lexicon,
            ratio,
        })
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.clauses)?;
        writeln!(f)?;
        write!(f, "{}", self.register)?;
        write!(f, "{}", self.lexicon)?;
        if let Some(ratio) = &self.ratio {
            writeln!(f)?;
            write!(f, "{}", ratio)?;
        }
        Ok(())
    }
}
