//! 구(Phrase) 수를 셀 외부 작업자에게 전달할 절 수 보고서

use std::fmt;

use serde::Serialize;

use super::counter::ClauseCount;
use crate::ratio::RatioConfig;

/// 절 수 보고서
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClauseReport {
    pub clauses: ClauseCount,
    /// 현재 절 수 기준 이상적인 구 수
    pub ideal_phrase_count: i64,
    /// 이상적인 구 수의 허용 폭 (±)
    pub phrase_slack: i64,
    #[serde(skip)]
    config: RatioConfig,
}

impl ClauseReport {
    pub fn new(clauses: ClauseCount, config: RatioConfig) -> Self {
        Self {
            clauses,
            ideal_phrase_count: config.ideal_phrase_count(clauses.total),
            phrase_slack: config.phrase_slack(clauses.total),
            config,
        }
    }
}

impl fmt::Display for ClauseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[절-Stats] 종결어미(독립절): {}개", self.clauses.terminal)?;
        writeln!(f, "[절-Stats] 관형절(안은문장): {}개", self.clauses.embedded)?;
        writeln!(f, "[절-Total] 총 절 수: {}개 (자동 계산, 근사치)", self.clauses.total)?;
        writeln!(f)?;
        writeln!(f, "[구-Task] 구(Phrase)를 직접 세고 아래 형식으로 보고:")?;
        writeln!(f, "  (구 = 술어 기능 없는 단위)")?;
        writeln!(f, "  -> 명사구(NP): [발견한 구 나열] -> ___개")?;
        writeln!(f, "  -> 동사구(VP): [발견한 구 나열] -> ___개")?;
        writeln!(f, "  -> 부사구(AP): [발견한 구 나열] -> ___개")?;
        writeln!(f, "  -> 구 총계: ___개")?;
        writeln!(f)?;
        writeln!(
            f,
            "[목표] 절:구 = {}:1 (허용 범위: {}~{})",
            self.config.target_ratio,
            self.config.min_ratio(),
            self.config.max_ratio()
        )?;
        writeln!(
            f,
            "[목표] 현재 절 수 기준 이상적인 구 수: {}개 ±{}개",
            self.ideal_phrase_count, self.phrase_slack
        )
    }
}
