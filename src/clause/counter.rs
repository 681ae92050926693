//! 절(Clause) 수 근사 계산
//!
//! 구문 분석이 아니라 패턴 기반 근사치입니다. 참고용으로만 사용합니다.
//! - 종결어미(독립절): 자모 분해 텍스트에서 구두점 앞 종결어미
//! - 관형절(안은문장): 원문에서 관형사형 어미 + 의존/체언
//!   (다음절 형태소라 자모 분해로는 깔끔하게 분리되지 않음)

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::converter::decompose;

/// 종결어미 패턴 (자모)
const TERMINAL_PATTERNS: [&str; 11] = [
    r"ㄷㅏ[.!]",     // -다
    r"ㅇㅓ[.!]",     // -어
    r"ㅇㅏ[.!]",     // -아
    r"ㅈㅣ[.!]",     // -지
    r"ㄴㅔ[.!]",     // -네
    r"ㅇㅛ[.!]",     // -요 계열
    r"ㄴㅣㄷㅏ[.!]", // -니다
    r"ㄴㅑ[?]",      // -냐?
    r"ㄴㅣ[?]",      // -니?
    r"ㅈㅏ[.!]",     // -자
    r"ㄹㅏ[.!]",     // -라
];

/// 관형사형 어미(-는, -ㄴ/은, -ㄹ/을, -던) + 체언
const EMBEDDED_PATTERN: &str = r"(?:는|ㄴ|은|ㄹ|을|던)\s*(?:것|거|때|곳|이|수|줄|법|리)";

static TERMINAL_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    TERMINAL_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|e| panic!("invalid terminal pattern {p}: {e}")))
        .collect()
});

static EMBEDDED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(EMBEDDED_PATTERN)
        .unwrap_or_else(|e| panic!("invalid embedded pattern {EMBEDDED_PATTERN}: {e}"))
});

/// 절 수 계산 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClauseCount {
    /// 종결어미(독립절) 수
    pub terminal: usize,
    /// 관형절(안은문장) 수
    pub embedded: usize,
    pub total: usize,
}

/// 자모 텍스트의 종결어미 수
pub fn terminal_clause_count(jamo_text: &str) -> usize {
    TERMINAL_REGEXES
        .iter()
        .map(|re| re.find_iter(jamo_text).count())
        .sum()
}

/// 원문의 관형절 표지 수
pub fn embedded_clause_count(text: &str) -> usize {
    EMBEDDED_REGEX.find_iter(text).count()
}

/// 원문에서 절 수 계산
pub fn count_clauses(text: &str) -> ClauseCount {
    let jamo = decompose(text);
    let terminal = terminal_clause_count(jamo.as_str());
    let embedded = embedded_clause_count(text);
    log::debug!("절 수: 종결 {}, 관형 {}", terminal, embedded);
    ClauseCount {
        terminal,
        embedded,
        total: terminal + embedded,
    }
}
