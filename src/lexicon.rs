//! 어휘 점검
//!
//! 낡은 표현(사용 금지)과 날카로운 표현(통계만)을 원문에서 찾습니다.

use std::fmt;

use serde::Serialize;

/// 사용 금지 어휘 - 하나라도 있으면 실패
pub const STALE_WORDS: [&str; 6] = ["사료된다", "고찰", "본인", "하였음", "의미한다", "뜻한다"];

/// 권장 어휘 - 사용 통계만 보고
pub const SHARP_WORDS: [&str; 8] = [
    "장악", "설계", "압도적", "메커니즘", "단언컨대", "귀결", "납득", "양상",
];

/// 어휘 점검 결과
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LexicalReport {
    /// 발견된 금지 어휘
    pub stale: Vec<&'static str>,
    /// 발견된 권장 어휘
    pub sharp: Vec<&'static str>,
}

impl LexicalReport {
    pub fn passed(&self) -> bool {
        self.stale.is_empty()
    }
}

/// 원문에서 금지/권장 어휘 검색 (부분 문자열 포함 여부)
pub fn audit_lexicon(text: &str) -> LexicalReport {
    let found = |words: &[&'static str]| -> Vec<&'static str> {
        words.iter().copied().filter(|w| text.contains(w)).collect()
    };
    LexicalReport {
        stale: found(&STALE_WORDS[..]),
        sharp: found(&SHARP_WORDS[..]),
    }
}

impl fmt::Display for LexicalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.passed() {
            writeln!(
                f,
                "[어휘-Block] FAIL: 금지 어휘 발견 {:?}. 다른 표현으로 교체하세요.",
                self.stale
            )?;
        }
        writeln!(
            f,
            "[어휘-Stats] 권장 어휘 {}개 사용 {:?}",
            self.sharp.len(),
            self.sharp
        )
    }
}
