//! 어체 분류 및 일관성 판정
//!
//! 자모 텍스트에서 어체별 종결어미 매치 수를 세고,
//! 가장 많이 쓰인 어체(주 어체)의 비율로 단일 어체 유지 여부를 판정합니다.

use std::fmt;

use serde::{Serialize, Serializer};

use super::patterns::{count_matches, SpeechLevel, COMPILED_LEVELS, SPEECH_LEVELS};

/// 단일 어체 유지 판정 기본 임계값 (90% 이상, 경계 포함)
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.90;

/// 어체 (낮은 격식 → 높은 격식)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Register {
    Haera,
    Hae,
    Hage,
    Hao,
    Haeyo,
    Hasipsio,
}

impl Register {
    pub const ALL: [Register; 6] = [
        Register::Haera,
        Register::Hae,
        Register::Hage,
        Register::Hao,
        Register::Haeyo,
        Register::Hasipsio,
    ];

    /// 서수 (1 = 해라체 ~ 6 = 하십시오체)
    pub fn ordinal(self) -> u8 {
        self.definition().ordinal
    }

    pub fn from_ordinal(ordinal: u8) -> Option<Register> {
        Register::ALL.get(usize::from(ordinal).checked_sub(1)?).copied()
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// 어체의 템플릿/예시 정의
    pub fn definition(self) -> &'static SpeechLevel {
        &SPEECH_LEVELS[self.index()]
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Register {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// 어체별 종결어미 매치 수
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegisterCount {
    counts: [usize; 6],
}

impl RegisterCount {
    pub fn get(&self, register: Register) -> usize {
        self.counts[register.index()]
    }

    /// 전체 어체 매치 수의 합
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// 낮은 어체부터 (어체, 매치 수) 순회
    pub fn iter(&self) -> impl Iterator<Item = (Register, usize)> + '_ {
        Register::ALL.iter().map(|&r| (r, self.get(r)))
    }
}

impl Serialize for RegisterCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter().map(|(r, count)| (r.name(), count)))
    }
}

/// 주 어체 판정 결과
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dominance {
    /// 종결어미가 하나도 감지되지 않음
    Undetermined,
    Determined {
        register: Register,
        count: usize,
        /// 주 어체 매치 수 / 전체 매치 수
        ratio: f64,
    },
}

/// 자모 텍스트에서 어체별 종결어미 매치 수 계산
///
/// 어체마다 독립적으로 센다. 같은 어미가 여러 어체의 템플릿에 맞으면 모두에 더해진다.
pub fn classify(jamo_text: &str) -> RegisterCount {
    let mut counts = [0usize; 6];
    for (slot, patterns) in counts.iter_mut().zip(COMPILED_LEVELS.iter()) {
        *slot = count_matches(patterns, jamo_text);
    }
    RegisterCount { counts }
}

/// 매치 수가 가장 많은 어체 선택 (동률이면 낮은 서수 우선)
pub fn dominant(counts: &RegisterCount) -> Dominance {
    let total = counts.total();
    if total == 0 {
        return Dominance::Undetermined;
    }

    let (register, count) = counts
        .iter()
        .fold((Register::Haera, 0), |best, (r, c)| if c > best.1 { (r, c) } else { best });

    Dominance::Determined {
        register,
        count,
        ratio: count as f64 / total as f64,
    }
}

/// 주제 키워드로 글에 어울리는 어체 추천
///
/// 어체마다 본문에 포함된 키워드 수를 세어 가장 많은 어체를 고른다.
/// 동점이면 낮은 서수, 키워드가 하나도 없으면 해라체.
pub fn recommend_register(text: &str) -> Register {
    let text = text.to_lowercase();
    let (register, hits) = Register::ALL
        .iter()
        .map(|&r| {
            let hits = r
                .definition()
                .keywords
                .iter()
                .filter(|k| text.contains(*k))
                .count();
            (r, hits)
        })
        .fold((Register::Haera, 0), |best, (r, c)| if c > best.1 { (r, c) } else { best });

    log::info!("어체 추천: {} (키워드 {}개 일치)", register, hits);
    register
}

/// 어체 일관성 판정
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegisterVerdict {
    /// 종결어미 없음 (비율 실패와 구분)
    Undetermined,
    /// 주 어체 비율이 임계값 이상
    Consistent { dominant: Register, ratio: f64 },
    /// 어체 혼용
    Mixed {
        dominant: Register,
        ratio: f64,
        /// 매치가 있는 다른 어체와 매치 수
        others: Vec<(Register, usize)>,
    },
}

impl RegisterVerdict {
    pub fn is_mixed(&self) -> bool {
        matches!(self, RegisterVerdict::Mixed { .. })
    }
}

/// 어체 분석 보고서
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterReport {
    pub counts: RegisterCount,
    pub total: usize,
    pub verdict: RegisterVerdict,
    /// 판정에 쓴 임계값
    pub threshold: f64,
}

/// 어체 분류기
#[derive(Debug, Clone)]
pub struct RegisterClassifier {
    threshold: f64,
}

impl Default for RegisterClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterClassifier {
    /// 기본 임계값(0.90)으로 생성
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_CONSISTENCY_THRESHOLD,
        }
    }

    /// 임계값 지정
    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// 자모 텍스트 분석 후 일관성 판정
    pub fn report(&self, jamo_text: &str) -> RegisterReport {
        let counts = classify(jamo_text);
        let verdict = self.judge(&counts);
        log::debug!("어체 매치 수: {:?}, 판정: {:?}", counts, verdict);
        RegisterReport {
            counts,
            total: counts.total(),
            verdict,
            threshold: self.threshold,
        }
    }

    /// 매치 수로부터 판정
    pub fn judge(&self, counts: &RegisterCount) -> RegisterVerdict {
        match dominant(counts) {
            Dominance::Undetermined => RegisterVerdict::Undetermined,
            Dominance::Determined { register, ratio, .. } if ratio >= self.threshold => {
                RegisterVerdict::Consistent {
                    dominant: register,
                    ratio,
                }
            }
            Dominance::Determined { register, ratio, .. } => RegisterVerdict::Mixed {
                dominant: register,
                ratio,
                others: counts
                    .iter()
                    .filter(|&(r, c)| r != register && c > 0)
                    .collect(),
            },
        }
    }
}

impl fmt::Display for RegisterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.verdict {
            RegisterVerdict::Undetermined => {
                writeln!(f, "[어체] 종결어미가 감지되지 않아 판정 불가")
            }
            RegisterVerdict::Consistent { dominant, ratio } => {
                writeln!(
                    f,
                    "[어체-Stats] {}({}) 주 어체, 전체 {}개 중 {:.1}%",
                    dominant,
                    self.counts.get(*dominant),
                    self.total,
                    ratio * 100.0
                )?;
                writeln!(f, "[어체] PASS: 단일 어체({}) 일관성 유지", dominant)
            }
            RegisterVerdict::Mixed {
                dominant,
                ratio,
                others,
            } => {
                writeln!(
                    f,
                    "[어체-Stats] {}({}) 주 어체, 전체 {}개 중 {:.1}%",
                    dominant,
                    self.counts.get(*dominant),
                    self.total,
                    ratio * 100.0
                )?;
                writeln!(
                    f,
                    "[어체] FAIL: 어체 혼용 감지. 단일 어체({:.0}%+)로 통일 필요",
                    self.threshold * 100.0
                )?;
                let others: Vec<String> =
                    others.iter().map(|(r, c)| format!("{}({})", r, c)).collect();
                writeln!(f, "[어체-혼용] 다른 어체: {}", others.join(", "))?;
                writeln!(f, "[수정 지시] 모든 종결어미를 '{}'로 통일하세요.", dominant)?;
                writeln!(f, "[어체-가이드] '{}' 허용 종결어미:", dominant)?;
                for (group, endings) in dominant.definition().examples {
                    writeln!(f, "  - {}: {}", group, endings.join(", "))?;
                }
                Ok(())
            }
        }
    }
}
