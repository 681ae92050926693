//! 어체별 종결어미 패턴 데이터
//!
//! 자모 분해된 텍스트 위에서 문장 끝 구두점에 고정된 종결어미 템플릿을 정의합니다.
//! 템플릿은 `[보조용언 어간] [시제/상 선어말어미]? 어미 [구두점]` 형태의 정규식으로 펼쳐집니다.
//!
//! 서로 다른 어체의 템플릿이 같은 어미에 맞을 수 있습니다(예: `-네`는 해체와 하게체 모두).
//! 어체별로 독립적으로 세며 중복을 제거하지 않습니다.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// 시제/상 선어말어미 (았/었/겠), 생략 가능
const TENSE_INFIX: &str = "(?:ㅇㅏㅆ|ㅇㅓㅆ|ㄱㅔㅆ)?";

/// 평서/명령/청유형 종결 구두점
const STATEMENT_END: &str = "[.!]";
/// 의문형 종결 구두점
const QUESTION_END: &str = "[?]";

/// 문장 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentenceType {
    /// 평서형
    Declarative,
    /// 의문형
    Interrogative,
    /// 명령형
    Imperative,
    /// 청유형
    Propositive,
}

impl SentenceType {
    /// 이 문장 유형의 종결 구두점 패턴
    pub fn terminator(self) -> &'static str {
        match self {
            SentenceType::Interrogative => QUESTION_END,
            _ => STATEMENT_END,
        }
    }
}

/// 보조용언 어간 (자모)
///
/// 해라체 과거/현재 결합형(봤다, 줬다, 갔다 등)에 쓰이는 어간만 포함.
/// -고 있다/-고 싶다는 고정 어미 템플릿으로 따로 정의됨
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Auxiliary {
    /// 보다
    Bo,
    /// 주다
    Ju,
    /// 버리다
    Beori,
    /// 놓다
    Noh,
    /// 두다
    Du,
    /// 가다
    Ga,
    /// 오다
    O,
}

impl Auxiliary {
    /// 어간의 자모 표기
    pub fn jamo(self) -> &'static str {
        match self {
            Auxiliary::Bo => "ㅂㅗ",
            Auxiliary::Ju => "ㅈㅜ",
            Auxiliary::Beori => "ㅂㅓㄹㅣ",
            Auxiliary::Noh => "ㄴㅗㅎ",
            Auxiliary::Du => "ㄷㅜ",
            Auxiliary::Ga => "ㄱㅏ",
            Auxiliary::O => "ㅇㅗ",
        }
    }
}

/// 종결어미 템플릿
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndingTemplate {
    pub sentence_type: SentenceType,
    /// 어미 앞에 올 수 있는 보조용언 어간 (필수)
    pub auxiliary: Option<Auxiliary>,
    /// 시제/상 선어말어미 허용 여부
    pub tense: bool,
    /// 어미 자모열
    pub ending: &'static str,
}

impl EndingTemplate {
    const fn new(sentence_type: SentenceType, ending: &'static str) -> Self {
        Self {
            sentence_type,
            auxiliary: None,
            tense: false,
            ending,
        }
    }

    const fn with_tense(self) -> Self {
        Self {
            tense: true,
            ..self
        }
    }

    const fn after(self, auxiliary: Auxiliary) -> Self {
        Self {
            auxiliary: Some(auxiliary),
            ..self
        }
    }

    /// 정규식 패턴 문자열로 펼침
    pub fn pattern(&self) -> String {
        let mut pattern = String::new();
        if let Some(aux) = self.auxiliary {
            pattern.push_str(aux.jamo());
        }
        if self.tense {
            pattern.push_str(TENSE_INFIX);
        }
        pattern.push_str(self.ending);
        pattern.push_str(self.sentence_type.terminator());
        pattern
    }
}

const fn decl(ending: &'static str) -> EndingTemplate {
    EndingTemplate::new(SentenceType::Declarative, ending)
}

const fn inter(ending: &'static str) -> EndingTemplate {
    EndingTemplate::new(SentenceType::Interrogative, ending)
}

const fn imper(ending: &'static str) -> EndingTemplate {
    EndingTemplate::new(SentenceType::Imperative, ending)
}

const fn prop(ending: &'static str) -> EndingTemplate {
    EndingTemplate::new(SentenceType::Propositive, ending)
}

/// 허용 종결어미 예시 묶음
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExampleGroup {
    Sentence(SentenceType),
    /// 보조용언 결합형
    Auxiliary,
}

impl fmt::Display for ExampleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExampleGroup::Sentence(SentenceType::Declarative) => "평서",
            ExampleGroup::Sentence(SentenceType::Interrogative) => "의문",
            ExampleGroup::Sentence(SentenceType::Imperative) => "명령",
            ExampleGroup::Sentence(SentenceType::Propositive) => "청유",
            ExampleGroup::Auxiliary => "보조용언",
        };
        f.write_str(label)
    }
}

const DECLARATIVE: ExampleGroup = ExampleGroup::Sentence(SentenceType::Declarative);
const INTERROGATIVE: ExampleGroup = ExampleGroup::Sentence(SentenceType::Interrogative);
const IMPERATIVE: ExampleGroup = ExampleGroup::Sentence(SentenceType::Imperative);
const PROPOSITIVE: ExampleGroup = ExampleGroup::Sentence(SentenceType::Propositive);

/// 어체 정의
#[derive(Debug)]
pub struct SpeechLevel {
    /// 1(해라체) ~ 6(하십시오체)
    pub ordinal: u8,
    pub name: &'static str,
    /// 어울리는 글의 성격
    pub description: &'static str,
    /// 추천 판정에 쓰는 주제 키워드
    pub keywords: &'static [&'static str],
    pub templates: &'static [EndingTemplate],
    pub examples: &'static [(ExampleGroup, &'static [&'static str])],
}

/// 해라체
const HAERA: SpeechLevel = SpeechLevel {
    ordinal: 1,
    name: "해라체",
    description: "반말 중 가장 낮은 격식체. 권위있는 학술/전문 블로그에 적합.",
    keywords: &["학술", "전문", "논문", "분석", "연구", "메커니즘"],
    templates: &[
        decl("ㄷㅏ").with_tense(),
        decl("ㄴㅡㄴㄷㅏ").with_tense(),
        decl("ㄴㄷㅏ").with_tense(),
        decl("ㄷㅓㄹㅏ").with_tense(),
        decl("ㄷㅡㄹㅏ").with_tense(), // -드라 (비표준)
        decl("ㄹㅏㄴㄷㅏ").with_tense(),
        decl("ㄷㅏㄴㄷㅏ").with_tense(),
        decl("ㄹㅣㄹㅏ").with_tense(),
        decl("ㄱㅜㄴㅏ").with_tense(),
        decl("ㄱㅜㄴ").with_tense(),
        // 봤다, 줬다, 버렸다, 놨다, 뒀다, 갔다, 왔다
        decl("ㄷㅏ").with_tense().after(Auxiliary::Bo),
        decl("ㄷㅏ").with_tense().after(Auxiliary::Ju),
        decl("ㄷㅏ").with_tense().after(Auxiliary::Beori),
        decl("ㄷㅏ").with_tense().after(Auxiliary::Noh),
        decl("ㄷㅏ").with_tense().after(Auxiliary::Du),
        decl("ㄷㅏ").with_tense().after(Auxiliary::Ga),
        decl("ㄷㅏ").with_tense().after(Auxiliary::O),
        decl("ㄱㅗㅇㅣㅆㄷㅏ"),
        decl("ㄱㅗㅅㅣㅍㄷㅏ"),
        inter("ㄴㅑ").with_tense(),
        inter("ㄴㅡㄴㅑ").with_tense(),
        inter("ㄴㅣ").with_tense(),
        inter("ㄷㅓㄴㅑ").with_tense(),
        inter("ㄹㄲㅏ").with_tense(),
        inter("ㅇㅡㄹㄲㅏ").with_tense(),
        imper("ㅇㅏㄹㅏ"),
        imper("ㅇㅓㄹㅏ"),
        imper("ㅇㅕㄹㅏ"),
        imper("ㄱㅓㄹㅏ"),
        imper("ㄴㅓㄹㅏ"),
        imper("ㄹㅕㅁ"),
        prop("ㅈㅏ"),
    ],
    examples: &[
        (DECLARATIVE, &["-다", "-ㄴ다/는다", "-았/었다", "-더라", "-구나", "-군"]),
        (INTERROGATIVE, &["-냐?", "-느냐?", "-니?", "-ㄹ까?"]),
        (IMPERATIVE, &["-아라/어라", "-거라", "-렴"]),
        (PROPOSITIVE, &["-자"]),
        (
            ExampleGroup::Auxiliary,
            &["~봤다", "~줬다", "~버렸다", "~놨다", "~갔다", "~왔다", "~고 있다", "~고 싶다"],
        ),
    ],
};

/// 해체
const HAE: SpeechLevel = SpeechLevel {
    ordinal: 2,
    name: "해체",
    description: "친근한 반말. 일상적이고 캐주얼한 블로그에 적합.",
    keywords: &["일상", "친근", "캐주얼", "경험담", "후기"],
    templates: &[
        decl("ㅇㅓ").with_tense(),
        decl("ㅇㅏ").with_tense(),
        decl("ㅇㅕ").with_tense(),
        decl("ㅈㅣ").with_tense(),
        decl("ㄱㅓㄷㅡㄴ").with_tense(),
        decl("ㄴㅔ").with_tense(),
        decl("ㄴㅡㄴㄷㅔ").with_tense(),
        decl("ㅈㅏㄴㅎㅏ").with_tense(),
        decl("ㄷㅓㄹㅏㄱㅗ").with_tense(),
        decl("ㄹㄱㅓㄹ").with_tense(),
        decl("ㄹㄱㅔ").with_tense(),
        decl("ㅂㅘ"),
        decl("ㅈㅝ"),
        decl("ㅂㅓㄹㅕ"),
        decl("ㄴㅘ"),
        decl("ㄷㅝ"),
        decl("ㄱㅏ"),
        decl("ㅇㅘ"),
        decl("ㄱㅗㅇㅣㅆㅇㅓ"),
        decl("ㄱㅗㅅㅣㅍㅇㅓ"),
        inter("ㅇㅓ").with_tense(),
        inter("ㅇㅏ").with_tense(),
        inter("ㅈㅣ").with_tense(),
        inter("ㄴㅡㄴㄷㅔ").with_tense(),
    ],
    examples: &[
        (
            DECLARATIVE,
            &["-어/아", "-지", "-거든", "-네", "-는데", "-잖아", "-더라고", "-ㄹ걸", "-ㄹ게"],
        ),
        (INTERROGATIVE, &["-어?/아?", "-지?", "-는데?", "-잖아?"]),
        (IMPERATIVE, &["-어/아 (평서와 동일)"]),
        (PROPOSITIVE, &["-어/아 (평서와 동일)"]),
        (
            ExampleGroup::Auxiliary,
            &["~봐", "~줘", "~버려", "~놔", "~둬", "~가", "~와", "~고 있어", "~고 싶어"],
        ),
    ],
};

/// 하게체
const HAGE: SpeechLevel = SpeechLevel {
    ordinal: 3,
    name: "하게체",
    description: "예스러운 하대. 중년층 이상 또는 복고풍 블로그에 적합.",
    keywords: &["복고", "고전", "역사", "전통"],
    templates: &[
        decl("ㄴㅔ").with_tense(),
        decl("ㄱㅔㅆㄴㅔ").with_tense(),
        decl("ㄴㄱㅏ").with_tense(),
        decl("ㄴㅡㄴㄱㅏ").with_tense(),
        inter("ㄴㅏ").with_tense(),
        inter("ㄴㅡㄴㄱㅏ").with_tense(),
        inter("ㄷㅓㄴㄱㅏ").with_tense(),
        imper("ㄱㅔ"),
        imper("ㄱㅔㄴㅏ"),
        prop("ㅅㅔ"),
        prop("ㅅㅔㄴㅏ"),
    ],
    examples: &[
        (DECLARATIVE, &["-네", "-겠네", "-ㄴ가/는가"]),
        (INTERROGATIVE, &["-나?", "-는가?", "-던가?"]),
        (IMPERATIVE, &["-게", "-게나"]),
        (PROPOSITIVE, &["-세", "-세나"]),
    ],
};

/// 하오체
const HAO: SpeechLevel = SpeechLevel {
    ordinal: 4,
    name: "하오체",
    description: "예스러운 존대. 사극풍이나 격식있는 복고 스타일에 적합.",
    keywords: &["사극", "역사적", "격식"],
    templates: &[
        decl("ㅇㅗ").with_tense(),
        decl("ㅅㅗ").with_tense(),
        decl("ㄹㅣㅇㅗ").with_tense(),
        decl("ㄱㅜㄹㅕ").with_tense(),
        inter("ㅇㅗ").with_tense(),
        inter("ㅅㅗ").with_tense(),
        imper("ㅅㅣㅇㅗ"),
        prop("ㅂㅅㅣㄷㅏ"),
        prop("ㅎㅏㅂㅅㅣㄷㅏ"),
        prop("ㄱㅏㅂㅅㅣㄷㅏ"),
        prop("ㅂㅗㅂㅅㅣㄷㅏ"),
    ],
    examples: &[
        (DECLARATIVE, &["-오", "-소", "-리오", "-구려"]),
        (INTERROGATIVE, &["-오?", "-소?"]),
        (IMPERATIVE, &["-시오"]),
        (PROPOSITIVE, &["-ㅂ시다", "합시다", "갑시다", "봅시다"]),
    ],
};

/// 해요체
const HAEYO: SpeechLevel = SpeechLevel {
    ordinal: 5,
    name: "해요체",
    description: "부드러운 존댓말. 친근하면서도 예의있는 일반 블로그에 적합.",
    keywords: &["친절", "안내", "튜토리얼", "가이드", "설명"],
    templates: &[
        decl("ㅇㅓㅇㅛ").with_tense(),
        decl("ㅇㅏㅇㅛ").with_tense(),
        decl("ㅇㅕㅇㅛ").with_tense(),
        decl("ㅇㅔㅇㅛ").with_tense(),
        decl("ㅇㅖㅇㅛ").with_tense(),
        decl("ㅈㅛ").with_tense(),
        decl("ㅈㅣㅇㅛ").with_tense(),
        decl("ㄴㅔㅇㅛ").with_tense(),
        decl("ㄱㅜㄴㅇㅛ").with_tense(),
        decl("ㄱㅓㄷㅡㄴㅇㅛ").with_tense(),
        decl("ㅈㅏㄴㅎㅏㅇㅛ").with_tense(),
        decl("ㄴㅡㄴㄷㅔㅇㅛ").with_tense(),
        decl("ㄹㄱㅔㅇㅛ").with_tense(),
        decl("ㄹㄲㅓㄹㅇㅛ").with_tense(), // -ㄹ껄요 표기
        decl("ㅂㅘㅇㅛ"),
        decl("ㅈㅝㅇㅛ"),
        decl("ㅂㅓㄹㅕㅇㅛ"),
        decl("ㄴㅘㅇㅛ"),
        decl("ㄷㅝㅇㅛ"),
        decl("ㄱㅗㅇㅣㅆㅇㅓㅇㅛ"),
        decl("ㄱㅗㅅㅣㅍㅇㅓㅇㅛ"),
        inter("ㅇㅓㅇㅛ").with_tense(),
        inter("ㅇㅏㅇㅛ").with_tense(),
        inter("ㅈㅛ").with_tense(),
        inter("ㄴㅏㅇㅛ").with_tense(),
        inter("ㄹㄲㅏㅇㅛ").with_tense(),
        inter("ㄹㄹㅐㅇㅛ").with_tense(),
        imper("ㅅㅔㅇㅛ"),
        imper("ㅈㅜㅅㅔㅇㅛ"),
    ],
    examples: &[
        (
            DECLARATIVE,
            &[
                "-어요/아요", "-에요/예요", "-죠", "-지요", "-네요", "-군요", "-거든요",
                "-잖아요", "-는데요", "-ㄹ게요", "-ㄹ걸요",
            ],
        ),
        (INTERROGATIVE, &["-어요?/아요?", "-죠?", "-나요?", "-ㄹ까요?", "-ㄹ래요?"]),
        (IMPERATIVE, &["-세요", "-주세요"]),
        (PROPOSITIVE, &["-어요/아요", "-ㄹ래요"]),
        (
            ExampleGroup::Auxiliary,
            &["~봐요", "~줘요", "~버려요", "~놔요", "~둬요", "~고 있어요", "~고 싶어요"],
        ),
    ],
};

/// 하십시오체
const HASIPSIO: SpeechLevel = SpeechLevel {
    ordinal: 6,
    name: "하십시오체",
    description: "가장 격식있는 존댓말. 공식적/비즈니스 블로그에 적합.",
    keywords: &["공식", "비즈니스", "기업", "보고서", "발표"],
    templates: &[
        decl("ㅅㅡㅂㄴㅣㄷㅏ").with_tense(),
        decl("ㅂㄴㅣㄷㅏ").with_tense(),
        decl("ㅇㅗㅂㄴㅣㄷㅏ").with_tense(),
        decl("ㅇㅣㅂㄴㅣㄷㅏ").with_tense(),
        decl("ㄱㅔㅆㅅㅡㅂㄴㅣㄷㅏ").with_tense(),
        decl("ㅇㅓㅆㅅㅡㅂㄴㅣㄷㅏ").with_tense(),
        decl("ㅇㅏㅆㅅㅡㅂㄴㅣㄷㅏ").with_tense(),
        inter("ㅅㅡㅂㄴㅣㄲㅏ").with_tense(),
        inter("ㅂㄴㅣㄲㅏ").with_tense(),
        inter("ㅇㅣㅂㄴㅣㄲㅏ").with_tense(),
        inter("ㅅㅣㅂㄴㅣㄲㅏ").with_tense(),
        imper("ㅅㅣㅂㅅㅣㅇㅗ"),
        imper("ㅅㅗㅅㅓ"), // 극존칭
        prop("ㅅㅣㅂㅅㅣㄷㅏ"),
    ],
    examples: &[
        (DECLARATIVE, &["-습니다/ㅂ니다", "-입니다", "-겠습니다", "-았/었습니다"]),
        (INTERROGATIVE, &["-습니까?/ㅂ니까?", "-입니까?", "-십니까?"]),
        (IMPERATIVE, &["-십시오", "-소서"]),
        (PROPOSITIVE, &["-십시다"]),
    ],
};

/// 낮은 어체부터 높은 어체 순서의 전체 정의
pub static SPEECH_LEVELS: [SpeechLevel; 6] = [HAERA, HAE, HAGE, HAO, HAEYO, HASIPSIO];

/// 어체별로 컴파일된 패턴 (`SPEECH_LEVELS`와 같은 순서)
pub static COMPILED_LEVELS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    SPEECH_LEVELS
        .iter()
        .map(|level| level.templates.iter().map(compile_template).collect())
        .collect()
});

fn compile_template(template: &EndingTemplate) -> Regex {
    let pattern = template.pattern();
    // 정적 템플릿이므로 실패는 테이블 작성 오류
    Regex::new(&pattern).unwrap_or_else(|e| panic!("invalid ending template {pattern}: {e}"))
}

/// 정규식 목록에 대한 겹치지 않는 매치 수의 합
pub fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}
