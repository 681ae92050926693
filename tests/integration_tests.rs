//! 통합 테스트 - 자모 변환, 어체 판정, 절:구 비율

use std::io::Write;

use hangeul_audit::config::{load_config, try_load_config, AuditConfig};
use hangeul_audit::ratio::RatioAction;
use hangeul_audit::register::{RegisterClassifier, RegisterVerdict};
use hangeul_audit::{
    classify, compose, count_clauses, decompose, dominant, recommend_register, validate_ratio,
    AuditError, Auditor, Dominance, Register,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_decompose_compose_example() {
    assert_eq!(decompose("더라").as_str(), "ㄷㅓㄹㅏ");
    assert_eq!(compose("ㄷㅓㄹㅏ"), "더라");
}

#[test]
fn test_decompose_omits_empty_coda() {
    // 가(종성 없음)는 두 자모만
    assert_eq!(decompose("가").len(), 2);
    assert_eq!(decompose("각").len(), 3);
}

fn nine_plain_one_polite() -> String {
    let mut text = String::new();
    for sentence in [
        "하늘이 맑다.",
        "바람이 차다.",
        "물이 깊다.",
        "꽃이 예쁘다.",
        "날씨가 좋다.",
        "산이 높다.",
        "길이 멀다.",
        "밤이 길다.",
        "강이 넓다.",
    ] {
        text.push_str(sentence);
        text.push(' ');
    }
    text.push_str("정말 좋아요.");
    text
}

#[test]
fn test_register_boundary_passes() {
    let jamo = decompose(&nine_plain_one_polite());
    let counts = classify(jamo.as_str());
    assert_eq!(counts.get(Register::Haera), 9);
    assert_eq!(counts.get(Register::Haeyo), 1);
    assert_eq!(counts.total(), 10);

    match dominant(&counts) {
        Dominance::Determined {
            register, ratio, ..
        } => {
            assert_eq!(register, Register::Haera);
            assert!((ratio - 0.9).abs() < 1e-12);
        }
        Dominance::Undetermined => panic!("expected a dominant register"),
    }

    let report = RegisterClassifier::new().report(jamo.as_str());
    assert!(matches!(
        report.verdict,
        RegisterVerdict::Consistent {
            dominant: Register::Haera,
            ..
        }
    ));
}

#[test]
fn test_register_below_boundary_fails() {
    let text = nine_plain_one_polite().replacen("하늘이 맑다. ", "", 1);
    let report = RegisterClassifier::new().report(decompose(&text).as_str());
    assert_eq!(report.counts.get(Register::Haera), 8);
    match report.verdict {
        RegisterVerdict::Mixed {
            dominant, others, ..
        } => {
            assert_eq!(dominant, Register::Haera);
            assert_eq!(others, vec![(Register::Haeyo, 1)]);
        }
        other => panic!("expected mixed verdict, got {:?}", other),
    }
}

#[test]
fn test_register_undetermined() {
    let counts = classify(decompose("제목 없음").as_str());
    assert_eq!(dominant(&counts), Dominance::Undetermined);
}

#[test]
fn test_formal_text() {
    let text = "회의를 시작하겠습니다. 자료를 확인하십시오. 질문이 있습니까?";
    let report = RegisterClassifier::new().report(decompose(text).as_str());
    assert!(matches!(
        report.verdict,
        RegisterVerdict::Mixed {
            dominant: Register::Hasipsio,
            ..
        } | RegisterVerdict::Consistent {
            dominant: Register::Hasipsio,
            ..
        }
    ));
}

#[test]
fn test_colloquial_kkeol_yo_is_polite() {
    let report = RegisterClassifier::new().report(decompose("그냥 제가 할껄요.").as_str());
    assert_eq!(report.counts.get(Register::Haeyo), 1);
    assert!(matches!(
        report.verdict,
        RegisterVerdict::Consistent {
            dominant: Register::Haeyo,
            ..
        }
    ));
}

#[test]
fn test_recommend_register_for_topic() {
    assert_eq!(
        recommend_register("신제품 발표 자료와 기업 보고서"),
        Register::Hasipsio
    );
    assert_eq!(recommend_register("아무 키워드도 없는 글"), Register::Haera);
}

#[test]
fn test_validate_ratio_examples() {
    let outcome = validate_ratio(20, 10).unwrap();
    assert!(outcome.pass);
    assert!((outcome.ratio - 2.0).abs() < f64::EPSILON);

    let outcome = validate_ratio(20, 5).unwrap();
    assert!(!outcome.pass);
    assert!((outcome.ratio - 4.0).abs() < f64::EPSILON);
    assert_eq!(outcome.action, Some(RatioAction::Add(5)));
    assert_eq!(outcome.action.unwrap().to_string(), "add 5 phrases");

    assert!(matches!(
        validate_ratio(10, 0),
        Err(AuditError::InvalidPhraseCount(0))
    ));
}

#[test]
fn test_count_clauses_terminal_and_embedded() {
    let count = count_clauses("그는 매일 운동을 한다. 중요한 건 꾸준히 하는 것을 지키는 것이다.");
    assert_eq!(count.terminal, 2);
    assert_eq!(count.embedded, 2);
    assert_eq!(count.total, 4);
}

#[test]
fn test_auditor_end_to_end() {
    let text = nine_plain_one_polite();
    let report = Auditor::new(AuditConfig::default())
        .audit(&text, Some(5))
        .unwrap();
    // 종결어미: -다 9개 + -요 1개
    assert_eq!(report.clauses.clauses.terminal, 10);
    let ratio = report.ratio.unwrap();
    assert!(ratio.pass);
    assert!(report.passed());
}

#[test]
fn test_config_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(matches!(
        try_load_config(file.path()),
        Err(AuditError::Config(_))
    ));
    // 로드 실패는 기본값으로 대체
    assert_eq!(load_config(Some(file.path())), AuditConfig::default());
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"consistency_threshold": 0.8, "ratio": {{"target_ratio": 1.0}}}}"#).unwrap();
    let config = load_config(Some(file.path()));
    assert!((config.consistency_threshold - 0.8).abs() < f64::EPSILON);
    assert!((config.ratio.target_ratio - 1.0).abs() < f64::EPSILON);
    assert!((config.ratio.tolerance - 0.3).abs() < f64::EPSILON);
}

fn syllable_or_punct() -> impl Strategy<Value = char> {
    prop_oneof![
        (0xAC00u32..=0xD7A3).prop_map(|c| char::from_u32(c).unwrap()),
        prop::sample::select(vec!['.', '!', '?', ',', ' ', '"', '(', ')']),
    ]
}

proptest! {
    #[test]
    fn prop_round_trip(chars in prop::collection::vec(syllable_or_punct(), 0..64)) {
        let text: String = chars.into_iter().collect();
        prop_assert_eq!(compose(decompose(&text).as_str()), text);
    }

    #[test]
    fn prop_ascii_passes_through(text in "[ -~]{0,64}") {
        let decomposed = decompose(&text);
        prop_assert_eq!(decomposed.as_str(), text.as_str());
        prop_assert_eq!(compose(&text), text);
    }
}
