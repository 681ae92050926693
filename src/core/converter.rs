//! 한글 음절 <-> 자모열 변환기
//!
//! `decompose`는 완성형 음절을 초성/중성/종성 자모로 풀고,
//! `compose`는 자모열을 왼쪽부터 탐욕적으로 다시 조합합니다.
//!
//! # 조합 규칙의 한계
//!
//! `compose`는 종성 후보 뒤의 한 글자만 미리 봅니다. 그 글자가 모음이면 후보를
//! 다음 음절의 초성으로 넘기고, 아니면 현재 음절의 종성으로 씁니다.
//! `decompose`가 만든 자모열은 항상 이 규칙으로 원문이 복원되지만,
//! 손으로 만든 자모열(예: `ㄱㅏㄱㅏ`가 `각ㅏ`인지 `가가`인지)은 경계가 모호하며
//! 이 경우 항상 `가가`로 조합됩니다. 일반적인 모호성 해소는 하지 않습니다.

use super::jamo_mapper::{map_to_jamo, JamoSequence};
use super::unicode::{
    choseong_to_jamo_char, compose_syllable, decompose_syllable, jongseong_to_jamo_char,
    jungseong_to_jamo_char,
};

/// 문자열을 자모열로 분해
/// 한글 음절이 아닌 문자는 그대로 유지
///
/// # Examples
/// ```
/// use hangeul_audit::decompose;
/// assert_eq!(decompose("더라").as_str(), "ㄷㅓㄹㅏ");
/// assert_eq!(decompose("했다.").as_str(), "ㅎㅐㅆㄷㅏ.");
/// ```
pub fn decompose(text: &str) -> JamoSequence {
    let mut output = String::with_capacity(text.len() * 3);

    for c in text.chars() {
        match decompose_syllable(c) {
            Some((cho, jung, jong)) => {
                output.extend(choseong_to_jamo_char(cho));
                output.extend(jungseong_to_jamo_char(jung));
                // 종성 없음(0)은 아무것도 출력하지 않음
                output.extend(jongseong_to_jamo_char(jong));
            }
            None => output.push(c),
        }
    }

    JamoSequence::new(output)
}

/// 자모열을 한글 음절로 조합
/// 조합할 수 없는 자모와 그 밖의 문자는 그대로 출력
///
/// # Examples
/// ```
/// use hangeul_audit::compose;
/// assert_eq!(compose("ㄷㅓㄹㅏ"), "더라");
/// assert_eq!(compose("ㄱㅏㅇㅏ"), "가아");
/// ```
pub fn compose(jamo_text: &str) -> String {
    let chars: Vec<char> = jamo_text.chars().collect();
    let mut output = String::with_capacity(jamo_text.len());
    let mut i = 0;

    while i < chars.len() {
        let start = i;
        let onset = map_to_jamo(chars[i]).and_then(|j| j.choseong_index());
        let nucleus = chars
            .get(i + 1)
            .and_then(|&c| map_to_jamo(c))
            .and_then(|j| j.jungseong_index());

        let (Some(cho), Some(jung)) = (onset, nucleus) else {
            output.push(chars[i]);
            i += 1;
            continue;
        };
        i += 2;

        let mut jong = 0;
        if let Some(coda) = chars
            .get(i)
            .and_then(|&c| map_to_jamo(c))
            .and_then(|j| j.jongseong_index())
        {
            // 다음 글자가 모음이면 다음 음절의 초성
            let next_is_vowel = chars
                .get(i + 1)
                .and_then(|&c| map_to_jamo(c))
                .is_some_and(|j| j.is_vowel());
            if !next_is_vowel {
                jong = coda;
                i += 1;
            }
        }

        match compose_syllable(cho, jung, jong) {
            Some(syllable) => output.push(syllable),
            // 인덱스는 자모 표에서 왔으므로 도달하지 않음
            None => output.extend(&chars[start..i]),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_decompose() {
        assert_eq!(decompose("더라").as_str(), "ㄷㅓㄹㅏ");
        assert_eq!(decompose("가나다").as_str(), "ㄱㅏㄴㅏㄷㅏ");
    }

    #[test]
    fn test_decompose_jongseong() {
        assert_eq!(decompose("한글").as_str(), "ㅎㅏㄴㄱㅡㄹ");
        assert_eq!(decompose("했다").as_str(), "ㅎㅐㅆㄷㅏ");
        // 복합 종성은 한 글자로 출력
        assert_eq!(decompose("읽").as_str(), "ㅇㅣㄺ");
        assert_eq!(decompose("잖아").as_str(), "ㅈㅏㄶㅇㅏ");
    }

    #[test]
    fn test_decompose_passthrough() {
        assert_eq!(decompose("").as_str(), "");
        assert_eq!(decompose("abc 123!?").as_str(), "abc 123!?");
        assert_eq!(decompose("가a나").as_str(), "ㄱㅏaㄴㅏ");
        // 낱자모와 범위 밖 코드포인트도 그대로
        assert_eq!(decompose("ㄱ\u{D7A4}").as_str(), "ㄱ\u{D7A4}");
    }

    #[test]
    fn test_basic_compose() {
        assert_eq!(compose("ㄷㅓㄹㅏ"), "더라");
        assert_eq!(compose("ㅎㅏㄴㄱㅡㄹ"), "한글");
        assert_eq!(compose("ㅎㅐㅆㄷㅏ."), "했다.");
    }

    #[test]
    fn test_compose_coda_goes_to_next_onset() {
        // ㅇ 뒤가 모음이므로 다음 음절의 초성
        assert_eq!(compose("ㄱㅏㅇㅏ"), "가아");
        // 모음이 아니면 종성
        assert_eq!(compose("ㄱㅏㅇㅇㅏ"), "강아");
    }

    #[test]
    fn test_compose_ambiguous_input_is_greedy() {
        // 원래 "각ㅏ"였더라도 항상 "가가"로 조합됨
        assert_eq!(compose("ㄱㅏㄱㅏ"), "가가");
    }

    #[test]
    fn test_compose_cannot_be_coda() {
        // ㄸ은 종성이 될 수 없으므로 다음 음절 초성
        assert_eq!(compose("ㄱㅏㄸㅏ"), "가따");
        // ㄳ은 초성이 될 수 없으므로 종성 뒤 낱자로 남음
        assert_eq!(compose("ㄱㅏㅄ"), "값");
        assert_eq!(compose("ㄳㅏ"), "ㄳㅏ");
    }

    #[test]
    fn test_compose_literals() {
        assert_eq!(compose(""), "");
        assert_eq!(compose("ㄱ"), "ㄱ");
        assert_eq!(compose("ㅏㄱ"), "ㅏㄱ");
        assert_eq!(compose("abc"), "abc");
        assert_eq!(compose("ㄱㅏ!ㄴㅏ"), "가!나");
    }

    #[test]
    fn test_round_trip_sentences() {
        for text in [
            "안녕하세요.",
            "날씨가 정말 좋네요!",
            "값이 얼마입니까?",
            "닭 한 마리, 읽었다.",
            "빨리 와라!",
        ] {
            assert_eq!(compose(decompose(text).as_str()), text);
        }
    }
}
