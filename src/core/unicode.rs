//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성 인덱스 순서의 호환용 자모
#[rustfmt::skip]
const CHOSEONG_JAMO: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 인덱스 순서의 호환용 모음 자모 (ㅏ U+314F ~ ㅣ U+3163, 연속 구간)
#[rustfmt::skip]
const JUNGSEONG_JAMO: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 인덱스 순서의 호환용 자모 (인덱스 0 = 종성 없음은 제외, 1부터 시작)
#[rustfmt::skip]
const JONGSEONG_JAMO: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 문자가 완성형 한글 음절(가-힣)인지 확인
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    if !is_hangul_syllable(c) {
        return None;
    }
    let offset = c as u32 - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 초성 인덱스에 해당하는 호환용 자모 문자
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG_JAMO.get(cho as usize).copied()
}

/// 중성 인덱스에 해당하는 호환용 모음 자모 문자
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG_JAMO.get(jung as usize).copied()
}

/// 종성 인덱스에 해당하는 호환용 자모 문자
/// 0(종성 없음)은 출력할 문자가 없으므로 None
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    if jong == 0 {
        return None;
    }
    JONGSEONG_JAMO.get(jong as usize - 1).copied()
}

/// 호환용 자모 문자의 초성 인덱스 (초성이 될 수 없으면 None)
pub fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 모음 자모 문자의 중성 인덱스
pub fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG_JAMO.iter().position(|&j| j == c).map(|i| i as u32)
}

/// 호환용 자모 문자의 종성 인덱스 (1~27, 종성이 될 수 없으면 None)
pub fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG_JAMO
        .iter()
        .position(|&j| j == c)
        .map(|i| i as u32 + 1)
}
