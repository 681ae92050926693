//! 호환용 자모 문자 <-> 자모 단위 매핑

use std::fmt;

use serde::Serialize;

use super::unicode::{
    choseong_index, choseong_to_jamo_char, jongseong_index, jongseong_to_jamo_char,
    jungseong_index, jungseong_to_jamo_char,
};

/// 자모 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jamo {
    /// 자음 (cho_index: 초성 인덱스, jong_index: 종성 인덱스)
    /// ㄸ/ㅃ/ㅉ는 종성 불가, ㄳ/ㄺ 등 복합 자음은 초성 불가
    Consonant {
        cho_index: Option<u32>,
        jong_index: Option<u32>,
    },
    /// 모음 (jung_index: 중성 인덱스)
    Vowel { jung_index: u32 },
}

impl Jamo {
    /// 초성 인덱스 반환 (초성 가능한 자음인 경우만)
    pub fn choseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Consonant { cho_index, .. } => *cho_index,
            Jamo::Vowel { .. } => None,
        }
    }

    /// 중성 인덱스 반환 (모음인 경우만)
    pub fn jungseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Vowel { jung_index } => Some(*jung_index),
            Jamo::Consonant { .. } => None,
        }
    }

    /// 종성 인덱스 반환 (자음이고 종성 가능한 경우만)
    pub fn jongseong_index(&self) -> Option<u32> {
        match self {
            Jamo::Consonant { jong_index, .. } => *jong_index,
            Jamo::Vowel { .. } => None,
        }
    }

    /// 자음인지 확인
    pub fn is_consonant(&self) -> bool {
        matches!(self, Jamo::Consonant { .. })
    }

    /// 모음인지 확인
    pub fn is_vowel(&self) -> bool {
        matches!(self, Jamo::Vowel { .. })
    }

    /// 호환용 자모 문자로 되돌림
    pub fn to_char(&self) -> Option<char> {
        match *self {
            Jamo::Consonant {
                cho_index: Some(cho),
                ..
            } => choseong_to_jamo_char(cho),
            Jamo::Consonant {
                cho_index: None,
                jong_index,
            } => jong_index.and_then(jongseong_to_jamo_char),
            Jamo::Vowel { jung_index } => jungseong_to_jamo_char(jung_index),
        }
    }
}

/// 호환용 자모 문자 하나를 자모로 변환
/// 자모가 아닌 문자(영문, 숫자, 구두점, 완성형 음절 등)는 None 반환
pub fn map_to_jamo(c: char) -> Option<Jamo> {
    let cho_index = choseong_index(c);
    let jong_index = jongseong_index(c);
    if cho_index.is_some() || jong_index.is_some() {
        return Some(Jamo::Consonant {
            cho_index,
            jong_index,
        });
    }
    jungseong_index(c).map(|jung_index| Jamo::Vowel { jung_index })
}

/// 자모열의 한 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JamoUnit {
    /// 자음 또는 모음
    Letter(Jamo),
    /// 분해 대상이 아닌 문자 (그대로 유지)
    Literal(char),
}

impl From<char> for JamoUnit {
    fn from(c: char) -> Self {
        match map_to_jamo(c) {
            Some(jamo) => JamoUnit::Letter(jamo),
            None => JamoUnit::Literal(c),
        }
    }
}

/// 분해된 자모열
///
/// `decompose`만 생성하며 생성 후 변경되지 않습니다.
/// 패턴 매칭은 자모 문자열(`as_str`) 위에서 수행합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct JamoSequence(String);

impl JamoSequence {
    pub(crate) fn new(jamo_text: String) -> Self {
        Self(jamo_text)
    }

    /// 자모 문자열
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 소유한 자모 문자열로 변환
    pub fn into_string(self) -> String {
        self.0
    }

    /// 자모 단위 순회
    pub fn units(&self) -> impl Iterator<Item = JamoUnit> + '_ {
        self.0.chars().map(JamoUnit::from)
    }

    /// 자모 단위 개수
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for JamoSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JamoSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
