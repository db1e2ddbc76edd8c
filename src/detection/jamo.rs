//! 낱자모 검출 모듈
//!
//! 조합기가 완성형으로 묶지 못하고 남긴 호환용 자모를 검사한다.

/// 문자가 호환용 자모(ㄱ-ㅎ, ㅏ-ㅣ)인지 확인
///
/// 조합기가 남길 수 있는 낱자모 51자: 자음 30자(ㄱㄲㄳㄴㄵㄶㄷㄸㄹㄺㄻㄼㄽㄾㄿㅀ
/// ㅁㅂㅃㅄㅅㅆㅇㅈㅉㅊㅋㅌㅍㅎ) + 모음 21자(ㅏㅐㅑㅒㅓㅔㅕㅖㅗㅘㅙㅚㅛㅜㅝㅞㅟㅠㅡㅢㅣ)
/// U+3131 ~ U+3163 연속 구간과 정확히 일치한다
pub fn is_jamo(ch: char) -> bool {
    let cp = ch as u32;
    (0x3131..=0x3163).contains(&cp)
}

/// 낱자모가 하나라도 포함되어 있는지 검사
///
/// true면 조합이 불완전한 것이므로 검증기 판정 대상
pub fn has_residual_jamo(text: &str) -> bool {
    text.chars().any(is_jamo)
}
