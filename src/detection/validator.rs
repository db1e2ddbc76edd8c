//! 변환 수용 판정 모듈
//!
//! 낱자모가 남은 후보 문자열에 3단계 규칙을 순서대로 적용해
//! 후보를 그대로 출력할지(수용) 원본으로 되돌릴지(거부) 판정한다.
//! 먼저 발동한 규칙이 최종 판정이 된다.

use super::blacklist::Blacklist;

/// 판정 결과 — 어느 규칙이 발동했는지
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// 규칙 1: 금지 단어 포함 → 거부
    BlacklistVeto,
    /// 규칙 2: 한 문자만 반복 (ㅋㅋㅋㅋ 등) → 수용
    RepeatedChar,
    /// 규칙 3: 두 문자 쌍 반복 (ㅇㅅㅇㅅ 등) → 수용
    RepeatedPair,
    /// 어느 규칙에도 해당 없음 → 거부
    NoPattern,
}

impl Verdict {
    /// 수용 판정인지
    pub fn is_accept(self) -> bool {
        matches!(self, Verdict::RepeatedChar | Verdict::RepeatedPair)
    }
}

/// 후보 문자열에 규칙을 순서대로 적용해 판정
///
/// 호출자가 낱자모 포함 여부를 먼저 확인하는 것이 전제이지만,
/// 빈 문자열이나 한 글자 입력에도 패닉 없이 동작한다.
pub fn evaluate(candidate: &str, blacklist: &Blacklist) -> Verdict {
    // 규칙 1 - 금지 단어가 포함되면 즉시 거부 (반복 패턴보다 우선)
    if blacklist.matches(candidate) {
        return Verdict::BlacklistVeto;
    }

    let chars: Vec<char> = candidate.chars().collect();
    let Some(&first) = chars.first() else {
        // 빈 후보는 판정 대상이 아님
        return Verdict::NoPattern;
    };

    // 규칙 2 - 한 문자만 여러 번 친 경우
    // 첫 문자의 출현 횟수가 전체 길이와 같으면 전부 같은 문자
    let count = chars.iter().filter(|&&c| c == first).count();
    if count == chars.len() {
        return Verdict::RepeatedChar;
    }

    // 규칙 3 - 두 키를 번갈아 누른 경우
    if is_pair_uniform(&chars) {
        return Verdict::RepeatedPair;
    }

    Verdict::NoPattern
}

/// 수용 여부만 필요한 경우의 단축형
pub fn should_accept(candidate: &str, blacklist: &Blacklist) -> bool {
    evaluate(candidate, blacklist).is_accept()
}

/// 앞에서부터 겹치지 않는 2문자 쌍으로 잘랐을 때 모든 쌍이 첫 쌍과 같은지 검사
///
/// 홀수 길이면 추가로 첫 문자와 마지막 문자가 일치해야 한다.
/// 길이 2 미만이면 쌍이 없으므로 불만족으로 처리
fn is_pair_uniform(chars: &[char]) -> bool {
    let half = chars.len() / 2;
    if half == 0 {
        return false;
    }

    let first_pair = (chars[0], chars[1]);
    let uniform = (0..half).all(|i| (chars[i * 2], chars[i * 2 + 1]) == first_pair);

    if chars.len() % 2 == 1 {
        uniform && chars[0] == chars[chars.len() - 1]
    } else {
        uniform
    }
}
