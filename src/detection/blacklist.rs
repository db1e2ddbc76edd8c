//! 변환 금지 단어 사전
//!
//! 후보 문자열에 부분 문자열로 포함되면 변환을 거부하는 단어 집합.
//! 유효한 자판 충돌이지만 실제로는 흔한 영어 단어인 경우를 걸러낸다.

/// 기본 금지 단어 목록
pub const DEFAULT_WORDS: &[&str] = &["to", "spawn"];

/// 변환 금지 단어 사전
///
/// 단어는 생성 시 소문자로 정규화되며 이후 읽기 전용으로 사용된다.
#[derive(Debug, Clone)]
pub struct Blacklist {
    words: Vec<String>,
}

impl Blacklist {
    /// 단어 목록으로 사전 생성 (소문자 정규화, 빈 단어 제거)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// 빈 사전 (아무것도 거부하지 않음)
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// 후보에 금지 단어가 포함되어 있는지 검사 (대소문자 무시, 위치 무관)
    pub fn matches(&self, candidate: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let lower = candidate.to_lowercase();
        self.words.iter().any(|w| lower.contains(w.as_str()))
    }

    /// 등록된 단어 수
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// 사전이 비어 있는지
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::from_words(DEFAULT_WORDS.iter().copied())
    }
}
