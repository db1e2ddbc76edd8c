//! 자모 조합기 연동 지점
//!
//! 자모 → 완성형 조합 알고리즘은 외부 협력자로 취급한다.
//! 이 크레이트는 조합 결과(완성형과 낱자모가 섞인 문자열)만 소비하며
//! 조합 규칙을 다시 구현하지 않는다.

/// 토큰 단위 자모 조합기
///
/// 구현은 순수 함수여야 하며 어떤 입력에도 실패하지 않아야 한다.
/// 반환값은 완전 조합 / 부분 조합(낱자모 잔존) / 원본 그대로 중 하나다.
/// 이미 조합된 완성형을 다시 조합해도 같은 결과가 나와야 한다 (멱등성).
pub trait Composer {
    /// 토큰 하나를 조합한 결과를 반환
    fn compose(&self, token: &str) -> String;
}

/// 클로저/함수 포인터를 그대로 조합기로 사용
impl<F> Composer for F
where
    F: Fn(&str) -> String,
{
    fn compose(&self, token: &str) -> String {
        self(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_composer() {
        let identity = |token: &str| token.to_string();
        assert_eq!(identity.compose("ㅋㅋ"), "ㅋㅋ");

        let upper = |token: &str| token.to_uppercase();
        assert_eq!(upper.compose("abc"), "ABC");
    }

    #[test]
    fn test_fn_pointer_composer() {
        fn fixed(_token: &str) -> String {
            "한글".to_string()
        }
        assert_eq!(fixed.compose("gksrmf"), "한글");
    }
}
