//! Jamofix - 자판 불일치 입력 변환 판정기
//!
//! 공백 단위 토큰마다 외부 자모 조합기의 출력(후보)을 받아
//! 완성형으로 교체할지 원본 입력을 유지할지 결정한다.
//! 자모 조합 알고리즘 자체는 이 크레이트의 범위가 아니다.
//!
//! # 사용 예시
//!
//! ```
//! use jamofix::Converter;
//!
//! // 실제로는 자모 조합 라이브러리를 연결한다
//! let composer = |token: &str| match token {
//!     "gksrmf" => "한글".to_string(),
//!     "name" => "ㅜ믇".to_string(),
//!     _ => token.to_string(),
//! };
//!
//! let converter = Converter::new(composer);
//!
//! // 완전 조합 → 교체, 낱자모 잔존 + 패턴 없음 → 원본 유지
//! // 마지막 토큰 뒤에도 공백 하나가 붙는다 (기존 동작 보존)
//! assert_eq!(converter.convert("gksrmf name"), "한글 name ");
//!
//! // 한 문자 반복은 의도적 입력으로 보고 그대로 수용
//! assert_eq!(converter.convert("ㅋㅋㅋㅋ"), "ㅋㅋㅋㅋ ");
//! ```

pub mod config;
pub mod core;
pub mod detection;

pub use crate::core::{convert, Composer, Converter, TokenDecision};
pub use config::{load_config, JamofixConfig};
pub use detection::{has_residual_jamo, is_jamo, should_accept, Blacklist, Verdict};
