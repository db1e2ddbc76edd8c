//! 변환 판정 모듈
//!
//! 낱자모 검출, 금지 단어 사전, 3단계 수용 판정

pub mod blacklist;
pub mod jamo;
pub mod validator;

pub use blacklist::Blacklist;
pub use jamo::{has_residual_jamo, is_jamo};
pub use validator::{evaluate, should_accept, Verdict};
