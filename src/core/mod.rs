//! 핵심 변환 파이프라인

pub mod composer;
pub mod converter;

pub use composer::Composer;
pub use converter::{convert, Converter, TokenDecision};
