//! 토큰 분배 및 변환 결정
//!
//! 입력을 공백 단위 토큰으로 나눠 조합기에 넘기고,
//! 낱자모가 남은 결과는 검증기 판정에 따라 후보/원본 중 하나를 출력한다.

use crate::core::composer::Composer;
use crate::detection::blacklist::Blacklist;
use crate::detection::jamo::has_residual_jamo;
use crate::detection::validator::{evaluate, Verdict};

/// 토큰 하나에 대한 판정 내역
#[derive(Debug, Clone)]
pub struct TokenDecision {
    /// 원본 토큰
    pub original: String,
    /// 조합기 출력 (후보)
    pub candidate: String,
    /// 후보에 낱자모가 남아 있는지
    pub has_residual_jamo: bool,
    /// 검증기 판정 (낱자모가 없어 검증을 생략했으면 None)
    pub verdict: Option<Verdict>,
    /// 최종 수용 여부 (true면 후보를 출력)
    pub accepted: bool,
}

impl TokenDecision {
    /// 최종 출력 문자열 (구분자 제외)
    pub fn emitted(&self) -> &str {
        if self.accepted {
            &self.candidate
        } else {
            &self.original
        }
    }
}

/// 토큰 변환기
///
/// 조합기와 금지 단어 사전을 소유하며, 호출 간 공유 가변 상태가 없어
/// 조합기가 순수하다면 여러 스레드에서 동시에 호출해도 안전하다.
pub struct Converter<C> {
    composer: C,
    blacklist: Blacklist,
}

impl<C: Composer> Converter<C> {
    /// 기본 금지 단어 사전으로 생성
    pub fn new(composer: C) -> Self {
        Self {
            composer,
            blacklist: Blacklist::default(),
        }
    }

    /// 금지 단어 사전을 지정하여 생성
    pub fn with_blacklist(composer: C, blacklist: Blacklist) -> Self {
        Self { composer, blacklist }
    }

    /// 사용 중인 금지 단어 사전
    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// 입력 전체 변환
    ///
    /// 마지막 토큰을 포함해 모든 토큰 뒤에 공백 하나를 붙인다.
    /// 끝에 공백이 하나 남는 것은 호환성을 위해 유지하는 기존 동작이다.
    /// 연속 공백으로 생기는 빈 토큰도 같은 경로를 거쳐 그대로 출력된다.
    pub fn convert(&self, input: &str) -> String {
        let mut output = String::with_capacity(input.len() + 1);

        for token in input.split(' ') {
            let decision = self.analyze(token);
            output.push_str(decision.emitted());
            output.push(' ');
        }

        output
    }

    /// 토큰 하나를 조합하고 판정
    pub fn analyze(&self, token: &str) -> TokenDecision {
        let candidate = self.composer.compose(token);

        if !has_residual_jamo(&candidate) {
            // 전부 정상 조합됨 → 후보를 그대로 출력
            return TokenDecision {
                original: token.to_string(),
                candidate,
                has_residual_jamo: false,
                verdict: None,
                accepted: true,
            };
        }

        let verdict = evaluate(&candidate, &self.blacklist);
        let accepted = verdict.is_accept();

        if accepted {
            log::debug!("후보 수용: '{}' → '{}' ({:?})", token, candidate, verdict);
        } else {
            log::debug!("후보 거부, 원본 유지: '{}' ({:?})", token, verdict);
        }

        TokenDecision {
            original: token.to_string(),
            candidate,
            has_residual_jamo: true,
            verdict: Some(verdict),
            accepted,
        }
    }
}

/// 조합기와 기본 사전으로 입력 전체를 변환하는 단축 함수
pub fn convert<C: Composer>(input: &str, composer: C) -> String {
    Converter::new(composer).convert(input)
}
