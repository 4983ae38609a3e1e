//! 필드 추출 -- 토큰화된 라인에서 집계 키를 찾는 단일 지점
//!
//! 클라이언트 주소와 URL의 위치는 고정 인덱스 규약에 의존합니다.
//! 로그 형식이 바뀌면 이 모듈의 [`FieldLayout`]만 수정하면 됩니다.
//!
//! # 기본 규약
//! - 클라이언트 주소: 필드 0
//! - URL: 필드 4 (`METHOD PATH PROTOCOL`)를 공백으로 나눈 두 번째 토큰

use serde::{Deserialize, Serialize};

use crate::tokenizer::TokenizedLine;

/// 빈도 집계 대상 키 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// 클라이언트 주소
    ClientAddress,
    /// 요청 URL
    Url,
}

impl KeyKind {
    /// 로그와 메트릭 레이블에 쓰는 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientAddress => "client_address",
            Self::Url => "url",
        }
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 필드 위치 규약
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLayout {
    /// 클라이언트 주소 필드 인덱스
    pub client_field_index: usize,
    /// 요청 라인 필드 인덱스
    pub request_field_index: usize,
    /// 요청 라인 내 URL 토큰 인덱스
    pub url_token_index: usize,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            client_field_index: 0,
            request_field_index: 4,
            url_token_index: 1,
        }
    }
}

impl FieldLayout {
    /// 라인에서 `kind`에 해당하는 키를 추출합니다.
    ///
    /// 필드가 부족한 라인은 `None`을 반환합니다.
    pub fn extract<'a>(&self, line: &'a TokenizedLine, kind: KeyKind) -> Option<&'a str> {
        match kind {
            KeyKind::ClientAddress => self.client_address(line),
            KeyKind::Url => self.request_url(line),
        }
    }

    /// 클라이언트 주소 필드
    pub fn client_address<'a>(&self, line: &'a TokenizedLine) -> Option<&'a str> {
        line.field(self.client_field_index)
    }

    /// 요청 라인의 URL 토큰
    ///
    /// 요청 라인은 단일 공백으로 나눕니다. 연속 공백 사이의 빈 토큰도
    /// 위치를 차지합니다.
    pub fn request_url<'a>(&self, line: &'a TokenizedLine) -> Option<&'a str> {
        line.field(self.request_field_index)?
            .split(' ')
            .nth(self.url_token_index)
    }
}
