//! 라인 토큰화 모듈 -- 원시 로그 라인을 필드 목록으로 분리
//!
//! 각 토크나이저는 [`LineTokenizer`] trait을 구현합니다.
//! 분석기는 토크나이저 자체가 아니라 출력 형태([`TokenizedLine`])에만 의존합니다.
//!
//! # 지원 형식
//! - 공백 구분 HTTP 액세스 로그 ([`AccessLogTokenizer`])
//!
//! # 사용 예시
//! ```
//! use httplog_analyzer::tokenizer::{AccessLogTokenizer, LineTokenizer};
//!
//! let tokenizer = AccessLogTokenizer::new();
//! let line = tokenizer.tokenize(r#"1.2.3.4 - - [01/Jan/2020:00:00:00] "GET /a HTTP/1.1" 200 10"#);
//! assert_eq!(line.field(4), Some("GET /a HTTP/1.1"));
//! ```

pub mod access_log;

pub use access_log::AccessLogTokenizer;

use serde::Serialize;

/// 라인 토크나이저
///
/// 한 줄을 받아 순서가 보존된 필드 목록을 만듭니다.
/// 어떤 입력에도 실패하지 않아야 합니다. 형식이 어긋난 라인은
/// 기대보다 적은 필드를 만들어낼 뿐 거부되지 않습니다.
pub trait LineTokenizer: Send + Sync {
    /// 토크나이저가 처리하는 로그 형식 이름
    fn format_name(&self) -> &'static str;

    /// 한 줄을 필드 목록으로 분리합니다.
    fn tokenize(&self, line: &str) -> TokenizedLine;
}

/// 여러 라인을 입력 순서대로 토큰화합니다.
///
/// 개별 라인의 형식과 무관하게 중간에 멈추지 않으며,
/// 반환 길이는 항상 입력 라인 수와 같습니다.
pub fn tokenize_lines<I, S>(tokenizer: &dyn LineTokenizer, lines: I) -> Vec<TokenizedLine>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| tokenizer.tokenize(line.as_ref()))
        .collect()
}

/// 토큰화된 로그 라인
///
/// 필드 개수는 라인마다 다를 수 있으며 여기서 검증하지 않습니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenizedLine {
    fields: Vec<String>,
}

impl TokenizedLine {
    /// 필드 목록으로 라인을 생성합니다.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// 인덱스 위치의 필드를 반환합니다.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// 전체 필드 슬라이스
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// 필드 개수
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// 필드가 하나도 없는지 여부
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 소유한 필드 목록으로 변환합니다.
    pub fn into_fields(self) -> Vec<String> {
        self.fields
    }
}

impl From<Vec<String>> for TokenizedLine {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}
