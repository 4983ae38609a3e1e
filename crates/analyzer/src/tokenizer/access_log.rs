//! HTTP 액세스 로그 토크나이저
//!
//! 공백으로 필드를 구분하되, `[...]`(타임스탬프)와 `"..."`(요청 라인)로 감싼
//! 구간은 내부 공백을 포함한 하나의 필드로 취급합니다.
//!
//! # 입력 형식
//! ```text
//! 177.71.128.21 - - [10/Jul/2018:22:21:28 +0200] "GET /intranet-analytics/ HTTP/1.1" 200 3574
//! ```
//!
//! # 상태 전이
//!
//! | 문자 | Start | BracketOpen | QuoteOpen | PlainInProgress | MarkerClosed |
//! |------|-------|-------------|-----------|-----------------|--------------|
//! | `"`  | → QuoteOpen | 추가 | → MarkerClosed | 추가 | 버림 |
//! | `[`  | → BracketOpen | 추가 | 추가 | 추가 | 추가 |
//! | `]`  | 추가 | → MarkerClosed | 추가 | 추가 | 추가 |
//! | 공백 | 무시 | 추가 | 추가 | 필드 방출 | 필드 방출 |
//! | 기타 | 추가, → PlainInProgress | 추가 | 추가 | 추가 | 버림 |
//!
//! 대괄호는 전이가 일어나지 않는 칸에서 상태를 바꾸지 않고 버퍼에만 추가됩니다.
//! 라인 끝에서 `PlainInProgress` 또는 `MarkerClosed`이면 버퍼를 마지막 필드로 방출합니다.
//! 닫히지 않은 마커의 내용은 버려집니다.

use super::{LineTokenizer, TokenizedLine};

/// 토크나이저 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenizerState {
    /// 필드 밖
    Start,
    /// `[...]` 필드 내부
    BracketOpen,
    /// `"..."` 필드 내부
    QuoteOpen,
    /// 마커 없는 일반 필드 내부
    PlainInProgress,
    /// 마커 필드가 방금 닫힘, 구분 공백 대기
    MarkerClosed,
}

/// 한 줄을 처리하는 동안의 상태 머신
struct FieldScanner {
    state: TokenizerState,
    buffer: String,
    fields: Vec<String>,
}

impl FieldScanner {
    fn new() -> Self {
        Self {
            state: TokenizerState::Start,
            buffer: String::new(),
            fields: Vec::new(),
        }
    }

    fn push(&mut self, ch: char) {
        use TokenizerState::*;

        match (ch, self.state) {
            (' ', MarkerClosed | PlainInProgress) => self.emit(),
            (' ', Start) => {}
            (' ', BracketOpen | QuoteOpen) => self.buffer.push(ch),

            ('"', Start) => self.state = QuoteOpen,
            ('"', QuoteOpen) => self.state = MarkerClosed,
            ('"', MarkerClosed) => {}
            ('"', _) => self.buffer.push(ch),

            // 대괄호는 전이 조건이 아니면 상태와 무관하게 그대로 추가
            ('[', Start) => self.state = BracketOpen,
            (']', BracketOpen) => self.state = MarkerClosed,
            ('[' | ']', _) => self.buffer.push(ch),

            // 마커가 닫힌 뒤 구분 공백 전까지의 내용은 버림
            (_, MarkerClosed) => {}
            (_, Start) => {
                self.buffer.push(ch);
                self.state = PlainInProgress;
            }
            (_, BracketOpen | QuoteOpen | PlainInProgress) => self.buffer.push(ch),
        }
    }

    fn emit(&mut self) {
        self.fields.push(std::mem::take(&mut self.buffer));
        self.state = TokenizerState::Start;
    }

    fn finish(mut self) -> TokenizedLine {
        if matches!(
            self.state,
            TokenizerState::PlainInProgress | TokenizerState::MarkerClosed
        ) {
            self.emit();
        }
        TokenizedLine::new(self.fields)
    }
}

/// HTTP 액세스 로그 토크나이저
///
/// 상태를 갖지 않으므로 여러 스레드에서 공유해도 안전합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessLogTokenizer;

impl AccessLogTokenizer {
    /// 새 토크나이저를 생성합니다.
    pub fn new() -> Self {
        Self
    }
}

impl LineTokenizer for AccessLogTokenizer {
    fn format_name(&self) -> &'static str {
        "access_log"
    }

    fn tokenize(&self, line: &str) -> TokenizedLine {
        let mut scanner = FieldScanner::new();
        for ch in line.chars() {
            scanner.push(ch);
        }
        scanner.finish()
    }
}
