#![no_main]

use httplog_analyzer::tokenizer::{AccessLogTokenizer, LineTokenizer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        let tokenizer = AccessLogTokenizer::new();
        let first = tokenizer.tokenize(line);

        // 순수 함수: 같은 입력이면 같은 필드
        assert_eq!(first, tokenizer.tokenize(line));

        // 필드 내용은 입력보다 길어질 수 없음
        let total: usize = first.fields().iter().map(String::len).sum();
        assert!(total <= line.len());
    }
});
