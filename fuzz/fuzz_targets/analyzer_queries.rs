#![no_main]

use arbitrary::Arbitrary;
use httplog_analyzer::{AnalyzerError, LogAnalyzer};
use libfuzzer_sys::fuzz_target;

/// 퍼저용 구조적 입력
#[derive(Arbitrary, Debug)]
struct FuzzInput {
    /// 첫 번째 적재 라인
    first: Vec<String>,
    /// 재적재 라인
    second: Vec<String>,
    /// 상위 N 조회 개수
    counts: Vec<i64>,
}

fuzz_target!(|input: FuzzInput| {
    let mut analyzer = LogAnalyzer::new();

    for count in input.counts.iter().take(4) {
        assert!(matches!(
            analyzer.top_urls(*count),
            Err(AnalyzerError::NotLoaded)
        ));
    }

    for lines in [&input.first, &input.second] {
        // 디코딩된 텍스트 적재는 실패하지 않음
        analyzer.ingest(lines).unwrap();
        assert!(analyzer.is_loaded());

        let unique_urls = analyzer.unique_url_count().unwrap();
        for &count in input.counts.iter().take(8) {
            match analyzer.top_urls_with_counts(count) {
                Ok(entries) => {
                    assert!(count >= 1);
                    assert!(entries.len() as i64 <= count);
                    assert!(entries.len() <= unique_urls);
                    for pair in entries.windows(2) {
                        assert!(
                            pair[0].count > pair[1].count
                                || (pair[0].count == pair[1].count && pair[0].key < pair[1].key)
                        );
                    }
                    // 반복 조회는 같은 결과
                    assert_eq!(entries, analyzer.top_urls_with_counts(count).unwrap());
                }
                Err(AnalyzerError::InvalidCount { requested }) => {
                    assert!(count < 1);
                    assert_eq!(requested, count);
                }
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
    }
});
