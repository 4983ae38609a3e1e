#![no_main]

use httplog_analyzer::LogAnalyzer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut analyzer = LogAnalyzer::new();

    match analyzer.ingest_bytes(data) {
        Ok(summary) => {
            assert!(analyzer.is_loaded());
            assert!(summary.incomplete_lines <= summary.lines);

            let unique = analyzer.unique_client_address_count().unwrap();
            let top = analyzer.top_active_addresses(3).unwrap();
            assert!(top.len() <= 3);
            assert!(top.len() <= unique);
        }
        // 실패한 적재는 조회 불가 상태를 남김
        Err(_) => assert!(!analyzer.is_loaded()),
    }
});
