//! 메트릭 이름 상수
//!
//! 모든 메트릭의 이름을 중앙에서 정의합니다.
//! 분석기는 이 상수를 사용하여 `metrics::counter!()` 매크로를 호출합니다.
//! 레코더(exporter) 설치는 호스트 애플리케이션의 몫입니다.
//!
//! # 네이밍 컨벤션
//!
//! - 접두어: `httplog_`
//! - 접미어: `_total` (counter)
//!
//! # 사용 예시
//!
//! ```ignore
//! use metrics::counter;
//!
//! counter!(httplog_core::metrics::ANALYZER_LINES_INGESTED_TOTAL).increment(42);
//! ```

// ─── 레이블 키 상수 ────────────────────────────────────────────────

/// 빈도 테이블 레이블 키 (client_address, url)
pub const LABEL_TABLE: &str = "table";

/// 실패 사유 레이블 키 (parse_failure, invalid_path, io)
pub const LABEL_REASON: &str = "reason";

// ─── Analyzer 메트릭 ───────────────────────────────────────────────

/// Analyzer: 토큰화되어 적재된 전체 라인 수 (counter)
pub const ANALYZER_LINES_INGESTED_TOTAL: &str = "httplog_analyzer_lines_ingested_total";

/// Analyzer: 성공한 적재 횟수 (counter)
pub const ANALYZER_INGESTIONS_TOTAL: &str = "httplog_analyzer_ingestions_total";

/// Analyzer: 실패한 적재 횟수 (counter, label: reason)
pub const ANALYZER_INGEST_FAILURES_TOTAL: &str = "httplog_analyzer_ingest_failures_total";

/// Analyzer: 빈도 테이블 생성 횟수 (counter, label: table)
pub const ANALYZER_TABLE_BUILDS_TOTAL: &str = "httplog_analyzer_table_builds_total";
