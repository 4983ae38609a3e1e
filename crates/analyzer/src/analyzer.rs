//! 로그 분석기 -- 적재, 빈도 집계, 순위 조회
//!
//! [`LogAnalyzer`]는 데이터셋의 수명 주기를 관리합니다.
//!
//! # 상태
//! ```text
//!            ingest 성공
//!   Empty ──────────────> Loaded(generation N)
//!     ^                       │
//!     └───── ingest 실패 ─────┘   ingest 성공 → Loaded(generation N+1)
//! ```
//!
//! 적재는 항상 기존 데이터셋을 먼저 버립니다. 새 데이터셋과 빈도 캐시는
//! 하나의 [`Dataset`]으로 통째로 교체되므로 이전 세대의 집계가 섞이지 않습니다.
//!
//! # 사용 예시
//! ```
//! use httplog_analyzer::LogAnalyzer;
//!
//! let mut analyzer = LogAnalyzer::new();
//! analyzer.ingest([
//!     r#"10.0.0.1 - - [01/Jan/2020:00:00:00 +0000] "GET /a HTTP/1.1" 200 10"#,
//!     r#"10.0.0.2 - - [01/Jan/2020:00:00:01 +0000] "GET /a HTTP/1.1" 200 10"#,
//! ])?;
//!
//! assert_eq!(analyzer.unique_client_address_count()?, 2);
//! assert_eq!(analyzer.top_urls(1)?, ["/a"]);
//! # Ok::<(), httplog_analyzer::AnalyzerError>(())
//! ```

use std::io::BufRead;
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use httplog_core::metrics as m;

use crate::config::AnalyzerConfig;
use crate::dataset::Dataset;
use crate::error::AnalyzerError;
use crate::frequency::RankedEntry;
use crate::layout::KeyKind;
use crate::source;
use crate::tokenizer::{AccessLogTokenizer, LineTokenizer, TokenizedLine, tokenize_lines};

/// 데이터셋 상태
#[derive(Debug)]
enum DatasetState {
    /// 성공한 적재가 없음 (또는 마지막 적재가 실패함)
    Empty,
    /// 조회 가능
    Loaded(Dataset),
}

/// 적재 결과 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestSummary {
    /// 새 데이터셋의 세대 번호
    pub generation: u64,
    /// 적재된 라인 수
    pub lines: usize,
    /// 클라이언트 주소나 URL 필드를 찾지 못한 라인 수
    pub incomplete_lines: usize,
}

/// 데이터셋 통계 요약
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogSummary {
    /// 세대 번호
    pub generation: u64,
    /// 전체 라인 수
    pub lines: usize,
    /// 서로 다른 클라이언트 주소 수
    pub unique_client_addresses: usize,
    /// 서로 다른 URL 수
    pub unique_urls: usize,
    /// 가장 많이 요청된 URL
    pub top_urls: Vec<RankedEntry>,
    /// 가장 활동적인 클라이언트 주소
    pub top_active_addresses: Vec<RankedEntry>,
}

/// HTTP 액세스 로그 분석기
///
/// 적재는 `&mut self`, 조회는 `&self`를 받으므로 적재와 조회의 직렬화는
/// 소유권 규칙으로 보장됩니다. 조회 결과는 항상 소유한 값으로 반환되어
/// 이후의 재적재에 영향을 받지 않습니다.
pub struct LogAnalyzer {
    config: AnalyzerConfig,
    tokenizer: Box<dyn LineTokenizer>,
    state: DatasetState,
    /// 마지막으로 발급한 세대 번호
    last_generation: u64,
}

impl LogAnalyzer {
    /// 기본 설정과 액세스 로그 토크나이저로 분석기를 생성합니다.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            tokenizer: Box::new(AccessLogTokenizer::new()),
            state: DatasetState::Empty,
            last_generation: 0,
        }
    }

    /// 빌더를 반환합니다.
    pub fn builder() -> LogAnalyzerBuilder {
        LogAnalyzerBuilder::new()
    }

    /// 현재 설정
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// 사용 중인 토크나이저의 형식 이름
    pub fn format_name(&self) -> &'static str {
        self.tokenizer.format_name()
    }

    /// 조회 가능한 데이터셋이 있는지 여부
    pub fn is_loaded(&self) -> bool {
        matches!(self.state, DatasetState::Loaded(_))
    }

    /// 현재 데이터셋의 세대 번호 (적재 전이면 `None`)
    pub fn generation(&self) -> Option<u64> {
        match &self.state {
            DatasetState::Loaded(dataset) => Some(dataset.generation()),
            DatasetState::Empty => None,
        }
    }

    // --- 적재 ---

    /// 로그 라인들을 토큰화하여 새 데이터셋으로 적재합니다.
    ///
    /// 기존 데이터셋과 빈도 캐시는 먼저 버려집니다.
    /// 이미 디코딩된 텍스트이므로 형식이나 길이와 무관하게 모든 라인을 받아들입니다.
    /// 최대 라인 길이는 바이트/리더/파일 입력을 디코딩할 때만 적용됩니다.
    pub fn ingest<I, S>(&mut self, lines: I) -> Result<IngestSummary, AnalyzerError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state = DatasetState::Empty;
        let tokenized = tokenize_lines(self.tokenizer.as_ref(), lines);
        Ok(self.install(tokenized))
    }

    /// 원시 바이트를 라인으로 나누어 적재합니다.
    ///
    /// UTF-8이 아니거나 최대 길이를 넘는 라인이 있으면 `ParseFailure`로 실패하고
    /// 상태는 `Empty`가 됩니다.
    pub fn ingest_bytes(&mut self, raw: &[u8]) -> Result<IngestSummary, AnalyzerError> {
        self.state = DatasetState::Empty;
        match source::split_lines(raw, self.config.max_line_length) {
            Ok(lines) => self.ingest(lines),
            Err(e) => Err(self.ingest_failed(e)),
        }
    }

    /// 리더에서 라인을 모두 읽어 적재합니다.
    pub fn ingest_reader<R: BufRead>(&mut self, reader: R) -> Result<IngestSummary, AnalyzerError> {
        self.state = DatasetState::Empty;
        match source::read_lines(reader, self.config.max_line_length) {
            Ok(lines) => self.ingest(lines),
            Err(e) => Err(self.ingest_failed(e)),
        }
    }

    /// 로그 파일을 읽어 적재합니다.
    ///
    /// 파일 읽기가 끝나기 전의 실패(`InvalidFilePath`, 읽기 중 `Io`)는 적재를
    /// 시작하지 않으므로 기존 데이터셋이 유지됩니다.
    /// 파일을 읽은 뒤의 실패는 [`ingest_bytes`](Self::ingest_bytes)와 같이 상태를
    /// `Empty`로 만듭니다.
    pub async fn ingest_file(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<IngestSummary, AnalyzerError> {
        let path = path.as_ref();
        let raw = match source::read_log_file(path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read log file");
                metrics::counter!(
                    m::ANALYZER_INGEST_FAILURES_TOTAL,
                    m::LABEL_REASON => e.reason_label()
                )
                .increment(1);
                return Err(e);
            }
        };

        debug!(path = %path.display(), bytes = raw.len(), "log file read");
        self.ingest_bytes(&raw)
    }

    fn install(&mut self, lines: Vec<TokenizedLine>) -> IngestSummary {
        self.last_generation += 1;
        let dataset = Dataset::new(self.last_generation, self.config.layout, lines);

        let summary = IngestSummary {
            generation: dataset.generation(),
            lines: dataset.lines().len(),
            incomplete_lines: dataset.incomplete_lines(),
        };

        metrics::counter!(m::ANALYZER_INGESTIONS_TOTAL).increment(1);
        metrics::counter!(m::ANALYZER_LINES_INGESTED_TOTAL).increment(summary.lines as u64);
        info!(
            generation = summary.generation,
            lines = summary.lines,
            incomplete_lines = summary.incomplete_lines,
            format = self.tokenizer.format_name(),
            "log data ingested"
        );

        self.state = DatasetState::Loaded(dataset);
        summary
    }

    fn ingest_failed(&mut self, err: AnalyzerError) -> AnalyzerError {
        self.state = DatasetState::Empty;
        metrics::counter!(
            m::ANALYZER_INGEST_FAILURES_TOTAL,
            m::LABEL_REASON => err.reason_label()
        )
        .increment(1);
        warn!(error = %err, "log ingestion failed");
        err
    }

    // --- 조회 ---

    fn dataset(&self) -> Result<&Dataset, AnalyzerError> {
        match &self.state {
            DatasetState::Loaded(dataset) => Ok(dataset),
            DatasetState::Empty => Err(AnalyzerError::NotLoaded),
        }
    }

    /// 적재된 라인 수
    pub fn line_count(&self) -> Result<usize, AnalyzerError> {
        Ok(self.dataset()?.lines().len())
    }

    /// 토큰화된 라인 목록
    pub fn tokenized_lines(&self) -> Result<&[TokenizedLine], AnalyzerError> {
        Ok(self.dataset()?.lines())
    }

    /// 서로 다른 클라이언트 주소의 개수
    pub fn unique_client_address_count(&self) -> Result<usize, AnalyzerError> {
        Ok(self.dataset()?.table(KeyKind::ClientAddress).distinct_count())
    }

    /// 서로 다른 URL의 개수
    pub fn unique_url_count(&self) -> Result<usize, AnalyzerError> {
        Ok(self.dataset()?.table(KeyKind::Url).distinct_count())
    }

    /// 가장 많이 요청된 URL 상위 `count`개
    ///
    /// 횟수 내림차순, 동률이면 URL 사전순입니다.
    /// 서로 다른 URL이 `count`보다 적으면 있는 만큼만 반환합니다.
    pub fn top_urls(&self, count: i64) -> Result<Vec<String>, AnalyzerError> {
        Ok(into_keys(self.ranked(KeyKind::Url, count)?))
    }

    /// 가장 활동적인 클라이언트 주소 상위 `count`개
    pub fn top_active_addresses(&self, count: i64) -> Result<Vec<String>, AnalyzerError> {
        Ok(into_keys(self.ranked(KeyKind::ClientAddress, count)?))
    }

    /// [`top_urls`](Self::top_urls)와 같은 순서로 횟수까지 반환합니다.
    pub fn top_urls_with_counts(&self, count: i64) -> Result<Vec<RankedEntry>, AnalyzerError> {
        self.ranked(KeyKind::Url, count)
    }

    /// [`top_active_addresses`](Self::top_active_addresses)와 같은 순서로 횟수까지 반환합니다.
    pub fn top_active_addresses_with_counts(
        &self,
        count: i64,
    ) -> Result<Vec<RankedEntry>, AnalyzerError> {
        self.ranked(KeyKind::ClientAddress, count)
    }

    /// 고유 주소 수와 상위 `count`개 URL/주소를 한 번에 계산합니다.
    pub fn summary(&self, count: i64) -> Result<LogSummary, AnalyzerError> {
        let dataset = self.dataset()?;
        let limit = validate_count(count)?;

        let addresses = dataset.table(KeyKind::ClientAddress);
        let urls = dataset.table(KeyKind::Url);

        Ok(LogSummary {
            generation: dataset.generation(),
            lines: dataset.lines().len(),
            unique_client_addresses: addresses.distinct_count(),
            unique_urls: urls.distinct_count(),
            top_urls: urls.ranked(limit),
            top_active_addresses: addresses.ranked(limit),
        })
    }

    fn ranked(&self, kind: KeyKind, count: i64) -> Result<Vec<RankedEntry>, AnalyzerError> {
        let dataset = self.dataset()?;
        let limit = validate_count(count)?;
        Ok(dataset.table(kind).ranked(limit))
    }
}

impl Default for LogAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LogAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogAnalyzer")
            .field("config", &self.config)
            .field("format", &self.tokenizer.format_name())
            .field("generation", &self.generation())
            .finish()
    }
}

/// 상위 N 개수를 검증하여 `usize`로 변환합니다.
fn validate_count(count: i64) -> Result<usize, AnalyzerError> {
    if count < 1 {
        return Err(AnalyzerError::InvalidCount { requested: count });
    }
    Ok(usize::try_from(count).unwrap_or(usize::MAX))
}

fn into_keys(entries: Vec<RankedEntry>) -> Vec<String> {
    entries.into_iter().map(|entry| entry.key).collect()
}

/// 분석기 빌더
pub struct LogAnalyzerBuilder {
    config: AnalyzerConfig,
    tokenizer: Option<Box<dyn LineTokenizer>>,
}

impl LogAnalyzerBuilder {
    /// 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self {
            config: AnalyzerConfig::default(),
            tokenizer: None,
        }
    }

    /// 분석기 설정을 지정합니다.
    pub fn config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }

    /// 토크나이저를 교체합니다. 지정하지 않으면 [`AccessLogTokenizer`]를 사용합니다.
    pub fn tokenizer(mut self, tokenizer: Box<dyn LineTokenizer>) -> Self {
        self.tokenizer = Some(tokenizer);
        self
    }

    /// 설정을 검증하고 분석기를 생성합니다.
    pub fn build(self) -> Result<LogAnalyzer, AnalyzerError> {
        self.config.validate()?;

        Ok(LogAnalyzer {
            config: self.config,
            tokenizer: self
                .tokenizer
                .unwrap_or_else(|| Box::new(AccessLogTokenizer::new())),
            state: DatasetState::Empty,
            last_generation: 0,
        })
    }
}

impl Default for LogAnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FieldLayout;

    const SAMPLE: &[&str] = &[
        r#"10.0.0.1 - - [10/Jul/2018:22:21:28 +0200] "GET /home HTTP/1.1" 200 3574"#,
        r#"10.0.0.2 - - [10/Jul/2018:22:21:29 +0200] "GET /home HTTP/1.1" 200 3574"#,
        r#"10.0.0.1 - admin [10/Jul/2018:22:21:30 +0200] "GET /docs/ HTTP/1.1" 200 1024"#,
        r#"10.0.0.3 - - [10/Jul/2018:22:21:31 +0200] "POST /login HTTP/1.1" 302 0"#,
        r#"10.0.0.1 - - [10/Jul/2018:22:21:32 +0200] "GET /docs/ HTTP/1.1" 200 1024"#,
        r#"10.0.0.2 - - [10/Jul/2018:22:21:33 +0200] "GET /home HTTP/1.1" 304 0"#,
    ];

    fn loaded() -> LogAnalyzer {
        let mut analyzer = LogAnalyzer::new();
        analyzer.ingest(SAMPLE).unwrap();
        analyzer
    }

    #[test]
    fn new_analyzer_is_empty() {
        let analyzer = LogAnalyzer::new();
        assert!(!analyzer.is_loaded());
        assert_eq!(analyzer.generation(), None);
        assert_eq!(analyzer.format_name(), "access_log");
    }

    #[test]
    fn queries_before_ingest_fail_with_not_loaded() {
        let analyzer = LogAnalyzer::new();
        assert!(matches!(
            analyzer.unique_client_address_count(),
            Err(AnalyzerError::NotLoaded)
        ));
        assert!(matches!(analyzer.top_urls(3), Err(AnalyzerError::NotLoaded)));
        assert!(matches!(
            analyzer.top_active_addresses(3),
            Err(AnalyzerError::NotLoaded)
        ));
        assert!(matches!(analyzer.summary(3), Err(AnalyzerError::NotLoaded)));
        assert!(matches!(analyzer.line_count(), Err(AnalyzerError::NotLoaded)));
    }

    #[test]
    fn not_loaded_takes_precedence_over_invalid_count() {
        let analyzer = LogAnalyzer::new();
        assert!(matches!(analyzer.top_urls(0), Err(AnalyzerError::NotLoaded)));
    }

    #[test]
    fn ingest_reports_summary() {
        let mut analyzer = LogAnalyzer::new();
        let summary = analyzer.ingest(SAMPLE).unwrap();
        assert_eq!(
            summary,
            IngestSummary {
                generation: 1,
                lines: 6,
                incomplete_lines: 0,
            }
        );
        assert!(analyzer.is_loaded());
    }

    #[test]
    fn unique_counts() {
        let analyzer = loaded();
        assert_eq!(analyzer.unique_client_address_count().unwrap(), 3);
        assert_eq!(analyzer.unique_url_count().unwrap(), 3);
        assert_eq!(analyzer.line_count().unwrap(), 6);
    }

    #[test]
    fn top_urls_ranked() {
        let analyzer = loaded();
        assert_eq!(analyzer.top_urls(3).unwrap(), ["/home", "/docs/", "/login"]);
        assert_eq!(analyzer.top_urls(1).unwrap(), ["/home"]);
    }

    #[test]
    fn top_active_addresses_ranked() {
        let analyzer = loaded();
        assert_eq!(
            analyzer.top_active_addresses(3).unwrap(),
            ["10.0.0.1", "10.0.0.2", "10.0.0.3"]
        );
    }

    #[test]
    fn top_with_counts() {
        let analyzer = loaded();
        let urls = analyzer.top_urls_with_counts(2).unwrap();
        assert_eq!(urls[0].key, "/home");
        assert_eq!(urls[0].count, 3);
        assert_eq!(urls[1].key, "/docs/");
        assert_eq!(urls[1].count, 2);

        let addresses = analyzer.top_active_addresses_with_counts(1).unwrap();
        assert_eq!(addresses[0].count, 3);
    }

    #[test]
    fn invalid_counts_rejected() {
        let analyzer = loaded();
        for count in [0, -1, i64::MIN] {
            assert!(matches!(
                analyzer.top_urls(count),
                Err(AnalyzerError::InvalidCount { requested }) if requested == count
            ));
            assert!(matches!(
                analyzer.top_active_addresses(count),
                Err(AnalyzerError::InvalidCount { .. })
            ));
        }
    }

    #[test]
    fn oversized_count_returns_all_keys() {
        let analyzer = loaded();
        assert_eq!(analyzer.top_urls(i64::MAX).unwrap().len(), 3);
    }

    #[test]
    fn ranking_is_idempotent() {
        let analyzer = loaded();
        assert_eq!(analyzer.top_urls(3).unwrap(), analyzer.top_urls(3).unwrap());
        assert_eq!(
            analyzer.top_active_addresses(2).unwrap(),
            analyzer.top_active_addresses(2).unwrap()
        );
    }

    #[test]
    fn empty_ingest_is_loaded_with_no_keys() {
        let mut analyzer = LogAnalyzer::new();
        analyzer.ingest(Vec::<String>::new()).unwrap();
        assert!(analyzer.is_loaded());
        assert_eq!(analyzer.unique_client_address_count().unwrap(), 0);
        assert!(analyzer.top_urls(1).unwrap().is_empty());
        assert!(analyzer.top_active_addresses(1).unwrap().is_empty());
    }

    #[test]
    fn reingest_replaces_previous_data() {
        let mut analyzer = loaded();
        assert!(analyzer.top_urls(5).unwrap().contains(&"/login".to_owned()));

        let summary = analyzer
            .ingest([r#"192.168.0.9 - - [t] "GET /only HTTP/1.1" 200 1"#])
            .unwrap();
        assert_eq!(summary.generation, 2);

        assert_eq!(analyzer.unique_client_address_count().unwrap(), 1);
        assert_eq!(analyzer.top_urls(5).unwrap(), ["/only"]);
        assert_eq!(analyzer.top_active_addresses(5).unwrap(), ["192.168.0.9"]);
    }

    #[test]
    fn malformed_lines_are_tolerated() {
        let mut analyzer = LogAnalyzer::new();
        let summary = analyzer
            .ingest([
                "garbage",
                "",
                r#"10.0.0.1 - - [t] "GET /x HTTP/1.1" 200 1"#,
                "[unterminated",
            ])
            .unwrap();
        assert_eq!(summary.lines, 4);
        assert_eq!(summary.incomplete_lines, 3);
        // 빈 라인과 닫히지 않은 마커 라인은 주소 필드가 없음
        assert_eq!(analyzer.unique_client_address_count().unwrap(), 2);
        assert_eq!(analyzer.top_urls(5).unwrap(), ["/x"]);
    }

    #[test]
    fn overlong_line_fails_and_clears_state() {
        let config = crate::config::AnalyzerConfigBuilder::new()
            .max_line_length(16)
            .build()
            .unwrap();
        let mut analyzer = LogAnalyzer::builder().config(config).build().unwrap();
        analyzer.ingest_bytes(b"short\n").unwrap();
        assert!(analyzer.is_loaded());

        let err = analyzer
            .ingest_bytes(b"ok\nthis line is far too long\n")
            .unwrap_err();
        assert!(matches!(err, AnalyzerError::ParseFailure { line: 2, .. }));
        assert!(!analyzer.is_loaded());
        assert!(matches!(analyzer.top_urls(1), Err(AnalyzerError::NotLoaded)));
    }

    #[test]
    fn ingest_accepts_lines_longer_than_max_line_length() {
        let mut analyzer = LogAnalyzer::new();
        let long_url = format!("/{}", "a".repeat(70 * 1024));
        let line = format!(r#"10.0.0.1 - - [t] "GET {long_url} HTTP/1.1" 200 1"#);
        assert!(line.len() > analyzer.config().max_line_length);

        let summary = analyzer.ingest([line.as_str()]).unwrap();
        assert_eq!(summary.lines, 1);
        assert!(analyzer.is_loaded());
        assert_eq!(analyzer.top_urls(1).unwrap(), [long_url]);
    }

    #[test]
    fn overlong_line_in_reader_fails() {
        let config = crate::config::AnalyzerConfigBuilder::new()
            .max_line_length(16)
            .build()
            .unwrap();
        let mut analyzer = LogAnalyzer::builder().config(config).build().unwrap();
        let input: &[u8] = b"this line is far too long\n";
        let err = analyzer.ingest_reader(input).unwrap_err();
        assert!(matches!(err, AnalyzerError::ParseFailure { line: 1, .. }));
        assert!(!analyzer.is_loaded());
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn file_read_error_keeps_dataset() {
        let mut analyzer = loaded();

        // 일반 파일로 보이지만 오프셋 0 읽기가 EIO로 실패
        let err = analyzer.ingest_file("/proc/self/mem").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::Io(_)), "unexpected error: {err}");

        assert!(analyzer.is_loaded());
        assert_eq!(analyzer.generation(), Some(1));
        assert_eq!(analyzer.line_count().unwrap(), SAMPLE.len());
    }

    #[test]
    fn invalid_utf8_bytes_fail_and_clear_state() {
        let mut analyzer = loaded();
        let err = analyzer.ingest_bytes(b"1.1.1.1 ok\n\xff\n").unwrap_err();
        assert!(matches!(err, AnalyzerError::ParseFailure { .. }));
        assert!(!analyzer.is_loaded());

        // 이후 정상 적재로 복구 가능
        let summary = analyzer.ingest_bytes(b"1.1.1.1 ok\n").unwrap();
        assert_eq!(summary.generation, 2);
        assert_eq!(analyzer.unique_client_address_count().unwrap(), 1);
    }

    #[test]
    fn ingest_reader_reads_all_lines() {
        let mut analyzer = LogAnalyzer::new();
        let input = SAMPLE.join("\n");
        let summary = analyzer.ingest_reader(input.as_bytes()).unwrap();
        assert_eq!(summary.lines, SAMPLE.len());
        assert_eq!(analyzer.top_urls(1).unwrap(), ["/home"]);
    }

    #[test]
    fn summary_collects_everything() {
        let analyzer = loaded();
        let summary = analyzer.summary(2).unwrap();
        assert_eq!(summary.generation, 1);
        assert_eq!(summary.lines, 6);
        assert_eq!(summary.unique_client_addresses, 3);
        assert_eq!(summary.unique_urls, 3);
        assert_eq!(summary.top_urls.len(), 2);
        assert_eq!(summary.top_active_addresses[0].key, "10.0.0.1");
        assert!(matches!(
            analyzer.summary(0),
            Err(AnalyzerError::InvalidCount { .. })
        ));
    }

    #[test]
    fn custom_layout_changes_keys() {
        let config = crate::config::AnalyzerConfigBuilder::new()
            .layout(FieldLayout {
                client_field_index: 2,
                request_field_index: 4,
                url_token_index: 0,
            })
            .build()
            .unwrap();
        let mut analyzer = LogAnalyzer::builder().config(config).build().unwrap();
        analyzer.ingest(SAMPLE).unwrap();

        // 세 번째 필드(remote user)와 요청 메서드를 키로 사용
        assert_eq!(analyzer.top_active_addresses(2).unwrap(), ["-", "admin"]);
        assert_eq!(analyzer.top_urls(2).unwrap(), ["GET", "POST"]);
    }

    #[test]
    fn builder_accepts_custom_tokenizer() {
        struct CommaTokenizer;

        impl LineTokenizer for CommaTokenizer {
            fn format_name(&self) -> &'static str {
                "csv"
            }

            fn tokenize(&self, line: &str) -> TokenizedLine {
                TokenizedLine::new(line.split(',').map(str::to_owned).collect())
            }
        }

        let mut analyzer = LogAnalyzer::builder()
            .tokenizer(Box::new(CommaTokenizer))
            .build()
            .unwrap();
        analyzer
            .ingest(["1.1.1.1,a,b,c,GET /csv HTTP/1.1", "2.2.2.2,a,b,c,GET /csv HTTP/1.1"])
            .unwrap();
        assert_eq!(analyzer.format_name(), "csv");
        assert_eq!(analyzer.top_urls(1).unwrap(), ["/csv"]);
        assert_eq!(analyzer.unique_client_address_count().unwrap(), 2);
    }

    #[test]
    fn builder_rejects_invalid_config() {
        let config = AnalyzerConfig {
            top_count: 0,
            ..Default::default()
        };
        assert!(LogAnalyzer::builder().config(config).build().is_err());
    }

    #[test]
    fn analyzer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogAnalyzer>();
    }
}
