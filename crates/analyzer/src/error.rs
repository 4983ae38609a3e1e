//! 로그 분석기 에러 타입
//!
//! [`AnalyzerError`]는 분석기 내부에서 발생하는 모든 에러를 표현합니다.
//! `From<AnalyzerError> for HttplogError` 변환이 구현되어 있어
//! 상위 레이어에서 `?` 연산자로 자연스럽게 전파할 수 있습니다.
//!
//! 잘못된 형식의 로그 라인은 에러가 아닙니다. 토크나이저는 어떤 라인이든
//! 필드 목록을 만들어내므로, [`AnalyzerError::ParseFailure`]는 입력 표현 자체를
//! 읽을 수 없을 때(UTF-8 아님, 라인 길이 초과 등)로 한정됩니다.

use httplog_core::error::{AnalysisError, ConfigError, HttplogError};

/// 로그 분석기 도메인 에러
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// 적재된 로그가 없는 상태에서 조회
    #[error("no log data loaded: call ingest before querying")]
    NotLoaded,

    /// 상위 N 조회 개수가 1 미만
    #[error("count must be at least 1, got {requested}")]
    InvalidCount {
        /// 요청된 개수
        requested: i64,
    },

    /// 입력 표현을 해석할 수 없어 적재 실패
    #[error("parse failure at line {line}: {reason}")]
    ParseFailure {
        /// 실패한 라인 번호 (1부터 시작)
        line: usize,
        /// 실패 사유
        reason: String,
    },

    /// 입력 파일 경로가 없거나 일반 파일이 아님
    #[error("invalid file path: {path}")]
    InvalidFilePath {
        /// 요청된 경로
        path: String,
    },

    /// 설정 에러
    #[error("config error: {field}: {reason}")]
    Config {
        /// 설정 필드명
        field: String,
        /// 에러 사유
        reason: String,
    },

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalyzerError {
    /// 메트릭 레이블로 사용할 실패 사유 이름을 반환합니다.
    pub(crate) fn reason_label(&self) -> &'static str {
        match self {
            Self::NotLoaded => "not_loaded",
            Self::InvalidCount { .. } => "invalid_count",
            Self::ParseFailure { .. } => "parse_failure",
            Self::InvalidFilePath { .. } => "invalid_path",
            Self::Config { .. } => "config",
            Self::Io(_) => "io",
        }
    }
}

impl From<AnalyzerError> for HttplogError {
    fn from(err: AnalyzerError) -> Self {
        match err {
            AnalyzerError::NotLoaded => HttplogError::Analysis(AnalysisError::NotLoaded),
            AnalyzerError::InvalidCount { .. } => {
                HttplogError::Analysis(AnalysisError::InvalidCount(err.to_string()))
            }
            AnalyzerError::ParseFailure { .. } => {
                HttplogError::Analysis(AnalysisError::Ingest(err.to_string()))
            }
            AnalyzerError::InvalidFilePath { path } => {
                HttplogError::Analysis(AnalysisError::InvalidPath(path))
            }
            AnalyzerError::Config { field, reason } => {
                HttplogError::Config(ConfigError::InvalidValue { field, reason })
            }
            AnalyzerError::Io(e) => HttplogError::Io(e),
        }
    }
}
