//! 에러 타입 -- 도메인별 에러 정의

/// httplog 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum HttplogError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// 로그 분석 에러
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

/// 로그 분석 에러
///
/// 분석기 크레이트의 세부 에러가 크레이트 경계를 넘을 때 사용하는 요약 형태입니다.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// 로그가 로드되지 않은 상태에서 조회
    #[error("no log data loaded")]
    NotLoaded,

    /// 잘못된 조회 개수
    #[error("invalid count: {0}")]
    InvalidCount(String),

    /// 로그 입력을 해석할 수 없음
    #[error("ingestion failed: {0}")]
    Ingest(String),

    /// 입력 파일 경로 오류
    #[error("invalid input path: {0}")]
    InvalidPath(String),
}
