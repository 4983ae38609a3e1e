//! 설정 관리 -- httplog.toml 파싱 및 런타임 설정
//!
//! [`HttplogConfig`]는 모든 모듈의 설정을 담는 최상위 구조체입니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`HTTPLOG_ANALYSIS_TOP_COUNT=5` 형식)
//! 3. 설정 파일 (`httplog.toml`)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # async fn example() -> Result<(), httplog_core::error::HttplogError> {
//! use httplog_core::config::HttplogConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = HttplogConfig::load("httplog.toml").await?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = HttplogConfig::parse("[general]\nlog_level = \"debug\"")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, HttplogError};

/// 라인 최대 길이 상한 (16 MiB)
pub const MAX_LINE_LENGTH_LIMIT: usize = 16 * 1024 * 1024;

/// httplog 통합 설정
///
/// `httplog.toml` 파일의 최상위 구조를 나타냅니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HttplogConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 로그 분석 설정
    #[serde(default)]
    pub analysis: LogAnalysisConfig,
}

impl HttplogConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    ///
    /// 설정 로딩 순서:
    /// 1. TOML 파일 파싱
    /// 2. 환경변수 오버라이드 적용
    /// 3. 유효성 검증
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, HttplogError> {
        let mut config = Self::from_file(path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 기본값에 환경변수 오버라이드만 적용한 설정을 생성합니다.
    ///
    /// 설정 파일 없이 실행할 때 사용합니다.
    pub fn from_env() -> Result<Self, HttplogError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, HttplogError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                HttplogError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                HttplogError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, HttplogError> {
        toml::from_str(toml_str).map_err(|e| {
            HttplogError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `HTTPLOG_{SECTION}_{FIELD}`
    /// 예: `HTTPLOG_GENERAL_LOG_LEVEL=debug`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "HTTPLOG_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "HTTPLOG_GENERAL_LOG_FORMAT");

        // Analysis
        override_usize(
            &mut self.analysis.client_field_index,
            "HTTPLOG_ANALYSIS_CLIENT_FIELD_INDEX",
        );
        override_usize(
            &mut self.analysis.request_field_index,
            "HTTPLOG_ANALYSIS_REQUEST_FIELD_INDEX",
        );
        override_usize(
            &mut self.analysis.url_token_index,
            "HTTPLOG_ANALYSIS_URL_TOKEN_INDEX",
        );
        override_usize(
            &mut self.analysis.max_line_length,
            "HTTPLOG_ANALYSIS_MAX_LINE_LENGTH",
        );
        override_usize(&mut self.analysis.top_count, "HTTPLOG_ANALYSIS_TOP_COUNT");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), HttplogError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        if self.analysis.max_line_length == 0
            || self.analysis.max_line_length > MAX_LINE_LENGTH_LIMIT
        {
            return Err(ConfigError::InvalidValue {
                field: "analysis.max_line_length".to_owned(),
                reason: format!("must be 1-{}", MAX_LINE_LENGTH_LIMIT),
            }
            .into());
        }

        if self.analysis.top_count == 0 {
            return Err(ConfigError::InvalidValue {
                field: "analysis.top_count".to_owned(),
                reason: "must be at least 1".to_owned(),
            }
            .into());
        }

        // 클라이언트 주소와 요청 라인이 같은 필드를 가리키면 URL 추출이 무의미해짐
        if self.analysis.client_field_index == self.analysis.request_field_index {
            return Err(ConfigError::InvalidValue {
                field: "analysis.request_field_index".to_owned(),
                reason: "must differ from client_field_index".to_owned(),
            }
            .into());
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 로그 분석 설정
///
/// 필드 인덱스는 토큰화된 라인 기준입니다 (0부터 시작).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogAnalysisConfig {
    /// 클라이언트 주소 필드 인덱스
    pub client_field_index: usize,
    /// 요청 라인 (`METHOD PATH PROTOCOL`) 필드 인덱스
    pub request_field_index: usize,
    /// 요청 라인 안에서 URL이 위치한 공백 구분 토큰 인덱스
    pub url_token_index: usize,
    /// 허용되는 최대 라인 길이 (바이트)
    pub max_line_length: usize,
    /// 상위 N 조회 기본 개수
    pub top_count: usize,
}

impl Default for LogAnalysisConfig {
    fn default() -> Self {
        Self {
            client_field_index: 0,
            request_field_index: 4,
            url_token_index: 1,
            max_line_length: 64 * 1024, // 64KB
            top_count: 3,
        }
    }
}

// --- 환경변수 오버라이드 헬퍼 ---

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_usize(target: &mut usize, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.parse::<usize>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse usize from env var, ignoring"
            ),
        }
    }
}
