//! 로그 분석기 설정
//!
//! [`AnalyzerConfig`]는 core의 [`LogAnalysisConfig`](httplog_core::config::LogAnalysisConfig)를
//! 기반으로 분석기 전용 설정을 제공합니다.
//!
//! # 사용 예시
//! ```
//! use httplog_core::config::HttplogConfig;
//! use httplog_analyzer::config::AnalyzerConfig;
//!
//! let core_config = HttplogConfig::default();
//! let config = AnalyzerConfig::from_core(&core_config.analysis);
//! assert_eq!(config.top_count, 3);
//! ```

use serde::{Deserialize, Serialize};

use httplog_core::config::MAX_LINE_LENGTH_LIMIT;

use crate::error::AnalyzerError;
use crate::layout::FieldLayout;

/// 로그 분석기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// 집계 키 위치 규약
    pub layout: FieldLayout,
    /// 허용되는 최대 라인 길이 (바이트)
    pub max_line_length: usize,
    /// 상위 N 조회 기본 개수
    pub top_count: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            layout: FieldLayout::default(),
            max_line_length: 64 * 1024, // 64KB
            top_count: 3,
        }
    }
}

impl AnalyzerConfig {
    /// core의 `LogAnalysisConfig`에서 분석기 설정을 생성합니다.
    pub fn from_core(core: &httplog_core::config::LogAnalysisConfig) -> Self {
        Self {
            layout: FieldLayout {
                client_field_index: core.client_field_index,
                request_field_index: core.request_field_index,
                url_token_index: core.url_token_index,
            },
            max_line_length: core.max_line_length,
            top_count: core.top_count,
        }
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_line_length == 0 || self.max_line_length > MAX_LINE_LENGTH_LIMIT {
            return Err(AnalyzerError::Config {
                field: "max_line_length".to_owned(),
                reason: format!("must be 1-{}", MAX_LINE_LENGTH_LIMIT),
            });
        }

        if self.top_count == 0 {
            return Err(AnalyzerError::Config {
                field: "top_count".to_owned(),
                reason: "must be at least 1".to_owned(),
            });
        }

        if self.layout.client_field_index == self.layout.request_field_index {
            return Err(AnalyzerError::Config {
                field: "layout.request_field_index".to_owned(),
                reason: "must differ from client_field_index".to_owned(),
            });
        }

        Ok(())
    }
}

/// 분석기 설정 빌더
#[derive(Default)]
pub struct AnalyzerConfigBuilder {
    config: AnalyzerConfig,
}

impl AnalyzerConfigBuilder {
    /// 새 빌더를 생성합니다.
    pub fn new() -> Self {
        Self::default()
    }

    /// 필드 위치 규약을 설정합니다.
    pub fn layout(mut self, layout: FieldLayout) -> Self {
        self.config.layout = layout;
        self
    }

    /// 클라이언트 주소 필드 인덱스를 설정합니다.
    pub fn client_field_index(mut self, index: usize) -> Self {
        self.config.layout.client_field_index = index;
        self
    }

    /// 요청 라인 필드 인덱스를 설정합니다.
    pub fn request_field_index(mut self, index: usize) -> Self {
        self.config.layout.request_field_index = index;
        self
    }

    /// 요청 라인 내 URL 토큰 인덱스를 설정합니다.
    pub fn url_token_index(mut self, index: usize) -> Self {
        self.config.layout.url_token_index = index;
        self
    }

    /// 최대 라인 길이를 설정합니다.
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.config.max_line_length = length;
        self
    }

    /// 상위 N 기본 개수를 설정합니다.
    pub fn top_count(mut self, count: usize) -> Self {
        self.config.top_count = count;
        self
    }

    /// 설정을 검증하고 `AnalyzerConfig`를 생성합니다.
    pub fn build(self) -> Result<AnalyzerConfig, AnalyzerError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
