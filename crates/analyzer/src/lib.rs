#![doc = include_str!("../README.md")]
//!
//! # 모듈 구성
//!
//! - [`tokenizer`]: 라인을 필드 목록으로 나누는 토크나이저 (액세스 로그 상태 기계)
//! - [`layout`]: 토큰화된 라인에서 클라이언트 주소/URL 키를 찾는 위치 규약
//! - [`frequency`]: 키별 출현 횟수 집계와 상위 N 순위
//! - [`dataset`]: 적재 세대와 지연 생성되는 빈도 테이블
//! - [`source`]: 파일, 바이트 버퍼, 리더 입력
//! - [`analyzer`]: 적재/조회 진입점 (`LogAnalyzer`)
//! - [`config`]: 분석기 설정 (core 설정 확장)
//! - [`error`]: 도메인 에러 타입
//!
//! # 아키텍처
//!
//! ```text
//! source -> LineTokenizer -> Dataset(generation) -> FrequencyTable -> top N
//!   |            |                 |                    |
//! file/bytes  state machine   lazy per-kind cache   count desc, key asc
//! ```

pub mod analyzer;
pub mod config;
pub mod dataset;
pub mod error;
pub mod frequency;
pub mod layout;
pub mod source;
pub mod tokenizer;

// --- 주요 타입 re-export ---

// 분석기
pub use analyzer::{IngestSummary, LogAnalyzer, LogAnalyzerBuilder, LogSummary};

// 설정
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};

// 에러
pub use error::AnalyzerError;

// 토크나이저
pub use tokenizer::{AccessLogTokenizer, LineTokenizer, TokenizedLine};

// 집계
pub use frequency::{FrequencyTable, RankedEntry};
pub use layout::{FieldLayout, KeyKind};
