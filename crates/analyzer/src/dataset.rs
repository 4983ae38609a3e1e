//! 데이터셋 -- 한 번의 적재 결과와 그로부터 파생된 빈도 테이블
//!
//! [`Dataset`]은 토큰화된 라인, 세대(generation) 번호, 그리고 지연 생성되는
//! 두 빈도 테이블을 하나의 소유 구조로 묶습니다. 재적재 시에는 필드 단위로
//! 고치지 않고 구조 전체를 교체하므로, 이전 세대의 캐시가 남을 수 없습니다.

use std::sync::OnceLock;

use httplog_core::metrics as m;
use tracing::debug;

use crate::frequency::FrequencyTable;
use crate::layout::{FieldLayout, KeyKind};
use crate::tokenizer::TokenizedLine;

/// 적재된 로그 데이터셋
#[derive(Debug)]
pub struct Dataset {
    generation: u64,
    layout: FieldLayout,
    lines: Vec<TokenizedLine>,
    client_addresses: OnceLock<FrequencyTable>,
    urls: OnceLock<FrequencyTable>,
}

impl Dataset {
    /// 새 세대의 데이터셋을 생성합니다. 빈도 테이블은 아직 만들지 않습니다.
    pub fn new(generation: u64, layout: FieldLayout, lines: Vec<TokenizedLine>) -> Self {
        Self {
            generation,
            layout,
            lines,
            client_addresses: OnceLock::new(),
            urls: OnceLock::new(),
        }
    }

    /// 세대 번호
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 토큰화된 라인 목록
    pub fn lines(&self) -> &[TokenizedLine] {
        &self.lines
    }

    /// 필드 위치 규약
    pub fn layout(&self) -> &FieldLayout {
        &self.layout
    }

    /// 키 필드를 하나라도 찾지 못한 라인 수
    pub fn incomplete_lines(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| {
                self.layout.client_address(line).is_none()
                    || self.layout.request_url(line).is_none()
            })
            .count()
    }

    /// `kind`에 해당하는 빈도 테이블을 반환합니다.
    ///
    /// 세대당 최초 호출에서만 데이터셋을 순회하며, 이후에는 캐시를 재사용합니다.
    pub fn table(&self, kind: KeyKind) -> &FrequencyTable {
        let cell = match kind {
            KeyKind::ClientAddress => &self.client_addresses,
            KeyKind::Url => &self.urls,
        };

        cell.get_or_init(|| {
            let table = FrequencyTable::build(&self.lines, &self.layout, kind);
            metrics::counter!(
                m::ANALYZER_TABLE_BUILDS_TOTAL,
                m::LABEL_TABLE => kind.as_str()
            )
            .increment(1);
            debug!(
                table = %kind,
                generation = self.generation,
                distinct = table.distinct_count(),
                skipped_lines = table.skipped_lines(),
                "frequency table built"
            );
            table
        })
    }

    /// 빈도 테이블이 이미 만들어졌는지 여부
    pub fn is_table_built(&self, kind: KeyKind) -> bool {
        match kind {
            KeyKind::ClientAddress => self.client_addresses.get().is_some(),
            KeyKind::Url => self.urls.get().is_some(),
        }
    }
}
