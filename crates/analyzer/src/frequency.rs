//! 빈도 테이블 -- 키별 출현 횟수 집계와 상위 N 순위
//!
//! [`FrequencyTable`]은 데이터셋을 한 번 순회하여 만들어지며,
//! 순위는 항상 다음 전순서를 따릅니다.
//!
//! 1. 출현 횟수 내림차순
//! 2. 횟수가 같으면 키의 사전순 오름차순 (삽입 순서와 무관)

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::layout::{FieldLayout, KeyKind};
use crate::tokenizer::TokenizedLine;

/// 순위 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    /// 키 (클라이언트 주소 또는 URL)
    pub key: String,
    /// 출현 횟수
    pub count: u64,
}

/// 키 → 출현 횟수 테이블
///
/// 저장된 횟수는 항상 1 이상입니다.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    kind: KeyKind,
    counts: HashMap<String, u64>,
    /// 키 필드가 없어 건너뛴 라인 수
    skipped_lines: usize,
}

impl FrequencyTable {
    /// 빈 테이블을 생성합니다.
    pub fn new(kind: KeyKind) -> Self {
        Self {
            kind,
            counts: HashMap::new(),
            skipped_lines: 0,
        }
    }

    /// 토큰화된 라인들을 한 번 순회하여 테이블을 만듭니다.
    ///
    /// 키 필드가 없는 라인은 집계에서 제외되고 `skipped_lines`로만 기록됩니다.
    pub fn build(lines: &[TokenizedLine], layout: &FieldLayout, kind: KeyKind) -> Self {
        let mut table = Self::new(kind);
        for line in lines {
            match layout.extract(line, kind) {
                Some(key) => table.record(key),
                None => table.skipped_lines += 1,
            }
        }
        table
    }

    /// 키 출현을 한 번 기록합니다.
    pub fn record(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.to_owned(), 1);
            }
        }
    }

    /// 집계 대상 키 종류
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// 서로 다른 키의 개수
    pub fn distinct_count(&self) -> usize {
        self.counts.len()
    }

    /// 키의 출현 횟수 (없으면 0)
    pub fn count(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// 전체 출현 횟수 합
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// 키 필드가 없어 건너뛴 라인 수
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// 테이블이 비어 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// 상위 `limit`개 항목을 횟수와 함께 반환합니다.
    ///
    /// 반환 길이는 `min(limit, distinct_count())`입니다.
    pub fn ranked(&self, limit: usize) -> Vec<RankedEntry> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
            .collect();

        let limit = limit.min(entries.len());
        if limit == 0 {
            return Vec::new();
        }

        // 전체 정렬 대신 상위 limit개만 분리한 뒤 그 부분만 정렬
        if limit < entries.len() {
            entries.select_nth_unstable_by(limit - 1, rank_order);
            entries.truncate(limit);
        }
        entries.sort_unstable_by(rank_order);

        entries
            .into_iter()
            .map(|(key, count)| RankedEntry {
                key: key.to_owned(),
                count,
            })
            .collect()
    }

    /// 상위 `limit`개 키만 반환합니다.
    pub fn top_keys(&self, limit: usize) -> Vec<String> {
        self.ranked(limit).into_iter().map(|e| e.key).collect()
    }
}

/// 횟수 내림차순, 동률이면 키 오름차순
fn rank_order(lhs: &(&str, u64), rhs: &(&str, u64)) -> Ordering {
    rhs.1.cmp(&lhs.1).then_with(|| lhs.0.cmp(rhs.0))
}
