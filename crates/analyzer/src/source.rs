//! 입력 소스 -- 파일, 바이트 버퍼, 리더에서 로그 라인 읽기
//!
//! 이 모듈은 입력 표현 수준의 검증만 담당합니다.
//! - UTF-8이 아닌 라인, 최대 길이를 넘는 라인: [`AnalyzerError::ParseFailure`]
//! - 존재하지 않거나 일반 파일이 아닌 경로: [`AnalyzerError::InvalidFilePath`]
//!
//! 라인 내용의 형식은 검사하지 않습니다.

use std::io::BufRead;
use std::path::Path;

use crate::error::AnalyzerError;

/// 로그 파일 전체를 읽습니다.
///
/// 경로가 없거나 디렉토리 등 일반 파일이 아니면 `InvalidFilePath`를 반환합니다.
pub async fn read_log_file(path: &Path) -> Result<Vec<u8>, AnalyzerError> {
    let invalid_path = || AnalyzerError::InvalidFilePath {
        path: path.display().to_string(),
    };

    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(invalid_path()),
        Err(e) => return Err(AnalyzerError::Io(e)),
    };

    if !metadata.is_file() {
        return Err(invalid_path());
    }

    Ok(tokio::fs::read(path).await?)
}

/// 바이트 버퍼를 라인 단위로 나눕니다.
///
/// `\n`으로 구분하며 라인 끝의 `\r`은 제거합니다.
/// 마지막 개행 뒤의 빈 조각은 라인으로 세지 않습니다.
pub fn split_lines(raw: &[u8], max_line_length: usize) -> Result<Vec<&str>, AnalyzerError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    let body = raw.strip_suffix(b"\n").unwrap_or(raw);

    body.split(|b| *b == b'\n')
        .enumerate()
        .map(|(idx, bytes)| {
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            check_length(idx + 1, bytes.len(), max_line_length)?;
            std::str::from_utf8(bytes).map_err(|e| AnalyzerError::ParseFailure {
                line: idx + 1,
                reason: format!("invalid UTF-8: {e}"),
            })
        })
        .collect()
}

/// 리더에서 라인을 모두 읽습니다.
///
/// 읽기 실패(UTF-8 오류 포함)는 해당 라인 번호와 함께 `ParseFailure`로 보고합니다.
pub fn read_lines<R: BufRead>(
    reader: R,
    max_line_length: usize,
) -> Result<Vec<String>, AnalyzerError> {
    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            let line = line.map_err(|e| AnalyzerError::ParseFailure {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            check_length(idx + 1, line.len(), max_line_length)?;
            Ok(line)
        })
        .collect()
}

/// 라인 길이가 상한을 넘으면 `ParseFailure`를 반환합니다.
pub(crate) fn check_length(line: usize, length: usize, max: usize) -> Result<(), AnalyzerError> {
    if length > max {
        return Err(AnalyzerError::ParseFailure {
            line,
            reason: format!("line too long: {length} bytes (max: {max})"),
        });
    }
    Ok(())
}
