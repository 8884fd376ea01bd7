/*!
 * Common test utilities for the reflow-mobile test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A generated article with every kind of line the engine handles
pub const SAMPLE_ARTICLE: &str = "## 모바일 글쓰기 안내

이 글은 모바일 환경에서 긴 글을 편하게 읽을 수 있도록 문장을 적절히 나누는 방법을 설명합니다. **핵심**만 간단히 정리했습니다.


### 준비물
- 스마트폰 또는 태블릿처럼 화면이 작은 기기에서 글을 확인할 수 있는 환경
1. 첫 번째로 글의 주제를 정하고 독자가 누구인지 분명하게 적어 둡니다
가. 제목은 짧고 분명하게 쓰되 핵심 단어를 앞쪽에 배치하는 것이 좋습니다
1단계: 초안을 작성하고 문단마다 하나의 생각만 담도록 다시 정리합니다
항목: 값 | 비고: 설명을 적는 표 형태의 줄은 길더라도 그대로 둡니다

마지막으로 완성된 글을 여러 번 소리 내어 읽어 보면서 어색한 부분을 고치고, 문장이 너무 길지 않은지 확인합니다.
";

/// Routes engine logs to the test output; safe to call from every test
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Creates the sample article in the specified directory
pub fn create_test_article(dir: &Path, filename: &str) -> Result<PathBuf> {
    create_test_file(dir, filename, SAMPLE_ARTICLE)
}

/// Character count of a string
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Non-whitespace characters of a string, in order
pub fn visible(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
