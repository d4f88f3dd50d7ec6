//! # Analysis Options DTO
//!
//! 検証・分析の実行時オプション

use serde::{Deserialize, Serialize};

use crate::domain::entities::DEFAULT_QUERY_LIMIT;

/// 不変条件に違反したレコードの扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvalidRecordPolicy {
    /// 最初の違反で取り込み全体を中止する
    #[default]
    Abort,
    /// 違反したレコードだけを除外して続行する
    Skip,
}

/// 分析オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// 上位N件クエリの件数
    pub query_limit: usize,
    /// 不正レコードの扱い
    pub invalid_records: InvalidRecordPolicy,
}

impl AnalysisOptions {
    /// 新しい分析オプションを作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use roomstat::application::dto::analysis_options::{AnalysisOptions, InvalidRecordPolicy};
    ///
    /// let options = AnalysisOptions::new(5, InvalidRecordPolicy::Skip);
    ///
    /// assert_eq!(options.query_limit, 5);
    /// assert_eq!(options.invalid_records, InvalidRecordPolicy::Skip);
    /// ```
    pub fn new(query_limit: usize, invalid_records: InvalidRecordPolicy) -> Self {
        Self {
            query_limit,
            invalid_records,
        }
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY_LIMIT, InvalidRecordPolicy::default())
    }
}
