//! # Domain Errors
//!
//! エラー分類
//!
//! - **ValidationError**: エンティティの不変条件違反（生成時に発生）
//! - **AnalyzerError**: 実行全体で伝播する4種類のエラー（検証・入力・永続化・クエリ）

use thiserror::Error;

use super::entities::codes::Building;
use super::entities::room::{MAX_CAPACITY, MIN_CAPACITY};
use super::entities::student::{MAX_AGE, MIN_AGE};

/// ストア由来のエラーを保持するための型
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 不変条件違反
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity} ID must be positive (got {id})")]
    NonPositiveId { entity: &'static str, id: i64 },

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("{field} cannot exceed {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("Building must be one of: {codes} (got {0:?})", codes = Building::code_list())]
    InvalidBuilding(String),

    #[error("Student sex must be 'M' or 'F' (got {0:?})")]
    InvalidSex(String),

    #[error("Student age must be between {lo} and {hi} (got {0})", lo = MIN_AGE, hi = MAX_AGE)]
    AgeOutOfRange(i64),

    #[error("Room capacity must be between {lo} and {hi} (got {0})", lo = MIN_CAPACITY, hi = MAX_CAPACITY)]
    CapacityOutOfRange(i64),
}

/// 実行全体で伝播するエラー
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// エンティティの不変条件違反
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// 入力データがレコードの配列として解釈できない、または必須フィールドが欠けている
    #[error("malformed input in {source_name}: {message}")]
    MalformedInput {
        source_name: String,
        message: String,
    },

    /// ストアが操作を拒否した（制約違反・接続断など）
    #[error("persistence failed: {0}")]
    Persistence(#[source] BoxError),

    /// クエリを実行できなかった
    #[error("query failed: {0}")]
    Query(#[source] BoxError),
}

impl AnalyzerError {
    pub fn malformed(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub fn persistence(err: impl Into<BoxError>) -> Self {
        Self::Persistence(err.into())
    }

    pub fn query(err: impl Into<BoxError>) -> Self {
        Self::Query(err.into())
    }
}

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
