//! # Record Source Trait
//!
//! 外部ファイルからの生レコード読み込みを抽象化

use crate::domain::entities::room::RoomRecord;
use crate::domain::entities::student::StudentRecord;
use crate::domain::errors::AnalyzerResult;

/// レコードソース
///
/// 構造チェック（配列であること、必須フィールドがあること）のみを担当し、
/// 不変条件の検証はエンティティの生成時に行う
pub trait RecordSource {
    /// 部屋レコードを読み込む
    ///
    /// # Errors
    ///
    /// 入力がレコードの配列でない、または必須フィールドが欠けている場合に
    /// `AnalyzerError::MalformedInput` を返す（部分的な読み込みは行わない）
    fn load_rooms(&self) -> AnalyzerResult<Vec<RoomRecord>>;

    /// 学生レコードを読み込む
    ///
    /// # Errors
    ///
    /// `load_rooms` と同じ
    fn load_students(&self) -> AnalyzerResult<Vec<StudentRecord>>;
}
