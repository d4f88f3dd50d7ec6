//! JSON Record Source Implementation
//!
//! RecordSourceのJSON実装（部屋・学生をそれぞれJSON配列ファイルから読み込む）

use log::info;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;

use crate::domain::entities::room::RoomRecord;
use crate::domain::entities::student::StudentRecord;
use crate::domain::errors::{AnalyzerError, AnalyzerResult};
use crate::domain::repositories::record_source::RecordSource;

/// JSONファイルベースのレコードソース
pub struct JsonRecordSource {
    rooms_path: String,
    students_path: String,
}

impl JsonRecordSource {
    pub fn new(rooms_path: impl Into<String>, students_path: impl Into<String>) -> Self {
        Self {
            rooms_path: rooms_path.into(),
            students_path: students_path.into(),
        }
    }

    /// ファイルを読み込み、トップレベルの配列をレコードに変換
    ///
    /// 1件でも形が合わなければファイル全体を拒否する
    fn load_array<T: DeserializeOwned>(path: &str) -> AnalyzerResult<Vec<T>> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .map_err(|e| AnalyzerError::malformed(path, format!("failed to read file: {}", e)))?;

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| AnalyzerError::malformed(path, format!("invalid JSON: {}", e)))?;

        let Value::Array(items) = value else {
            return Err(AnalyzerError::malformed(path, "expected a JSON array"));
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                serde_json::from_value(item).map_err(|e| {
                    AnalyzerError::malformed(path, format!("record {}: {}", index, e))
                })
            })
            .collect::<AnalyzerResult<Vec<T>>>()?;

        info!("Loaded {} records from {}", records.len(), path);
        Ok(records)
    }
}

impl RecordSource for JsonRecordSource {
    fn load_rooms(&self) -> AnalyzerResult<Vec<RoomRecord>> {
        Self::load_array(&self.rooms_path)
    }

    fn load_students(&self) -> AnalyzerResult<Vec<StudentRecord>> {
        Self::load_array(&self.students_path)
    }
}
