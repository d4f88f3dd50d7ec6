//! Configuration
//!
//! JSON設定ファイルの読み込み。全フィールドにデフォルト値がある。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::application::dto::analysis_options::{AnalysisOptions, InvalidRecordPolicy};
use crate::domain::entities::DEFAULT_QUERY_LIMIT;

pub const DEFAULT_DATABASE_PATH: &str = "student_rooms.sqlite3";
pub const DEFAULT_ROOMS_FILE: &str = "data/rooms.json";
pub const DEFAULT_STUDENTS_FILE: &str = "data/students.json";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// SQLiteファイルのパス（":memory:" でインメモリ）
    pub database_path: String,
    pub rooms_file: String,
    pub students_file: String,
    pub query_limit: usize,
    pub invalid_records: InvalidRecordPolicy,
    /// レポートの後に最適化のアドバイスを表示するか
    pub show_advice: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: DEFAULT_DATABASE_PATH.to_string(),
            rooms_file: DEFAULT_ROOMS_FILE.to_string(),
            students_file: DEFAULT_STUDENTS_FILE.to_string(),
            query_limit: DEFAULT_QUERY_LIMIT,
            invalid_records: InvalidRecordPolicy::default(),
            show_advice: true,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions::new(self.query_limit, self.invalid_records)
    }
}
