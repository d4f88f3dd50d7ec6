//! SQLite Store
//!
//! ストアハンドルの取得・解放とスキーマ作成

use log::info;
use rusqlite::Connection;

use crate::domain::entities::room::{MAX_BUILDING_LENGTH, MAX_ROOM_NUMBER_LENGTH};
use crate::domain::entities::student::MAX_NAME_LENGTH;
use crate::domain::errors::{AnalyzerError, AnalyzerResult};

pub const IN_MEMORY_PATH: &str = ":memory:";

/// 部屋・学生テーブルとインデックス（何度実行しても同じ結果になる）
fn schema_sql() -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS rooms (
            id INTEGER PRIMARY KEY,
            number VARCHAR({number_len}) NOT NULL,
            building VARCHAR({building_len}) NOT NULL,
            capacity INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_rooms_building ON rooms(building);
        CREATE INDEX IF NOT EXISTS idx_rooms_capacity ON rooms(capacity);

        CREATE TABLE IF NOT EXISTS students (
            id INTEGER PRIMARY KEY,
            name VARCHAR({name_len}) NOT NULL,
            age INTEGER NOT NULL,
            sex CHAR(1) NOT NULL,
            room_id INTEGER NOT NULL,
            FOREIGN KEY (room_id) REFERENCES rooms(id)
        );
        CREATE INDEX IF NOT EXISTS idx_students_room_id ON students(room_id);
        CREATE INDEX IF NOT EXISTS idx_students_age ON students(age);
        CREATE INDEX IF NOT EXISTS idx_students_sex ON students(sex);
        CREATE INDEX IF NOT EXISTS idx_students_age_sex ON students(age, sex);",
        number_len = MAX_ROOM_NUMBER_LENGTH,
        building_len = MAX_BUILDING_LENGTH,
        name_len = MAX_NAME_LENGTH,
    )
}

/// SQLiteストア
///
/// 1回の実行につき1度だけ開き、最後に `close` で解放する。
/// 同時アクセスは想定しない（リポジトリとクエリサービスは同じ接続を順番に使う）。
pub struct SqliteStore {
    conn: Connection,
    path: String,
}

impl SqliteStore {
    /// ストアを開き、外部キー制約を有効にする
    pub fn open(path: &str) -> AnalyzerResult<Self> {
        let opened = if path == IN_MEMORY_PATH {
            Connection::open_in_memory()
        } else {
            let expanded = shellexpand::tilde(path);
            Connection::open(expanded.as_ref())
        };
        let conn = opened.map_err(AnalyzerError::persistence)?;

        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(AnalyzerError::persistence)?;

        info!("Opened SQLite store at {}", path);

        Ok(Self {
            conn,
            path: path.to_string(),
        })
    }

    pub fn open_in_memory() -> AnalyzerResult<Self> {
        Self::open(IN_MEMORY_PATH)
    }

    /// テーブルとインデックスを作成
    pub fn create_schema(&self) -> AnalyzerResult<()> {
        self.conn
            .execute_batch(&schema_sql())
            .map_err(AnalyzerError::persistence)?;
        info!("Database schema created");
        Ok(())
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// ストアハンドルを解放
    pub fn close(self) -> AnalyzerResult<()> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, e)| AnalyzerError::persistence(e))?;
        info!("Closed SQLite store at {}", path);
        Ok(())
    }
}
