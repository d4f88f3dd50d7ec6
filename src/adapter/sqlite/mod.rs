//! SQLite Adapter
//!
//! ストアの起動・スキーマ作成と、Domain層のRepository / クエリtraitのSQLite実装

pub mod analytics_query_service;
pub mod room_repository;
pub mod store;
pub mod student_repository;
