//! Adapter Layer
//!
//! 外部システム（SQLite, JSONファイル, コンソール, 設定ファイル）との統合

pub mod config;
pub mod reports;
pub mod repositories;
pub mod sqlite;
