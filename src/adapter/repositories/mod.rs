//! Repository Implementations
//!
//! ファイルベースのRecordSource実装

pub mod json_record_source;
