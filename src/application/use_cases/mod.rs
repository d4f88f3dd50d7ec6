//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ValidateRecordsUseCase**: 生レコードの検証とエンティティ化
//! - **IngestRecordsUseCase**: 部屋→学生の順でのアップサート
//! - **RunAnalysisUseCase**: 6種類の分析とレポート生成

pub mod ingest_records;
pub mod run_analysis;
pub mod validate_records;
