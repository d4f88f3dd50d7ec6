//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出して取り込みと分析を起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ストアの取得と解放を受け持つ
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **workflow**: ワークフロー全体のオーケストレーション

pub mod cli;
pub mod workflow;

pub use cli::Args;
pub use workflow::RoomAnalysisWorkflow;
