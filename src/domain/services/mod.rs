//! # Domain Services
//!
//! エンティティに属さないビジネスロジック
//!
//! - **statistics**: 丸め規則と派生統計量
//! - **table_formatter**: 等幅テキスト表の整形
//! - **report_generator**: レポート生成のインターフェース

pub mod report_generator;
pub mod statistics;
pub mod table_formatter;
