//! Report Adapters
//!
//! コンソール向けのレポート出力

pub mod console_report_generator;
pub mod dataset_preview;
pub mod optimization_advisor;
