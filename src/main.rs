//! Roomstat - Room Occupancy Analyzer
//!
//! 部屋・学生データをSQLiteに取り込み、分析レポートを表示

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use roomstat::adapter::config::Config;
use roomstat::driver::{Args, RoomAnalysisWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (file values first, then CLI overrides)
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = args.apply_to(config);

    let workflow = RoomAnalysisWorkflow::new(config);
    if args.preview {
        workflow.preview()?;
    } else {
        workflow.execute()?;
    }

    Ok(())
}
