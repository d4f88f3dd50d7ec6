//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::Config;
use crate::application::dto::analysis_options::InvalidRecordPolicy;

/// 部屋・学生データを取り込み、分析レポートを表示するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "roomstat")]
#[command(about = "Load room and student records into SQLite and print analytical reports", long_about = None)]
pub struct Args {
    /// Config file path (defaults are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Rooms JSON file
    #[arg(long)]
    pub rooms: Option<String>,

    /// Students JSON file
    #[arg(long)]
    pub students: Option<String>,

    /// SQLite database path (":memory:" for an in-memory store)
    #[arg(long)]
    pub database: Option<String>,

    /// Row limit for the top-N reports
    #[arg(long)]
    pub limit: Option<usize>,

    /// Skip records that fail validation instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Do not print optimization advice
    #[arg(long)]
    pub no_advice: bool,

    /// Only preview the validated records (the store is not touched)
    #[arg(long)]
    pub preview: bool,
}

impl Args {
    /// 指定されたフラグで設定を上書き
    pub fn apply_to(&self, mut config: Config) -> Config {
        if let Some(rooms) = &self.rooms {
            config.rooms_file = rooms.clone();
        }
        if let Some(students) = &self.students {
            config.students_file = students.clone();
        }
        if let Some(database) = &self.database {
            config.database_path = database.clone();
        }
        if let Some(limit) = self.limit {
            config.query_limit = limit;
        }
        if self.skip_invalid {
            config.invalid_records = InvalidRecordPolicy::Skip;
        }
        if self.no_advice {
            config.show_advice = false;
        }
        config
    }
}
