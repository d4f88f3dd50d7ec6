//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use log::{error, info};

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::reports::console_report_generator::ConsoleReportGenerator;
use crate::adapter::reports::dataset_preview::DatasetPreview;
use crate::adapter::reports::optimization_advisor::OptimizationAdvisor;
use crate::adapter::repositories::json_record_source::JsonRecordSource;
use crate::adapter::sqlite::analytics_query_service::SqliteAnalyticsQueryService;
use crate::adapter::sqlite::room_repository::SqliteRoomRepository;
use crate::adapter::sqlite::store::SqliteStore;
use crate::adapter::sqlite::student_repository::SqliteStudentRepository;
use crate::application::use_cases::ingest_records::{IngestRecordsUseCase, IngestSummary};
use crate::application::use_cases::run_analysis::{AnalysisReport, RunAnalysisUseCase};
use crate::application::use_cases::validate_records::{RejectedRecord, ValidateRecordsUseCase};
use crate::domain::errors::AnalyzerResult;

/// 1回の実行結果
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    pub rejected: Vec<RejectedRecord>,
    pub ingest: IngestSummary,
    pub reports: Vec<AnalysisReport>,
    /// `show_advice` が無効な場合は `None`
    pub advice: Option<String>,
}

/// Room Analysis Workflow
pub struct RoomAnalysisWorkflow {
    config: Config,
    validate_use_case: ValidateRecordsUseCase<JsonRecordSource>,
    report_generator: Arc<ConsoleReportGenerator>,
}

impl RoomAnalysisWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        let record_source = Arc::new(JsonRecordSource::new(
            config.rooms_file.clone(),
            config.students_file.clone(),
        ));
        let validate_use_case = ValidateRecordsUseCase::new(record_source);

        Self {
            config,
            validate_use_case,
            report_generator: Arc::new(ConsoleReportGenerator::new()),
        }
    }

    /// 取り込みと分析を実行
    ///
    /// ストアは成功・失敗にかかわらず、結果を返す前に必ず閉じる
    pub fn execute(&self) -> AnalyzerResult<AnalysisRun> {
        info!("Starting room analysis...");

        println!("✓ Using configuration:");
        println!("  Database: {}", self.config.database_path);
        println!("  Rooms: {}", self.config.rooms_file);
        println!("  Students: {}", self.config.students_file);

        let store = SqliteStore::open(&self.config.database_path)?;
        let outcome = self.run(&store);
        let closed = store.close();
        let run = settle(outcome, closed)?;

        println!("✓ Analysis complete!");
        Ok(run)
    }

    /// 検証済みレコードのプレビューのみを表示（ストアには触れない）
    pub fn preview(&self) -> AnalyzerResult<String> {
        info!("Previewing records...");

        let options = self.config.analysis_options();
        let validated = self.validate_use_case.execute(options.invalid_records)?;
        let text = DatasetPreview::new().render(&validated.rooms, &validated.students);
        println!("{}", text);

        println!("✓ Preview complete!");
        Ok(text)
    }

    fn run(&self, store: &SqliteStore) -> AnalyzerResult<AnalysisRun> {
        store.create_schema()?;

        // 検証
        let options = self.config.analysis_options();
        let validated = self.validate_use_case.execute(options.invalid_records)?;
        println!(
            "✓ Validated {} rooms and {} students",
            validated.rooms.len(),
            validated.students.len()
        );
        for rejected in &validated.rejected {
            println!(
                "  Skipped {} {}: {}",
                rejected.kind, rejected.id, rejected.error
            );
        }

        // 取り込み（部屋→学生）
        let conn = store.connection();
        let ingest_use_case = IngestRecordsUseCase::new(
            Arc::new(SqliteRoomRepository::new(conn)),
            Arc::new(SqliteStudentRepository::new(conn)),
        );
        let ingest = ingest_use_case.execute(&validated.rooms, &validated.students)?;
        println!(
            "✓ Upserted {} rooms and {} students",
            ingest.rooms_upserted, ingest.students_upserted
        );

        // 分析
        let analysis_use_case = RunAnalysisUseCase::new(
            Arc::new(SqliteAnalyticsQueryService::new(conn)),
            self.report_generator.clone(),
        );
        let reports = analysis_use_case.execute(&options)?;
        for report in &reports {
            println!("{}", report.text);
        }

        let advice = self
            .config
            .show_advice
            .then(|| OptimizationAdvisor::new().render());
        if let Some(text) = &advice {
            println!("{}", text);
        }

        Ok(AnalysisRun {
            rejected: validated.rejected,
            ingest,
            reports,
            advice,
        })
    }
}

/// 実行結果とストアの解放結果をまとめる
///
/// 両方失敗した場合は実行時のエラーを返し、解放のエラーはログに残す
fn settle<T>(outcome: AnalyzerResult<T>, closed: AnalyzerResult<()>) -> AnalyzerResult<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(close_error)) => {
            error!("Failed to close SQLite store: {}", close_error);
            Err(close_error)
        }
        (Err(e), closed) => {
            error!("Room analysis failed: {}", e);
            if let Err(close_error) = closed {
                error!("Failed to close SQLite store after failure: {}", close_error);
            }
            Err(e)
        }
    }
}
