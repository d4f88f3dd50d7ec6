//! # Run Analysis Use Case
//!
//! 6種類の分析クエリを実行してレポートを生成するユースケース

use std::fmt;
use std::sync::Arc;

use log::{debug, info};

use crate::application::dto::analysis_options::AnalysisOptions;
use crate::domain::errors::AnalyzerResult;
use crate::domain::repositories::analytics_query_service::AnalyticsQueryService;
use crate::domain::services::report_generator::ReportGenerator;

/// レポートの種類（実行順）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    RoomsWithStudentCount,
    TopRoomsByAverageAge,
    TopRoomsByAgeDifference,
    RoomsWithMixedSex,
    RoomOccupancy,
    AgeDistributionByBuilding,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::RoomsWithStudentCount => "rooms_with_student_count",
            ReportKind::TopRoomsByAverageAge => "top_rooms_by_average_age",
            ReportKind::TopRoomsByAgeDifference => "top_rooms_by_age_difference",
            ReportKind::RoomsWithMixedSex => "rooms_with_mixed_sex",
            ReportKind::RoomOccupancy => "room_occupancy",
            ReportKind::AgeDistributionByBuilding => "age_distribution_by_building",
        };
        f.write_str(name)
    }
}

/// 描画済みのレポート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub kind: ReportKind,
    pub row_count: usize,
    pub text: String,
}

/// 分析ユースケース
pub struct RunAnalysisUseCase<Q: AnalyticsQueryService, G: ReportGenerator> {
    query_service: Arc<Q>,
    report_generator: Arc<G>,
}

impl<Q: AnalyticsQueryService, G: ReportGenerator> RunAnalysisUseCase<Q, G> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `query_service` - 分析クエリサービス
    /// * `report_generator` - レポートジェネレータ
    pub fn new(query_service: Arc<Q>, report_generator: Arc<G>) -> Self {
        Self {
            query_service,
            report_generator,
        }
    }

    /// 全分析を固定順で実行
    ///
    /// # Errors
    ///
    /// いずれかのクエリが失敗した場合、そのエラーをそのまま返す（代替値は使わない）
    pub fn execute(&self, options: &AnalysisOptions) -> AnalyzerResult<Vec<AnalysisReport>> {
        let queries = &self.query_service;
        let generator = &self.report_generator;
        let limit = options.query_limit;

        let mut reports = Vec::with_capacity(6);

        let rows = queries.rooms_with_student_count()?;
        reports.push(report(
            ReportKind::RoomsWithStudentCount,
            rows.len(),
            generator.format_rooms_with_student_count(&rows),
        ));

        let rows = queries.top_rooms_by_average_age(limit)?;
        reports.push(report(
            ReportKind::TopRoomsByAverageAge,
            rows.len(),
            generator.format_top_rooms_by_average_age(&rows),
        ));

        let rows = queries.top_rooms_by_age_difference(limit)?;
        reports.push(report(
            ReportKind::TopRoomsByAgeDifference,
            rows.len(),
            generator.format_top_rooms_by_age_difference(&rows),
        ));

        let rows = queries.rooms_with_mixed_sex()?;
        reports.push(report(
            ReportKind::RoomsWithMixedSex,
            rows.len(),
            generator.format_rooms_with_mixed_sex(&rows),
        ));

        let rows = queries.room_occupancy_analysis()?;
        reports.push(report(
            ReportKind::RoomOccupancy,
            rows.len(),
            generator.format_room_occupancy(&rows),
        ));

        let rows = queries.age_distribution_by_building()?;
        reports.push(report(
            ReportKind::AgeDistributionByBuilding,
            rows.len(),
            generator.format_age_distribution_by_building(&rows),
        ));

        info!("Generated {} reports", reports.len());
        Ok(reports)
    }
}

fn report(kind: ReportKind, row_count: usize, text: String) -> AnalysisReport {
    debug!("Report {}: {} rows", kind, row_count);
    AnalysisReport {
        kind,
        row_count,
        text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    use crate::domain::entities::analytics::{
        AgeStatistics, BuildingAgeDistribution, GenderDistribution, RoomIdentity, RoomOccupancy,
        RoomStudentCount,
    };
    use crate::domain::entities::codes::Building;
    use crate::domain::errors::AnalyzerError;
    use crate::domain::repositories::analytics_query_service::MockAnalyticsQueryService;

    /// 行数だけを書き出すレポートジェネレータ
    struct CountingReportGenerator;

    impl ReportGenerator for CountingReportGenerator {
        fn format_rooms_with_student_count(&self, rows: &[RoomStudentCount]) -> String {
            format!("count:{}", rows.len())
        }

        fn format_top_rooms_by_average_age(&self, rows: &[AgeStatistics]) -> String {
            format!("avg:{}", rows.len())
        }

        fn format_top_rooms_by_age_difference(&self, rows: &[AgeStatistics]) -> String {
            format!("diff:{}", rows.len())
        }

        fn format_rooms_with_mixed_sex(&self, rows: &[GenderDistribution]) -> String {
            format!("mixed:{}", rows.len())
        }

        fn format_room_occupancy(&self, rows: &[RoomOccupancy]) -> String {
            format!("occupancy:{}", rows.len())
        }

        fn format_age_distribution_by_building(&self, rows: &[BuildingAgeDistribution]) -> String {
            format!("building:{}", rows.len())
        }
    }

    fn room_101() -> RoomIdentity {
        RoomIdentity::new(1, "101", Building::A)
    }

    fn mock_with_data(expected_limit: usize) -> MockAnalyticsQueryService {
        let mut mock = MockAnalyticsQueryService::new();
        mock.expect_rooms_with_student_count().times(1).returning(|| {
            Ok(vec![RoomStudentCount {
                room: room_101(),
                capacity: 2,
                student_count: 2,
            }])
        });
        mock.expect_top_rooms_by_average_age()
            .with(eq(expected_limit))
            .times(1)
            .returning(|_| Ok(vec![AgeStatistics::new(room_101(), 2, 42, 20, 22)]));
        mock.expect_top_rooms_by_age_difference()
            .with(eq(expected_limit))
            .times(1)
            .returning(|_| Ok(vec![]));
        mock.expect_rooms_with_mixed_sex()
            .times(1)
            .returning(|| Ok(vec![GenderDistribution::new(room_101(), 1, 1)]));
        mock.expect_room_occupancy_analysis()
            .times(1)
            .returning(|| Ok(vec![RoomOccupancy::new(room_101(), 2, 2)]));
        mock.expect_age_distribution_by_building()
            .times(1)
            .returning(|| Ok(vec![]));
        mock
    }

    #[test]
    fn test_run_analysis_produces_six_reports_in_order() {
        let use_case = RunAnalysisUseCase::new(
            Arc::new(mock_with_data(10)),
            Arc::new(CountingReportGenerator),
        );

        let reports = use_case.execute(&AnalysisOptions::default()).unwrap();

        let kinds: Vec<ReportKind> = reports.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ReportKind::RoomsWithStudentCount,
                ReportKind::TopRoomsByAverageAge,
                ReportKind::TopRoomsByAgeDifference,
                ReportKind::RoomsWithMixedSex,
                ReportKind::RoomOccupancy,
                ReportKind::AgeDistributionByBuilding,
            ]
        );
        assert_eq!(reports[0].text, "count:1");
        assert_eq!(reports[2].row_count, 0);
        assert_eq!(reports[5].text, "building:0");
    }

    #[test]
    fn test_run_analysis_passes_custom_limit() {
        let use_case = RunAnalysisUseCase::new(
            Arc::new(mock_with_data(3)),
            Arc::new(CountingReportGenerator),
        );
        let options = AnalysisOptions {
            query_limit: 3,
            ..AnalysisOptions::default()
        };

        assert!(use_case.execute(&options).is_ok());
    }

    #[test]
    fn test_run_analysis_propagates_query_error() {
        let mut mock = MockAnalyticsQueryService::new();
        mock.expect_rooms_with_student_count()
            .returning(|| Err(AnalyzerError::query("database is closed")));
        mock.expect_top_rooms_by_average_age().never();

        let use_case = RunAnalysisUseCase::new(Arc::new(mock), Arc::new(CountingReportGenerator));

        let result = use_case.execute(&AnalysisOptions::default());

        assert!(matches!(result, Err(AnalyzerError::Query(_))));
    }

    #[test]
    fn test_report_kind_display() {
        assert_eq!(ReportKind::RoomOccupancy.to_string(), "room_occupancy");
    }
}
