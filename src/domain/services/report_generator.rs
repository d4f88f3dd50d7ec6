//! # Report Generator Trait
//!
//! 分析結果をレポート文字列に変換するインターフェース

use crate::domain::entities::analytics::{
    AgeStatistics, BuildingAgeDistribution, GenderDistribution, RoomOccupancy, RoomStudentCount,
};

/// レポートジェネレータ
///
/// 6種類の分析結果それぞれのタイトル・列見出しを決め、表に整形する
pub trait ReportGenerator {
    fn format_rooms_with_student_count(&self, rows: &[RoomStudentCount]) -> String;

    fn format_top_rooms_by_average_age(&self, rows: &[AgeStatistics]) -> String;

    fn format_top_rooms_by_age_difference(&self, rows: &[AgeStatistics]) -> String;

    fn format_rooms_with_mixed_sex(&self, rows: &[GenderDistribution]) -> String;

    fn format_room_occupancy(&self, rows: &[RoomOccupancy]) -> String;

    fn format_age_distribution_by_building(&self, rows: &[BuildingAgeDistribution]) -> String;
}
