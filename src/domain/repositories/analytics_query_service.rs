//! # Analytics Query Service Trait
//!
//! 6種類の固定分析クエリを抽象化

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::analytics::{
    AgeStatistics, BuildingAgeDistribution, GenderDistribution, RoomOccupancy, RoomStudentCount,
};
use crate::domain::errors::AnalyzerResult;

/// 分析クエリサービス
///
/// すべて読み取り専用で副作用がない。呼び出し時点でストアにある学生を対象に
/// 毎回計算する（キャッシュしない）。
#[cfg_attr(test, automock)]
pub trait AnalyticsQueryService {
    /// 全部屋と学生数（学生0人の部屋も含む）
    ///
    /// 並び順: 建物、部屋番号の昇順
    fn rooms_with_student_count(&self) -> AnalyzerResult<Vec<RoomStudentCount>>;

    /// 平均年齢が低い順の上位 `limit` 部屋（学生1人以上の部屋のみ）
    fn top_rooms_by_average_age(&self, limit: usize) -> AnalyzerResult<Vec<AgeStatistics>>;

    /// 年齢差（最大 − 最小）が大きい順の上位 `limit` 部屋（学生2人以上の部屋のみ）
    fn top_rooms_by_age_difference(&self, limit: usize) -> AnalyzerResult<Vec<AgeStatistics>>;

    /// 男女両方が住んでいる部屋
    ///
    /// 並び順: 建物、部屋番号の昇順
    fn rooms_with_mixed_sex(&self) -> AnalyzerResult<Vec<GenderDistribution>>;

    /// 全部屋の占有率
    ///
    /// 並び順: 占有率の降順、同率なら建物、部屋番号の昇順
    fn room_occupancy_analysis(&self) -> AnalyzerResult<Vec<RoomOccupancy>>;

    /// 建物ごとの年齢分布（学生1人以上の建物のみ）
    ///
    /// 並び順: 建物の昇順
    fn age_distribution_by_building(&self) -> AnalyzerResult<Vec<BuildingAgeDistribution>>;
}
