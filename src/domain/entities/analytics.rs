//! # Analytics Rows
//!
//! 分析クエリの結果としてのみ生成される読み取り専用の行
//!
//! 永続化されず、1回のレポート描画の間だけ存在する

use super::codes::Building;
use crate::domain::services::statistics::{
    occupancy_percentage, population_std_dev, round2, round2_ratio,
};

/// 部屋の識別情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomIdentity {
    pub id: i64,
    pub number: String,
    pub building: Building,
}

impl RoomIdentity {
    pub fn new(id: i64, number: impl Into<String>, building: Building) -> Self {
        Self {
            id,
            number: number.into(),
            building,
        }
    }
}

/// 部屋ごとの学生数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomStudentCount {
    pub room: RoomIdentity,
    pub capacity: u8,
    pub student_count: u32,
}

/// 部屋ごとの年齢統計
#[derive(Debug, Clone, PartialEq)]
pub struct AgeStatistics {
    pub room: RoomIdentity,
    pub student_count: u32,
    /// 小数点以下2桁に丸めた平均年齢
    pub average_age: f64,
    pub min_age: u8,
    pub max_age: u8,
    pub age_difference: u8,
}

impl AgeStatistics {
    /// 年齢の合計から作成（平均は整数演算で丸める）
    pub fn new(room: RoomIdentity, student_count: u32, age_sum: i64, min_age: u8, max_age: u8) -> Self {
        Self {
            room,
            student_count,
            average_age: round2_ratio(age_sum, i64::from(student_count)),
            min_age,
            max_age,
            age_difference: max_age.saturating_sub(min_age),
        }
    }
}

/// 部屋ごとの男女構成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenderDistribution {
    pub room: RoomIdentity,
    pub male_count: u32,
    pub female_count: u32,
    pub total_students: u32,
    pub has_mixed_gender: bool,
}

impl GenderDistribution {
    pub fn new(room: RoomIdentity, male_count: u32, female_count: u32) -> Self {
        Self {
            room,
            male_count,
            female_count,
            total_students: male_count + female_count,
            has_mixed_gender: male_count > 0 && female_count > 0,
        }
    }
}

/// 部屋の占有状況
#[derive(Debug, Clone, PartialEq)]
pub struct RoomOccupancy {
    pub room: RoomIdentity,
    pub capacity: u8,
    pub current_occupancy: u32,
    /// 定員超過の場合は負になる
    pub available_spots: i64,
    pub occupancy_percentage: f64,
}

impl RoomOccupancy {
    pub fn new(room: RoomIdentity, capacity: u8, current_occupancy: u32) -> Self {
        Self {
            room,
            capacity,
            current_occupancy,
            available_spots: i64::from(capacity) - i64::from(current_occupancy),
            occupancy_percentage: occupancy_percentage(current_occupancy, capacity),
        }
    }
}

/// 建物ごとの年齢分布
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingAgeDistribution {
    pub building: Building,
    pub student_count: u32,
    /// 小数点以下2桁に丸めた平均年齢
    pub average_age: f64,
    pub min_age: u8,
    pub max_age: u8,
    /// 小数点以下2桁に丸めた母標準偏差
    pub std_dev: f64,
}

impl BuildingAgeDistribution {
    /// 年齢の合計と二乗平均から作成
    pub fn new(
        building: Building,
        student_count: u32,
        age_sum: i64,
        mean_of_squared_ages: f64,
        min_age: u8,
        max_age: u8,
    ) -> Self {
        let mean_age = if student_count == 0 {
            0.0
        } else {
            age_sum as f64 / f64::from(student_count)
        };
        Self {
            building,
            student_count,
            average_age: round2_ratio(age_sum, i64::from(student_count)),
            min_age,
            max_age,
            std_dev: round2(population_std_dev(mean_age, mean_of_squared_ages)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: i64) -> RoomIdentity {
        RoomIdentity::new(id, format!("10{}", id), Building::A)
    }

    #[test]
    fn test_age_statistics_difference() {
        let stats = AgeStatistics::new(room(1), 2, 42, 20, 22);
        assert_eq!(stats.average_age, 21.0);
        assert_eq!(stats.age_difference, 2);
    }

    #[test]
    fn test_gender_distribution_flags() {
        let mixed = GenderDistribution::new(room(1), 1, 1);
        assert!(mixed.has_mixed_gender);
        assert_eq!(mixed.total_students, 2);

        let male_only = GenderDistribution::new(room(2), 3, 0);
        assert!(!male_only.has_mixed_gender);

        let empty = GenderDistribution::new(room(3), 0, 0);
        assert!(!empty.has_mixed_gender);
        assert_eq!(empty.total_students, 0);
    }

    #[test]
    fn test_room_occupancy_derived_fields() {
        let full = RoomOccupancy::new(room(1), 2, 2);
        assert_eq!(full.available_spots, 0);
        assert_eq!(full.occupancy_percentage, 100.0);

        let quarter = RoomOccupancy::new(room(2), 4, 1);
        assert_eq!(quarter.available_spots, 3);
        assert_eq!(quarter.occupancy_percentage, 25.0);

        let over = RoomOccupancy::new(room(3), 1, 2);
        assert_eq!(over.available_spots, -1);
        assert_eq!(over.occupancy_percentage, 200.0);
    }

    #[test]
    fn test_building_age_distribution_rounding() {
        // 20, 21, 22 -> mean 21, mean of squares 441.666..
        let dist = BuildingAgeDistribution::new(Building::A, 3, 63, 1325.0 / 3.0, 20, 22);
        assert_eq!(dist.average_age, 21.0);
        assert_eq!(dist.std_dev, 0.82);
    }

    #[test]
    fn test_average_age_rounds_half_up() {
        // 39人が20歳、1人が21歳 -> 801 / 40 = 20.025
        let dist = BuildingAgeDistribution::new(Building::A, 40, 801, 16041.0 / 40.0, 20, 21);
        assert_eq!(dist.average_age, 20.03);

        let stats = AgeStatistics::new(room(1), 40, 801, 20, 21);
        assert_eq!(stats.average_age, 20.03);
    }
}
