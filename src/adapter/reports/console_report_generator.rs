//! Console Report Generator
//!
//! ReportGeneratorのコンソール向け実装

use crate::domain::entities::analytics::{
    AgeStatistics, BuildingAgeDistribution, GenderDistribution, RoomIdentity, RoomOccupancy,
    RoomStudentCount,
};
use crate::domain::services::report_generator::ReportGenerator;
use crate::domain::services::table_formatter::render_table;

pub const ROOMS_WITH_STUDENT_COUNT_TITLE: &str = "ROOMS AND STUDENT COUNT";
pub const TOP_ROOMS_BY_AVERAGE_AGE_TITLE: &str = "TOP ROOMS BY SMALLEST AVERAGE AGE";
pub const TOP_ROOMS_BY_AGE_DIFFERENCE_TITLE: &str = "TOP ROOMS BY LARGEST AGE DIFFERENCE";
pub const ROOMS_WITH_MIXED_SEX_TITLE: &str = "ROOMS WITH MIXED SEXES";
pub const ROOM_OCCUPANCY_TITLE: &str = "ROOM OCCUPANCY ANALYSIS";
pub const AGE_DISTRIBUTION_BY_BUILDING_TITLE: &str = "AGE DISTRIBUTION BY BUILDING";

const ROOM_HEADERS: [&str; 3] = ["Room ID", "Number", "Building"];

/// 小数は常に小数点以下2桁で表示
fn decimal(value: f64) -> String {
    format!("{:.2}", value)
}

fn room_cells(room: &RoomIdentity) -> Vec<String> {
    vec![
        room.id.to_string(),
        room.number.clone(),
        room.building.to_string(),
    ]
}

fn with_room_headers(extra: &[&'static str]) -> Vec<&'static str> {
    ROOM_HEADERS.iter().chain(extra).copied().collect()
}

/// コンソール向けレポートジェネレータ
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReportGenerator;

impl ConsoleReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for ConsoleReportGenerator {
    fn format_rooms_with_student_count(&self, rows: &[RoomStudentCount]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells = room_cells(&row.room);
                cells.push(row.capacity.to_string());
                cells.push(row.student_count.to_string());
                cells
            })
            .collect();

        render_table(
            ROOMS_WITH_STUDENT_COUNT_TITLE,
            &with_room_headers(&["Capacity", "Students"]),
            &cells,
        )
    }

    fn format_top_rooms_by_average_age(&self, rows: &[AgeStatistics]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells = room_cells(&row.room);
                cells.push(row.student_count.to_string());
                cells.push(decimal(row.average_age));
                cells
            })
            .collect();

        render_table(
            TOP_ROOMS_BY_AVERAGE_AGE_TITLE,
            &with_room_headers(&["Students", "Avg Age"]),
            &cells,
        )
    }

    fn format_top_rooms_by_age_difference(&self, rows: &[AgeStatistics]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells = room_cells(&row.room);
                cells.push(row.student_count.to_string());
                cells.push(row.min_age.to_string());
                cells.push(row.max_age.to_string());
                cells.push(row.age_difference.to_string());
                cells
            })
            .collect();

        render_table(
            TOP_ROOMS_BY_AGE_DIFFERENCE_TITLE,
            &with_room_headers(&["Students", "Min Age", "Max Age", "Age Diff"]),
            &cells,
        )
    }

    fn format_rooms_with_mixed_sex(&self, rows: &[GenderDistribution]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells = room_cells(&row.room);
                cells.push(row.male_count.to_string());
                cells.push(row.female_count.to_string());
                cells.push(row.total_students.to_string());
                cells
            })
            .collect();

        render_table(
            ROOMS_WITH_MIXED_SEX_TITLE,
            &with_room_headers(&["Male", "Female", "Total"]),
            &cells,
        )
    }

    fn format_room_occupancy(&self, rows: &[RoomOccupancy]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                let mut cells = room_cells(&row.room);
                cells.push(row.capacity.to_string());
                cells.push(row.current_occupancy.to_string());
                cells.push(row.available_spots.to_string());
                cells.push(decimal(row.occupancy_percentage));
                cells
            })
            .collect();

        render_table(
            ROOM_OCCUPANCY_TITLE,
            &with_room_headers(&["Capacity", "Occupied", "Available", "Percentage"]),
            &cells,
        )
    }

    fn format_age_distribution_by_building(&self, rows: &[BuildingAgeDistribution]) -> String {
        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.building.to_string(),
                    row.student_count.to_string(),
                    decimal(row.average_age),
                    row.min_age.to_string(),
                    row.max_age.to_string(),
                    decimal(row.std_dev),
                ]
            })
            .collect();

        render_table(
            AGE_DISTRIBUTION_BY_BUILDING_TITLE,
            &["Building", "Students", "Avg Age", "Min Age", "Max Age", "Std Dev"],
            &cells,
        )
    }
}
