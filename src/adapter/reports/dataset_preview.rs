//! Dataset Preview
//!
//! 取り込み前のデータセットの構造・概要・サンプルを表示する

use crate::domain::entities::dataset_summary::DatasetSummary;
use crate::domain::entities::room::Room;
use crate::domain::entities::student::Student;
use crate::domain::services::table_formatter::render_table;

pub const PREVIEW_TITLE: &str = "DATABASE PREVIEW";

/// サンプルとして表示する件数
pub const SAMPLE_LIMIT: usize = 3;

const RULE_WIDTH: usize = 40;

const SCHEMA_LINES: &[&str] = &[
    "rooms: id, number, building, capacity",
    "students: id, name, age, sex, room_id",
    "Relationship: students.room_id -> rooms.id (many-to-one)",
];

/// データセットのプレビュー
#[derive(Debug, Default, Clone, Copy)]
pub struct DatasetPreview;

impl DatasetPreview {
    pub fn new() -> Self {
        Self
    }

    pub fn render_summary(&self, summary: &DatasetSummary) -> String {
        let average_age = summary
            .average_age
            .map(|age| format!("{:.2}", age))
            .unwrap_or_else(|| "n/a".to_string());

        [
            format!(
                "Dataset Summary: {} students, {} rooms",
                summary.student_count, summary.room_count
            ),
            format!("  Average age: {}", average_age),
            format!("  Sex: {}M, {}F", summary.male_count, summary.female_count),
            format!(
                "  Occupied rooms: {}/{}",
                summary.occupied_rooms, summary.room_count
            ),
        ]
        .join("\n")
    }

    /// 構造・概要・先頭 `SAMPLE_LIMIT` 件のサンプルを表示用に整形
    pub fn render(&self, rooms: &[Room], students: &[Student]) -> String {
        let summary = DatasetSummary::from_entities(rooms, students);

        let room_rows: Vec<Vec<String>> = rooms
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|room| {
                vec![
                    room.id().to_string(),
                    room.number().to_string(),
                    room.building().to_string(),
                    room.capacity().to_string(),
                ]
            })
            .collect();
        let student_rows: Vec<Vec<String>> = students
            .iter()
            .take(SAMPLE_LIMIT)
            .map(|student| {
                vec![
                    student.id().to_string(),
                    student.name().to_string(),
                    student.age().to_string(),
                    student.sex().to_string(),
                    student.room_id().to_string(),
                ]
            })
            .collect();

        format!(
            "{}\n{}\n\nDatabase Schema:\n{}\n\n{}\n{}\n{}",
            PREVIEW_TITLE,
            "=".repeat(RULE_WIDTH),
            SCHEMA_LINES.join("\n"),
            self.render_summary(&summary),
            render_table(
                "Sample Rooms",
                &["Room ID", "Number", "Building", "Capacity"],
                &room_rows
            ),
            render_table(
                "Sample Students",
                &["Student ID", "Name", "Age", "Sex", "Room ID"],
                &student_rows
            ),
        )
    }
}
