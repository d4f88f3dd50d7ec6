//! # Dataset Summary
//!
//! ストアに取り込む前の検証済みレコードの概要

use std::collections::HashSet;

use super::codes::Sex;
use super::room::Room;
use super::student::Student;
use crate::domain::services::statistics::round2_ratio;

/// データセットの概要
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub room_count: usize,
    pub student_count: usize,
    /// 学生がいない場合は `None`
    pub average_age: Option<f64>,
    pub male_count: usize,
    pub female_count: usize,
    /// 1人以上の学生が割り当てられている部屋の数
    pub occupied_rooms: usize,
}

impl DatasetSummary {
    pub fn from_entities(rooms: &[Room], students: &[Student]) -> Self {
        let age_sum: i64 = students.iter().map(|s| i64::from(s.age())).sum();
        let average_age = (!students.is_empty())
            .then(|| round2_ratio(age_sum, students.len() as i64));

        let male_count = students.iter().filter(|s| s.sex() == Sex::Male).count();

        let assigned: HashSet<i64> = students.iter().map(Student::room_id).collect();
        let occupied_rooms = rooms.iter().filter(|r| assigned.contains(&r.id())).count();

        Self {
            room_count: rooms.len(),
            student_count: students.len(),
            average_age,
            male_count,
            female_count: students.len() - male_count,
            occupied_rooms,
        }
    }
}
