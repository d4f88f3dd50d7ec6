//! # Student Entity
//!
//! 学生のドメインエンティティ

use serde::Deserialize;

use super::codes::Sex;
use crate::domain::errors::ValidationError;

pub const MIN_AGE: i64 = 0;
pub const MAX_AGE: i64 = 150;
pub const MAX_NAME_LENGTH: usize = 100;

/// 学生のドメインエンティティ
///
/// `room_id` が既存の部屋を参照しているかどうかはストアの外部キーで保証する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i64,
    name: String,
    age: u8,
    sex: Sex,
    room_id: i64,
}

impl Student {
    /// 新しい学生を作成
    ///
    /// # Errors
    ///
    /// いずれかの不変条件に違反した場合に `ValidationError` を返す
    pub fn new(id: i64, name: &str, age: i64, sex: &str, room_id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NonPositiveId { entity: "Student", id });
        }
        if name.is_empty() {
            return Err(ValidationError::EmptyField { field: "Student name" });
        }
        let name_len = name.chars().count();
        if name_len > MAX_NAME_LENGTH {
            return Err(ValidationError::TooLong {
                field: "Student name",
                max: MAX_NAME_LENGTH,
                actual: name_len,
            });
        }
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::AgeOutOfRange(age));
        }
        let sex = sex
            .parse::<Sex>()
            .map_err(|_| ValidationError::InvalidSex(sex.to_string()))?;
        if room_id <= 0 {
            return Err(ValidationError::NonPositiveId { entity: "Room", id: room_id });
        }

        Ok(Self {
            id,
            name: name.to_string(),
            age: age as u8,
            sex,
            room_id,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn sex(&self) -> Sex {
        self.sex
    }

    pub fn room_id(&self) -> i64 {
        self.room_id
    }
}

/// JSONファイルからの入力用構造体
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub sex: String,
    pub room_id: i64,
}

impl TryFrom<StudentRecord> for Student {
    type Error = ValidationError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        Student::new(record.id, &record.name, record.age, &record.sex, record.room_id)
    }
}
