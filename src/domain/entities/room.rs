//! # Room Entity
//!
//! 部屋のドメインエンティティ

use serde::Deserialize;

use super::codes::Building;
use crate::domain::errors::ValidationError;

pub const MIN_CAPACITY: i64 = 1;
pub const MAX_CAPACITY: i64 = 10;
pub const MAX_ROOM_NUMBER_LENGTH: usize = 10;
pub const MAX_BUILDING_LENGTH: usize = 10;

/// 部屋のドメインエンティティ
///
/// 生成時にすべての不変条件を検証するため、存在する `Room` は常に有効
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: i64,
    number: String,
    building: Building,
    capacity: u8,
}

impl Room {
    /// 新しい部屋を作成
    ///
    /// # Errors
    ///
    /// IDが正でない、部屋番号が空または長すぎる、建物コードが不正、
    /// 定員が範囲外の場合に `ValidationError` を返す
    pub fn new(id: i64, number: &str, building: &str, capacity: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::NonPositiveId { entity: "Room", id });
        }
        if number.is_empty() {
            return Err(ValidationError::EmptyField { field: "Room number" });
        }
        let number_len = number.chars().count();
        if number_len > MAX_ROOM_NUMBER_LENGTH {
            return Err(ValidationError::TooLong {
                field: "Room number",
                max: MAX_ROOM_NUMBER_LENGTH,
                actual: number_len,
            });
        }
        let building_len = building.chars().count();
        if building_len > MAX_BUILDING_LENGTH {
            return Err(ValidationError::TooLong {
                field: "Building name",
                max: MAX_BUILDING_LENGTH,
                actual: building_len,
            });
        }
        let building = building
            .parse::<Building>()
            .map_err(|_| ValidationError::InvalidBuilding(building.to_string()))?;
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(ValidationError::CapacityOutOfRange(capacity));
        }

        Ok(Self {
            id,
            number: number.to_string(),
            building,
            // 範囲チェック済み
            capacity: capacity as u8,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn building(&self) -> Building {
        self.building
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }
}

/// JSONファイルからの入力用構造体
///
/// 構造（必須フィールドと型）のみを保証し、不変条件は `Room::try_from` で検証する
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoomRecord {
    pub id: i64,
    pub number: String,
    pub building: String,
    pub capacity: i64,
}

impl TryFrom<RoomRecord> for Room {
    type Error = ValidationError;

    fn try_from(record: RoomRecord) -> Result<Self, Self::Error> {
        Room::new(record.id, &record.number, &record.building, record.capacity)
    }
}
