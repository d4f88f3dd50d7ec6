//! # Room Repository Trait
//!
//! 部屋の永続化を抽象化

use super::repository::Repository;
use crate::domain::entities::room::Room;

/// 部屋リポジトリ
pub trait RoomRepository: Repository<Entity = Room> {}
