//! SQLite Room Repository
//!
//! RoomRepositoryのSQLite実装

use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::domain::entities::room::Room;
use crate::domain::errors::{AnalyzerError, AnalyzerResult};
use crate::domain::repositories::repository::Repository;
use crate::domain::repositories::room_repository::RoomRepository;

const UPSERT_ROOM_SQL: &str = "INSERT INTO rooms (id, number, building, capacity)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(id) DO UPDATE SET
         number = excluded.number,
         building = excluded.building,
         capacity = excluded.capacity";

const SELECT_ROOM_COLUMNS: &str = "SELECT id, number, building, capacity FROM rooms";

/// 部屋テーブルの行（永続化用の内部表現）
struct RoomRow {
    id: i64,
    number: String,
    building: String,
    capacity: i64,
}

impl RoomRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            number: row.get(1)?,
            building: row.get(2)?,
            capacity: row.get(3)?,
        })
    }

    /// 行からエンティティを再構築（不変条件も再検証される）
    fn into_domain(self) -> AnalyzerResult<Room> {
        Ok(Room::new(self.id, &self.number, &self.building, self.capacity)?)
    }
}

/// SQLiteベースの部屋リポジトリ
pub struct SqliteRoomRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteRoomRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

impl Repository for SqliteRoomRepository<'_> {
    type Entity = Room;

    fn create(&self, room: &Room) -> AnalyzerResult<()> {
        self.conn
            .execute(
                UPSERT_ROOM_SQL,
                params![room.id(), room.number(), room.building().as_str(), room.capacity()],
            )
            .map_err(AnalyzerError::persistence)?;
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> AnalyzerResult<Option<Room>> {
        let row = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_ROOM_COLUMNS),
                params![id],
                RoomRow::from_row,
            )
            .optional()
            .map_err(AnalyzerError::query)?;

        row.map(RoomRow::into_domain).transpose()
    }

    fn get_all(&self) -> AnalyzerResult<Vec<Room>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{} ORDER BY id", SELECT_ROOM_COLUMNS))
            .map_err(AnalyzerError::query)?;
        let rows = stmt
            .query_map([], RoomRow::from_row)
            .map_err(AnalyzerError::query)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(AnalyzerError::query)?;

        rows.into_iter().map(RoomRow::into_domain).collect()
    }

    fn update(&self, room: &Room) -> AnalyzerResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE rooms SET number = ?1, building = ?2, capacity = ?3 WHERE id = ?4",
                params![room.number(), room.building().as_str(), room.capacity(), room.id()],
            )
            .map_err(AnalyzerError::persistence)?;
        debug!("Updated room {} ({} rows)", room.id(), changed);
        Ok(())
    }

    fn delete(&self, id: i64) -> AnalyzerResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM rooms WHERE id = ?1", params![id])
            .map_err(AnalyzerError::persistence)?;
        debug!("Deleted room {} ({} rows)", id, changed);
        Ok(())
    }

    fn bulk_create(&self, rooms: &[Room]) -> AnalyzerResult<()> {
        if rooms.is_empty() {
            return Ok(());
        }

        // 1トランザクション内でキャッシュ済みステートメントを使い回す
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(AnalyzerError::persistence)?;
        {
            let mut stmt = tx
                .prepare_cached(UPSERT_ROOM_SQL)
                .map_err(AnalyzerError::persistence)?;
            for room in rooms {
                stmt.execute(params![
                    room.id(),
                    room.number(),
                    room.building().as_str(),
                    room.capacity()
                ])
                .map_err(AnalyzerError::persistence)?;
            }
        }
        tx.commit().map_err(AnalyzerError::persistence)?;

        debug!("Bulk upserted {} rooms", rooms.len());
        Ok(())
    }
}

impl RoomRepository for SqliteRoomRepository<'_> {}
