//! SQLite Analytics Query Service
//!
//! AnalyticsQueryServiceのSQLite実装
//!
//! SQL文に埋め込むのは構文要素（並び順のキーワードなど）だけで、
//! 件数や性別コードなどの値はすべてパラメータとしてバインドする。

use log::debug;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ValueRef};
use rusqlite::{params, Connection, Params, Row};

use crate::domain::entities::analytics::{
    AgeStatistics, BuildingAgeDistribution, GenderDistribution, RoomIdentity, RoomOccupancy,
    RoomStudentCount,
};
use crate::domain::entities::codes::{Building, Sex};
use crate::domain::errors::{AnalyzerError, AnalyzerResult, ValidationError};
use crate::domain::repositories::analytics_query_service::AnalyticsQueryService;

/// 並び順のキーワード
#[derive(Debug, Clone, Copy)]
enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// 同順位のときの並び（建物、部屋番号、部屋ID）
const ROOM_TIE_BREAK: &str = "r.building ASC, r.number ASC, r.id ASC";

impl FromSql for Building {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_str()?;
        code.parse().map_err(|_| {
            FromSqlError::Other(Box::new(ValidationError::InvalidBuilding(code.to_string())))
        })
    }
}

fn room_identity(row: &Row<'_>) -> rusqlite::Result<RoomIdentity> {
    Ok(RoomIdentity::new(row.get(0)?, row.get::<_, String>(1)?, row.get(2)?))
}

fn limit_param(limit: usize) -> i64 {
    i64::try_from(limit).unwrap_or(i64::MAX)
}

/// 平均年齢は `SUM` と人数から整数演算で丸める（`AVG` は並び順にだけ使う）
fn age_statistics_sql(having: &str, order_by: &str, order: SortOrder) -> String {
    format!(
        "SELECT r.id, r.number, r.building,
                COUNT(s.id) AS student_count,
                SUM(s.age) AS age_sum,
                MIN(s.age) AS min_age,
                MAX(s.age) AS max_age
         FROM rooms r
         INNER JOIN students s ON s.room_id = r.id
         GROUP BY r.id, r.number, r.building
         HAVING {having}
         ORDER BY {order_by} {order}, {tie_break}
         LIMIT ?1",
        having = having,
        order_by = order_by,
        order = order.as_sql(),
        tie_break = ROOM_TIE_BREAK,
    )
}

fn age_statistics_row(row: &Row<'_>) -> rusqlite::Result<AgeStatistics> {
    Ok(AgeStatistics::new(
        room_identity(row)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
        row.get(6)?,
    ))
}

/// SQLiteベースの分析クエリサービス
pub struct SqliteAnalyticsQueryService<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteAnalyticsQueryService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn fetch<T, P, F>(&self, sql: &str, params: P, map: F) -> AnalyzerResult<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql).map_err(AnalyzerError::query)?;
        let rows = stmt
            .query_map(params, map)
            .map_err(AnalyzerError::query)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(AnalyzerError::query)?;
        debug!("Query returned {} rows", rows.len());
        Ok(rows)
    }
}

impl AnalyticsQueryService for SqliteAnalyticsQueryService<'_> {
    fn rooms_with_student_count(&self) -> AnalyzerResult<Vec<RoomStudentCount>> {
        let sql = format!(
            "SELECT r.id, r.number, r.building, r.capacity, COUNT(s.id) AS student_count
             FROM rooms r
             LEFT JOIN students s ON s.room_id = r.id
             GROUP BY r.id, r.number, r.building, r.capacity
             ORDER BY {}",
            ROOM_TIE_BREAK
        );
        self.fetch(&sql, [], |row| {
            Ok(RoomStudentCount {
                room: room_identity(row)?,
                capacity: row.get(3)?,
                student_count: row.get(4)?,
            })
        })
    }

    fn top_rooms_by_average_age(&self, limit: usize) -> AnalyzerResult<Vec<AgeStatistics>> {
        let sql = age_statistics_sql("COUNT(s.id) > 0", "AVG(s.age)", SortOrder::Asc);
        self.fetch(&sql, params![limit_param(limit)], age_statistics_row)
    }

    fn top_rooms_by_age_difference(&self, limit: usize) -> AnalyzerResult<Vec<AgeStatistics>> {
        let sql = age_statistics_sql(
            "COUNT(s.id) >= 2",
            "MAX(s.age) - MIN(s.age)",
            SortOrder::Desc,
        );
        self.fetch(&sql, params![limit_param(limit)], age_statistics_row)
    }

    fn rooms_with_mixed_sex(&self) -> AnalyzerResult<Vec<GenderDistribution>> {
        let sql = format!(
            "SELECT r.id, r.number, r.building,
                    COUNT(CASE WHEN s.sex = ?1 THEN 1 END) AS male_count,
                    COUNT(CASE WHEN s.sex = ?2 THEN 1 END) AS female_count
             FROM rooms r
             INNER JOIN students s ON s.room_id = r.id
             GROUP BY r.id, r.number, r.building
             HAVING male_count > 0 AND female_count > 0
             ORDER BY {}",
            ROOM_TIE_BREAK
        );
        self.fetch(
            &sql,
            params![Sex::Male.as_str(), Sex::Female.as_str()],
            |row| {
                Ok(GenderDistribution::new(
                    room_identity(row)?,
                    row.get(3)?,
                    row.get(4)?,
                ))
            },
        )
    }

    fn room_occupancy_analysis(&self) -> AnalyzerResult<Vec<RoomOccupancy>> {
        // 定員は1〜10なので、比率が異なれば小数点以下2桁に丸めた占有率も異なる
        let sql = format!(
            "SELECT r.id, r.number, r.building, r.capacity, COUNT(s.id) AS occupied
             FROM rooms r
             LEFT JOIN students s ON s.room_id = r.id
             GROUP BY r.id, r.number, r.building, r.capacity
             ORDER BY CAST(COUNT(s.id) AS REAL) / r.capacity {}, {}",
            SortOrder::Desc.as_sql(),
            ROOM_TIE_BREAK
        );
        self.fetch(&sql, [], |row| {
            Ok(RoomOccupancy::new(
                room_identity(row)?,
                row.get(3)?,
                row.get(4)?,
            ))
        })
    }

    fn age_distribution_by_building(&self) -> AnalyzerResult<Vec<BuildingAgeDistribution>> {
        let sql = format!(
            "SELECT r.building,
                    COUNT(s.id) AS student_count,
                    SUM(s.age) AS age_sum,
                    AVG(s.age * s.age) AS avg_squared_age,
                    MIN(s.age) AS min_age,
                    MAX(s.age) AS max_age
             FROM rooms r
             INNER JOIN students s ON s.room_id = r.id
             GROUP BY r.building
             HAVING COUNT(s.id) > 0
             ORDER BY r.building {}",
            SortOrder::Asc.as_sql()
        );
        self.fetch(&sql, [], |row| {
            Ok(BuildingAgeDistribution::new(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })
    }
}
