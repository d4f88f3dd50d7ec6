//! SQLite Student Repository
//!
//! StudentRepositoryのSQLite実装

use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

use crate::domain::entities::student::Student;
use crate::domain::errors::{AnalyzerError, AnalyzerResult};
use crate::domain::repositories::repository::Repository;
use crate::domain::repositories::student_repository::StudentRepository;

const UPSERT_STUDENT_SQL: &str = "INSERT INTO students (id, name, age, sex, room_id)
     VALUES (?1, ?2, ?3, ?4, ?5)
     ON CONFLICT(id) DO UPDATE SET
         name = excluded.name,
         age = excluded.age,
         sex = excluded.sex,
         room_id = excluded.room_id";

const SELECT_STUDENT_COLUMNS: &str = "SELECT id, name, age, sex, room_id FROM students";

struct StudentRow {
    id: i64,
    name: String,
    age: i64,
    sex: String,
    room_id: i64,
}

impl StudentRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            age: row.get(2)?,
            sex: row.get(3)?,
            room_id: row.get(4)?,
        })
    }

    fn into_domain(self) -> AnalyzerResult<Student> {
        Ok(Student::new(self.id, &self.name, self.age, &self.sex, self.room_id)?)
    }
}

/// SQLiteベースの学生リポジトリ
pub struct SqliteStudentRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteStudentRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn query_students<P: Params>(&self, sql: &str, params: P) -> AnalyzerResult<Vec<Student>> {
        let mut stmt = self.conn.prepare(sql).map_err(AnalyzerError::query)?;
        let rows = stmt
            .query_map(params, StudentRow::from_row)
            .map_err(AnalyzerError::query)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(AnalyzerError::query)?;

        rows.into_iter().map(StudentRow::into_domain).collect()
    }
}

impl Repository for SqliteStudentRepository<'_> {
    type Entity = Student;

    fn create(&self, student: &Student) -> AnalyzerResult<()> {
        self.conn
            .execute(
                UPSERT_STUDENT_SQL,
                params![
                    student.id(),
                    student.name(),
                    student.age(),
                    student.sex().as_str(),
                    student.room_id()
                ],
            )
            .map_err(AnalyzerError::persistence)?;
        Ok(())
    }

    fn get_by_id(&self, id: i64) -> AnalyzerResult<Option<Student>> {
        let row = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_STUDENT_COLUMNS),
                params![id],
                StudentRow::from_row,
            )
            .optional()
            .map_err(AnalyzerError::query)?;

        row.map(StudentRow::into_domain).transpose()
    }

    fn get_all(&self) -> AnalyzerResult<Vec<Student>> {
        self.query_students(&format!("{} ORDER BY id", SELECT_STUDENT_COLUMNS), [])
    }

    fn update(&self, student: &Student) -> AnalyzerResult<()> {
        let changed = self
            .conn
            .execute(
                "UPDATE students SET name = ?1, age = ?2, sex = ?3, room_id = ?4 WHERE id = ?5",
                params![
                    student.name(),
                    student.age(),
                    student.sex().as_str(),
                    student.room_id(),
                    student.id()
                ],
            )
            .map_err(AnalyzerError::persistence)?;
        debug!("Updated student {} ({} rows)", student.id(), changed);
        Ok(())
    }

    fn delete(&self, id: i64) -> AnalyzerResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![id])
            .map_err(AnalyzerError::persistence)?;
        debug!("Deleted student {} ({} rows)", id, changed);
        Ok(())
    }

    fn bulk_create(&self, students: &[Student]) -> AnalyzerResult<()> {
        if students.is_empty() {
            return Ok(());
        }

        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(AnalyzerError::persistence)?;
        {
            let mut stmt = tx
                .prepare_cached(UPSERT_STUDENT_SQL)
                .map_err(AnalyzerError::persistence)?;
            for student in students {
                stmt.execute(params![
                    student.id(),
                    student.name(),
                    student.age(),
                    student.sex().as_str(),
                    student.room_id()
                ])
                .map_err(AnalyzerError::persistence)?;
            }
        }
        tx.commit().map_err(AnalyzerError::persistence)?;

        debug!("Bulk upserted {} students", students.len());
        Ok(())
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn get_by_room_id(&self, room_id: i64) -> AnalyzerResult<Vec<Student>> {
        self.query_students(
            &format!("{} WHERE room_id = ?1 ORDER BY id", SELECT_STUDENT_COLUMNS),
            params![room_id],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::sqlite::room_repository::SqliteRoomRepository;
    use crate::adapter::sqlite::store::SqliteStore;
    use crate::domain::entities::codes::Sex;
    use crate::domain::entities::room::Room;

    fn setup() -> SqliteStore {
        let store = SqliteStore::open_in_memory().unwrap();
        store.create_schema().unwrap();
        SqliteRoomRepository::new(store.connection())
            .bulk_create(&[
                Room::new(1, "101", "A", 2).unwrap(),
                Room::new(2, "102", "A", 2).unwrap(),
            ])
            .unwrap();
        store
    }

    fn student(id: i64, name: &str, age: i64, sex: &str, room_id: i64) -> Student {
        Student::new(id, name, age, sex, room_id).unwrap()
    }

    #[test]
    fn test_create_and_get_by_id_round_trip() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());
        let original = student(1, "Ann", 20, "F", 1);

        repo.create(&original).unwrap();

        assert_eq!(repo.get_by_id(1).unwrap(), Some(original));
        assert_eq!(repo.get_by_id(2).unwrap(), None);
    }

    #[test]
    fn test_create_with_unknown_room_fails() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());

        let result = repo.create(&student(1, "Ann", 20, "F", 42));

        assert!(matches!(result, Err(AnalyzerError::Persistence(_))));
    }

    #[test]
    fn test_bulk_create_aborts_as_a_whole() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());

        let result = repo.bulk_create(&[
            student(1, "Ann", 20, "F", 1),
            student(2, "Bob", 22, "M", 99),
        ]);

        assert!(matches!(result, Err(AnalyzerError::Persistence(_))));
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn test_bulk_create_is_idempotent() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());
        let students = vec![
            student(1, "Ann", 20, "F", 1),
            student(2, "Bob", 22, "M", 1),
            student(3, "Cid", 21, "M", 2),
        ];

        repo.bulk_create(&students).unwrap();
        repo.bulk_create(&students).unwrap();

        assert_eq!(repo.get_all().unwrap(), students);
    }

    #[test]
    fn test_bulk_create_overwrites_non_key_fields() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());

        repo.bulk_create(&[student(1, "Ann", 20, "F", 1)]).unwrap();
        repo.bulk_create(&[student(1, "Anna", 21, "F", 2)]).unwrap();

        let stored = repo.get_by_id(1).unwrap().unwrap();
        assert_eq!(stored.name(), "Anna");
        assert_eq!(stored.age(), 21);
        assert_eq!(stored.room_id(), 2);
    }

    #[test]
    fn test_get_by_room_id_ordered_by_student_id() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());
        repo.bulk_create(&[
            student(5, "Eve", 23, "F", 1),
            student(2, "Bob", 22, "M", 1),
            student(3, "Cid", 21, "M", 2),
        ])
        .unwrap();

        let in_room: Vec<i64> = repo.get_by_room_id(1).unwrap().iter().map(Student::id).collect();
        assert_eq!(in_room, vec![2, 5]);
        assert!(repo.get_by_room_id(7).unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let store = setup();
        let repo = SqliteStudentRepository::new(store.connection());
        repo.create(&student(1, "Ann", 20, "F", 1)).unwrap();

        repo.update(&student(1, "Ann", 30, "M", 2)).unwrap();
        let updated = repo.get_by_id(1).unwrap().unwrap();
        assert_eq!(updated.age(), 30);
        assert_eq!(updated.sex(), Sex::Male);

        repo.delete(1).unwrap();
        assert!(repo.get_all().unwrap().is_empty());
    }
}
