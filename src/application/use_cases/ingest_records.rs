//! # Ingest Records Use Case
//!
//! 検証済みエンティティの取り込みユースケース

use std::sync::Arc;

use log::info;

use crate::domain::entities::room::Room;
use crate::domain::entities::student::Student;
use crate::domain::errors::AnalyzerResult;
use crate::domain::repositories::room_repository::RoomRepository;
use crate::domain::repositories::student_repository::StudentRepository;

/// 取り込み結果のサマリー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    pub rooms_upserted: usize,
    pub students_upserted: usize,
}

/// 取り込みユースケース
///
/// 学生は部屋を外部キーで参照するため、必ず部屋を先に永続化する
pub struct IngestRecordsUseCase<R: RoomRepository, S: StudentRepository> {
    room_repository: Arc<R>,
    student_repository: Arc<S>,
}

impl<R: RoomRepository, S: StudentRepository> IngestRecordsUseCase<R, S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `room_repository` - 部屋リポジトリ
    /// * `student_repository` - 学生リポジトリ
    pub fn new(room_repository: Arc<R>, student_repository: Arc<S>) -> Self {
        Self {
            room_repository,
            student_repository,
        }
    }

    /// 部屋→学生の順にアップサート
    ///
    /// # Errors
    ///
    /// いずれかの一括操作が失敗した場合に `Persistence` を返す。
    /// 部屋の取り込みに失敗した場合、学生の取り込みは行わない
    pub fn execute(&self, rooms: &[Room], students: &[Student]) -> AnalyzerResult<IngestSummary> {
        self.room_repository.bulk_create(rooms)?;
        info!("Upserted {} rooms", rooms.len());

        self.student_repository.bulk_create(students)?;
        info!("Upserted {} students", students.len());

        Ok(IngestSummary {
            rooms_upserted: rooms.len(),
            students_upserted: students.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::errors::AnalyzerError;
    use crate::domain::repositories::repository::Repository;

    type CallLog = Arc<Mutex<Vec<String>>>;

    struct MockRoomRepository {
        calls: CallLog,
        should_fail: bool,
    }

    impl Repository for MockRoomRepository {
        type Entity = Room;

        fn create(&self, _room: &Room) -> AnalyzerResult<()> {
            Ok(())
        }

        fn get_by_id(&self, _id: i64) -> AnalyzerResult<Option<Room>> {
            Ok(None)
        }

        fn get_all(&self) -> AnalyzerResult<Vec<Room>> {
            Ok(vec![])
        }

        fn update(&self, _room: &Room) -> AnalyzerResult<()> {
            Ok(())
        }

        fn delete(&self, _id: i64) -> AnalyzerResult<()> {
            Ok(())
        }

        fn bulk_create(&self, rooms: &[Room]) -> AnalyzerResult<()> {
            if self.should_fail {
                return Err(AnalyzerError::persistence("rooms table is locked"));
            }
            self.calls
                .lock()
                .unwrap()
                .push(format!("rooms:{}", rooms.len()));
            Ok(())
        }
    }

    impl RoomRepository for MockRoomRepository {}

    struct MockStudentRepository {
        calls: CallLog,
    }

    impl Repository for MockStudentRepository {
        type Entity = Student;

        fn create(&self, _student: &Student) -> AnalyzerResult<()> {
            Ok(())
        }

        fn get_by_id(&self, _id: i64) -> AnalyzerResult<Option<Student>> {
            Ok(None)
        }

        fn get_all(&self) -> AnalyzerResult<Vec<Student>> {
            Ok(vec![])
        }

        fn update(&self, _student: &Student) -> AnalyzerResult<()> {
            Ok(())
        }

        fn delete(&self, _id: i64) -> AnalyzerResult<()> {
            Ok(())
        }

        fn bulk_create(&self, students: &[Student]) -> AnalyzerResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("students:{}", students.len()));
            Ok(())
        }
    }

    impl StudentRepository for MockStudentRepository {
        fn get_by_room_id(&self, _room_id: i64) -> AnalyzerResult<Vec<Student>> {
            Ok(vec![])
        }
    }

    fn fixtures() -> (Vec<Room>, Vec<Student>) {
        let rooms = vec![
            Room::new(1, "101", "A", 2).unwrap(),
            Room::new(2, "102", "A", 2).unwrap(),
        ];
        let students = vec![
            Student::new(1, "Ann", 20, "F", 1).unwrap(),
            Student::new(2, "Bob", 22, "M", 1).unwrap(),
            Student::new(3, "Cid", 21, "M", 2).unwrap(),
        ];
        (rooms, students)
    }

    #[test]
    fn test_ingest_persists_rooms_before_students() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let use_case = IngestRecordsUseCase::new(
            Arc::new(MockRoomRepository {
                calls: calls.clone(),
                should_fail: false,
            }),
            Arc::new(MockStudentRepository {
                calls: calls.clone(),
            }),
        );
        let (rooms, students) = fixtures();

        let summary = use_case.execute(&rooms, &students).unwrap();

        assert_eq!(summary.rooms_upserted, 2);
        assert_eq!(summary.students_upserted, 3);
        assert_eq!(
            *calls.lock().unwrap(),
            vec!["rooms:2".to_string(), "students:3".to_string()]
        );
    }

    #[test]
    fn test_room_failure_skips_students() {
        let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
        let use_case = IngestRecordsUseCase::new(
            Arc::new(MockRoomRepository {
                calls: calls.clone(),
                should_fail: true,
            }),
            Arc::new(MockStudentRepository {
                calls: calls.clone(),
            }),
        );
        let (rooms, students) = fixtures();

        let result = use_case.execute(&rooms, &students);

        assert!(matches!(result, Err(AnalyzerError::Persistence(_))));
        assert!(calls.lock().unwrap().is_empty());
    }
}
