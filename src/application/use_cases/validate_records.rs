//! # Validate Records Use Case
//!
//! 生レコードの読み込みと検証ユースケース

use std::sync::Arc;

use log::{info, warn};

use crate::application::dto::analysis_options::InvalidRecordPolicy;
use crate::domain::entities::room::{Room, RoomRecord};
use crate::domain::entities::student::{Student, StudentRecord};
use crate::domain::errors::{AnalyzerError, AnalyzerResult, ValidationError};
use crate::domain::repositories::record_source::RecordSource;

/// 除外されたレコード
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// "room" または "student"
    pub kind: &'static str,
    pub id: i64,
    pub error: ValidationError,
}

/// 検証済みのエンティティ
#[derive(Debug, Clone, Default)]
pub struct ValidatedRecords {
    pub rooms: Vec<Room>,
    pub students: Vec<Student>,
    pub rejected: Vec<RejectedRecord>,
}

/// レコード検証ユースケース
///
/// レコードソースから部屋・学生を読み込み、エンティティに変換する
pub struct ValidateRecordsUseCase<S: RecordSource> {
    record_source: Arc<S>,
}

impl<S: RecordSource> ValidateRecordsUseCase<S> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `record_source` - レコードソース
    pub fn new(record_source: Arc<S>) -> Self {
        Self { record_source }
    }

    /// レコードを読み込んで検証
    ///
    /// # Arguments
    ///
    /// * `policy` - 不変条件違反のレコードの扱い
    ///
    /// # Errors
    ///
    /// 入力が不正な場合は `MalformedInput`、`Abort` ポリシーで違反が見つかった場合は
    /// `Validation` を返す
    pub fn execute(&self, policy: InvalidRecordPolicy) -> AnalyzerResult<ValidatedRecords> {
        let room_records = self.record_source.load_rooms()?;
        let student_records = self.record_source.load_students()?;
        info!(
            "Loaded {} room records and {} student records",
            room_records.len(),
            student_records.len()
        );

        let mut rejected = Vec::new();
        let rooms: Vec<Room> =
            validate_all(room_records, "room", |r: &RoomRecord| r.id, policy, &mut rejected)?;
        let students: Vec<Student> = validate_all(
            student_records,
            "student",
            |s: &StudentRecord| s.id,
            policy,
            &mut rejected,
        )?;

        Ok(ValidatedRecords {
            rooms,
            students,
            rejected,
        })
    }
}

/// レコードをエンティティに変換する
fn validate_all<R, E>(
    records: Vec<R>,
    kind: &'static str,
    id_of: impl Fn(&R) -> i64,
    policy: InvalidRecordPolicy,
    rejected: &mut Vec<RejectedRecord>,
) -> AnalyzerResult<Vec<E>>
where
    E: TryFrom<R, Error = ValidationError>,
{
    let mut entities = Vec::with_capacity(records.len());

    for record in records {
        let id = id_of(&record);
        match E::try_from(record) {
            Ok(entity) => entities.push(entity),
            Err(error) => match policy {
                InvalidRecordPolicy::Abort => {
                    warn!("Invalid {} record (id {}): {}", kind, id, error);
                    return Err(AnalyzerError::Validation(error));
                }
                InvalidRecordPolicy::Skip => {
                    warn!("Skipping invalid {} record (id {}): {}", kind, id, error);
                    rejected.push(RejectedRecord { kind, id, error });
                }
            },
        }
    }

    Ok(entities)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockRecordSource {
        rooms: AnalyzerResult<Vec<RoomRecord>>,
        students: Vec<StudentRecord>,
    }

    impl RecordSource for MockRecordSource {
        fn load_rooms(&self) -> AnalyzerResult<Vec<RoomRecord>> {
            match &self.rooms {
                Ok(rooms) => Ok(rooms.clone()),
                Err(e) => Err(AnalyzerError::malformed("rooms.json", e.to_string())),
            }
        }

        fn load_students(&self) -> AnalyzerResult<Vec<StudentRecord>> {
            Ok(self.students.clone())
        }
    }

    fn room_record(id: i64, capacity: i64) -> RoomRecord {
        RoomRecord {
            id,
            number: format!("{}", 100 + id),
            building: "A".to_string(),
            capacity,
        }
    }

    fn student_record(id: i64, age: i64, room_id: i64) -> StudentRecord {
        StudentRecord {
            id,
            name: format!("Student {}", id),
            age,
            sex: "F".to_string(),
            room_id,
        }
    }

    #[test]
    fn test_validate_all_valid() {
        let source = Arc::new(MockRecordSource {
            rooms: Ok(vec![room_record(1, 2), room_record(2, 4)]),
            students: vec![student_record(1, 20, 1)],
        });
        let use_case = ValidateRecordsUseCase::new(source);

        let validated = use_case.execute(InvalidRecordPolicy::Abort).unwrap();

        assert_eq!(validated.rooms.len(), 2);
        assert_eq!(validated.students.len(), 1);
        assert!(validated.rejected.is_empty());
    }

    #[test]
    fn test_abort_policy_stops_on_first_violation() {
        let source = Arc::new(MockRecordSource {
            rooms: Ok(vec![room_record(1, 2), room_record(2, 11)]),
            students: vec![],
        });
        let use_case = ValidateRecordsUseCase::new(source);

        let result = use_case.execute(InvalidRecordPolicy::Abort);

        assert!(matches!(
            result,
            Err(AnalyzerError::Validation(ValidationError::CapacityOutOfRange(11)))
        ));
    }

    #[test]
    fn test_skip_policy_excludes_invalid_records() {
        let source = Arc::new(MockRecordSource {
            rooms: Ok(vec![room_record(1, 2), room_record(2, 0)]),
            students: vec![student_record(1, 20, 1), student_record(2, 151, 1)],
        });
        let use_case = ValidateRecordsUseCase::new(source);

        let validated = use_case.execute(InvalidRecordPolicy::Skip).unwrap();

        assert_eq!(validated.rooms.len(), 1);
        assert_eq!(validated.students.len(), 1);
        assert_eq!(validated.rejected.len(), 2);
        assert_eq!(validated.rejected[0].kind, "room");
        assert_eq!(validated.rejected[0].id, 2);
        assert_eq!(
            validated.rejected[1].error,
            ValidationError::AgeOutOfRange(151)
        );
    }

    #[test]
    fn test_malformed_input_is_propagated() {
        let source = Arc::new(MockRecordSource {
            rooms: Err(AnalyzerError::malformed("rooms.json", "expected a JSON array")),
            students: vec![],
        });
        let use_case = ValidateRecordsUseCase::new(source);

        let result = use_case.execute(InvalidRecordPolicy::Skip);

        assert!(matches!(result, Err(AnalyzerError::MalformedInput { .. })));
    }
}
