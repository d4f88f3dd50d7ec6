//! # Student Repository Trait
//!
//! 学生の永続化を抽象化

use super::repository::Repository;
use crate::domain::entities::student::Student;
use crate::domain::errors::AnalyzerResult;

/// 学生リポジトリ
///
/// 学生テーブルは部屋テーブルを外部キーで参照するため、
/// 学生の取り込みは部屋の取り込みが終わった後に行う必要がある
pub trait StudentRepository: Repository<Entity = Student> {
    /// 指定した部屋に住む学生を学生IDの昇順で取得
    fn get_by_room_id(&self, room_id: i64) -> AnalyzerResult<Vec<Student>>;
}
