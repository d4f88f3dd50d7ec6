//! # Repository Trait
//!
//! エンティティ種別ごとに共通の永続化操作

use crate::domain::errors::AnalyzerResult;

/// 主キーで識別されるエンティティのリポジトリ
///
/// `create` / `bulk_create` はアップサート（同じ主キーの行があれば主キー以外の列を上書き）。
/// 同じデータを何度取り込んでも最終状態は変わらない。
pub trait Repository {
    type Entity;

    /// エンティティをアップサート
    ///
    /// # Errors
    ///
    /// ストアが制約違反などで拒否した場合に `AnalyzerError::Persistence` を返す
    fn create(&self, entity: &Self::Entity) -> AnalyzerResult<()>;

    /// IDでエンティティを取得（存在しなければ `None`）
    fn get_by_id(&self, id: i64) -> AnalyzerResult<Option<Self::Entity>>;

    /// 全エンティティを主キーの昇順で取得
    fn get_all(&self) -> AnalyzerResult<Vec<Self::Entity>>;

    /// 主キー以外の列を更新（該当行がなければ何もしない）
    fn update(&self, entity: &Self::Entity) -> AnalyzerResult<()>;

    /// IDでエンティティを削除
    fn delete(&self, id: i64) -> AnalyzerResult<()>;

    /// 複数エンティティをまとめてアップサート
    ///
    /// # Errors
    ///
    /// いずれかの行が拒否された場合、操作全体が `AnalyzerError::Persistence` で失敗する
    fn bulk_create(&self, entities: &[Self::Entity]) -> AnalyzerResult<()>;
}
