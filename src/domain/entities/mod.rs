//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **Room**: 部屋（建物・定員を持つ）
//! - **Student**: 学生（ちょうど1つの部屋に割り当てられる）
//! - **codes**: 建物コード・性別コードの閉じた集合
//! - **analytics**: クエリ結果としてのみ存在する読み取り専用の行
//! - **dataset_summary**: 検証済みレコード全体の概要（プレビュー用）

pub mod analytics;
pub mod codes;
pub mod dataset_summary;
pub mod room;
pub mod student;

/// 上位N件クエリのデフォルト件数
pub const DEFAULT_QUERY_LIMIT: usize = 10;
