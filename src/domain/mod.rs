//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - ストレージやファイル形式について何も知らない
//! - エンティティは生成時に不変条件を検証する（不正なエンティティは存在しない）
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（Room, Studentなど）と分析結果の行
//! - **errors**: エラー分類（検証・入力・永続化・クエリ）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（統計計算、表の整形）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
