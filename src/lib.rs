//! # Roomstat
//!
//! 部屋と学生のレコードを検証・永続化し、居住状況の分析レポートを出力するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、不変条件、Repository trait、純粋な集計・整形ロジック
//! - **Application層**: 検証・取り込み・分析のユースケース
//! - **Adapter層**: 外部システムとの統合（SQLite, JSONファイル, コンソール出力, 設定ファイル）
//! - **Driver層**: CLI、依存性注入、実行シーケンス

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
