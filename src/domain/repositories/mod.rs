//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供（ストアごとに1実装）
//! - 依存性逆転の原則（DIP）を実現

pub mod analytics_query_service;
pub mod record_source;
pub mod repository;
pub mod room_repository;
pub mod student_repository;
