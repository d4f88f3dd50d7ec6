//! Optimization Advisor
//!
//! ストアの最適化に関する静的なアドバイス

pub const ADVICE_TITLE: &str = "DATABASE OPTIMIZATION RECOMMENDATIONS";

const RULE_WIDTH: usize = 60;

const EXISTING_INDEXES: &[&str] = &[
    "Existing indexes created with the schema:",
    "  - PRIMARY KEY on rooms.id and students.id",
    "  - INDEX on rooms.building for building-based queries",
    "  - INDEX on rooms.capacity for capacity-based queries",
    "  - INDEX on students.room_id for JOIN operations",
    "  - INDEX on students.age for age-based queries",
    "  - INDEX on students.sex for sex-based queries",
    "  - COMPOSITE INDEX on students.age, students.sex for combined queries",
];

const SUGGESTED_INDEXES: &[&str] = &[
    "Consider adding these indexes for specific use cases:",
    "  - INDEX on students.name for name-based searches",
    "  - INDEX on rooms.number for room number searches",
    "  - COMPOSITE INDEX on rooms.building, rooms.number for building+room queries",
];

const QUERY_TIPS: &[&str] = &[
    "Query optimization tips:",
    "  - Use LIMIT clauses to restrict result sets",
    "  - Filter with WHERE before joining when possible",
    "  - Use EXPLAIN QUERY PLAN to inspect how a query is executed",
    "  - Run ANALYZE after large loads to refresh planner statistics",
];

/// 最適化アドバイザ
#[derive(Debug, Default, Clone, Copy)]
pub struct OptimizationAdvisor;

impl OptimizationAdvisor {
    pub fn new() -> Self {
        Self
    }

    /// 番号付きのアドバイス一覧
    pub fn recommendations(&self) -> Vec<&'static str> {
        EXISTING_INDEXES
            .iter()
            .chain(SUGGESTED_INDEXES)
            .chain(QUERY_TIPS)
            .copied()
            .collect()
    }

    /// 表示用のテキスト
    pub fn render(&self) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let body = self
            .recommendations()
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {}", i + 1, line))
            .collect::<Vec<_>>()
            .join("\n");

        let ddl = self
            .create_index_statements()
            .iter()
            .map(|sql| format!("  {};", sql))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "\n{}\n{}\n{}\n\nSuggested index DDL:\n{}\n\n{}",
            ADVICE_TITLE, rule, body, ddl, rule
        )
    }

    /// 追加を勧めるインデックスのDDL（何度実行しても同じ結果になる）
    pub fn create_index_statements(&self) -> Vec<&'static str> {
        vec![
            "CREATE INDEX IF NOT EXISTS idx_students_name ON students(name)",
            "CREATE INDEX IF NOT EXISTS idx_rooms_number ON rooms(number)",
            "CREATE INDEX IF NOT EXISTS idx_rooms_building_number ON rooms(building, number)",
        ]
    }
}
