//! # Enumerated Codes
//!
//! 建物コードと性別コード（どちらも閉じた集合）

use std::fmt;
use std::str::FromStr;

/// 建物コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Building {
    A,
    B,
    C,
}

impl Building {
    pub const ALL: [Building; 3] = [Building::A, Building::B, Building::C];

    /// 永続化・表示に使うコード文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            Building::A => "A",
            Building::B => "B",
            Building::C => "C",
        }
    }

    /// 有効なコードの一覧（エラーメッセージ用）
    pub fn code_list() -> String {
        Self::ALL
            .iter()
            .map(Building::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Building {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|building| building.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Building {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 性別コード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const ALL: [Sex; 2] = [Sex::Male, Sex::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl FromStr for Sex {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|sex| sex.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
