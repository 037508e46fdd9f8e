//! 数据库方言：控制标识符引号字符与时间精度。

use std::fmt;
use std::str::FromStr;

/// 默认的标识符引号字符。
pub const TICK_CHAR: char = '`';

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DialectError {
    #[error("dialect unknown name {0:?}")]
    Unknown(String),
}

/// 目标数据库方言。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    MySQL,
    MariaDB,
    Postgres,
    SQLite,
    MSSQL,
    Db2,
    Snowflake,
    Oracle,
}

impl Dialect {
    pub fn name(self) -> &'static str {
        match self {
            Self::MySQL => "mysql",
            Self::MariaDB => "mariadb",
            Self::Postgres => "postgres",
            Self::SQLite => "sqlite",
            Self::MSSQL => "mssql",
            Self::Db2 => "db2",
            Self::Snowflake => "snowflake",
            Self::Oracle => "oracle",
        }
    }

    /// 时间值是否保留毫秒。
    pub fn supports_milliseconds(self) -> bool {
        matches!(
            self,
            Self::MariaDB | Self::MySQL | Self::Postgres | Self::SQLite | Self::MSSQL
        )
    }

    pub fn tick_char(self) -> char {
        match self {
            Self::MySQL | Self::MariaDB => TICK_CHAR,
            Self::Postgres
            | Self::SQLite
            | Self::MSSQL
            | Self::Db2
            | Self::Snowflake
            | Self::Oracle => '"',
        }
    }

    /// 为标识符加上本方言的引号（先去掉已有的引号字符）。
    pub fn quote(self, name: &str) -> String {
        add_ticks(name, Some(self.tick_char()))
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = match s.trim().to_ascii_lowercase().as_str() {
            "mysql" => Self::MySQL,
            "mariadb" => Self::MariaDB,
            "postgres" | "postgresql" => Self::Postgres,
            "sqlite" => Self::SQLite,
            "mssql" => Self::MSSQL,
            "db2" => Self::Db2,
            "snowflake" => Self::Snowflake,
            "oracle" => Self::Oracle,
            _ => return Err(DialectError::Unknown(s.to_string())),
        };
        Ok(d)
    }
}

/// 用引号字符包裹 `s`；`s` 内部已有的引号字符会先被全部删除。
pub fn add_ticks(s: &str, tick: Option<char>) -> String {
    let tick = tick.unwrap_or(TICK_CHAR);
    format!("{tick}{}{tick}", remove_ticks(s, Some(tick)))
}

/// 删除 `s` 中所有引号字符。
pub fn remove_ticks(s: &str, tick: Option<char>) -> String {
    let tick = tick.unwrap_or(TICK_CHAR);
    s.replace(tick, "")
}
