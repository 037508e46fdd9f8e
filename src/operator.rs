//! 操作符注册表：条件树里的逻辑/比较操作符是一个封闭集合。

use std::fmt;

/// 条件操作符。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Op {
    And,
    Or,
    Not,
    Eq,
    Ne,
    Is,
    Gt,
    Gte,
    Lt,
    Lte,
    Between,
    NotBetween,
    In,
    NotIn,
    Like,
    NotLike,
    ILike,
    NotILike,
    StartsWith,
    EndsWith,
    Substring,
    Regexp,
    NotRegexp,
    Overlap,
    Contains,
    Contained,
    Any,
    All,
    Col,
    Match,
}

impl Op {
    /// 全部已注册的操作符。
    pub const ALL: [Op; 30] = [
        Op::And,
        Op::Or,
        Op::Not,
        Op::Eq,
        Op::Ne,
        Op::Is,
        Op::Gt,
        Op::Gte,
        Op::Lt,
        Op::Lte,
        Op::Between,
        Op::NotBetween,
        Op::In,
        Op::NotIn,
        Op::Like,
        Op::NotLike,
        Op::ILike,
        Op::NotILike,
        Op::StartsWith,
        Op::EndsWith,
        Op::Substring,
        Op::Regexp,
        Op::NotRegexp,
        Op::Overlap,
        Op::Contains,
        Op::Contained,
        Op::Any,
        Op::All,
        Op::Col,
        Op::Match,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Is => "is",
            Self::Gt => "gt",
            Self::Gte => "gte",
            Self::Lt => "lt",
            Self::Lte => "lte",
            Self::Between => "between",
            Self::NotBetween => "notBetween",
            Self::In => "in",
            Self::NotIn => "notIn",
            Self::Like => "like",
            Self::NotLike => "notLike",
            Self::ILike => "iLike",
            Self::NotILike => "notILike",
            Self::StartsWith => "startsWith",
            Self::EndsWith => "endsWith",
            Self::Substring => "substring",
            Self::Regexp => "regexp",
            Self::NotRegexp => "notRegexp",
            Self::Overlap => "overlap",
            Self::Contains => "contains",
            Self::Contained => "contained",
            Self::Any => "any",
            Self::All => "all",
            Self::Col => "col",
            Self::Match => "match",
        }
    }

    /// 按名字查找已注册的操作符。
    pub fn lookup(name: &str) -> Option<Op> {
        Self::ALL.into_iter().find(|op| op.as_str() == name)
    }

    /// `and`/`or`/`not`：组合其他条件的操作符。
    pub fn is_logical(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Not)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
