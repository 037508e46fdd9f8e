//! 原始 SQL 片段：标记一个值应当作为 SQL 语法输出，而不是绑定成字面量参数。

use crate::object::clone_deep;
use crate::operator::Op;
use crate::value::{Value, ValueMap};

/// 可显式克隆的片段能力。深拷贝遇到实现了它的片段时调用 `clone_fragment`，
/// 其他片段按引用保留。
pub trait CloneFragment {
    fn clone_fragment(&self) -> SqlFragment;
}

/// 函数调用，例如 `COUNT(id)`。
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Value>,
}

impl CloneFragment for FunctionCall {
    fn clone_fragment(&self) -> SqlFragment {
        SqlFragment::Function(FunctionCall {
            name: self.name.clone(),
            args: self.args.iter().map(|a| clone_deep(a, false)).collect(),
        })
    }
}

/// JSON 访问：要么是一组条件，要么是路径加可选的比较值。
#[derive(Debug, Clone, PartialEq)]
pub enum JsonAccess {
    Conditions(ValueMap),
    Path { path: String, value: Option<Value> },
}

/// 原始 SQL 片段。
#[derive(Debug, Clone, PartialEq)]
pub enum SqlFragment {
    Function(FunctionCall),
    ColumnRef(String),
    Cast {
        value: Box<Value>,
        type_name: String,
        json: bool,
    },
    Literal(String),
    JsonAccess(JsonAccess),
    /// 原始比较条件 `attribute <comparator> logic`。
    RawCondition {
        attribute: Box<Value>,
        comparator: Op,
        logic: Box<Value>,
    },
}

impl SqlFragment {
    pub fn function(name: impl Into<String>, args: impl IntoIterator<Item = Value>) -> Self {
        Self::Function(FunctionCall {
            name: name.into(),
            args: args.into_iter().collect(),
        })
    }

    pub fn col(name: impl Into<String>) -> Self {
        Self::ColumnRef(name.into())
    }

    pub fn cast(value: impl Into<Value>, type_name: impl Into<String>) -> Self {
        Self::Cast {
            value: Box::new(value.into()),
            type_name: type_name.into(),
            json: false,
        }
    }

    /// 对 JSON 值做类型转换。
    pub fn json_cast(value: impl Into<Value>, type_name: impl Into<String>) -> Self {
        Self::Cast {
            value: Box::new(value.into()),
            type_name: type_name.into(),
            json: true,
        }
    }

    pub fn literal(sql: impl Into<String>) -> Self {
        Self::Literal(sql.into())
    }

    pub fn json_path(path: impl Into<String>, value: Option<Value>) -> Self {
        Self::JsonAccess(JsonAccess::Path {
            path: path.into(),
            value,
        })
    }

    pub fn json_conditions(conditions: ValueMap) -> Self {
        Self::JsonAccess(JsonAccess::Conditions(conditions))
    }

    /// 两参数形式：比较符默认为 `=`。
    pub fn where_(attribute: impl Into<Value>, logic: impl Into<Value>) -> Self {
        Self::where_with(attribute, Op::Eq, logic)
    }

    pub fn where_with(
        attribute: impl Into<Value>,
        comparator: Op,
        logic: impl Into<Value>,
    ) -> Self {
        Self::RawCondition {
            attribute: Box::new(attribute.into()),
            comparator,
            logic: Box::new(logic.into()),
        }
    }

    pub fn is_raw_condition(&self) -> bool {
        matches!(self, Self::RawCondition { .. })
    }

    /// 只有函数调用片段具备显式克隆能力。
    pub fn as_cloneable(&self) -> Option<&dyn CloneFragment> {
        match self {
            Self::Function(call) => Some(call as &dyn CloneFragment),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonAccess, SqlFragment};
    use crate::operator::Op;
    use crate::value::Value;
    use pretty_assertions::assert_eq;

    #[test]
    fn where_two_args_defaults_to_eq() {
        let w = SqlFragment::where_(SqlFragment::col("age"), 18);
        match w {
            SqlFragment::RawCondition {
                comparator, logic, ..
            } => {
                assert_eq!(comparator, Op::Eq);
                assert_eq!(*logic, Value::Int(18));
            }
            other => panic!("unexpected fragment {other:?}"),
        }
    }

    #[test]
    fn where_with_keeps_comparator() {
        let w = SqlFragment::where_with("age", Op::Gt, 18);
        assert!(w.is_raw_condition());
        assert_eq!(
            w,
            SqlFragment::RawCondition {
                attribute: Box::new(Value::from("age")),
                comparator: Op::Gt,
                logic: Box::new(Value::Int(18)),
            }
        );
    }

    #[test]
    fn json_path_and_conditions() {
        let p = SqlFragment::json_path("meta.video.url", Some(Value::from("x")));
        assert_eq!(
            p,
            SqlFragment::JsonAccess(JsonAccess::Path {
                path: "meta.video.url".into(),
                value: Some(Value::from("x")),
            })
        );
        let c = SqlFragment::json_conditions(crate::value_map! { "a" => 1 });
        assert!(matches!(c, SqlFragment::JsonAccess(JsonAccess::Conditions(_))));
    }

    #[test]
    fn only_functions_are_cloneable() {
        let f = SqlFragment::function("COUNT", [Value::from(SqlFragment::col("id"))]);
        let cloned = f.as_cloneable().map(|c| c.clone_fragment());
        assert_eq!(cloned, Some(f));
        assert!(SqlFragment::literal("NOW()").as_cloneable().is_none());
        assert!(SqlFragment::col("id").as_cloneable().is_none());
        assert!(SqlFragment::cast("1", "INTEGER").as_cloneable().is_none());
    }
}
