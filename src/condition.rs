//! 条件树：用带标签的节点代替“字符串键与操作符键混杂”的条件对象。
use crate::fragment::SqlFragment;
use crate::operator::Op;
use crate::value::Value;
use std::sync::Arc;

/// 条件节点。
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// `attribute <comparator> value`。
    Leaf {
        attribute: String,
        comparator: Op,
        value: Value,
    },
    /// 属性下的嵌套条件（例如 JSON 路径 `meta.video.url`）。
    Nested { attribute: String, conditions: Where },
    /// `and`/`or`/`not` 组合的子条件。
    Composite {
        operator: Op,
        children: Vec<Condition>,
    },
    /// 原始 SQL 条件片段。
    Raw(Arc<SqlFragment>),
}

impl Condition {
    pub fn leaf(attribute: impl Into<String>, comparator: Op, value: impl Into<Value>) -> Self {
        Self::Leaf {
            attribute: attribute.into(),
            comparator,
            value: value.into(),
        }
    }

    pub fn nested(attribute: impl Into<String>, conditions: Where) -> Self {
        Self::Nested {
            attribute: attribute.into(),
            conditions,
        }
    }

    pub fn composite(operator: Op, children: impl IntoIterator<Item = Condition>) -> Self {
        Self::Composite {
            operator,
            children: children.into_iter().collect(),
        }
    }

    pub fn raw(fragment: impl Into<Arc<SqlFragment>>) -> Self {
        Self::Raw(fragment.into())
    }

    /// 属性节点（`Leaf`/`Nested`）对应的属性名。
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Leaf { attribute, .. } | Self::Nested { attribute, .. } => Some(attribute),
            _ => None,
        }
    }
}

/// 一组按 AND 组合的条件，对应一个条件对象。
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Where {
    conditions: Vec<Condition>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn conditions_mut(&mut self) -> &mut Vec<Condition> {
        &mut self.conditions
    }

    pub fn into_conditions(self) -> Vec<Condition> {
        self.conditions
    }

    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn equal(self, attribute: impl Into<String>, value: impl Into<Value>) -> Self {
        self.add_condition(Condition::leaf(attribute, Op::Eq, value))
    }

    pub fn compare(
        self,
        attribute: impl Into<String>,
        comparator: Op,
        value: impl Into<Value>,
    ) -> Self {
        self.add_condition(Condition::leaf(attribute, comparator, value))
    }

    pub fn nested(self, attribute: impl Into<String>, conditions: Where) -> Self {
        self.add_condition(Condition::nested(attribute, conditions))
    }

    pub fn and(self, children: impl IntoIterator<Item = Condition>) -> Self {
        self.add_condition(Condition::composite(Op::And, children))
    }

    pub fn or(self, children: impl IntoIterator<Item = Condition>) -> Self {
        self.add_condition(Condition::composite(Op::Or, children))
    }

    pub fn not(self, children: impl IntoIterator<Item = Condition>) -> Self {
        self.add_condition(Condition::composite(Op::Not, children))
    }

    pub fn raw(self, fragment: impl Into<Arc<SqlFragment>>) -> Self {
        self.add_condition(Condition::raw(fragment))
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

impl FromIterator<Condition> for Where {
    fn from_iter<I: IntoIterator<Item = Condition>>(iter: I) -> Self {
        Self {
            conditions: iter.into_iter().collect(),
        }
    }
}

/// 条件对象的“复杂键”：操作符键或属性键。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplexKey {
    Operator(Op),
    Attribute(String),
}

/// 顶层组合节点使用的操作符，按首次出现的顺序去重。
pub fn get_operators(w: &Where) -> Vec<Op> {
    let mut ops = Vec::new();
    for c in &w.conditions {
        if let Condition::Composite { operator, .. } = c
            && !ops.contains(operator)
        {
            ops.push(*operator);
        }
    }
    ops
}

/// 先列出操作符键，再列出属性键；同名键只计一次。
pub fn get_complex_keys(w: &Where) -> Vec<ComplexKey> {
    let mut keys: Vec<ComplexKey> = get_operators(w)
        .into_iter()
        .map(ComplexKey::Operator)
        .collect();
    for attr in w.conditions.iter().filter_map(Condition::attribute) {
        let key = ComplexKey::Attribute(attr.to_string());
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// 数组取长度，条件对象取复杂键数量。
pub trait ComplexSize {
    fn complex_size(&self) -> usize;
}

impl ComplexSize for Where {
    fn complex_size(&self) -> usize {
        get_complex_keys(self).len()
    }
}

impl<T> ComplexSize for [T] {
    fn complex_size(&self) -> usize {
        self.len()
    }
}

impl<T> ComplexSize for Vec<T> {
    fn complex_size(&self) -> usize {
        self.len()
    }
}

pub fn get_complex_size<T: ComplexSize + ?Sized>(target: &T) -> usize {
    target.complex_size()
}

/// 没有属性键、没有操作符键，也没有原始条件。
pub fn is_where_empty(w: &Where) -> bool {
    w.conditions.is_empty()
}

/// 数组中任一元素是普通条件对象或原始条件片段时，可以把数组当作 AND 处理。
pub fn can_treat_array_as_and(arr: &[Value]) -> bool {
    arr.iter().any(|v| match v {
        Value::Object(_) => true,
        Value::Fragment(f) => f.is_raw_condition(),
        _ => false,
    })
}
