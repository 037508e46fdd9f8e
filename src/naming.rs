//! 标识符相关的小工具：列名记号、联结表名、索引名与枚举类型名。

use crate::case::Naming;
use crate::model::ModelDefinition;

/// 形如 `$user.name$` 的字符串表示列引用而不是字面量。只看首尾字符，单独的 `$` 也算。
pub fn is_col_string(s: &str) -> bool {
    s.starts_with('$') && s.ends_with('$')
}

/// 与参数顺序无关地拼接两个表名：忽略大小写比较后较小者在前。
pub fn combine_table_names(a: &str, b: &str) -> String {
    let (la, lb) = (a.to_lowercase(), b.to_lowercase());
    let a_first = match la.cmp(&lb) {
        std::cmp::Ordering::Equal => a <= b,
        ord => ord.is_lt(),
    };
    if a_first {
        format!("{a}{b}")
    } else {
        format!("{b}{a}")
    }
}

/// `enum_<table>_<column>`。
pub fn generate_enum_name(table: &str, column: &str) -> String {
    format!("enum_{table}_{column}")
}

/// 从 `index`（按字符计）开始删除 `count` 个字符并插入 `add`。
pub fn splice_str(s: &str, index: usize, count: usize, add: &str) -> String {
    let head: String = s.chars().take(index).collect();
    let tail: String = s.chars().skip(index + count).collect();
    format!("{head}{add}{tail}")
}

/// 表引用：可带 schema。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub table_name: String,
    pub schema: Option<String>,
}

impl TableRef {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

impl From<&str> for TableRef {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for TableRef {
    fn from(v: String) -> Self {
        Self::new(v)
    }
}

impl From<&ModelDefinition> for TableRef {
    fn from(m: &ModelDefinition) -> Self {
        Self::new(m.table_name())
    }
}

/// 索引字段：列名，或带 `name`/`attribute` 的描述。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexField {
    Name(String),
    Descriptor {
        name: Option<String>,
        attribute: Option<String>,
        order: Option<String>,
        length: Option<u32>,
    },
}

impl IndexField {
    pub fn column_name(&self) -> &str {
        match self {
            Self::Name(n) => n,
            Self::Descriptor {
                name, attribute, ..
            } => name.as_deref().or(attribute.as_deref()).unwrap_or_default(),
        }
    }
}

impl From<&str> for IndexField {
    fn from(v: &str) -> Self {
        Self::Name(v.to_string())
    }
}

/// 索引定义。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexDefinition {
    pub name: Option<String>,
    pub fields: Vec<IndexField>,
    pub unique: bool,
}

impl IndexDefinition {
    pub fn new(fields: impl IntoIterator<Item = impl Into<IndexField>>) -> Self {
        Self {
            name: None,
            fields: fields.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

/// 索引未命名时，用表名与字段名下划线化后生成名字。
pub fn name_index(
    mut index: IndexDefinition,
    table: impl Into<TableRef>,
    naming: &Naming,
) -> IndexDefinition {
    if index.name.is_none() {
        let table = table.into();
        let fields: Vec<&str> = index.fields.iter().map(IndexField::column_name).collect();
        let raw = format!("{}_{}", table.table_name, fields.join("_"));
        index.name = Some(naming.underscore(&raw));
    }
    index
}
