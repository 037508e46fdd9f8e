//! 数据类型标记：字段映射与默认值解析都依赖这些标记做特殊处理。

use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DataTypeError {
    #[error("data type unknown name {0:?}")]
    Unknown(String),
}

/// 模型属性的数据类型。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataType {
    String(Option<u32>),
    Text,
    Integer,
    BigInt,
    Float,
    Double,
    Boolean,
    Date,
    DateOnly,
    Uuid,
    /// 默认值标记：插入时生成 v1 UUID。
    UuidV1,
    /// 默认值标记：插入时生成 v4 UUID。
    UuidV4,
    /// 默认值标记：插入时取当前时间。
    Now,
    Json,
    Jsonb,
    Hstore,
    Enum(Vec<String>),
    /// 虚拟属性：不落库，`fields` 为计算它所需的真实属性。
    Virtual {
        return_type: Option<Box<DataType>>,
        fields: Vec<String>,
    },
}

impl DataType {
    pub fn virtual_with(fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Virtual {
            return_type: None,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// 渲染为 SQL 类型文本。
    pub fn to_sql(&self) -> String {
        match self {
            Self::String(len) => format!("VARCHAR({})", len.unwrap_or(255)),
            Self::Text => "TEXT".to_string(),
            Self::Integer => "INTEGER".to_string(),
            Self::BigInt => "BIGINT".to_string(),
            Self::Float => "FLOAT".to_string(),
            Self::Double => "DOUBLE PRECISION".to_string(),
            Self::Boolean => "TINYINT(1)".to_string(),
            Self::Date => "DATETIME".to_string(),
            Self::DateOnly => "DATE".to_string(),
            Self::Uuid => "UUID".to_string(),
            Self::UuidV1 => "UUIDV1".to_string(),
            Self::UuidV4 => "UUIDV4".to_string(),
            Self::Now => "NOW".to_string(),
            Self::Json => "JSON".to_string(),
            Self::Jsonb => "JSONB".to_string(),
            Self::Hstore => "HSTORE".to_string(),
            Self::Enum(values) => {
                let quoted: Vec<String> = values
                    .iter()
                    .map(|v| format!("'{}'", v.replace('\'', "''")))
                    .collect();
                format!("ENUM({})", quoted.join(", "))
            }
            Self::Virtual { return_type, .. } => match return_type {
                Some(t) => t.to_sql(),
                None => "VIRTUAL".to_string(),
            },
        }
    }

    /// JSON/JSONB/HSTORE 这类结构化类型内部的键必须原样保留。
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Json | Self::Jsonb | Self::Hstore)
    }

    pub fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual { .. })
    }

    /// 虚拟属性依赖的真实属性；非虚拟类型返回空切片。
    pub fn virtual_fields(&self) -> &[String] {
        match self {
            Self::Virtual { fields, .. } => fields,
            _ => &[],
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl FromStr for DataType {
    type Err = DataTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = match s.trim().to_ascii_uppercase().as_str() {
            "STRING" | "VARCHAR" => Self::String(None),
            "TEXT" => Self::Text,
            "INTEGER" | "INT" => Self::Integer,
            "BIGINT" => Self::BigInt,
            "FLOAT" => Self::Float,
            "DOUBLE" => Self::Double,
            "BOOLEAN" => Self::Boolean,
            "DATE" => Self::Date,
            "DATEONLY" => Self::DateOnly,
            "UUID" => Self::Uuid,
            "UUIDV1" => Self::UuidV1,
            "UUIDV4" => Self::UuidV4,
            "NOW" => Self::Now,
            "JSON" => Self::Json,
            "JSONB" => Self::Jsonb,
            "HSTORE" => Self::Hstore,
            "VIRTUAL" => Self::Virtual {
                return_type: None,
                fields: Vec::new(),
            },
            _ => return Err(DataTypeError::Unknown(s.to_string())),
        };
        Ok(t)
    }
}
