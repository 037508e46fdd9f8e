//! 动态值类型：选项、条件值、默认值都以 `Value` 树的形式在各辅助函数间传递。

use crate::data_type::DataType;
use crate::fragment::SqlFragment;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// 普通对象（plain object）：按键排序的键值表。
pub type ValueMap = BTreeMap<String, Value>;

/// 动态值。
///
/// `Fragment`/`Func`/`Handle` 内部都是 `Arc`，`clone()` 只复制引用，
/// 因此外部资源句柄永远不会被意外复制。
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// 未设置（区别于显式的 `Null`）。
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    DateTime(time::OffsetDateTime),
    Array(Vec<Value>),
    Object(ValueMap),
    /// 原始 SQL 片段。
    Fragment(Arc<SqlFragment>),
    /// 可调用的值（例如动态默认值）。
    Func(ValueFn),
    /// 数据类型标记（例如 `UUIDV4`、`NOW`）。
    DataType(DataType),
    /// 不透明的外部资源句柄。
    Handle(Handle),
}

/// 可调用值。`native` 标记该函数是否为内建函数（见 `merge_defaults`）。
#[derive(Clone)]
pub struct ValueFn {
    f: Arc<dyn Fn() -> Value + Send + Sync>,
    native: bool,
}

impl ValueFn {
    pub fn new(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self {
            f: Arc::new(f),
            native: false,
        }
    }

    /// 创建一个被视为内建函数的可调用值。
    pub fn native(f: impl Fn() -> Value + Send + Sync + 'static) -> Self {
        Self {
            f: Arc::new(f),
            native: true,
        }
    }

    pub fn call(&self) -> Value {
        (self.f)()
    }

    pub fn is_native(&self) -> bool {
        self.native
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}

impl fmt::Debug for ValueFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueFn")
            .field("native", &self.native)
            .finish_non_exhaustive()
    }
}

/// 外部资源句柄（连接、事务、模型实例等），只按引用共享。
#[derive(Clone)]
pub struct Handle(Arc<dyn Any + Send + Sync>);

impl Handle {
    pub fn new<T: Any + Send + Sync>(v: T) -> Self {
        Self(Arc::new(v))
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.downcast_ref::<T>()
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Handle(..)")
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => (*a as f64) == *b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::DateTime(a), Self::DateTime(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            (Self::Fragment(a), Self::Fragment(b)) => a == b,
            (Self::Func(a), Self::Func(b)) => a.ptr_eq(b),
            (Self::DataType(a), Self::DataType(b)) => a == b,
            (Self::Handle(a), Self::Handle(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// 将 `Option<T>` 映射为 `Value`：`None => Null`，`Some(v) => v.into()`。
    pub fn from_option<T: Into<Value>>(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `Null` 或 `Undefined`。
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    pub fn is_plain_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(_))
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Self::Func(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ValueMap> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&SqlFragment> {
        match self {
            Self::Fragment(f) => Some(f),
            _ => None,
        }
    }

    /// 动态语言意义上的“真值”。
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(b) => *b,
            Self::Int(i) => *i != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::String(s) => !s.is_empty(),
            _ => true,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::DateTime(dt) => {
                match dt.format(&time::format_description::well_known::Rfc3339) {
                    Ok(s) => f.write_str(&s),
                    Err(_) => write!(f, "{dt}"),
                }
            }
            Self::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                f.write_str(&parts.join(","))
            }
            Self::Object(_) => f.write_str("[object Object]"),
            Self::Fragment(frag) => write!(f, "{frag:?}"),
            Self::Func(_) => f.write_str("[function]"),
            Self::DataType(dt) => f.write_str(&dt.to_sql()),
            Self::Handle(_) => f.write_str("[handle]"),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

macro_rules! from_int {
    ($($t:ty),+ $(,)?) => {
        $(impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::Int(v as i64)
            }
        })+
    };
}

from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v as f64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<time::OffsetDateTime> for Value {
    fn from(v: time::OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl From<ValueMap> for Value {
    fn from(v: ValueMap) -> Self {
        Self::Object(v)
    }
}

impl From<SqlFragment> for Value {
    fn from(v: SqlFragment) -> Self {
        Self::Fragment(Arc::new(v))
    }
}

impl From<Arc<SqlFragment>> for Value {
    fn from(v: Arc<SqlFragment>) -> Self {
        Self::Fragment(v)
    }
}

impl From<ValueFn> for Value {
    fn from(v: ValueFn) -> Self {
        Self::Func(v)
    }
}

impl From<DataType> for Value {
    fn from(v: DataType) -> Self {
        Self::DataType(v)
    }
}

impl From<Handle> for Value {
    fn from(v: Handle) -> Self {
        Self::Handle(v)
    }
}
