//! 默认值解析：把属性声明的默认值转换为插入时真正使用的值。

use crate::data_type::DataType;
use crate::dialect::Dialect;
use crate::value::Value;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

/// 解析默认值。
///
/// - 可调用值：调用一次；结果是数据类型标记时渲染为 SQL 文本；
/// - `UUIDV1`/`UUIDV4`/`NOW` 标记：每次调用都生成新值；
/// - 数组与普通对象：返回浅拷贝；
/// - 其他值原样返回。
pub fn to_default_value(value: &Value, dialect: Dialect) -> Value {
    match value {
        Value::Func(f) => match f.call() {
            Value::DataType(dt) => Value::String(dt.to_sql()),
            other => other,
        },
        Value::DataType(DataType::UuidV1) => {
            log::trace!("default value: generating v1 uuid");
            Value::String(new_uuid_v1().to_string())
        }
        Value::DataType(DataType::UuidV4) => {
            log::trace!("default value: generating v4 uuid");
            Value::String(Uuid::new_v4().to_string())
        }
        Value::DataType(DataType::Now) => {
            log::trace!("default value: current timestamp for {dialect}");
            Value::DateTime(now(dialect))
        }
        Value::Array(items) => Value::Array(items.to_vec()),
        Value::Object(map) => Value::Object(map.clone()),
        other => other.clone(),
    }
}

fn new_uuid_v1() -> Uuid {
    // 随机节点号，并置位多播位以区别于真实 MAC 地址
    let b = Uuid::new_v4().into_bytes();
    let node = [b[0] | 0x01, b[1], b[2], b[3], b[4], b[5]];
    Uuid::now_v1(&node)
}

/// 默认值能否作为静态默认值写进表结构。
///
/// 未设置的值、`NOW`/`UUIDV1`/`UUIDV4` 标记以及任何可调用值都必须在插入时解析。
pub fn default_value_schemable(value: &Value) -> bool {
    !matches!(
        value,
        Value::Undefined
            | Value::Func(_)
            | Value::DataType(DataType::Now | DataType::UuidV1 | DataType::UuidV4)
    )
}

/// 当前 UTC 时间：支持毫秒的方言截断到毫秒，其余方言截断到秒。
pub fn now(dialect: Dialect) -> OffsetDateTime {
    let current = OffsetDateTime::now_utc();
    let drop_nanos = if dialect.supports_milliseconds() {
        current.nanosecond() % 1_000_000
    } else {
        current.nanosecond()
    };
    current - Duration::nanoseconds(i64::from(drop_nanos))
}
