//! 通用对象工具：默认值合并、选项合并、深拷贝与扁平化。
//!
//! 这些函数只对“普通数据”（`Value::Object` / `Value::Array`）做结构化处理，
//! 片段、函数与外部句柄一律按引用传递，绝不复制。

use crate::case::camelize;
use crate::value::{Value, ValueMap};
use std::sync::Arc;

/// 把 `defaults` 合并进 `target`：`target` 上已有的具体值（包括 `Null`）不会被覆盖。
///
/// - 两侧都是普通对象时递归合并；
/// - `target` 上是内建函数时，若默认值为真值则由默认值替换；
/// - `target` 上为 `Undefined` 或不存在时取默认值。
pub fn merge_defaults(mut target: ValueMap, defaults: &ValueMap) -> ValueMap {
    for (key, source) in defaults {
        if source.is_undefined() {
            continue;
        }
        let merged = match target.remove(key) {
            None | Some(Value::Undefined) => source.clone(),
            Some(Value::Object(existing)) => match source {
                Value::Object(src) => Value::Object(merge_defaults(existing, src)),
                other => other.clone(),
            },
            Some(Value::Func(f)) if f.is_native() && source.is_truthy() => source.clone(),
            Some(existing) => existing,
        };
        target.insert(key.clone(), merged);
    }
    target
}

/// 按顺序合并多个对象，不深拷贝输入（输入可能持有外部资源句柄）。
///
/// 同名键先出现者优先；两侧都是普通对象时递归合并；两侧都是数组时拼接，
/// 后出现的数组在前。`Undefined` 值被忽略。
pub fn merge(objects: impl IntoIterator<Item = ValueMap>) -> ValueMap {
    let mut result = ValueMap::new();
    for obj in objects {
        for (key, value) in obj {
            if value.is_undefined() {
                continue;
            }
            let merged = match (result.remove(&key), value) {
                (None, value) => value,
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    Value::Object(merge([existing, incoming]))
                }
                (Some(Value::Array(existing)), Value::Array(mut incoming)) => {
                    incoming.extend(existing);
                    Value::Array(incoming)
                }
                (Some(existing), _) => existing,
            };
            result.insert(key, merged);
        }
    }
    result
}

/// 浅层补齐：依次把每个 source 中 `target` 缺失（或为 `Undefined`）的键赋给 `target`。
pub fn defaults<'a>(
    mut target: ValueMap,
    sources: impl IntoIterator<Item = &'a ValueMap>,
) -> ValueMap {
    for source in sources {
        for (key, value) in source {
            let missing = target.get(key).is_none_or(Value::is_undefined);
            if missing {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}

/// 深拷贝。数组与普通对象得到独立副本；其他值按引用保留，
/// 除非 `only_plain == false` 且该值是具备 `CloneFragment` 能力的片段，此时调用其克隆。
///
/// `Undefined`/`Null` 输入返回空对象。
pub fn clone_deep(value: &Value, only_plain: bool) -> Value {
    match value {
        Value::Undefined | Value::Null => Value::Object(ValueMap::new()),
        _ => clone_value(value, only_plain),
    }
}

fn clone_value(value: &Value, only_plain: bool) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| clone_value(item, only_plain))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), clone_value(v, only_plain)))
                .collect(),
        ),
        Value::Fragment(fragment) if !only_plain => match fragment.as_cloneable() {
            Some(c) => Value::Fragment(Arc::new(c.clone_fragment())),
            None => Value::Fragment(Arc::clone(fragment)),
        },
        other => other.clone(),
    }
}

/// 把普通对象树扁平化为一层，键为 `.` 连接的完整路径。
///
/// 非普通对象原样返回；数组与 `Null` 视为叶子。
pub fn flatten_object_deep(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut out = ValueMap::new();
            flatten_into(map, None, &mut out);
            Value::Object(out)
        }
        other => other,
    }
}

fn flatten_into(map: ValueMap, prefix: Option<&str>, out: &mut ValueMap) {
    for (key, value) in map {
        let path = match prefix {
            Some(p) => format!("{p}.{key}"),
            None => key,
        };
        match value {
            Value::Object(nested) => flatten_into(nested, Some(&path), out),
            leaf => {
                out.insert(path, leaf);
            }
        }
    }
}

/// 浅层：把顶层键 `camelize`，值不变。
pub fn camelize_object_keys(map: ValueMap) -> ValueMap {
    map.into_iter().map(|(k, v)| (camelize(&k), v)).collect()
}

/// `omit_null` 为真时返回过滤后的副本：保留在 `allow_null` 中的键、以 `Id` 结尾的键，
/// 以及值既不是 `Null` 也不是 `Undefined` 的键；否则原样返回。
pub fn remove_null_values_from_hash(
    hash: ValueMap,
    omit_null: bool,
    allow_null: &[&str],
) -> ValueMap {
    if !omit_null {
        return hash;
    }
    hash.into_iter()
        .filter(|(key, value)| {
            allow_null.contains(&key.as_str()) || key.ends_with("Id") || !value.is_nil()
        })
        .collect()
}

/// `a` 中任一元素出现在 `b` 中。
pub fn intersects<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.iter().any(|x| b.contains(x))
}

/// 字符串、数字或布尔值。
pub fn is_primitive(value: &Value) -> bool {
    matches!(
        value,
        Value::String(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_)
    )
}
