//! Field mapper：把模型属性名映射为物理列名（查询选项、条件树与写入值）。

use crate::condition::{Condition, Where};
use crate::fragment::SqlFragment;
use crate::model::ModelAttributes;
use crate::value::{Value, ValueMap};
use std::sync::Arc;

/// 查询属性列表中的一项。
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeRef {
    Name(String),
    /// `[column, alias]`。
    Aliased(String, String),
    Fragment(Arc<SqlFragment>, Option<String>),
}

impl AttributeRef {
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(n) => Some(n),
            _ => None,
        }
    }
}

impl From<&str> for AttributeRef {
    fn from(v: &str) -> Self {
        Self::Name(v.to_string())
    }
}

impl From<String> for AttributeRef {
    fn from(v: String) -> Self {
        Self::Name(v)
    }
}

impl From<SqlFragment> for AttributeRef {
    fn from(v: SqlFragment) -> Self {
        Self::Fragment(Arc::new(v), None)
    }
}

/// 查询选项：`attributes` 与 `where_` 是被识别的键，其余原样保存在 `extra` 中。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub attributes: Option<Vec<AttributeRef>>,
    pub where_: Option<Where>,
    pub extra: ValueMap,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(mut self, attrs: impl IntoIterator<Item = impl Into<AttributeRef>>) -> Self {
        self.attributes = Some(attrs.into_iter().map(Into::into).collect());
        self
    }

    pub fn where_(mut self, w: Where) -> Self {
        self.where_ = Some(w);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// 改写 `attributes` 与 `where_`：
/// 列名与属性名不同的字符串属性改写为 `[column, attribute]`，条件树交给 `map_where_field_names`。
pub fn map_option_field_names<M>(mut options: QueryOptions, model: &M) -> QueryOptions
where
    M: ModelAttributes + ?Sized,
{
    if let Some(attrs) = options.attributes.take() {
        options.attributes = Some(
            attrs
                .into_iter()
                .map(|attr| match attr {
                    AttributeRef::Name(name) => match model.raw_attribute(&name) {
                        Some(def) if def.field != name => {
                            AttributeRef::Aliased(def.field.clone(), name)
                        }
                        _ => AttributeRef::Name(name),
                    },
                    other => other,
                })
                .collect(),
        );
    }
    if let Some(w) = options.where_.as_mut() {
        map_where_field_names(w, model);
    }
    options
}

/// 原地把条件树中的属性名改写为列名，并返回同一个条件树。
///
/// JSON/JSONB/HSTORE 属性下的嵌套条件不会递归改写。
pub fn map_where_field_names<'a, M>(conditions: &'a mut Where, model: &M) -> &'a mut Where
where
    M: ModelAttributes + ?Sized,
{
    for condition in conditions.conditions_mut() {
        map_condition(condition, model);
    }
    conditions
}

fn map_condition<M: ModelAttributes + ?Sized>(condition: &mut Condition, model: &M) {
    match condition {
        Condition::Leaf {
            attribute, value, ..
        } => {
            rename_attribute(attribute, model);
            if let Value::Array(items) = value {
                for item in items.iter_mut() {
                    if let Value::Object(map) = item {
                        map_object_keys(map, model);
                    }
                }
            }
        }
        Condition::Nested {
            attribute,
            conditions,
        } => {
            let structured = model
                .raw_attribute(attribute)
                .is_some_and(|def| def.type_.is_structured());
            rename_attribute(attribute, model);
            if !structured {
                map_where_field_names(conditions, model);
            }
        }
        Condition::Composite { children, .. } => {
            for child in children.iter_mut() {
                map_condition(child, model);
            }
        }
        Condition::Raw(_) => {}
    }
}

fn rename_attribute<M: ModelAttributes + ?Sized>(attribute: &mut String, model: &M) {
    if let Some(def) = model.raw_attribute(attribute)
        && def.field != *attribute
    {
        log::debug!("field mapper: {attribute} -> {}", def.field);
        *attribute = def.field.clone();
    }
}

/// 数组叶子值里的普通对象：按同样规则改写其键。
///
/// 未知键不改名，但其对象值照样向下查找；JSON/HSTORE 属性下的值保持原样。
fn map_object_keys<M: ModelAttributes + ?Sized>(map: &mut ValueMap, model: &M) {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        let (structured, field) = match model.raw_attribute(&key) {
            Some(def) => (
                def.type_.is_structured(),
                Some(def.field.clone()).filter(|f| !f.is_empty() && *f != key),
            ),
            None => (false, None),
        };
        if !structured && let Some(value) = map.get_mut(&key) {
            map_nested_value(value, model);
        }
        if let Some(field) = field
            && let Some(value) = map.remove(&key)
        {
            log::debug!("field mapper: {key} -> {field}");
            map.insert(field, value);
        }
    }
}

fn map_nested_value<M: ModelAttributes + ?Sized>(value: &mut Value, model: &M) {
    match value {
        Value::Object(nested) => map_object_keys(nested, model),
        Value::Array(items) => {
            for item in items.iter_mut() {
                if let Value::Object(nested) = item {
                    map_object_keys(nested, model);
                }
            }
        }
        _ => {}
    }
}

/// 从 `values` 中取出 `fields` 列出的属性，跳过虚拟属性与未设置的值，并改写为列名。
pub fn map_value_field_names<M>(values: &ValueMap, fields: &[&str], model: &M) -> ValueMap
where
    M: ModelAttributes + ?Sized,
{
    let mut out = ValueMap::new();
    for &attr in fields {
        let Some(value) = values.get(attr) else {
            continue;
        };
        if value.is_undefined() || model.is_virtual_attribute(attr) {
            continue;
        }
        let key = match model.raw_attribute(attr) {
            Some(def) if !def.field.is_empty() && def.field != attr => def.field.clone(),
            _ => attr.to_string(),
        };
        out.insert(key, value.clone());
    }
    out
}

/// 展开虚拟属性依赖、移除虚拟属性本身，然后执行 `map_option_field_names`。
///
/// 属性名列表以模型注入后的结果为准；片段与别名项保留在原来的位置。
pub fn map_finder_options<M>(mut options: QueryOptions, model: &M) -> QueryOptions
where
    M: ModelAttributes + ?Sized,
{
    if let Some(attrs) = options.attributes.take() {
        let names: Vec<String> = attrs
            .iter()
            .filter_map(AttributeRef::as_name)
            .map(str::to_string)
            .collect();
        let mut injected = model
            .inject_dependent_virtual_attributes(names)
            .into_iter()
            .peekable();

        let mut out = Vec::with_capacity(attrs.len());
        for attr in attrs {
            match attr.as_name() {
                None => out.push(attr),
                Some(name) => {
                    // 注入时被去重掉的名字不再出现在结果里
                    if let Some(next) = injected.next_if(|n| n == name) {
                        out.push(AttributeRef::Name(next));
                    }
                }
            }
        }
        out.extend(injected.map(AttributeRef::Name));
        out.retain(|a| a.as_name().is_none_or(|n| !model.is_virtual_attribute(n)));
        options.attributes = Some(out);
    }
    map_option_field_names(options, model)
}
