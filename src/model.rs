//! 模型元数据：字段映射只消费属性到列名的描述，不拥有模型本身。

use crate::data_type::DataType;
use std::collections::{BTreeMap, BTreeSet};

/// 单个属性的描述。
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeDefinition {
    /// 属性名。
    pub field_name: String,
    /// 物理列名。
    pub field: String,
    pub type_: DataType,
}

impl AttributeDefinition {
    /// 列名与属性名相同的属性。
    pub fn new(name: impl Into<String>, type_: DataType) -> Self {
        let name = name.into();
        Self {
            field: name.clone(),
            field_name: name,
            type_,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    pub fn is_renamed(&self) -> bool {
        self.field != self.field_name
    }
}

/// 字段映射所需的模型能力。
pub trait ModelAttributes {
    fn raw_attribute(&self, name: &str) -> Option<&AttributeDefinition>;

    fn is_virtual_attribute(&self, name: &str) -> bool;

    fn has_virtual_attributes(&self) -> bool;

    /// 把列表中虚拟属性依赖的真实属性追加到末尾并去重（保留首次出现的顺序）。
    fn inject_dependent_virtual_attributes(&self, attributes: Vec<String>) -> Vec<String> {
        if !self.has_virtual_attributes() {
            return attributes;
        }
        let mut out = attributes.clone();
        for name in &attributes {
            if !self.is_virtual_attribute(name) {
                continue;
            }
            if let Some(def) = self.raw_attribute(name) {
                let deps = def.type_.virtual_fields();
                if !deps.is_empty() {
                    log::debug!("virtual attribute {name} pulls in {deps:?}");
                }
                out.extend(deps.iter().cloned());
            }
        }
        let mut seen = BTreeSet::new();
        out.retain(|a| seen.insert(a.clone()));
        out
    }
}

/// 一个简单的模型定义。
#[derive(Debug, Clone, Default)]
pub struct ModelDefinition {
    name: String,
    table_name: String,
    attributes: BTreeMap<String, AttributeDefinition>,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn attribute(mut self, def: AttributeDefinition) -> Self {
        self.attributes.insert(def.field_name.clone(), def);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn attributes(&self) -> impl Iterator<Item = &AttributeDefinition> {
        self.attributes.values()
    }
}

impl ModelAttributes for ModelDefinition {
    fn raw_attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(name)
    }

    fn is_virtual_attribute(&self, name: &str) -> bool {
        self.attributes
            .get(name)
            .is_some_and(|def| def.type_.is_virtual())
    }

    fn has_virtual_attributes(&self) -> bool {
        self.attributes.values().any(|def| def.type_.is_virtual())
    }
}
