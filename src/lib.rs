//! halo-orm：ORM 查询与模型层使用的辅助工具集。

pub mod case;
pub mod condition;
pub mod data_type;
pub mod default_value;
pub mod dialect;
pub mod field_mapper;
#[cfg(test)]
mod field_mapper_tests;
pub mod fragment;
pub mod inflection;
pub mod macros;
pub mod model;
pub mod naming;
pub mod object;
pub mod operator;
pub mod value;

pub use crate::case::{Naming, camelize};
pub use crate::condition::{
    ComplexKey, ComplexSize, Condition, Where, can_treat_array_as_and, get_complex_keys,
    get_complex_size, get_operators, is_where_empty,
};
pub use crate::data_type::{DataType, DataTypeError};
pub use crate::default_value::{default_value_schemable, now, to_default_value};
pub use crate::dialect::{Dialect, DialectError, TICK_CHAR, add_ticks, remove_ticks};
pub use crate::field_mapper::{
    AttributeRef, QueryOptions, map_finder_options, map_option_field_names,
    map_value_field_names, map_where_field_names,
};
pub use crate::fragment::{CloneFragment, FunctionCall, JsonAccess, SqlFragment};
pub use crate::inflection::{EnglishInflection, Inflection};
pub use crate::model::{AttributeDefinition, ModelAttributes, ModelDefinition};
pub use crate::naming::{
    IndexDefinition, IndexField, TableRef, combine_table_names, generate_enum_name,
    is_col_string, name_index, splice_str,
};
pub use crate::object::{
    camelize_object_keys, clone_deep, defaults, flatten_object_deep, intersects, is_primitive,
    merge, merge_defaults, remove_null_values_from_hash,
};
pub use crate::operator::Op;
pub use crate::value::{Handle, Value, ValueFn, ValueMap};

/// 便捷命名空间：允许 `use halo_orm::utils::{...}` 形式导入。
pub mod utils {
    pub use crate::*;
}
