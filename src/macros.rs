//! 宏集合：用类似字面量的写法构造 `ValueMap` 与 `Value::Array`，避免手动逐项 `insert`。

/// 构造一个 `ValueMap`：`value_map! { "a" => 1, "b" => "x" }`。
#[macro_export]
macro_rules! value_map {
    () => {
        $crate::ValueMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert(::std::string::String::from($key), $crate::Value::from($value));
        )+
        map
    }};
}

/// 构造一个 `Value::Array`：`value_list![1, "a", true]`。
#[macro_export]
macro_rules! value_list {
    () => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Value::Array(::std::vec![$($crate::Value::from($value)),+])
    };
}
