//! 命名转换：`camelize` 以及通过注入的 `Inflection` 策略完成的下划线化/单复数变换。

use crate::inflection::{EnglishInflection, Inflection};

/// 去掉首尾空白后，把 `-`、`_` 或空白之后的字符转为大写并删除分隔符。
///
/// 首字符不会被强制转为小写。
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.trim().chars();
    while let Some(c) = chars.next() {
        if !is_separator(c) {
            out.push(c);
            continue;
        }
        let mut run = String::from(c);
        let mut run_end = None;
        for next in chars.by_ref() {
            if !is_separator(next) {
                run_end = Some(next);
                break;
            }
            run.push(next);
        }
        match run_end {
            Some(next) => out.extend(next.to_uppercase()),
            None => out.push_str(&run),
        }
    }
    out
}

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

/// 命名策略：持有一个可替换的 `Inflection`，所有需要下划线化或单复数变换的地方都显式传入它。
#[derive(Debug, Clone)]
pub struct Naming {
    inflection: Box<dyn Inflection>,
}

impl Default for Naming {
    fn default() -> Self {
        Self::with_inflection(EnglishInflection)
    }
}

impl Naming {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_inflection(inflection: impl Inflection + 'static) -> Self {
        Self {
            inflection: Box::new(inflection),
        }
    }

    /// 替换当前策略，返回旧策略。
    pub fn set_inflection(&mut self, inflection: Box<dyn Inflection>) -> Box<dyn Inflection> {
        log::debug!("naming inflection replaced with {inflection:?}");
        std::mem::replace(&mut self.inflection, inflection)
    }

    pub fn inflection(&self) -> &dyn Inflection {
        self.inflection.as_ref()
    }

    pub fn underscore(&self, s: &str) -> String {
        self.inflection.underscore(s)
    }

    pub fn singularize(&self, s: &str) -> String {
        self.inflection.singularize(s)
    }

    pub fn pluralize(&self, s: &str) -> String {
        self.inflection.pluralize(s)
    }

    /// `cond` 为真时返回 `underscore(s)`，否则原样返回。
    pub fn underscored_if(&self, s: &str, cond: bool) -> String {
        if cond {
            self.underscore(s)
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Naming, camelize};
    use crate::inflection::Inflection;
    use pretty_assertions::assert_eq;

    #[test]
    fn camelize_separators() {
        assert_eq!(camelize("foo-bar_baz qux"), "fooBarBazQux");
        assert_eq!(camelize("  user_id  "), "userId");
        assert_eq!(camelize("Already_Camel"), "AlreadyCamel");
        assert_eq!(camelize("a__b--c"), "aBC");
        assert_eq!(camelize("plain"), "plain");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn camelize_trailing_separator_kept() {
        // 分隔符后没有字符时不做转换
        assert_eq!(camelize("foo_"), "foo_");
    }

    #[derive(Debug, Clone)]
    struct Shouting;

    impl Inflection for Shouting {
        fn underscore(&self, s: &str) -> String {
            s.to_ascii_uppercase()
        }

        fn singularize(&self, s: &str) -> String {
            s.trim_end_matches('S').to_string()
        }

        fn pluralize(&self, s: &str) -> String {
            format!("{s}S")
        }
    }

    #[test]
    fn default_naming_uses_english_rules() {
        let n = Naming::new();
        assert_eq!(n.underscore("createdAt"), "created_at");
        assert_eq!(n.pluralize("task"), "tasks");
        assert_eq!(n.singularize("tasks"), "task");
    }

    #[test]
    fn underscored_if_respects_flag() {
        let n = Naming::default();
        assert_eq!(n.underscored_if("createdAt", true), "created_at");
        assert_eq!(n.underscored_if("createdAt", false), "createdAt");
    }

    #[test]
    fn inflection_can_be_swapped() {
        let mut n = Naming::default();
        let old = n.set_inflection(Box::new(Shouting));
        assert_eq!(n.underscore("abc"), "ABC");
        assert_eq!(n.pluralize("ROW"), "ROWS");
        assert_eq!(n.singularize("ROWS"), "ROW");
        assert_eq!(old.underscore("fooBar"), "foo_bar");

        let custom = Naming::with_inflection(Shouting);
        assert_eq!(custom.inflection().underscore("x"), "X");
    }
}
