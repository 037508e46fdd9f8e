//! Inflection：下划线化与单复数变换策略（对齐 field mapper 的可替换策略设计）。

use inflector::cases::snakecase::to_snake_case;
use inflector::string::pluralize::to_plural;
use inflector::string::singularize::to_singular;

/// 文本变换策略。实现必须可克隆，以便 `Naming` 以值的方式传递。
pub trait Inflection: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    fn underscore(&self, s: &str) -> String;

    fn singularize(&self, s: &str) -> String;

    fn pluralize(&self, s: &str) -> String;
}

dyn_clone::clone_trait_object!(Inflection);

/// 默认的英文规则。
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishInflection;

impl Inflection for EnglishInflection {
    fn underscore(&self, s: &str) -> String {
        to_snake_case(s)
    }

    fn singularize(&self, s: &str) -> String {
        to_singular(s)
    }

    fn pluralize(&self, s: &str) -> String {
        to_plural(s)
    }
}

#[cfg(test)]
mod tests {
    use super::{EnglishInflection, Inflection};
    use pretty_assertions::assert_eq;

    #[test]
    fn english_rules() {
        let i = EnglishInflection;
        assert_eq!(i.underscore("firstName"), "first_name");
        assert_eq!(i.underscore("UserAccount"), "user_account");
        assert_eq!(i.pluralize("user"), "users");
        assert_eq!(i.singularize("users"), "user");
        assert_eq!(i.pluralize("category"), "categories");
        assert_eq!(i.singularize("categories"), "category");
    }

    #[test]
    fn boxed_strategy_is_cloneable() {
        let boxed: Box<dyn Inflection> = Box::new(EnglishInflection);
        let copy = boxed.clone();
        assert_eq!(copy.underscore("fooBar"), "foo_bar");
    }
}
