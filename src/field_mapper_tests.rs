#[cfg(test)]
mod tests {
    use crate::condition::{Condition, Where};
    use crate::data_type::DataType;
    use crate::field_mapper::{
        AttributeRef, QueryOptions, map_finder_options, map_option_field_names,
        map_value_field_names, map_where_field_names,
    };
    use crate::fragment::SqlFragment;
    use crate::model::{AttributeDefinition, ModelDefinition};
    use crate::operator::Op;
    use crate::value::Value;
    use crate::{value_list, value_map};
    use pretty_assertions::assert_eq;

    fn user() -> ModelDefinition {
        ModelDefinition::new("User", "users")
            .attribute(AttributeDefinition::new("id", DataType::Integer))
            .attribute(
                AttributeDefinition::new("name", DataType::String(None)).with_field("full_name"),
            )
            .attribute(
                AttributeDefinition::new("createdAt", DataType::Date).with_field("created_at"),
            )
            .attribute(AttributeDefinition::new("meta", DataType::Jsonb).with_field("meta_data"))
            .attribute(AttributeDefinition::new(
                "display",
                DataType::virtual_with(["name", "id"]),
            ))
    }

    #[test]
    fn where_single_attribute_renamed() {
        let mut w = Where::new().equal("name", "x");
        map_where_field_names(&mut w, &user());
        assert_eq!(w, Where::new().equal("full_name", "x"));
    }

    #[test]
    fn where_returns_same_tree() {
        let mut w = Where::new().equal("id", 1).equal("createdAt", 2);
        let returned = map_where_field_names(&mut w, &user()).clone();
        assert_eq!(returned, w);
        assert_eq!(w, Where::new().equal("id", 1).equal("created_at", 2));
    }

    #[test]
    fn where_recurses_through_composites() {
        let mut w = Where::new().or([
            Condition::leaf("name", Op::Like, "a%"),
            Condition::composite(
                Op::And,
                [
                    Condition::leaf("createdAt", Op::Gt, 1),
                    Condition::raw(SqlFragment::where_(SqlFragment::col("name"), 1)),
                ],
            ),
        ]);
        map_where_field_names(&mut w, &user());
        assert_eq!(
            w,
            Where::new().or([
                Condition::leaf("full_name", Op::Like, "a%"),
                Condition::composite(
                    Op::And,
                    [
                        Condition::leaf("created_at", Op::Gt, 1),
                        Condition::raw(SqlFragment::where_(SqlFragment::col("name"), 1)),
                    ],
                ),
            ])
        );
    }

    #[test]
    fn where_structured_attribute_keeps_inner_keys() {
        let mut w = Where::new().nested("meta", Where::new().equal("name", "inner"));
        map_where_field_names(&mut w, &user());
        assert_eq!(
            w,
            Where::new().nested("meta_data", Where::new().equal("name", "inner"))
        );
    }

    #[test]
    fn where_nested_plain_attribute_is_remapped() {
        let model = user().attribute(AttributeDefinition::new("profile", DataType::Text));
        let mut w = Where::new().nested("profile", Where::new().equal("name", "inner"));
        map_where_field_names(&mut w, &model);
        assert_eq!(
            w,
            Where::new().nested("profile", Where::new().equal("full_name", "inner"))
        );
    }

    #[test]
    fn where_array_value_objects_are_remapped() {
        let mut w = Where::new().compare(
            "id",
            Op::In,
            value_list![value_map! { "name" => "a" }, 3],
        );
        map_where_field_names(&mut w, &user());
        assert_eq!(
            w,
            Where::new().compare(
                "id",
                Op::In,
                value_list![value_map! { "full_name" => "a" }, 3],
            )
        );
    }

    #[test]
    fn where_array_objects_searched_under_unknown_keys() {
        let mut w = Where::new().compare(
            "id",
            Op::In,
            value_list![value_map! { "grp" => value_map! { "name" => "a" } }],
        );
        map_where_field_names(&mut w, &user());
        assert_eq!(
            w,
            Where::new().compare(
                "id",
                Op::In,
                value_list![value_map! { "grp" => value_map! { "full_name" => "a" } }],
            )
        );
    }

    #[test]
    fn where_array_objects_searched_inside_arrays() {
        let mut w = Where::new().compare(
            "id",
            Op::In,
            value_list![value_map! { "id" => value_list![value_map! { "name" => "b" }, 7] }],
        );
        map_where_field_names(&mut w, &user());
        assert_eq!(
            w,
            Where::new().compare(
                "id",
                Op::In,
                value_list![value_map! {
                    "id" => value_list![value_map! { "full_name" => "b" }, 7]
                }],
            )
        );
    }

    #[test]
    fn where_array_objects_keep_structured_values() {
        let mut w = Where::new().compare(
            "id",
            Op::In,
            value_list![value_map! { "meta" => value_map! { "name" => "c" } }],
        );
        map_where_field_names(&mut w, &user());
        assert_eq!(
            w,
            Where::new().compare(
                "id",
                Op::In,
                value_list![value_map! { "meta_data" => value_map! { "name" => "c" } }],
            )
        );
    }

    #[test]
    fn where_unknown_attributes_untouched() {
        let mut w = Where::new().equal("$user.name$", "x");
        map_where_field_names(&mut w, &user());
        assert_eq!(w, Where::new().equal("$user.name$", "x"));
    }

    #[test]
    fn option_attributes_become_pairs() {
        let opts = QueryOptions::new()
            .attributes(vec![
                AttributeRef::from("id"),
                AttributeRef::from("name"),
                AttributeRef::from(SqlFragment::function(
                    "COUNT",
                    [Value::from(SqlFragment::col("id"))],
                )),
                AttributeRef::from("unknown"),
            ])
            .where_(Where::new().equal("createdAt", 1))
            .extra("limit", 10);

        let out = map_option_field_names(opts, &user());
        assert_eq!(
            out.attributes,
            Some(vec![
                AttributeRef::Name("id".into()),
                AttributeRef::Aliased("full_name".into(), "name".into()),
                AttributeRef::from(SqlFragment::function(
                    "COUNT",
                    [Value::from(SqlFragment::col("id"))],
                )),
                AttributeRef::Name("unknown".into()),
            ])
        );
        assert_eq!(out.where_, Some(Where::new().equal("created_at", 1)));
        assert_eq!(out.extra, value_map! { "limit" => 10 });
    }

    #[test]
    fn value_field_names_skip_virtual_and_undefined() {
        let mut values = value_map! {
            "id" => 1,
            "name" => "n",
            "display" => "d",
            "ignored" => 5,
        };
        values.insert("createdAt".into(), Value::Undefined);

        let out = map_value_field_names(
            &values,
            &["id", "name", "display", "createdAt", "missing"],
            &user(),
        );
        assert_eq!(out, value_map! { "id" => 1, "full_name" => "n" });
    }

    #[test]
    fn finder_options_expand_and_drop_virtuals() {
        let opts = QueryOptions::new().attributes(["display", "createdAt"]);
        let out = map_finder_options(opts, &user());
        assert_eq!(
            out.attributes,
            Some(vec![
                AttributeRef::Aliased("created_at".into(), "createdAt".into()),
                AttributeRef::Aliased("full_name".into(), "name".into()),
                AttributeRef::Name("id".into()),
            ])
        );
    }

    #[test]
    fn finder_options_without_virtuals_keep_list_as_is() {
        let plain = ModelDefinition::new("Tag", "tags")
            .attribute(AttributeDefinition::new("id", DataType::Integer));
        let opts = QueryOptions::new().attributes(["id", "id"]);
        let out = map_finder_options(opts, &plain);
        assert_eq!(
            out.attributes,
            Some(vec![
                AttributeRef::Name("id".into()),
                AttributeRef::Name("id".into()),
            ])
        );
    }

    #[test]
    fn finder_options_keep_fragments_in_place() {
        let count = SqlFragment::function("COUNT", [Value::from(SqlFragment::col("id"))]);
        let opts = QueryOptions::new().attributes(vec![
            AttributeRef::from("display"),
            AttributeRef::from(count.clone()),
            AttributeRef::Aliased("created_at".into(), "made".into()),
            AttributeRef::from("createdAt"),
        ]);
        let out = map_finder_options(opts, &user());
        assert_eq!(
            out.attributes,
            Some(vec![
                AttributeRef::from(count),
                AttributeRef::Aliased("created_at".into(), "made".into()),
                AttributeRef::Aliased("created_at".into(), "createdAt".into()),
                AttributeRef::Aliased("full_name".into(), "name".into()),
                AttributeRef::Name("id".into()),
            ])
        );
    }

    #[test]
    fn finder_options_without_attributes_maps_where_only() {
        let opts = QueryOptions::new().where_(Where::new().equal("name", "x"));
        let out = map_finder_options(opts, &user());
        assert_eq!(out.attributes, None);
        assert_eq!(out.where_, Some(Where::new().equal("full_name", "x")));
    }
}
