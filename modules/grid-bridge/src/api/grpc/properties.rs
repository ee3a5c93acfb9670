//! Property metadata projection.

use gridlink_proto as proto;

use crate::domain::properties::{Component, PropertyDescription, PropertyType};

/// Project the descriptors that apply at `level` into wire records.
///
/// Pure filter-and-map: input iteration order is preserved and an absent
/// default value becomes the empty string.
#[must_use]
pub fn map_property_descriptions(
    properties: &[PropertyDescription],
    level: Component,
) -> Vec<proto::PropertyDescription> {
    properties
        .iter()
        .filter(|property| property.levels.contains(&level))
        .map(|property| proto::PropertyDescription {
            name: property.name.clone(),
            description: property.description.clone(),
            default_value: property.default_value.clone().unwrap_or_default(),
            property_type: map_property_type(property.property_type) as i32,
        })
        .collect()
}

// Total by construction: a domain type tag without a wire counterpart is a
// compile error here, not a runtime case.
fn map_property_type(property_type: PropertyType) -> proto::PropertyType {
    match property_type {
        PropertyType::String => proto::PropertyType::String,
        PropertyType::Boolean => proto::PropertyType::Boolean,
        PropertyType::Integer => proto::PropertyType::Integer,
        PropertyType::Long => proto::PropertyType::Long,
        PropertyType::Double => proto::PropertyType::Double,
        PropertyType::Size => proto::PropertyType::Size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(name: &str, levels: Vec<Component>) -> PropertyDescription {
        PropertyDescription::new(
            name,
            PropertyType::Boolean,
            Some("false".to_owned()),
            format!("{name} desc"),
            levels,
        )
    }

    #[test]
    fn maps_a_boolean_property() {
        let input = vec![property("abool", vec![Component::Scheduler])];

        let result = map_property_descriptions(&input, Component::Scheduler);

        let expected = vec![proto::PropertyDescription {
            name: "abool".to_owned(),
            description: "abool desc".to_owned(),
            default_value: "false".to_owned(),
            property_type: proto::PropertyType::Boolean as i32,
        }];
        assert_eq!(result, expected);
    }

    #[test]
    fn filters_by_capability_level() {
        let input = vec![
            property("sched-only", vec![Component::Scheduler]),
            property("fs-only", vec![Component::FileSystem]),
            property("both", vec![Component::Scheduler, Component::FileSystem]),
        ];

        let result = map_property_descriptions(&input, Component::FileSystem);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["fs-only", "both"]);
    }

    #[test]
    fn preserves_input_order() {
        let input = vec![
            property("zeta", vec![Component::Scheduler]),
            property("alpha", vec![Component::Scheduler]),
        ];

        let result = map_property_descriptions(&input, Component::Scheduler);

        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha"]);
    }

    #[test]
    fn absent_default_becomes_empty_string() {
        let input = vec![PropertyDescription::new(
            "noddefault",
            PropertyType::String,
            None,
            "no default at all",
            vec![Component::Scheduler],
        )];

        let result = map_property_descriptions(&input, Component::Scheduler);

        assert_eq!(result[0].default_value, "");
    }

    #[test]
    fn every_type_tag_has_a_wire_counterpart() {
        let tags = [
            (PropertyType::String, proto::PropertyType::String),
            (PropertyType::Boolean, proto::PropertyType::Boolean),
            (PropertyType::Integer, proto::PropertyType::Integer),
            (PropertyType::Long, proto::PropertyType::Long),
            (PropertyType::Double, proto::PropertyType::Double),
            (PropertyType::Size, proto::PropertyType::Size),
        ];
        for (domain, wire) in tags {
            assert_eq!(map_property_type(domain), wire);
        }
    }
}
