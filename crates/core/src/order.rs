//! Deterministic ordering of definitions.

use std::cmp::Ordering;

use crate::definition::TypeDefinition;

/// Byte-wise, case-sensitive comparison. Independent of locale.
pub fn compare_ascending(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Sort definitions by name. The sort is stable: equal names keep their input order.
pub fn order_definitions(definitions: &[TypeDefinition]) -> Vec<&TypeDefinition> {
    let mut ordered: Vec<_> = definitions.iter().collect();
    ordered.sort_by(|a, b| compare_ascending(&a.name, &b.name));
    ordered
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::document::Schema;

    fn def(name: &str, description: &str) -> TypeDefinition {
        TypeDefinition::new(name, Schema::default()).with_description(description)
    }

    #[test]
    fn test_compare_is_case_sensitive() {
        assert_eq!(compare_ascending("Pet", "pet"), Ordering::Less);
        assert_eq!(compare_ascending("Zebra", "apple"), Ordering::Less);
        assert_eq!(compare_ascending("a", "a"), Ordering::Equal);
        assert_eq!(compare_ascending("ab", "a"), Ordering::Greater);
    }

    #[test]
    fn test_orders_by_name() {
        let defs = vec![def("Status", ""), def("Pet", ""), def("Order", "")];
        let names: Vec<_> = order_definitions(&defs)
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["Order", "Pet", "Status"]);
    }

    #[test]
    fn test_equal_names_keep_input_order() {
        let defs = vec![
            def("Pet", "first"),
            def("Animal", ""),
            def("Pet", "second"),
            def("Pet", "third"),
        ];
        let ordered = order_definitions(&defs);
        let descriptions: Vec<_> = ordered
            .iter()
            .filter(|d| d.name == "Pet")
            .map(|d| d.description.as_deref().unwrap())
            .collect();
        assert_eq!(descriptions, ["first", "second", "third"]);
        assert_eq!(ordered[0].name, "Animal");
    }

    #[test]
    fn test_empty_input() {
        assert!(order_definitions(&[]).is_empty());
    }
}
