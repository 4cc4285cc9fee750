//! Property value object and its single-line parser.

use super::error::DomainError;

/// One property of the generated class, immutable once parsed.
///
/// ## Invariants
///
/// - `name` is non-empty (guaranteed by whitespace tokenization)
/// - `backing_field` is derived deterministically from `name` and is
///   computed for every property, collection-valued or not — the
///   synthesizer decides whether to emit it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Collection-valued properties are generated read-only and
    /// pre-initialized; scalars get a backing field and an accessor pair.
    pub is_collection: bool,
    /// Declared type, opaque and unvalidated (`Int32`, `List<Order>`, ...).
    pub type_name: String,
    /// Public property name as written in the specification.
    pub name: String,
    /// Private storage slot name: `_` + name with its first letter lowered.
    pub backing_field: String,
}

impl Property {
    /// Parse one trimmed, non-empty property-specification line.
    ///
    /// Tokenized on whitespace:
    /// - `<Type> <Name>` → scalar
    /// - `x <Type> <Name>` → collection (flag matched case-insensitively)
    ///
    /// Any other token count is [`DomainError::MalformedPropertySpec`];
    /// a three-token line with a flag other than `x` is
    /// [`DomainError::InvalidCollectionFlag`].
    pub fn parse(line: &str) -> Result<Self, DomainError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        let (is_collection, type_name, name) = match tokens.as_slice() {
            [type_name, name] => (false, *type_name, *name),
            [flag, type_name, name] => {
                if !flag.eq_ignore_ascii_case("x") {
                    return Err(DomainError::InvalidCollectionFlag { line: line.into() });
                }
                (true, *type_name, *name)
            }
            _ => return Err(DomainError::MalformedPropertySpec { line: line.into() }),
        };

        Ok(Self {
            is_collection,
            type_name: type_name.to_string(),
            name: name.to_string(),
            backing_field: backing_field_name(name),
        })
    }
}

/// Derive the backing-field name: `_` + first letter lowered + rest as-is.
fn backing_field_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        // to_lowercase handles the odd multi-char Unicode lowering correctly
        Some(first) => format!("_{}{}", first.to_lowercase(), chars.as_str()),
        None => "_".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_property_parses() {
        let prop = Property::parse("String Name").unwrap();
        assert!(!prop.is_collection);
        assert_eq!(prop.type_name, "String");
        assert_eq!(prop.name, "Name");
        assert_eq!(prop.backing_field, "_name");
    }

    #[test]
    fn collection_property_parses() {
        let prop = Property::parse("x List<Int32> Items").unwrap();
        assert!(prop.is_collection);
        assert_eq!(prop.type_name, "List<Int32>");
        assert_eq!(prop.name, "Items");
        assert_eq!(prop.backing_field, "_items");
    }

    #[test]
    fn collection_flag_is_case_insensitive() {
        assert!(Property::parse("X List<Order> Orders").unwrap().is_collection);
    }

    #[test]
    fn extra_interior_whitespace_is_tolerated() {
        let prop = Property::parse("x   List<Int32>    Items").unwrap();
        assert_eq!(prop.name, "Items");
    }

    #[test]
    fn one_token_is_malformed() {
        assert!(matches!(
            Property::parse("Int32"),
            Err(DomainError::MalformedPropertySpec { .. })
        ));
    }

    #[test]
    fn four_tokens_are_malformed() {
        assert!(matches!(
            Property::parse("x List<Int32> Items Extra"),
            Err(DomainError::MalformedPropertySpec { .. })
        ));
    }

    #[test]
    fn wrong_flag_is_rejected() {
        let err = Property::parse("y Int32 Name").unwrap_err();
        assert!(matches!(err, DomainError::InvalidCollectionFlag { .. }));
        assert!(err.to_string().contains("y Int32 Name"));
    }

    #[test]
    fn backing_field_lowers_only_the_first_letter() {
        assert_eq!(backing_field_name("OrderTotal"), "_orderTotal");
        assert_eq!(backing_field_name("X"), "_x");
        assert_eq!(backing_field_name("already"), "_already");
    }
}
