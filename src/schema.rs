//! Schema column extraction.
//!
//! The ORM layer annotates model fields with tag strings such as
//! `column(created_at);null` or `column(id);auto`. This module parses those
//! tags and lets a model expose its column list through the [`Columns`]
//! trait, with optional exclusions (typically auto-managed columns that
//! updates must not touch).

/// Extract the column name from an ORM field tag.
///
/// Tags are `;`-separated segments; the segment `column(<name>)` carries the
/// column name. The tag keyword is case-insensitive, the name is returned
/// as written. Segments without a well-formed `keyword(value)` shape are
/// skipped.
#[must_use]
pub fn parse_column_tag(tag: &str) -> Option<&str> {
    for part in tag.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some(open) = part.find('(') else {
            continue;
        };
        // The closing paren must be the last character of the segment.
        if open == 0 || part.find(')') != Some(part.len() - 1) {
            continue;
        }
        if part[..open].eq_ignore_ascii_case("column") {
            return Some(&part[open + 1..part.len() - 1]);
        }
    }
    None
}

/// A model type that knows its ORM column tags.
///
/// Implementors list the raw tag string of each field; the provided
/// [`Columns::columns`] method parses them into column names.
pub trait Columns {
    /// Raw ORM tag strings, one per field, in declaration order.
    fn column_tags() -> &'static [&'static str];

    /// Column names parsed from the field tags, minus any in `exclude`.
    ///
    /// Fields whose tag carries no `column(...)` segment are skipped.
    fn columns(exclude: &[&str]) -> Vec<String> {
        Self::column_tags()
            .iter()
            .filter_map(|tag| parse_column_tag(tag))
            .filter(|name| !exclude.contains(name))
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct User;

    impl Columns for User {
        fn column_tags() -> &'static [&'static str] {
            &[
                "column(id);auto",
                "column(email)",
                "COLUMN(full_name)",
                "rel(fk);column(role_id)",
                "null",
                "",
            ]
        }
    }

    #[test]
    fn test_parse_column_tag() {
        assert_eq!(parse_column_tag("column(id)"), Some("id"));
        assert_eq!(parse_column_tag("column(id);auto"), Some("id"));
        assert_eq!(parse_column_tag(" column(created_at) ; null "), Some("created_at"));
        assert_eq!(parse_column_tag("COLUMN(Email)"), Some("Email"));
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        assert_eq!(parse_column_tag(""), None);
        assert_eq!(parse_column_tag("null"), None);
        assert_eq!(parse_column_tag("(id)"), None);
        assert_eq!(parse_column_tag("column(id"), None);
        assert_eq!(parse_column_tag("column(id)x"), None);
        assert_eq!(parse_column_tag("rel(fk)"), None);
    }

    #[test]
    fn test_columns() {
        assert_eq!(
            User::columns(&[]),
            vec!["id", "email", "full_name", "role_id"]
        );
    }

    #[test]
    fn test_columns_with_exclusions() {
        assert_eq!(
            User::columns(&["id", "role_id"]),
            vec!["email", "full_name"]
        );
    }
}
