use regex::Regex;
use std::sync::OnceLock;

/// Utility for parsing PostgreSQL constraint violation messages.
///
/// Extracts structured (entity, field, value) information from the
/// database's constraint error text so handlers can surface which field
/// of which record collided.
pub struct ConstraintParser;

struct RegexPatterns {
    key_value: Regex,
    column_name: Regex,
    table_name: Regex,
}

impl RegexPatterns {
    fn new() -> Self {
        Self {
            // Matches "Key (field)=(value)" in PostgreSQL detail lines
            key_value: Regex::new(r"Key \(([^)]+)\)=\(([^)]*)\)").unwrap(),
            column_name: Regex::new(r#"column "([^"]+)""#).unwrap(),
            table_name: Regex::new(r#"table "([^"]+)""#).unwrap(),
        }
    }
}

static REGEX_PATTERNS: OnceLock<RegexPatterns> = OnceLock::new();

impl ConstraintParser {
    fn patterns() -> &'static RegexPatterns {
        REGEX_PATTERNS.get_or_init(RegexPatterns::new)
    }

    /// Parses a unique constraint violation into (entity, field, value).
    ///
    /// Constraint names follow the Postgres default `{table}_{column}_key`;
    /// the violating value is pulled from the message's DETAIL line.
    pub fn parse_unique_violation(
        message: &str,
        constraint_name: Option<&str>,
    ) -> Option<(String, String, String)> {
        if let Some(constraint) = constraint_name
            && let Some((entity, field)) = Self::parse_constraint_name(constraint)
        {
            if let Some(value) = Self::extract_value_from_message(message) {
                return Some((entity, field, value));
            }
            return Some((entity, field, "duplicate_value".to_string()));
        }

        if let Some((field, value)) = Self::extract_key_value_from_message(message) {
            let entity =
                Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
            return Some((entity, field, value));
        }

        None
    }

    /// Parses a not-null violation into (entity, field).
    pub fn parse_not_null_violation(
        message: &str,
        _constraint_name: Option<&str>,
    ) -> Option<(String, String)> {
        let field = Self::patterns()
            .column_name
            .captures(message)?
            .get(1)?
            .as_str()
            .to_string();
        let entity =
            Self::extract_table_from_message(message).unwrap_or_else(|| "resource".to_string());
        Some((entity, field))
    }

    /// Splits `{table}_{column}_key` style constraint names.
    fn parse_constraint_name(constraint: &str) -> Option<(String, String)> {
        let stripped = constraint
            .strip_suffix("_key")
            .or_else(|| constraint.strip_suffix("_unique"))?;
        let (entity, field) = stripped.split_once('_')?;
        Some((entity.to_string(), field.to_string()))
    }

    fn extract_value_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|c| c[2].to_string())
    }

    fn extract_key_value_from_message(message: &str) -> Option<(String, String)> {
        Self::patterns()
            .key_value
            .captures(message)
            .map(|c| (c[1].to_string(), c[2].to_string()))
    }

    fn extract_table_from_message(message: &str) -> Option<String> {
        Self::patterns()
            .table_name
            .captures(message)
            .map(|c| c[1].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_email_unique_violation() {
        let message = "duplicate key value violates unique constraint \"users_email_key\"\nDETAIL: Key (email)=(alice@example.com) already exists.";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_email_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "alice@example.com".to_string()
            ))
        );
    }

    #[test]
    fn parses_username_unique_violation_without_detail() {
        let message = "duplicate key value violates unique constraint \"users_username_key\"";
        let result = ConstraintParser::parse_unique_violation(message, Some("users_username_key"));
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "username".to_string(),
                "duplicate_value".to_string()
            ))
        );
    }

    #[test]
    fn falls_back_to_message_parsing() {
        let message = "Key (email)=(bob@example.com) already exists in table \"users\".";
        let result = ConstraintParser::parse_unique_violation(message, None);
        assert_eq!(
            result,
            Some((
                "users".to_string(),
                "email".to_string(),
                "bob@example.com".to_string()
            ))
        );
    }

    #[test]
    fn parses_not_null_violation() {
        let message =
            "null value in column \"headline\" of relation \"news\" violates not-null constraint";
        let result = ConstraintParser::parse_not_null_violation(message, None);
        assert_eq!(result.map(|(_, field)| field), Some("headline".to_string()));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn default_constraint_names_round_trip(
                table in "[a-z][a-z0-9]{0,12}",
                column in "[a-z][a-z0-9_]{0,12}",
                value in "[A-Za-z0-9@.\\-]{1,24}",
            ) {
                let constraint = format!("{table}_{column}_key");
                let message = format!(
                    "duplicate key value violates unique constraint \"{constraint}\"\n\
                     DETAIL: Key ({column})=({value}) already exists."
                );
                let parsed =
                    ConstraintParser::parse_unique_violation(&message, Some(&constraint));
                prop_assert_eq!(parsed, Some((table, column, value)));
            }

            #[test]
            fn arbitrary_text_never_panics(message in ".{0,200}") {
                let _ = ConstraintParser::parse_unique_violation(&message, None);
                let _ = ConstraintParser::parse_not_null_violation(&message, None);
            }
        }
    }
}
