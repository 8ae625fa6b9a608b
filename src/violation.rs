use serde::Serialize;
use utoipa::ToSchema;
use validator::{ValidationErrors, ValidationErrorsKind};

/// The constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    RequiredFieldMissing,
    TypeMismatch,
    NumericRangeViolation,
    StringLengthViolation,
    EnumValueInvalid,
}

/// A single field failing a single constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Violation {
    /// Dotted path to the field, if it could be determined.
    pub field: Option<String>,
    pub kind: ViolationKind,
    pub message: String,
}

impl Violation {
    /// Classifies the message of a failed deserialization.
    ///
    /// Accepts the rejection text of axum's `Json` and `Query` extractors, e.g.
    /// `Failed to deserialize the JSON body into the target type: person: missing field `age` at line 1 column 12`.
    pub fn from_deserialize_reason(reason: &str) -> Self {
        let detail = strip_rejection_prefix(reason);
        let (path, detail) = split_path(detail);

        if let Some(rest) = detail.strip_prefix("missing field `") {
            let name = rest.split('`').next().unwrap_or_default();

            return Violation {
                field: Some(join_path(path, name)),
                kind: ViolationKind::RequiredFieldMissing,
                message: format!("Field `{name}` is required"),
            };
        }

        let kind = match detail.starts_with("unknown variant `") {
            true => ViolationKind::EnumValueInvalid,
            false => ViolationKind::TypeMismatch,
        };

        Violation {
            field: path.map(str::to_string),
            kind,
            message: detail.to_string(),
        }
    }

    /// Flattens [`ValidationErrors`] into one violation per failed rule, sorted by field.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Vec<Self> {
        let mut violations = Vec::new();
        collect(None, errors, &mut violations);
        violations.sort_by(|a, b| a.field.cmp(&b.field));

        violations
    }
}

fn collect(prefix: Option<&str>, errors: &ValidationErrors, violations: &mut Vec<Violation>) {
    for (field, kind) in errors.errors() {
        let path = join_path(prefix, &field.to_string());

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                violations.extend(field_errors.iter().map(|error| {
                    let kind = match &*error.code {
                        "length" => ViolationKind::StringLengthViolation,
                        "range" => ViolationKind::NumericRangeViolation,
                        _ => ViolationKind::TypeMismatch,
                    };

                    let message = error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| format!("Failed `{}` validation", error.code));

                    Violation {
                        field: Some(path.clone()),
                        kind,
                        message,
                    }
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect(Some(&path), nested, violations),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(Some(&format!("{path}[{index}]")), nested, violations);
                }
            }
        }
    }
}

/// Drops axum's `Failed to deserialize ...: ` prefix.
fn strip_rejection_prefix(reason: &str) -> &str {
    match reason.strip_prefix("Failed to deserialize") {
        Some(rest) => rest.split_once(": ").map_or(rest, |(_, detail)| detail),
        None => reason,
    }
}

/// Splits a leading `path: ` off a deserializer message.
///
/// Paths never contain spaces, messages like `invalid type: ...` always do.
fn split_path(detail: &str) -> (Option<&str>, &str) {
    match detail.split_once(": ") {
        Some((path, rest)) if !path.is_empty() && !path.contains(' ') => {
            let path = (path != ".").then_some(path);

            (path, rest)
        }
        _ => (None, detail),
    }
}

fn join_path(prefix: Option<&str>, name: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}.{name}"),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[test]
    fn missing_top_level_field() {
        let violation = Violation::from_deserialize_reason(
            "Failed to deserialize the JSON body into the target type: missing field `age` at line 1 column 45",
        );

        assert_eq!(violation.field.as_deref(), Some("age"));
        assert_eq!(violation.kind, ViolationKind::RequiredFieldMissing);
    }

    #[test]
    fn missing_nested_field() {
        let violation = Violation::from_deserialize_reason(
            "Failed to deserialize the JSON body into the target type: person: missing field `last_name` at line 1 column 30",
        );

        assert_eq!(violation.field.as_deref(), Some("person.last_name"));
        assert_eq!(violation.kind, ViolationKind::RequiredFieldMissing);
    }

    #[test]
    fn missing_query_field() {
        let violation = Violation::from_deserialize_reason(
            "Failed to deserialize query string: missing field `age`",
        );

        assert_eq!(violation.field.as_deref(), Some("age"));
        assert_eq!(violation.kind, ViolationKind::RequiredFieldMissing);
    }

    #[test]
    fn unknown_variant_is_enum_violation() {
        let violation = Violation::from_deserialize_reason(
            "Failed to deserialize the JSON body into the target type: hair_color: unknown variant `green`, expected one of `white`, `brown`, `black`, `blonde`, `red` at line 1 column 70",
        );

        assert_eq!(violation.field.as_deref(), Some("hair_color"));
        assert_eq!(violation.kind, ViolationKind::EnumValueInvalid);
    }

    #[test]
    fn invalid_type_without_path() {
        let violation =
            Violation::from_deserialize_reason("invalid type: string \"x\", expected i64");

        assert_eq!(violation.field, None);
        assert_eq!(violation.kind, ViolationKind::TypeMismatch);
        assert_eq!(violation.message, "invalid type: string \"x\", expected i64");
    }

    #[test]
    fn invalid_type_with_nested_path() {
        let violation = Violation::from_deserialize_reason(
            "Failed to deserialize the JSON body into the target type: person.age: invalid type: string \"old\", expected i64 at line 1 column 20",
        );

        assert_eq!(violation.field.as_deref(), Some("person.age"));
        assert_eq!(violation.kind, ViolationKind::TypeMismatch);
    }

    #[derive(Validate)]
    struct Inner {
        #[validate(range(min = 1, max = 3))]
        level: i64,
    }

    #[derive(Validate)]
    struct Outer {
        #[validate(length(min = 1, message = "Must not be empty"))]
        label: String,
        #[validate(nested)]
        inner: Inner,
    }

    #[test]
    fn validation_errors_are_flattened_and_sorted() {
        let outer = Outer {
            label: String::new(),
            inner: Inner { level: 9 },
        };

        let errors = outer.validate().expect_err("Both fields are invalid");
        let violations = Violation::from_validation_errors(&errors);

        assert_eq!(violations.len(), 2);

        assert_eq!(violations[0].field.as_deref(), Some("inner.level"));
        assert_eq!(violations[0].kind, ViolationKind::NumericRangeViolation);

        assert_eq!(violations[1].field.as_deref(), Some("label"));
        assert_eq!(violations[1].kind, ViolationKind::StringLengthViolation);
        assert_eq!(violations[1].message, "Must not be empty");
    }
}
