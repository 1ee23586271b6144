//! Pure validation of supplied argument values against declared arguments.

use serde_json::{Map, Value};

use tool_primitives::ToolArg;

const MISSING_LABEL: &str = "Missing required arguments: ";

/// Returns true iff every required declared argument maps to a truthy value
/// in `supplied`.
///
/// Optional arguments never affect the outcome; with no required arguments
/// any mapping, including an empty one, validates.
#[must_use]
pub fn validate_args(declared: &[ToolArg], supplied: &Map<String, Value>) -> bool {
    declared
        .iter()
        .filter(|arg| arg.is_required())
        .all(|arg| supplied.get(arg.name()).is_some_and(is_truthy))
}

/// Returns a message listing the missing required arguments, or `None` when
/// [`validate_args`] would return true.
///
/// Missing names appear in declaration order, joined by a comma and space.
#[must_use]
pub fn missing_args_message(declared: &[ToolArg], supplied: &Map<String, Value>) -> Option<String> {
    let missing: Vec<&str> = declared
        .iter()
        .filter(|arg| arg.is_required() && !supplied.get(arg.name()).is_some_and(is_truthy))
        .map(ToolArg::name)
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("{MISSING_LABEL}{}", missing.join(", ")))
    }
}

// Mirrors the host platform's truthiness rules for supplied values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn command_arg() -> ToolArg {
        ToolArg::new("command", "The command to pass to the AWS CLI")
            .expect("arg")
            .required()
    }

    fn supplied(value: Value) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("command".to_owned(), value);
        map
    }

    #[test]
    fn no_required_args_accepts_anything() {
        let declared = vec![ToolArg::new("region", "AWS region").expect("arg")];
        assert!(validate_args(&declared, &Map::new()));
        assert!(validate_args(&[], &Map::new()));
        assert_eq!(missing_args_message(&declared, &Map::new()), None);
    }

    #[test]
    fn missing_required_arg_rejected() {
        let declared = vec![command_arg()];
        assert!(!validate_args(&declared, &Map::new()));
        assert_eq!(
            missing_args_message(&declared, &Map::new()).as_deref(),
            Some("Missing required arguments: command")
        );
    }

    #[test]
    fn present_required_arg_accepted() {
        let declared = vec![command_arg()];
        let values = supplied(json!("s3 ls"));
        assert!(validate_args(&declared, &values));
        assert_eq!(missing_args_message(&declared, &values), None);
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let declared = vec![command_arg()];
        for value in [json!(null), json!(""), json!(0), json!(false), json!([]), json!({})] {
            let values = supplied(value.clone());
            assert!(!validate_args(&declared, &values), "{value}");
            assert!(missing_args_message(&declared, &values).is_some(), "{value}");
        }
    }

    #[test]
    fn truthy_non_string_values_accepted() {
        let declared = vec![command_arg()];
        for value in [json!(7), json!(true), json!(["a"]), json!({"k": 1})] {
            assert!(validate_args(&declared, &supplied(value.clone())), "{value}");
        }
    }

    #[test]
    fn message_preserves_declaration_order() {
        let declared = vec![
            ToolArg::new("cluster", "Target cluster").expect("arg").required(),
            ToolArg::new("namespace", "Target namespace").expect("arg"),
            ToolArg::new("command", "Command to run").expect("arg").required(),
        ];
        let mut values = Map::new();
        values.insert("namespace".to_owned(), json!("default"));

        assert_eq!(
            missing_args_message(&declared, &values).as_deref(),
            Some("Missing required arguments: cluster, command")
        );
    }

    #[test]
    fn message_is_none_exactly_when_valid() {
        let declared = vec![command_arg()];
        for value in [json!("s3 ls"), json!(""), json!(null)] {
            let values = supplied(value);
            assert_eq!(
                validate_args(&declared, &values),
                missing_args_message(&declared, &values).is_none()
            );
        }
    }
}
