//! Construction over loosely-typed JSON input.
//!
//! Callers that receive the target and bank as untyped data (request bodies,
//! config files, scripting bridges) go through here; it is the one place a
//! [`ConstructError::TypeMismatch`] can arise.
//!
//! Validation order: target type, target emptiness, the type of every bank
//! element, then emptiness of bank elements.

use serde_json::Value;

use crate::bank::{Target, WordBank};
use crate::error::{ConstructError, InputField, Result};
use crate::Constructor;

/// Validate `target` and `word_bank` as JSON values and construct.
///
/// A missing or `null` bank is treated as empty.
///
/// ```
/// use all_construct::dynamic::construct_value;
/// use serde_json::json;
///
/// let all = construct_value(&json!("hello"), Some(&json!(["he", "l", "o"]))).unwrap();
/// assert_eq!(all, vec![vec!["he", "l", "l", "o"]]);
/// assert!(construct_value(&json!(123), Some(&json!(["a"]))).is_err());
/// ```
pub fn construct_value(target: &Value, word_bank: Option<&Value>) -> Result<Vec<Vec<String>>> {
    let target = match target {
        Value::String(s) => Target::new(s)?,
        other => {
            return Err(ConstructError::type_mismatch(
                InputField::Target,
                "a string",
                json_type_name(other),
            ))
        }
    };

    let bank = bank_from_value(word_bank)?;
    Constructor::from_parts(target, &bank, None).run_owned()
}

/// Validate a JSON bank without constructing anything.
pub fn bank_from_value(word_bank: Option<&Value>) -> Result<WordBank> {
    let items = match word_bank {
        None | Some(Value::Null) => return Ok(WordBank::empty()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ConstructError::type_mismatch(
                InputField::WordBank,
                "an array of strings",
                json_type_name(other),
            ))
        }
    };

    let mut words = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => words.push(s.as_str()),
            other => {
                return Err(ConstructError::type_mismatch(
                    InputField::Word { index },
                    "a string",
                    json_type_name(other),
                ))
            }
        }
    }
    WordBank::new(words)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
