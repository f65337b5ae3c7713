//! Keyword plist helpers for the s-expression config and trace formats.

use lexpr::Value;

/// Look up the value following `:key` in an s-expression plist.
/// Walks cons pairs directly.  Handles both `Value::Keyword("key")`
/// (elisp parser) and `Value::Symbol(":key")` (default parser) forms.
pub fn get_value<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    let prefixed = format!(":{}", key);
    let mut current = value;
    while let Value::Cons(pair) = current {
        let is_key = match pair.car() {
            Value::Keyword(k) => k.as_ref() == key,
            Value::Symbol(s) => s.as_ref() == prefixed,
            _ => false,
        };
        if is_key {
            return match pair.cdr() {
                Value::Cons(next) => Some(next.car()),
                _ => None,
            };
        }
        current = pair.cdr();
    }
    None
}

/// Keys of a keyword plist, without their leading colon.  Returns `None`
/// when a key position holds something other than a keyword or the list
/// is improper.
pub fn plist_keys(value: &Value) -> Option<Vec<String>> {
    let mut keys = Vec::new();
    let mut current = value;
    loop {
        match current {
            Value::Cons(pair) => {
                let key = match pair.car() {
                    Value::Keyword(k) => k.to_string(),
                    Value::Symbol(s) => s.strip_prefix(':')?.to_string(),
                    _ => return None,
                };
                keys.push(key);
                current = match pair.cdr() {
                    Value::Cons(next) => next.cdr(),
                    _ => return None,
                };
            }
            Value::Null | Value::Nil => return Some(keys),
            _ => return None,
        }
    }
}

/// Extract a plist value rendered as a string.  Keywords lose their
/// leading colon, booleans become `t`/`nil`.
pub fn get_keyword(value: &Value, key: &str) -> Option<String> {
    let val = get_value(value, key)?;
    Some(match val {
        Value::Keyword(v) => v.to_string(),
        Value::Symbol(v) => {
            let s = v.to_string();
            s.strip_prefix(':').unwrap_or(&s).to_string()
        }
        Value::String(v) => v.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => bool_str(*b).to_string(),
        Value::Null | Value::Nil => "nil".to_string(),
        _ => val.to_string(),
    })
}

/// Extract a floating-point value from an s-expression plist.
pub fn get_float(value: &Value, key: &str) -> Option<f64> {
    match get_value(value, key)? {
        Value::Number(n) => n.as_f64(),
        _ => get_keyword(value, key).and_then(|s| s.parse().ok()),
    }
}

/// Extract a non-negative integer value from an s-expression plist.
pub fn get_usize(value: &Value, key: &str) -> Option<usize> {
    match get_value(value, key)? {
        Value::Number(n) => n.as_u64().and_then(|v| usize::try_from(v).ok()),
        _ => None,
    }
}

/// Whether a value is an empty list or the `nil` symbol.
pub fn is_nil(value: &Value) -> bool {
    match value {
        Value::Null | Value::Nil => true,
        Value::Bool(b) => !*b,
        Value::Symbol(s) => s.as_ref() == "nil",
        _ => false,
    }
}

/// Collect the elements of a proper list.  Returns `None` for anything
/// that is not a list.
pub fn list_items(value: &Value) -> Option<Vec<&Value>> {
    let mut items = Vec::new();
    let mut current = value;
    loop {
        match current {
            Value::Cons(pair) => {
                items.push(pair.car());
                current = pair.cdr();
            }
            Value::Null | Value::Nil => return Some(items),
            _ => return None,
        }
    }
}

/// Render a boolean the way plists expect it.
pub fn bool_str(b: bool) -> &'static str {
    if b {
        "t"
    } else {
        "nil"
    }
}

/// Escape a string for s-expression output.
pub fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Format an event s-expression.
pub fn format_event(event_type: &str, fields: &[(&str, String)]) -> String {
    let mut s = format!("(:type :event :event :{}", event_type);
    for (key, val) in fields {
        s.push_str(&format!(" :{} {}", key, val));
    }
    s.push(')');
    s
}
