use serde_json::{Map, Value};

/// Render a flat JSON object as `key: value` spans joined by `,<br>`.
///
/// Keys and values are interpolated as-is, without HTML escaping.
pub fn json_to_html(json: &Map<String, Value>) -> String {
    json.iter()
        .map(|(key, value)| {
            format!(
                "<span class=\"key\">{}</span>: <span class=\"value\">{}</span>",
                key,
                value_to_text(value)
            )
        })
        .collect::<Vec<_>>()
        .join(",<br>")
}

/// Text form of a JSON value as it appears inside a value span.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
