//! JSON Block Component
//!
//! Pretty-prints an opaque JSON payload.

use leptos::prelude::*;

fn pretty_json(value: Option<&serde_json::Value>) -> String {
    match value {
        None | Some(serde_json::Value::Null) => "N/A".to_string(),
        Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
    }
}

#[component]
pub fn JsonBlock(
    #[prop(into)] title: String,
    value: Option<serde_json::Value>,
) -> impl IntoView {
    let text = pretty_json(value.as_ref());

    view! {
        <div class="section">
            <h3 class="section-title">{title}</h3>
            <pre class="code-box">{text}</pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pretty_json_indents() {
        let value = json!({"action": "click", "target": {"x": 10}});
        let text = pretty_json(Some(&value));
        assert!(text.contains("\n  \"action\": \"click\""));
    }

    #[test]
    fn test_pretty_json_missing() {
        assert_eq!(pretty_json(None), "N/A");
        assert_eq!(pretty_json(Some(&serde_json::Value::Null)), "N/A");
    }
}
