//! Scripts that apply page operations inside a webview.
//!
//! Every script looks the element up first and returns early when it is not
//! on the page. Values are embedded as JSON string literals, which JavaScript
//! reads back verbatim.

use crate::core::page::Control;

pub fn append_option(control: Control, value: &str, label: &str) -> String {
    for_control(
        control,
        &format!(
            "const opt = document.createElement('option'); opt.value = {}; opt.textContent = {}; el.appendChild(opt);",
            js_string(value),
            js_string(label)
        ),
    )
}

pub fn set_value(control: Control, value: &str) -> String {
    for_control(control, &format!("el.value = {};", js_string(value)))
}

pub fn set_text(control: Control, text: &str) -> String {
    for_control(control, &format!("el.textContent = {};", js_string(text)))
}

fn for_control(control: Control, body: &str) -> String {
    format!(
        "(() => {{ const el = document.getElementById({id}); if (!el) return; {body} }})();",
        id = js_string(control.element_id()),
        body = body,
    )
}

pub fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(literal: &str) -> String {
        serde_json::from_str(literal).unwrap()
    }

    #[test]
    fn test_js_string_escapes_page_values() {
        for value in [
            "Midnight",
            "\"quoted\"",
            "back\\slash",
            "it's",
            "</script><script>alert(1)</script>",
            "line\nbreak",
            "`${template}`",
        ] {
            let literal = js_string(value);
            assert!(literal.starts_with('"') && literal.ends_with('"'), "{}", literal);
            assert!(!literal.contains('\n'));
            assert_eq!(decode(&literal), value);
        }
        assert_eq!(js_string("a\"b\\c"), r#""a\"b\\c""#);
    }

    #[test]
    fn test_scripts_guard_missing_elements() {
        let script = set_value(Control::ClientType, "canary");
        assert_eq!(
            script,
            r#"(() => { const el = document.getElementById("clientType"); if (!el) return; el.value = "canary"; })();"#
        );
    }

    #[test]
    fn test_option_value_cannot_break_out() {
        let script = append_option(Control::ThemeSelect, "x\"; alert(1); \"", "x");
        assert!(script.contains(r#"opt.value = "x\"; alert(1); \"";"#));
        assert!(set_text(Control::ZoomLevelValue, "120%").contains(r#"el.textContent = "120%";"#));
    }
}
