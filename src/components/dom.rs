//! Small helpers for the few places that reach outside the component tree.

use web_sys::{window, Document, HtmlElement};

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// Set (or with an empty value, clear) one inline style on `<body>`.
pub fn set_body_style(property: &str, value: &str) {
    let Some(body) = body() else {
        return;
    };
    if let Err(e) = body.style().set_property(property, value) {
        gloo_console::error!("Failed to set body style", property, e);
    }
}

pub fn set_root_attribute(name: &str, value: &str) {
    let Some(root) = document().and_then(|d| d.document_element()) else {
        return;
    };
    if let Err(e) = root.set_attribute(name, value) {
        gloo_console::error!("Failed to set root attribute", name, e);
    }
}
