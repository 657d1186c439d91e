//! Endpoint resolution for the import widget.
//!
//! The preview/commit URLs are resolved exactly once at startup and handed
//! to the widget as a prop, so the component never reads ambient globals
//! after initialization. Sources are checked in priority order and the
//! first one providing both URLs wins:
//!
//! 1. a `window.IMPORT_ENDPOINTS` object with `preview`/`commit` fields;
//! 2. JSON text of the page element with id `import-endpoints`;
//! 3. `data-preview-url`/`data-commit-url` attributes on `#import-root`;
//! 4. hard-coded default paths.

use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const DEFAULT_PREVIEW_URL: &str = "/api/import/preview";
pub const DEFAULT_COMMIT_URL: &str = "/api/import/commit";

const GLOBAL_NAME: &str = "IMPORT_ENDPOINTS";
const EMBEDDED_ID: &str = "import-endpoints";
const ROOT_ID: &str = "import-root";

/// Resolved preview/commit URL pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Endpoints {
    pub preview: String,
    pub commit: String,
}

#[derive(Deserialize)]
struct EndpointsDoc {
    #[serde(default)]
    preview: String,
    #[serde(default)]
    commit: String,
}

impl Endpoints {
    pub fn fallback() -> Self {
        Self {
            preview: DEFAULT_PREVIEW_URL.to_string(),
            commit: DEFAULT_COMMIT_URL.to_string(),
        }
    }

    /// A source only counts when it provides both URLs, non-empty.
    fn from_pair(preview: Option<String>, commit: Option<String>) -> Option<Self> {
        match (preview, commit) {
            (Some(preview), Some(commit)) if !preview.is_empty() && !commit.is_empty() => {
                Some(Self { preview, commit })
            }
            _ => None,
        }
    }
}

/// Resolves the endpoint pair from the page, falling back to the defaults.
pub fn discover() -> Endpoints {
    resolve(global_endpoints(), embedded_endpoints(), root_attributes())
}

fn resolve(
    global: Option<Endpoints>,
    embedded: Option<Endpoints>,
    attributes: Option<Endpoints>,
) -> Endpoints {
    global
        .or(embedded)
        .or(attributes)
        .unwrap_or_else(Endpoints::fallback)
}

fn global_endpoints() -> Option<Endpoints> {
    let window = web_sys::window()?;
    let object = js_sys::Reflect::get(&window, &JsValue::from_str(GLOBAL_NAME)).ok()?;
    if !object.is_object() {
        return None;
    }
    let field = |name: &str| {
        js_sys::Reflect::get(&object, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_string())
    };
    Endpoints::from_pair(field("preview"), field("commit"))
}

fn embedded_endpoints() -> Option<Endpoints> {
    let document = web_sys::window()?.document()?;
    let tag = document.get_element_by_id(EMBEDDED_ID)?;
    parse_embedded(&tag.text_content().unwrap_or_default())
}

fn parse_embedded(text: &str) -> Option<Endpoints> {
    let doc: EndpointsDoc = serde_json::from_str(text).ok()?;
    Endpoints::from_pair(Some(doc.preview), Some(doc.commit))
}

fn root_attributes() -> Option<Endpoints> {
    let document = web_sys::window()?.document()?;
    let root = document.get_element_by_id(ROOT_ID)?;
    Endpoints::from_pair(
        root.get_attribute("data-preview-url"),
        root.get_attribute("data-commit-url"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(tag: &str) -> Endpoints {
        Endpoints {
            preview: format!("/{tag}/preview"),
            commit: format!("/{tag}/commit"),
        }
    }

    #[test]
    fn global_source_wins_over_the_rest() {
        let resolved = resolve(Some(pair("global")), Some(pair("embedded")), Some(pair("attrs")));
        assert_eq!(resolved, pair("global"));
    }

    #[test]
    fn embedded_source_beats_attributes() {
        let resolved = resolve(None, Some(pair("embedded")), Some(pair("attrs")));
        assert_eq!(resolved, pair("embedded"));
    }

    #[test]
    fn defaults_apply_when_no_source_satisfies() {
        let resolved = resolve(None, None, None);
        assert_eq!(resolved.preview, DEFAULT_PREVIEW_URL);
        assert_eq!(resolved.commit, DEFAULT_COMMIT_URL);
    }

    #[test]
    fn parse_embedded_accepts_complete_json() {
        let endpoints =
            parse_embedded(r#"{"preview": "/p", "commit": "/c"}"#).expect("valid blob");
        assert_eq!(endpoints.preview, "/p");
        assert_eq!(endpoints.commit, "/c");
    }

    #[test]
    fn parse_embedded_rejects_partial_or_malformed_json() {
        assert!(parse_embedded(r#"{"preview": "/p"}"#).is_none());
        assert!(parse_embedded(r#"{"preview": "", "commit": "/c"}"#).is_none());
        assert!(parse_embedded("not json").is_none());
        assert!(parse_embedded("").is_none());
    }

    #[test]
    fn from_pair_requires_both_urls() {
        assert!(Endpoints::from_pair(Some("/p".into()), None).is_none());
        assert!(Endpoints::from_pair(None, Some("/c".into())).is_none());
        assert!(Endpoints::from_pair(Some("/p".into()), Some(String::new())).is_none());
        assert!(Endpoints::from_pair(Some("/p".into()), Some("/c".into())).is_some());
    }
}
