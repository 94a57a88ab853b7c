//! Browser fullscreen access.
//!
//! Browsers expose fullscreen under four method families. The family is
//! picked once when [`BrowserFullscreen`] is created; everything after that
//! goes through [`FullscreenApi`].

use deck_shared::fullscreen::FullscreenApi;
use deck_shared::DeckError;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element};

/// Method and property names of one fullscreen API family
#[derive(Debug, PartialEq, Eq)]
pub struct VendorApi {
    pub name: &'static str,
    /// Called on the document element
    pub request: &'static str,
    /// Called on the document
    pub exit: &'static str,
    /// Document property holding the fullscreen element
    pub element: &'static str,
    pub change_event: &'static str,
}

pub const VENDOR_APIS: [VendorApi; 4] = [
    VendorApi {
        name: "standard",
        request: "requestFullscreen",
        exit: "exitFullscreen",
        element: "fullscreenElement",
        change_event: "fullscreenchange",
    },
    VendorApi {
        name: "ms",
        request: "msRequestFullscreen",
        exit: "msExitFullscreen",
        element: "msFullscreenElement",
        change_event: "MSFullscreenChange",
    },
    VendorApi {
        name: "moz",
        request: "mozRequestFullScreen",
        exit: "mozCancelFullScreen",
        element: "mozFullScreenElement",
        change_event: "mozfullscreenchange",
    },
    VendorApi {
        name: "webkit",
        request: "webkitRequestFullscreen",
        exit: "webkitExitFullscreen",
        element: "webkitFullscreenElement",
        change_event: "webkitfullscreenchange",
    },
];

/// First family whose request method exists on `target`
pub fn detect_vendor(target: &JsValue) -> Option<&'static VendorApi> {
    VENDOR_APIS
        .iter()
        .find(|api| Reflect::has(target, &JsValue::from_str(api.request)).unwrap_or(false))
}

pub struct BrowserFullscreen {
    document: Document,
    root: Option<Element>,
    api: Option<&'static VendorApi>,
}

impl BrowserFullscreen {
    pub fn new(document: Document) -> Self {
        let root = document.document_element();
        let api = root.as_ref().and_then(|el| detect_vendor(el.as_ref()));
        match api {
            Some(api) => tracing::debug!(vendor = api.name, "fullscreen api detected"),
            None => tracing::warn!("fullscreen api unavailable"),
        }
        Self { document, root, api }
    }

    /// Change event name for the detected family
    pub fn change_event(&self) -> Option<&'static str> {
        self.api.map(|api| api.change_event)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn api(&self) -> Result<&'static VendorApi, DeckError> {
        self.api
            .ok_or_else(|| DeckError::Fullscreen("fullscreen is not supported".to_string()))
    }

    fn call(target: &JsValue, method: &str) -> Result<JsValue, DeckError> {
        let function = Reflect::get(target, &JsValue::from_str(method))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(js_error)?;
        function.call0(target).map_err(js_error)
    }

    /// Standard requests answer with a promise; its rejection is only logged
    fn watch_promise(result: JsValue) {
        if let Ok(promise) = result.dyn_into::<Promise>() {
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    tracing::warn!(error = ?e, "fullscreen promise rejected");
                }
            });
        }
    }
}

impl FullscreenApi for BrowserFullscreen {
    fn is_fullscreen(&self) -> bool {
        VENDOR_APIS.iter().any(|api| {
            Reflect::get(self.document.as_ref(), &JsValue::from_str(api.element))
                .map(|value| !value.is_null() && !value.is_undefined())
                .unwrap_or(false)
        })
    }

    fn request(&self) -> Result<(), DeckError> {
        let api = self.api()?;
        let root = self
            .root
            .as_ref()
            .ok_or_else(|| DeckError::MissingElement("documentElement".to_string()))?;
        let result = Self::call(root.as_ref(), api.request)?;
        Self::watch_promise(result);
        Ok(())
    }

    fn exit(&self) -> Result<(), DeckError> {
        let api = self.api()?;
        let result = Self::call(self.document.as_ref(), api.exit)?;
        Self::watch_promise(result);
        Ok(())
    }
}

fn js_error(value: impl Into<JsValue>) -> DeckError {
    let value = value.into();
    let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    DeckError::Fullscreen(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_family_is_distinct() {
        for (i, a) in VENDOR_APIS.iter().enumerate() {
            for b in VENDOR_APIS.iter().skip(i + 1) {
                assert_ne!(a.request, b.request);
                assert_ne!(a.change_event, b.change_event);
            }
        }
    }

    #[test]
    fn test_standard_api_is_preferred() {
        assert_eq!(VENDOR_APIS[0].name, "standard");
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_detects_vendor_on_plain_object() {
        let fake = js_sys::Object::new();
        let noop = Function::new_no_args("");
        Reflect::set(&fake, &JsValue::from_str("webkitRequestFullscreen"), &noop).unwrap();
        let api = detect_vendor(fake.as_ref()).unwrap();
        assert_eq!(api.name, "webkit");
    }

    #[wasm_bindgen_test]
    fn test_not_fullscreen_at_startup() {
        let document = web_sys::window().unwrap().document().unwrap();
        let fullscreen = BrowserFullscreen::new(document);
        assert!(!fullscreen.is_fullscreen());
    }
}
