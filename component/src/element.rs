//! ==============================================================================
//! element.rs - `<header-component>` custom element
//! ==============================================================================
//!
//! the element renders on construction: its inner html is replaced by the
//! shared header markup. there is no update path afterwards.
//!
//! ==============================================================================

use shared::{define_once, render_header, ElementRegistry, Registration, RegistryError, TAG_NAME};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CustomElementRegistry, HtmlElement};

// custom element constructors have to be real classes extending HTMLElement
#[wasm_bindgen(inline_js = r#"
export function element_class(render) {
    return class extends HTMLElement {
        constructor() {
            super();
            render(this);
        }
    };
}
"#)]
extern "C" {
    fn element_class(render: &js_sys::Function) -> js_sys::Function;
}

/// window.customElements, defining elements that call `render` on construction
struct WindowRegistry {
    inner: CustomElementRegistry,
    render: fn(&HtmlElement),
}

impl ElementRegistry for WindowRegistry {
    fn is_defined(&self, name: &str) -> bool {
        !self.inner.get(name).is_undefined()
    }

    fn define(&mut self, name: &str) -> Result<(), RegistryError> {
        let render = self.render;
        let callback = Closure::<dyn Fn(HtmlElement)>::new(move |element: HtmlElement| {
            render(&element)
        });
        let class = element_class(callback.as_ref().unchecked_ref());

        let defined = self.inner.define(name, &class).map_err(|err| {
            RegistryError::Platform(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
        });
        // every instance of the element calls back into it for the page lifetime
        forget_on_success(defined, callback, Closure::forget)
    }
}

/// hand `handle` to `forget` only when `result` is ok; otherwise it drops
fn forget_on_success<T, E, H>(
    result: Result<T, E>,
    handle: H,
    forget: impl FnOnce(H),
) -> Result<T, E> {
    if result.is_ok() {
        forget(handle);
    }
    result
}

fn render_into(element: &HtmlElement) {
    element.set_inner_html(&render_header());
}

/// define `<header-component>` on the current window
///
/// safe to call more than once; later calls log a warning and do nothing.
pub fn define_header_element() -> Result<Registration, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let mut registry = WindowRegistry {
        inner: window.custom_elements(),
        render: render_into,
    };

    define_once(&mut registry, TAG_NAME).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_handle_forgotten_after_define() {
        let forgotten = Cell::new(false);
        let result: Result<(), RegistryError> =
            forget_on_success(Ok(()), (), |_| forgotten.set(true));

        assert!(result.is_ok());
        assert!(forgotten.get());
    }

    #[test]
    fn test_handle_dropped_when_define_fails() {
        let forgotten = Cell::new(false);
        let failure = RegistryError::Platform("NotSupportedError".to_string());
        let result =
            forget_on_success(Err::<(), _>(failure.clone()), (), |_| forgotten.set(true));

        assert_eq!(result, Err(failure));
        assert!(!forgotten.get());
    }
}
