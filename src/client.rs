//! Browser entry point: hydrates the server-rendered view.
//!
//! Compiled only with the `hydrate` feature and built with wasm-pack. The page
//! shell imports the generated module, awaits `init()` and calls [`hydrate`].
//!
//! ```js
//! import init, { hydrate } from '/pkg/stroop.js';
//! init().then(() => hydrate());
//! ```

// wasm-bindgen's generated glue contains unsafe blocks
#![allow(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::component::Component;
use crate::constants::{DATA_ELEMENT_ID, ROOT_ELEMENT_ID};
use crate::view::StroopView;

/// Installs the panic hook so Rust panics show up in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// Re-creates the Stroop view from the embedded page data and makes it clickable.
///
/// # Errors
///
/// Returns an error if there is no document, the root element is missing or
/// the embedded data is not valid JSON props.
#[wasm_bindgen]
pub fn hydrate() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))?;

    let props = read_props(&document, DATA_ELEMENT_ID)?;
    mount::<StroopView>(&document, ROOT_ELEMENT_ID, props)
}

/// Reads JSON props from a `<script type="application/json">` element.
///
/// A page without the element (static mode) yields default props.
fn read_props<P>(document: &Document, data_id: &str) -> Result<P, JsValue>
where
    P: DeserializeOwned + Default,
{
    let Some(element) = document.get_element_by_id(data_id) else {
        return Ok(P::default());
    };

    let text = element.text_content().unwrap_or_default();
    serde_json::from_str(&text)
        .map_err(|e| JsValue::from_str(&format!("Invalid page data in #{data_id}: {e}")))
}

/// Mounts a component onto the element with id `root_id`.
///
/// Server markup that already matches the component's render is kept as is.
/// Every click on the root activates the component and re-renders it.
fn mount<C>(document: &Document, root_id: &str, props: C::Props) -> Result<(), JsValue>
where
    C: Component + 'static,
{
    let root: Element = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("Root element #{root_id} not found")))?;

    let component = C::from_props(props);
    let markup = component.render();
    if root.inner_html() != markup {
        web_sys::console::warn_1(&JsValue::from_str(
            "Server markup differs from client render; re-rendering",
        ));
        root.set_inner_html(&markup);
    }

    let component = Rc::new(RefCell::new(component));
    let target = root.clone();
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        let mut component = component.borrow_mut();
        component.activate();
        target.set_inner_html(&component.render());
    });

    root.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    // The listener lives as long as the page
    on_click.forget();

    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::names::COLOR_NAMES;
    use crate::view::StroopProps;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    /// Appends a fresh `<div id=...>` holding `inner` to the body.
    fn root_with(document: &Document, id: &str, inner: &str) -> Element {
        let root = document.create_element("div").unwrap();
        root.set_id(id);
        root.set_inner_html(inner);
        document.body().unwrap().append_child(&root).unwrap();
        root
    }

    #[wasm_bindgen_test]
    fn static_page_reads_default_props() {
        let props: StroopProps = read_props(&document(), "no-such-data").unwrap();
        assert_eq!(props, StroopProps::default());
    }

    #[wasm_bindgen_test]
    fn embedded_data_is_read() {
        let document = document();
        let script = document.create_element("script").unwrap();
        script.set_attribute("type", "application/json").unwrap();
        script.set_id("data-embedded");
        script.set_text_content(Some(r#"{"name":"orange","color":"blue"}"#));
        document.body().unwrap().append_child(&script).unwrap();

        let props: StroopProps = read_props(&document, "data-embedded").unwrap();
        assert_eq!(props, StroopProps::new("orange", "blue"));
    }

    #[wasm_bindgen_test]
    fn matching_server_markup_is_kept() {
        let document = document();
        let props = StroopProps::new("green", "red");
        let server_markup = StroopView::new(props.clone()).render();
        let root = root_with(&document, "root-matching", &server_markup);
        let heading = root.first_element_child().unwrap();

        mount::<StroopView>(&document, "root-matching", props).unwrap();

        // Same node, not a replacement with equal markup
        let after = root.first_element_child().unwrap();
        assert!(heading.is_same_node(Some(&after)));
        assert_eq!(root.inner_html(), server_markup);
    }

    #[wasm_bindgen_test]
    fn mismatched_server_markup_is_rerendered() {
        let document = document();
        let props = StroopProps::new("violet", "yellow");
        let root = root_with(&document, "root-mismatch", "<h1>stale</h1>");

        mount::<StroopView>(&document, "root-mismatch", props.clone()).unwrap();

        assert_eq!(root.inner_html(), StroopView::new(props).render());
    }

    #[wasm_bindgen_test]
    fn click_activates_and_rerenders() {
        let document = document();
        let props = StroopProps::default();
        let root = root_with(&document, "root-click", &StroopView::new(props.clone()).render());

        mount::<StroopView>(&document, "root-click", props).unwrap();
        root.dispatch_event(&Event::new("click").unwrap()).unwrap();

        // "black" is not a pickable color, so the re-render must show a new one
        let heading = root.first_element_child().unwrap();
        let label = heading.text_content().unwrap();
        let style = heading.get_attribute("style").unwrap();
        assert!(COLOR_NAMES.contains(&label.as_str()), "label {label}");
        assert!(!style.starts_with("color:black;"), "style {style}");
        let color = style
            .strip_prefix("color:")
            .and_then(|rest| rest.split(';').next())
            .unwrap();
        assert!(COLOR_NAMES.contains(&color), "color {color}");
    }

    #[wasm_bindgen_test]
    fn missing_root_is_an_error() {
        let result = mount::<StroopView>(&document(), "no-such-root", StroopProps::default());
        assert!(result.is_err());
    }
}
