use anomaly_archive_shared::{ArchiveError, Result};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Node, Window};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(ArchiveError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(ArchiveError::NoDocument)
}

/// Map a thrown JS value into [`ArchiveError::Dom`] for operation `op`.
pub fn js_err(op: &'static str) -> impl FnOnce(JsValue) -> ArchiveError {
    move |value| ArchiveError::Dom {
        op,
        detail: describe(&value),
    }
}

pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Every element matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = document
        .query_selector_all(selector)
        .map_err(js_err("querySelectorAll"))?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn exists(document: &Document, selector: &str) -> bool {
    matches!(document.query_selector(selector), Ok(Some(_)))
}

/// First descendant of `root` matching `selector`.
pub fn find_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn create(document: &Document, tag: &str) -> Result<HtmlElement> {
    document
        .create_element(tag)
        .map_err(js_err("createElement"))?
        .dyn_into::<HtmlElement>()
        .map_err(|el| ArchiveError::Dom {
            op: "createElement",
            detail: format!("<{}> is not an HTMLElement", el.tag_name()),
        })
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Register `handler` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err("addEventListener"))?;
    closure.forget();
    Ok(())
}

/// Insert a fresh `<div>` right before `anchor` and return it.
pub fn host_before(document: &Document, anchor: &Element) -> Result<HtmlElement> {
    let host = create(document, "div")?;
    let parent = anchor.parent_node().ok_or(ArchiveError::Dom {
        op: "insertBefore",
        detail: "anchor is detached".to_string(),
    })?;
    let anchor: &Node = anchor;
    parent
        .insert_before(&host, Some(anchor))
        .map_err(js_err("insertBefore"))?;
    Ok(host)
}

/// Append a fresh `<div>` to `<body>` and return it.
pub fn host_in_body(document: &Document) -> Result<HtmlElement> {
    let body = document.body().ok_or(ArchiveError::Dom {
        op: "appendChild",
        detail: "document has no body".to_string(),
    })?;
    let host = create(document, "div")?;
    body.append_child(&host).map_err(js_err("appendChild"))?;
    Ok(host)
}

/// Add a `<style id=..>` to `<head>` unless one with that id exists.
pub fn inject_stylesheet(document: &Document, id: &str, css: &str) -> Result<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(ArchiveError::Dom {
        op: "appendChild",
        detail: "document has no head".to_string(),
    })?;
    let style = document.create_element("style").map_err(js_err("createElement"))?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style).map_err(js_err("appendChild"))?;
    Ok(())
}
