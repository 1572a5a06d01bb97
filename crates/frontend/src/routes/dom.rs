//! `ShellHost` over the live browser document, plus the listeners that
//! feed navigation events into the router.

use super::config::RouterConfig;
use super::host::{NavLink, ShellHost};
use super::router::Router;
use super::table::RouteTableError;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Window};

#[wasm_bindgen]
extern "C" {
    /// Global `feather.replace()` from feather-icons, loaded by index.html.
    #[wasm_bindgen(catch, js_namespace = feather, js_name = replace)]
    fn feather_replace() -> Result<(), JsValue>;
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("failed to register '{event}' listener: {message}")]
    Listener { event: &'static str, message: String },
    #[error(transparent)]
    Routes(#[from] RouteTableError),
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub struct DomLink(Element);

impl NavLink for DomLink {
    fn href(&self) -> Option<String> {
        self.0.get_attribute("href")
    }

    fn add_classes(&self, classes: &[String]) {
        let list = self.0.class_list();
        for class in classes {
            let _ = list.add_1(class);
        }
    }

    fn remove_classes(&self, classes: &[String]) {
        let list = self.0.class_list();
        for class in classes {
            let _ = list.remove_1(class);
        }
    }
}

#[derive(Clone)]
pub struct DomHost {
    window: Window,
    document: Document,
    config: RouterConfig,
}

impl DomHost {
    pub fn new(config: RouterConfig) -> Result<Self, ShellError> {
        let window = web_sys::window().ok_or(ShellError::NoWindow)?;
        let document = window.document().ok_or(ShellError::NoDocument)?;
        Ok(Self {
            window,
            document,
            config,
        })
    }
}

impl ShellHost for DomHost {
    type Link = DomLink;

    fn current_path(&self) -> String {
        self.window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string())
    }

    fn push_history(&self, path: &str) {
        let location = self.window.location();
        let origin = location.origin().unwrap_or_default();
        let url = format!("{}{}", origin, path);
        match self.window.history() {
            Ok(history) => {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, path, Some(&url)) {
                    log::warn!("pushState to '{}' failed: {}", url, js_message(&e));
                }
            }
            Err(e) => log::warn!("history is not available: {}", js_message(&e)),
        }
    }

    fn nav_links(&self) -> Vec<DomLink> {
        let Ok(nodes) = self.document.query_selector_all(&self.config.nav_link_selector) else {
            log::warn!("bad nav link selector '{}'", self.config.nav_link_selector);
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomLink)
            .collect()
    }

    fn set_breadcrumb(&self, title: &str) -> bool {
        match self.document.get_element_by_id(&self.config.breadcrumb_id) {
            Some(el) => {
                el.set_text_content(Some(title));
                true
            }
            None => false,
        }
    }

    fn set_content(&self, markup: &str) -> bool {
        match self.document.get_element_by_id(&self.config.content_container_id) {
            Some(el) => {
                el.set_inner_html(markup);
                true
            }
            None => false,
        }
    }

    fn materialize_icons(&self) {
        if let Err(e) = feather_replace() {
            log::warn!("feather.replace() failed: {}", js_message(&e));
        }
    }
}

/// Wires delegated link clicks and `popstate` into `router`, then renders the
/// current location once. Listeners live for the lifetime of the page.
pub fn install(router: Rc<Router>, host: DomHost) -> Result<(), ShellError> {
    let body = host.document.body().ok_or(ShellError::NoBody)?;

    let click_router = Rc::clone(&router);
    let click_host = host.clone();
    let on_click = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        let selector = &click_router.config().link_selector;
        let link = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(selector).ok().flatten());
        let Some(link) = link else {
            return;
        };
        event.prevent_default();
        match link.get_attribute("href") {
            Some(href) => {
                click_router.navigate(&click_host, &href);
            }
            None => log::warn!("navigation link without href"),
        }
    }) as Box<dyn FnMut(_)>);

    body.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| ShellError::Listener {
            event: "click",
            message: js_message(&e),
        })?;
    on_click.forget();

    let pop_router = Rc::clone(&router);
    let pop_host = host.clone();
    let on_popstate = Closure::wrap(Box::new(move |_event: web_sys::PopStateEvent| {
        pop_router.sync_with_location(&pop_host);
    }) as Box<dyn FnMut(_)>);

    host.window
        .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref())
        .map_err(|e| ShellError::Listener {
            event: "popstate",
            message: js_message(&e),
        })?;
    on_popstate.forget();

    router.sync_with_location(&host);
    Ok(())
}
