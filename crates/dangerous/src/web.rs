// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A [`Host`] creating real DOM elements through `web-sys`

#[cfg(debug_assertions)]
use std::sync::Once;

use wasm_bindgen::{throw_str, throw_val};
use web_sys::{Document, Element};

use crate::host::{Host, View};
use crate::props::{AttrValue, Props};

pub struct WebHost {
    document: Document,
}

impl WebHost {
    /// Host for the document of the current window.
    pub fn new() -> Option<Self> {
        let document = web_sys::window()?.document()?;

        Some(WebHost { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Host for WebHost {
    type Instance = Element;

    fn create(&mut self, tag: &str, props: &Props) -> Element {
        let el = self
            .document
            .create_element(tag)
            .unwrap_or_else(|err| throw_val(err));

        for (name, value) in props.iter() {
            let res = match value {
                AttrValue::Bool(true) => el.set_attribute(name, ""),
                AttrValue::Bool(false) => continue,
                AttrValue::Text(text) => el.set_attribute(name, text),
                value => el.set_attribute(name, &value.to_string()),
            };

            if let Err(err) = res {
                log::warn!("failed to set `{name}` on <{tag}>: {err:?}");
            }
        }

        if let Some(html) = props.inner_html() {
            el.set_inner_html(html.as_str());
        }

        el
    }
}

/// Mount `view` at the end of `<body>`.
pub fn start(view: View) -> Element {
    init_panic_hook();

    let mut host = WebHost::new().unwrap_or_else(|| throw_str("no document to mount into"));
    let el = host.mount(view);

    match host.document.body() {
        Some(body) => {
            if let Err(err) = body.append_child(&el) {
                throw_val(err);
            }
        }
        None => log::warn!("document has no <body>, element left detached"),
    }

    el
}

/// Replace the content of the element with the id `root` with `view`.
///
/// Returns `None` if there is no such element.
pub fn mount_at(root: &str, view: View) -> Option<Element> {
    init_panic_hook();

    let mut host = WebHost::new()?;

    let root_el = match host.document.get_element_by_id(root) {
        Some(el) => el,
        None => {
            log::warn!("no element with id `{root}` to mount into");
            return None;
        }
    };

    let el = host.mount(view);

    root_el.set_text_content(None);

    if let Err(err) = root_el.append_child(&el) {
        throw_val(err);
    }

    Some(el)
}

/// Route panics to the browser console, once per program and on debug builds only.
fn init_panic_hook() {
    #[cfg(debug_assertions)]
    {
        static HOOK: Once = Once::new();

        HOOK.call_once(|| std::panic::set_hook(Box::new(console_error_panic_hook::hook)));
    }
}
