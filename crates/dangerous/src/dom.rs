// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! An in-memory [`Host`] that keeps elements in an arena and serializes them to HTML

use std::fmt::{self, Write};

use askama_escape::{escape, Html};

use crate::host::Host;
use crate::props::{AttrValue, Props, RawHtml};

/// Elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "keygen", "link", "meta", "param",
    "source", "track", "wbr",
];

/// Handle to an element created by a [`Document`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug)]
pub struct Element {
    tag: String,
    props: Props,
    children: Vec<NodeId>,
}

impl Element {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
        self.props.get(name)
    }

    pub fn inner_html(&self) -> Option<&RawHtml> {
        self.props.inner_html()
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena of elements created through the [`Host`] trait.
///
/// ```
/// use dangerous::dom::Document;
/// use dangerous::{Host, Props, RawHtml, View};
///
/// let mut doc = Document::new();
///
/// let props = Props::new().with("id", "greeting").with_inner_html(RawHtml::new("<b>Hi</b>"));
/// let id = doc.mount(View::new("p", props));
///
/// assert_eq!(doc.outer_html(id).unwrap(), r#"<p id="greeting"><b>Hi</b></p>"#);
/// ```
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Append `child` to the children of `parent`. Returns `false` if either
    /// element doesn't belong to this document.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.get(child).is_none() {
            return false;
        }

        match self.elements.get_mut(parent.0) {
            Some(parent) => {
                parent.children.push(child);
                true
            }
            None => false,
        }
    }

    /// Serialize the element `id` including its own tag.
    pub fn outer_html(&self, id: NodeId) -> Option<String> {
        let mut buf = String::new();

        self.get(id)?;
        self.write_element(&mut buf, id).ok()?;

        Some(buf)
    }

    /// Serialize the content of the element `id`.
    pub fn inner_html(&self, id: NodeId) -> Option<String> {
        let mut buf = String::new();

        self.write_content(&mut buf, self.get(id)?).ok()?;

        Some(buf)
    }

    pub fn write_element(&self, buf: &mut impl Write, id: NodeId) -> fmt::Result {
        let el = match self.get(id) {
            Some(el) => el,
            None => return Ok(()),
        };

        write!(buf, "<{}", el.tag)?;

        for (name, value) in el.props.iter() {
            write_attribute(buf, name, value)?;
        }

        buf.write_char('>')?;

        if VOID_ELEMENTS.iter().any(|void| *void == el.tag) {
            return Ok(());
        }

        self.write_content(buf, el)?;

        write!(buf, "</{}>", el.tag)
    }

    /// A raw markup payload replaces any children, as assigning `innerHTML` does.
    fn write_content(&self, buf: &mut impl Write, el: &Element) -> fmt::Result {
        if let Some(html) = el.inner_html() {
            return buf.write_str(html.as_str());
        }

        for child in el.children.iter() {
            self.write_element(buf, *child)?;
        }

        Ok(())
    }
}

fn write_attribute(buf: &mut impl Write, name: &str, value: &AttrValue) -> fmt::Result {
    match value {
        AttrValue::Bool(true) => write!(buf, " {name}"),
        AttrValue::Bool(false) => Ok(()),
        AttrValue::Text(text) => write!(buf, " {name}=\"{}\"", escape(text, Html)),
        value => write!(buf, " {name}=\"{value}\""),
    }
}

impl Host for Document {
    type Instance = NodeId;

    fn create(&mut self, tag: &str, props: &Props) -> NodeId {
        let id = NodeId(self.elements.len());

        log::trace!("creating <{tag}> as {id:?}");

        self.elements.push(Element {
            tag: tag.to_owned(),
            props: props.clone(),
            children: Vec::new(),
        });

        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::host::View;

    #[test]
    fn attributes_are_escaped_payload_is_not() {
        let mut doc = Document::new();

        let props = Props::new()
            .with("title", "\"quoted\" <b>")
            .with("hidden", true)
            .with("draggable", false)
            .with("tabindex", 2)
            .with_inner_html(RawHtml::new("<script>alert(1)</script>"));

        let id = doc.mount(View::new("div", props));

        assert_eq!(
            doc.outer_html(id).unwrap(),
            "<div hidden tabindex=\"2\" title=\"&quot;quoted&quot; &lt;b&gt;\"><script>alert(1)</script></div>"
        );
    }

    #[test]
    fn children_and_void_elements() {
        let mut doc = Document::new();

        let list = doc.mount(View::new("ul", Props::new()));
        let item = doc.mount(View::new("li", Props::new().with_inner_html(RawHtml::new("one"))));
        let br = doc.mount(View::new("br", Props::new()));

        assert!(doc.append_child(list, item));
        assert!(doc.append_child(list, br));

        assert_eq!(doc.outer_html(list).unwrap(), "<ul><li>one</li><br></ul>");
        assert_eq!(doc.inner_html(list).unwrap(), "<li>one</li><br>");
    }

    #[test]
    fn payload_replaces_children() {
        let mut doc = Document::new();

        let parent = doc.mount(View::new(
            "div",
            Props::new().with_inner_html(RawHtml::new("payload")),
        ));
        let child = doc.mount(View::new("span", Props::new()));

        doc.append_child(parent, child);

        assert_eq!(doc.outer_html(parent).unwrap(), "<div>payload</div>");
    }

    #[test]
    fn foreign_ids() {
        let mut doc = Document::new();
        let mut other = Document::new();

        let a = doc.mount(View::new("div", Props::new()));
        let _ = other.mount(View::new("div", Props::new()));
        let b = other.mount(View::new("div", Props::new()));

        assert!(!doc.append_child(a, b));
        assert!(!doc.append_child(a, a));
        assert_eq!(doc.outer_html(b), None);
        assert_eq!(doc.len(), 1);
    }
}
