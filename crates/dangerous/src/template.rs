// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Templates of literal markup interleaved with property callbacks

use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::props::{Props, RawHtml};

type Callback = Rc<dyn Fn(&Props) -> Cow<'_, str>>;

/// Literal markup fragments interleaved with callbacks computing text from
/// the current [`Props`].
///
/// A template with `N` fragments always holds exactly `N - 1` callbacks,
/// every fragment but the last one is followed by a callback. The only way to
/// add a callback is [`then`](Template::then), which also appends the
/// fragment following it.
///
/// Use the [`template!`](crate::template) macro to build one in place:
///
/// ```
/// use dangerous::{template, Props};
///
/// let greeting = template!["<p>Hello " { |p| p.text("name").into() } "!</p>"];
///
/// let html = greeting.assemble(&Props::new().with("name", "Sam"));
///
/// assert_eq!(html, "<p>Hello Sam!</p>");
/// ```
#[derive(Clone, Default)]
pub struct Template {
    fragments: Vec<beef::Cow<'static, str>>,
    callbacks: Vec<Callback>,
}

impl Template {
    /// Template without any fragments, assembles to an empty string.
    pub fn empty() -> Self {
        Template::default()
    }

    /// Template with a single fragment and no callbacks.
    pub fn new(fragment: impl Into<beef::Cow<'static, str>>) -> Self {
        Template {
            fragments: vec![fragment.into()],
            callbacks: Vec::new(),
        }
    }

    /// Append a callback followed by the next literal `fragment`.
    ///
    /// On an empty template the callback is preceded by an empty fragment.
    pub fn then<F>(mut self, callback: F, fragment: impl Into<beef::Cow<'static, str>>) -> Self
    where
        F: Fn(&Props) -> Cow<'_, str> + 'static,
    {
        if self.fragments.is_empty() {
            self.fragments.push(beef::Cow::borrowed(""));
        }

        self.callbacks.push(Rc::new(callback));
        self.fragments.push(fragment.into());
        self
    }

    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|fragment| &**fragment)
    }

    /// Number of literal fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of callbacks, always `len() - 1` for non-empty templates.
    pub fn interpolations(&self) -> usize {
        self.callbacks.len()
    }

    /// Concatenate all fragments with the output of each callback invoked on
    /// `props` in between.
    ///
    /// Nothing is escaped: both the fragments and the callback outputs end up
    /// in the resulting markup verbatim.
    pub fn assemble(&self, props: &Props) -> RawHtml {
        let mut html = String::with_capacity(self.fragments.iter().map(|f| f.len()).sum());

        let mut callbacks = self.callbacks.iter();

        for fragment in self.fragments.iter() {
            html.push_str(fragment);

            if let Some(callback) = callbacks.next() {
                html.push_str(&callback(props));
            }
        }

        RawHtml::new(html)
    }
}

impl Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Template")
            .field("fragments", &self.fragments)
            .field("interpolations", &self.callbacks.len())
            .finish()
    }
}

/// Build a [`Template`](crate::Template) from string literals alternating with
/// `{ ... }` callbacks.
///
/// Callbacks take `&Props` and return a `Cow<str>`. The template must start
/// and end with a literal, use `""` where there is no text.
///
/// ```
/// use dangerous::template;
///
/// let list = template![
///     "<ul><li>" { |p| p.text("first").into() }
///     "</li><li>" { |p| format!("{} items", p.text("count")).into() }
///     "</li></ul>"
/// ];
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.interpolations(), 2);
/// ```
#[macro_export]
macro_rules! template {
    () => {
        $crate::Template::empty()
    };
    ($first:literal $({ $callback:expr } $fragment:literal)*) => {
        $crate::Template::new($first)$(.then($callback, $fragment))*
    };
}
