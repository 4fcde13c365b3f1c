// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Component values that can be used as render targets, and their static metadata

use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::host::View;
use crate::props::Props;

/// Names of statics that belong to the component machinery itself and are
/// never copied from one component to another.
pub const RESERVED_STATICS: &[&str] = &[
    "arguments",
    "arity",
    "callee",
    "caller",
    "child_context_types",
    "context_type",
    "context_types",
    "default_props",
    "derived_state_from_error",
    "derived_state_from_props",
    "display_name",
    "get_default_props",
    "length",
    "mixins",
    "name",
    "prop_types",
    "prototype",
    "render",
    "type",
    "type_of",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_STATICS.iter().any(|reserved| *reserved == name)
}

/// Arbitrary named metadata attached to a component.
#[derive(Clone, Default)]
pub struct Statics {
    values: BTreeMap<Cow<'static, str>, Rc<dyn Any>>,
}

impl Statics {
    pub fn new() -> Self {
        Statics::default()
    }

    pub fn insert<T: Any>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.values.insert(name.into(), Rc::new(value));
    }

    /// Get the value of `name` if it is present and of type `T`.
    pub fn get<T: Any>(&self, name: &str) -> Option<&T> {
        self.values.get(name)?.downcast_ref()
    }

    /// Shared handle to the value of `name`, regardless of its type.
    pub fn get_any(&self, name: &str) -> Option<&Rc<dyn Any>> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|name| &**name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Copy every entry from `source` that is neither reserved nor already
    /// present on `self`. Values are shared, not cloned.
    ///
    /// Returns the number of copied entries.
    pub fn hoist_from(&mut self, source: &Statics) -> usize {
        let mut hoisted = 0;

        for (name, value) in source.values.iter() {
            if is_reserved(name) || self.values.contains_key(name) {
                continue;
            }

            self.values.insert(name.clone(), value.clone());
            hoisted += 1;
        }

        hoisted
    }
}

impl Debug for Statics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A component value: a render function from [`Props`] to a [`View`], along
/// with its name and static metadata.
///
/// ```
/// use dangerous::{Component, Props, View};
///
/// let card = Component::new(|props: &Props| View::new("section", props.clone()))
///     .with_display_name("Card")
///     .with_static("version", 3_u32);
///
/// assert_eq!(card.display_name(), Some("Card"));
/// assert_eq!(card.statics().get::<u32>("version"), Some(&3));
/// ```
#[derive(Clone)]
pub struct Component {
    name: Option<Cow<'static, str>>,
    display_name: Option<Cow<'static, str>>,
    statics: Statics,
    render: Rc<dyn Fn(&Props) -> View>,
}

impl Component {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&Props) -> View + 'static,
    {
        Component {
            name: None,
            display_name: None,
            statics: Statics::new(),
            render: Rc::new(render),
        }
    }

    /// Identifier of the component, used for diagnostics when no display name is set.
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<Cow<'static, str>>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_static<T: Any>(mut self, name: impl Into<Cow<'static, str>>, value: T) -> Self {
        self.statics.insert(name, value);
        self
    }

    pub fn with_statics(mut self, statics: Statics) -> Self {
        self.statics = statics;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn statics(&self) -> &Statics {
        &self.statics
    }

    pub fn render(&self, props: &Props) -> View {
        (self.render)(props)
    }

    /// Whether both values share the same render function.
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

impl Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Component")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("statics", &self.statics)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hoist_skips_reserved_and_existing() {
        let mut source = Statics::new();
        source.insert("theme", "dark");
        source.insert("display_name", "Nope");
        source.insert("default_props", 1_u8);
        source.insert("child_context_types", 1_u8);
        source.insert("get_default_props", 1_u8);
        source.insert("type_of", 1_u8);
        source.insert("shared", 1_u8);

        let mut dest = Statics::new();
        dest.insert("shared", 2_u8);

        assert_eq!(dest.hoist_from(&source), 1);
        assert_eq!(dest.get::<&str>("theme"), Some(&"dark"));
        assert_eq!(dest.get::<u8>("shared"), Some(&2));
        assert!(!dest.contains("display_name"));
        for reserved in ["default_props", "child_context_types", "get_default_props", "type_of"] {
            assert!(!dest.contains(reserved), "{reserved}");
        }
    }

    #[test]
    fn hoisted_values_are_shared() {
        let mut source = Statics::new();
        source.insert("config", vec![1, 2, 3]);

        let mut dest = Statics::new();
        dest.hoist_from(&source);

        let a = source.get_any("config").unwrap();
        let b = dest.get_any("config").unwrap();

        assert!(Rc::ptr_eq(a, b));
    }

    #[test]
    fn typed_get_checks_type() {
        let mut statics = Statics::new();
        statics.insert("n", 7_i32);

        assert_eq!(statics.get::<i32>("n"), Some(&7));
        assert_eq!(statics.get::<u32>("n"), None);
        assert_eq!(statics.get::<i32>("m"), None);
    }

    #[test]
    fn clones_share_render() {
        let component = Component::new(|props| View::new("div", props.clone()));
        let other = Component::new(|props| View::new("div", props.clone()));

        assert!(component.ptr_eq(&component.clone()));
        assert!(!component.ptr_eq(&other));
    }
}
