// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Property sets passed to components at render time

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// A string of markup that is trusted as-is.
///
/// Nothing in this crate ever escapes or sanitizes the contents of a `RawHtml`,
/// hosts insert it into the rendered output verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct RawHtml(String);

impl RawHtml {
    /// Mark `html` as trusted markup.
    pub fn new(html: impl Into<String>) -> Self {
        RawHtml(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RawHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RawHtml {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RawHtml {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Display for RawHtml {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Value of a single property.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttrValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl AttrValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AttrValue::Text(text) => f.write_str(text),
            AttrValue::Int(int) => f.write_str(itoa::Buffer::new().format(*int)),
            AttrValue::Float(float) => float.fmt(f),
            AttrValue::Bool(b) => b.fmt(f),
        }
    }
}

macro_rules! impl_from_value {
    ($($variant:ident [$($ty:ty),*])*) => {
        $(
            $(
                impl From<$ty> for AttrValue {
                    fn from(value: $ty) -> Self {
                        AttrValue::$variant(value.into())
                    }
                }
            )*
        )*
    };
}

impl_from_value! {
    Text [&str, String, &String, Cow<'_, str>]
    Int [i8, i16, i32, i64, u8, u16, u32]
    Float [f32, f64]
    Bool [bool]
}

/// Properties of a component: an ordered map of named values plus an optional
/// raw markup payload.
///
/// The payload lives outside of the named values, so no property name can be
/// mistaken for it.
///
/// ```
/// use dangerous::Props;
///
/// let props = Props::new().with("name", "Sam").with("age", 42);
///
/// assert_eq!(props.text("name"), "Sam");
/// assert_eq!(props.text("missing"), "");
/// assert_eq!(props.get("age").map(|age| age.to_string()), Some("42".into()));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Props {
    values: BTreeMap<Cow<'static, str>, AttrValue>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    inner_html: Option<RawHtml>,
}

impl Props {
    pub fn new() -> Self {
        Props::default()
    }

    /// Builder variant of [`set`](Props::set).
    pub fn with(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a named value, returning the previous one if present.
    pub fn set(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: impl Into<AttrValue>,
    ) -> Option<AttrValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    /// Text value of a property, or an empty string if the property is
    /// missing or isn't text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name).and_then(AttrValue::as_str).unwrap_or("")
    }

    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        self.values.remove(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.values.iter().map(|(name, value)| (&**name, value))
    }

    /// Number of named values, the markup payload is not counted.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn inner_html(&self) -> Option<&RawHtml> {
        self.inner_html.as_ref()
    }

    pub fn set_inner_html(&mut self, html: RawHtml) -> Option<RawHtml> {
        self.inner_html.replace(html)
    }

    pub fn with_inner_html(mut self, html: RawHtml) -> Self {
        self.inner_html = Some(html);
        self
    }
}

impl<N, V> FromIterator<(N, V)> for Props
where
    N: Into<Cow<'static, str>>,
    V: Into<AttrValue>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut props = Props::new();

        for (name, value) in iter {
            props.set(name, value);
        }

        props
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn values_keep_their_variant() {
        let cases = [
            (AttrValue::Bool(true), "true"),
            (AttrValue::Int(-42), "-42"),
            (AttrValue::Float(1.5), "1.5"),
            (AttrValue::Text("42".into()), "\"42\""),
        ];

        for (value, json) in cases {
            assert_eq!(serde_json::to_string(&value).unwrap(), json);
            assert_eq!(serde_json::from_str::<AttrValue>(json).unwrap(), value);
        }
    }

    #[test]
    fn props_with_payload() {
        let props = Props::new()
            .with("hidden", false)
            .with("count", 3)
            .with("ratio", 0.25)
            .with("name", "Sam")
            .with_inner_html(RawHtml::new("<b>Sam</b>"));

        let json = serde_json::to_string(&props).unwrap();

        assert!(json.contains(r#""inner_html":"<b>Sam</b>""#), "{json}");
        assert_eq!(serde_json::from_str::<Props>(&json).unwrap(), props);
    }

    #[test]
    fn props_without_payload() {
        let props = Props::new().with("id", "x");

        let json = serde_json::to_string(&props).unwrap();

        assert!(!json.contains("inner_html"), "{json}");

        let back: Props = serde_json::from_str(&json).unwrap();

        assert_eq!(back, props);
        assert_eq!(back.inner_html(), None);
    }
}
