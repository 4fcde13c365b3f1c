// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! What a dangerous component renders into

use std::fmt::{self, Display};

use crate::component::Component;
use crate::error::{Error, Result};

/// Either a primitive element tag such as `div`, or another [`Component`].
#[derive(Clone, Debug)]
pub enum Target {
    Tag(beef::Cow<'static, str>),
    Component(Component),
}

impl Target {
    /// Check that this target can be rendered.
    ///
    /// Tags must start with a lowercase ASCII letter, followed by ASCII letters,
    /// digits, `-`, `.` or `_`. That covers every HTML, SVG and MathML element
    /// as well as custom elements such as `my-widget`, whether or not there is a
    /// [shorthand](crate::tags) for it. Components are always renderable.
    pub fn validate(&self) -> Result<()> {
        match self {
            Target::Tag(tag) if is_tag_name(tag) => Ok(()),
            Target::Tag(tag) => Err(Error::InvalidTarget {
                target: tag.to_string(),
            }),
            Target::Component(_) => Ok(()),
        }
    }

    pub fn is_tag(&self) -> bool {
        matches!(self, Target::Tag(_))
    }

    /// Name used in diagnostics: the tag itself, or the component's display
    /// name, falling back to its name, falling back to `Component`.
    pub fn name(&self) -> &str {
        match self {
            Target::Tag(tag) => &**tag,
            Target::Component(component) => component
                .display_name()
                .or_else(|| component.name())
                .unwrap_or("Component"),
        }
    }
}

fn is_tag_name(tag: &str) -> bool {
    let starts_lowercase = tag.as_bytes().first().map_or(false, u8::is_ascii_lowercase);

    starts_lowercase
        && tag
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
}

impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Target::Tag(l), Target::Tag(r)) => **l == **r,
            (Target::Component(l), Target::Component(r)) => l.ptr_eq(r),
            _ => false,
        }
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&'static str> for Target {
    fn from(tag: &'static str) -> Self {
        Target::Tag(beef::Cow::borrowed(tag))
    }
}

impl From<String> for Target {
    fn from(tag: String) -> Self {
        Target::Tag(beef::Cow::owned(tag))
    }
}

impl From<Component> for Target {
    fn from(component: Component) -> Self {
        Target::Component(component)
    }
}
