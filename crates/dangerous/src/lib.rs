// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Dangerous
//!
//! _Components made of raw markup._
//!
//! **Dangerous** builds components out of a template: literal markup interleaved
//! with callbacks that compute text from the component's current properties.
//! On every render the template is assembled into a single string and handed to
//! the target element as its raw content, the way `innerHTML` works.
//!
//! Nothing is ever escaped. Whatever the template and its callbacks produce ends
//! up in the rendered output as-is, so only ever feed it markup you trust.
//!
//! ### Hello World
//!
//! ```
//! use dangerous::dom::Document;
//! use dangerous::prelude::*;
//!
//! let hello = tags::div(template![
//!     "<h1>Hi</h1><p>Name: " { |p| p.text("name").into() } "</p>"
//! ]);
//!
//! let mut doc = Document::new();
//! let id = hello.mount(&mut doc, &Props::new().with("name", "Sam"), None);
//!
//! assert_eq!(
//!     doc.outer_html(id).unwrap(),
//!     r#"<div name="Sam"><h1>Hi</h1><p>Name: Sam</p></div>"#,
//! );
//! ```
//!
//! Any tag that isn't a known element or a custom element name is rejected by
//! [`build`] before anything renders:
//!
//! ```
//! use dangerous::{build, template, Error};
//!
//! let err = build("Widget", template!["..."]).unwrap_err();
//!
//! assert_eq!(err, Error::InvalidTarget { target: "Widget".into() });
//! ```

mod component;
mod error;
mod factory;
mod host;
mod props;
mod target;
pub mod template;

pub mod dom;
pub mod tags;

#[cfg(feature = "web")]
pub mod web;

pub use component::{is_reserved, Component, Statics, RESERVED_STATICS};
pub use error::{Error, Result};
pub use factory::{build, dangerous, Dangerous};
pub use host::{Host, Resolved, View};
pub use props::{AttrValue, Props, RawHtml};
pub use target::Target;
pub use template::Template;

#[cfg(feature = "web")]
pub use web::start;

/// The prelude module with most commonly used types.
pub mod prelude {
    pub use crate::{build, tags, template, Dangerous, Host, Props, RawHtml, Template, View};
}
