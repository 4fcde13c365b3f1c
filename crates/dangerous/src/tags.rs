// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shorthand constructors for every known HTML and SVG element.
//!
//! Each function in this module is [`build`](crate::build) with its own name
//! as the target tag. Since those tags are always valid, the shorthands can't
//! fail:
//!
//! ```
//! use dangerous::{tags, template, Props};
//!
//! let greeting = tags::h1(template!["Hello " { |p| p.text("name").into() } "!"]);
//! let view = greeting.render(&Props::new().with("name", "Kobold"));
//!
//! assert_eq!(greeting.display_name(), "ConstructedFrom(h1)");
//! assert_eq!(view.inner_html().unwrap(), "Hello Kobold!");
//! ```
//!
//! Shorthands can also be looked up by name at runtime with [`shorthand`].

#![allow(non_snake_case)]

use fnv::FnvHashMap;
use once_cell::sync::Lazy;

use crate::factory::Dangerous;
use crate::target::Target;
use crate::template::Template;

/// A [`build`](crate::build) call with the target tag already applied.
pub type Shorthand = fn(Template) -> Dangerous;

macro_rules! elements {
    ($($tag:ident)*) => {
        /// Names of all elements with a shorthand.
        pub const ELEMENTS: &[&str] = &[$(stringify!($tag)),*];

        $(
            #[doc = concat!("Dangerous `<", stringify!($tag), ">` element.")]
            pub fn $tag(template: Template) -> Dangerous {
                Dangerous::new(Target::Tag(beef::Cow::borrowed(stringify!($tag))), template)
            }
        )*

        static SHORTHANDS: Lazy<FnvHashMap<&'static str, Shorthand>> = Lazy::new(|| {
            let mut map = FnvHashMap::default();

            $(
                map.insert(stringify!($tag), $tag as Shorthand);
            )*

            map
        });
    };
}

elements! {
    a abbr address area article aside audio b base bdi bdo big blockquote body br
    button canvas caption cite code col colgroup data datalist dd del details dfn
    dialog div dl dt em embed fieldset figcaption figure footer form h1 h2 h3 h4
    h5 h6 head header hgroup hr html i iframe img input ins kbd keygen label
    legend li link main map mark marquee menu menuitem meta meter nav noscript
    object ol optgroup option output p param picture pre progress q rp rt ruby s
    samp script section select small source span strong style sub summary sup
    table tbody td textarea tfoot th thead time title tr track u ul var video wbr

    circle clipPath defs ellipse foreignObject g image line linearGradient marker
    mask path pattern polygon polyline radialGradient rect stop svg text tspan
}

/// Look up the shorthand for `tag`.
///
/// ```
/// use dangerous::{tags, template, Props};
///
/// let section = tags::shorthand("section").unwrap();
///
/// assert_eq!(section(template!["..."]).display_name(), "ConstructedFrom(section)");
/// assert!(tags::shorthand("blink").is_none());
/// ```
pub fn shorthand(tag: &str) -> Option<Shorthand> {
    SHORTHANDS.get(tag).copied()
}

/// Whether `tag` is one of the known [`ELEMENTS`].
pub fn is_element(tag: &str) -> bool {
    SHORTHANDS.contains_key(tag)
}
