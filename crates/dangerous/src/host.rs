// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The seam between components and whatever system ends up creating elements

use crate::props::{Props, RawHtml};
use crate::target::Target;

/// Description of a single element or component to render, along with its
/// properties.
#[derive(Clone, Debug, PartialEq)]
pub struct View {
    target: Target,
    props: Props,
}

/// A [`View`] with all component targets rendered away, leaving a tag.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub tag: beef::Cow<'static, str>,
    pub props: Props,
}

impl View {
    pub fn new(target: impl Into<Target>, props: Props) -> Self {
        View {
            target: target.into(),
            props,
        }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// The raw markup payload of this view, if any.
    pub fn inner_html(&self) -> Option<&RawHtml> {
        self.props.inner_html()
    }

    /// Render component targets until a tag remains.
    ///
    /// A component that renders a view of itself never resolves.
    pub fn resolve(self) -> Resolved {
        let mut view = self;

        loop {
            match view.target {
                Target::Tag(tag) => {
                    return Resolved {
                        tag,
                        props: view.props,
                    }
                }
                Target::Component(component) => {
                    log::trace!("resolving {:?}", component.display_name());

                    view = component.render(&view.props);
                }
            }
        }
    }
}

/// A host rendering system: turns resolved views into concrete instances.
pub trait Host {
    /// Handle to an element created by this host.
    type Instance;

    /// Create an element `tag` carrying `props`. If the props carry a raw
    /// markup payload, it must be inserted as the element's content unescaped.
    fn create(&mut self, tag: &str, props: &Props) -> Self::Instance;

    fn mount(&mut self, view: View) -> Self::Instance {
        let Resolved { tag, props } = view.resolve();

        self.create(&tag, &props)
    }
}
