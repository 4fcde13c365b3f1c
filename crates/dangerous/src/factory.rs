// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wrapping components that render a [`Template`] as raw markup into a [`Target`]

use std::fmt::{self, Debug};
use std::rc::Rc;

use crate::component::{Component, Statics};
use crate::error::Result;
use crate::host::{Host, View};
use crate::props::Props;
use crate::target::Target;
use crate::template::Template;

/// Create a component that renders `target` with the assembled `template`
/// as its raw markup content.
///
/// Fails right away if `target` can't be rendered.
///
/// ```
/// use dangerous::{build, template, Props};
///
/// let profile = build("div", template![
///     "<h1>Hi</h1><p>Name: " { |p| p.text("name").into() } "</p>"
/// ])?;
///
/// let view = profile.render(&Props::new().with("name", "Sam"));
///
/// assert_eq!(view.inner_html().unwrap(), "<h1>Hi</h1><p>Name: Sam</p>");
///
/// assert!(build("Nope", template!["..."]).is_err());
/// # Ok::<(), dangerous::Error>(())
/// ```
pub fn build(target: impl Into<Target>, template: Template) -> Result<Dangerous> {
    let target = target.into();

    target.validate()?;

    Ok(Dangerous::new(target, template))
}

/// Partially apply [`build`] with `target`.
///
/// ```
/// use dangerous::{dangerous, template};
///
/// let card = dangerous("my-card");
///
/// let front = card(template!["front"])?;
/// let back = card(template!["back"])?;
///
/// assert_eq!(front.display_name(), back.display_name());
/// # Ok::<(), dangerous::Error>(())
/// ```
pub fn dangerous(target: impl Into<Target>) -> impl Fn(Template) -> Result<Dangerous> {
    let target = target.into();

    move |template| build(target.clone(), template)
}

/// A component rendering its target with a [`Template`] assembled from the
/// current props as raw markup.
///
/// Cloning is cheap, clones share the same target and template.
#[derive(Clone)]
pub struct Dangerous {
    inner: Rc<Inner>,
}

struct Inner {
    target: Target,
    template: Template,
    display_name: String,
    statics: Statics,
}

impl Dangerous {
    /// `target` must already be validated.
    pub(crate) fn new(target: Target, template: Template) -> Self {
        let display_name = format!("ConstructedFrom({})", target.name());

        let mut statics = Statics::new();

        if let Target::Component(component) = &target {
            let hoisted = statics.hoist_from(component.statics());

            log::debug!("hoisted {hoisted} statics from {}", target.name());
        }

        log::debug!(
            "constructed {display_name} with {} interpolations",
            template.interpolations()
        );

        Dangerous {
            inner: Rc::new(Inner {
                target,
                template,
                display_name,
                statics,
            }),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.inner.display_name
    }

    pub fn target(&self) -> &Target {
        &self.inner.target
    }

    pub fn template(&self) -> &Template {
        &self.inner.template
    }

    /// Statics hoisted from a component target.
    pub fn statics(&self) -> &Statics {
        &self.inner.statics
    }

    /// Describe the target with all of `props` passed through, and the template
    /// assembled from those same `props` as the raw markup payload.
    ///
    /// A payload already present in `props` is replaced.
    pub fn render(&self, props: &Props) -> View {
        log::trace!("rendering {}", self.inner.display_name);

        let html = self.inner.template.assemble(props);

        View::new(self.inner.target.clone(), props.clone().with_inner_html(html))
    }

    /// Render and mount into `host`.
    ///
    /// If provided, `attach` is called exactly once with the instance the host
    /// created for the target, which is how a caller gets a reference to the
    /// underlying element.
    pub fn mount<H: Host>(
        &self,
        host: &mut H,
        props: &Props,
        attach: Option<&mut dyn FnMut(&H::Instance)>,
    ) -> H::Instance {
        let instance = host.mount(self.render(props));

        if let Some(attach) = attach {
            attach(&instance);
        }

        instance
    }

    /// Turn this into a [`Component`], so it can be used as the target of
    /// another dangerous component.
    pub fn into_component(self) -> Component {
        let display_name = self.inner.display_name.clone();
        let statics = self.inner.statics.clone();

        Component::new(move |props| self.render(props))
            .with_display_name(display_name)
            .with_statics(statics)
    }
}

impl From<Dangerous> for Target {
    fn from(dangerous: Dangerous) -> Target {
        Target::Component(dangerous.into_component())
    }
}

impl Debug for Dangerous {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Dangerous")
            .field("display_name", &self.inner.display_name)
            .field("target", &self.inner.target)
            .field("template", &self.inner.template)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::dom::{Document, NodeId};
    use crate::error::Error;
    use crate::template;

    fn named() -> Template {
        template!["<p>Name: " { |p| p.text("name").into() } "</p>"]
    }

    #[test]
    fn display_names() {
        let render = |props: &Props| View::new("div", props.clone());

        let cases = [
            (Target::from("div"), "ConstructedFrom(div)"),
            (Target::from("my-el"), "ConstructedFrom(my-el)"),
            (Component::new(render).into(), "ConstructedFrom(Component)"),
            (Component::new(render).with_name("Card").into(), "ConstructedFrom(Card)"),
            (
                Component::new(render).with_name("Card").with_display_name("Fancy").into(),
                "ConstructedFrom(Fancy)",
            ),
        ];

        for (target, expected) in cases {
            assert_eq!(build(target, named()).unwrap().display_name(), expected);
        }
    }

    #[test]
    fn invalid_target_fails_before_render() {
        let err = build("Div", named()).unwrap_err();

        assert_eq!(err, Error::InvalidTarget { target: "Div".into() });
        assert_eq!(err.to_string(), "`Div` is not a valid element type");
    }

    #[test]
    fn render_passes_props_through() {
        let dangerous = build("div", named()).unwrap();

        let props = Props::new().with("name", "Sam").with("class", "card");
        let view = dangerous.render(&props);

        assert_eq!(view.target(), &Target::from("div"));
        assert_eq!(view.props().text("class"), "card");
        assert_eq!(view.props().text("name"), "Sam");
        assert_eq!(view.props().len(), 2);
        assert_eq!(view.inner_html().unwrap(), "<p>Name: Sam</p>");
    }

    #[test]
    fn render_uses_latest_props() {
        let dangerous = build("div", named()).unwrap();

        let first = dangerous.render(&Props::new().with("name", "Sam"));
        let second = dangerous.render(&Props::new().with("name", "Kim"));

        assert_eq!(first.inner_html().unwrap(), "<p>Name: Sam</p>");
        assert_eq!(second.inner_html().unwrap(), "<p>Name: Kim</p>");
    }

    #[test]
    fn caller_payload_is_replaced() {
        let dangerous = build("div", template!["mine"]).unwrap();

        let props = Props::new().with_inner_html(crate::RawHtml::new("theirs"));

        assert_eq!(dangerous.render(&props).inner_html().unwrap(), "mine");
    }

    #[test]
    fn attach_receives_mounted_instance() {
        let dangerous = build("section", named()).unwrap();
        let mut doc = Document::new();

        let mut attached = Vec::new();

        let id = dangerous.mount(
            &mut doc,
            &Props::new().with("name", "Sam"),
            Some(&mut |id: &NodeId| attached.push(*id)),
        );

        assert_eq!(attached, [id]);
        assert_eq!(doc.get(id).unwrap().tag(), "section");
        assert_eq!(doc.outer_html(id).unwrap(), "<section name=\"Sam\"><p>Name: Sam</p></section>");
    }

    #[test]
    fn attach_reaches_through_component_targets() {
        let inner = Component::new(|props| View::new("article", props.clone()));
        let dangerous = build(inner, named()).unwrap();
        let mut doc = Document::new();

        let mut attached = None;

        let id = dangerous.mount(&mut doc, &Props::new(), Some(&mut |id: &NodeId| attached = Some(*id)));

        assert_eq!(attached, Some(id));
        assert_eq!(doc.get(id).unwrap().tag(), "article");
        assert_eq!(doc.get(id).unwrap().inner_html().unwrap(), "<p>Name: </p>");
    }

    #[test]
    fn statics_are_hoisted_except_reserved() {
        let inner = Component::new(|props| View::new("div", props.clone()))
            .with_static("theme", "dark")
            .with_static("render", "reserved")
            .with_static("display_name", "reserved");

        let dangerous = build(inner.clone(), named()).unwrap();

        assert_eq!(dangerous.statics().get::<&str>("theme"), Some(&"dark"));
        assert!(Rc::ptr_eq(
            dangerous.statics().get_any("theme").unwrap(),
            inner.statics().get_any("theme").unwrap(),
        ));
        assert!(!dangerous.statics().contains("render"));
        assert!(!dangerous.statics().contains("display_name"));
        assert!(build("div", named()).unwrap().statics().is_empty());
    }

    #[test]
    fn dangerous_as_target() {
        let inner = build(
            Component::new(|props| View::new("div", props.clone())).with_static("id", 1_u8),
            named(),
        )
        .unwrap();

        let outer = build(inner, template!["ignored"]).unwrap();

        assert_eq!(outer.display_name(), "ConstructedFrom(ConstructedFrom(Component))");
        assert_eq!(outer.statics().get::<u8>("id"), Some(&1));

        let mut doc = Document::new();
        let id = outer.mount(&mut doc, &Props::new().with("name", "Sam"), None);

        // The inner component assembles last and wins the payload.
        assert_eq!(doc.inner_html(id).unwrap(), "<p>Name: Sam</p>");
    }
}
