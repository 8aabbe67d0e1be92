//! Modal provider: owns the mount node and publishes it to descendants.

use gloo::console;
use web_sys::Element;
use yew::prelude::*;

use crate::error::ModalError;
use crate::registry::{ModalContainer, MountState, resolve_container};
use crate::style::stylesheet;
use crate::theme::ModalTheme;

/// Default id of the element modals are projected into.
pub const MOUNT_NODE_ID: &str = "modal-root";

/// Properties for [`ModalProvider`].
#[derive(Properties, PartialEq)]
pub struct ModalProviderProps {
    /// Application content.
    #[prop_or_default]
    pub children: Children,
    /// Visual configuration rendered into the provider's stylesheet.
    #[prop_or_default]
    pub theme: ModalTheme,
    /// Id given to the mount element.
    #[prop_or(AttrValue::Static(MOUNT_NODE_ID))]
    pub mount_id: AttrValue,
}

/// Establishes the mount node and exposes it through [`ModalContainer`].
///
/// Mount once, near the application root, before any [`crate::Modal`].
#[function_component(ModalProvider)]
pub fn modal_provider(props: &ModalProviderProps) -> Html {
    let node_ref = use_node_ref();
    let mount = use_reducer_eq(|| MountState::<Element>::Unattached);

    {
        let mount = mount.clone();
        use_effect_with_deps(
            move |node_ref: &NodeRef| {
                mount.dispatch(node_ref.cast::<Element>());
                || {
                    console::debug!("modal provider detached");
                }
            },
            node_ref.clone(),
        );
    }
    use_effect_with_deps(
        |attached: &bool| {
            if *attached {
                console::debug!("modal mount node attached");
            }
            || ()
        },
        mount.is_attached(),
    );

    let css = match stylesheet(&props.theme) {
        Ok(css) => css,
        Err(err) => {
            console::warn!("modal theme rejected, using defaults", err.to_string());
            stylesheet(&ModalTheme::default()).unwrap_or_default()
        }
    };
    let container = ModalContainer::new((*mount).clone());

    html! {
        <>
            <style>{css}</style>
            <div id={props.mount_id.clone()} ref={node_ref} />
            <ContextProvider<ModalContainer<Element>> context={container}>
                { for props.children.iter() }
            </ContextProvider<ModalContainer<Element>>>
        </>
    }
}

/// Read the nearest container, or the configuration error when there is none.
#[hook]
pub fn try_use_modal_container() -> Result<ModalContainer<Element>, ModalError> {
    resolve_container(use_context::<ModalContainer<Element>>())
}

/// Read the nearest container.
///
/// # Panics
///
/// Panics with "No Modal Container context provided" when called outside a
/// [`ModalProvider`]; a modal without a mount point is a wiring mistake.
#[hook]
pub fn use_modal_container() -> ModalContainer<Element> {
    match try_use_modal_container() {
        Ok(container) => container,
        Err(err) => {
            console::error!(err.to_string());
            panic!("{err}");
        }
    }
}
