//! Portal-backed modal and its full-viewport overlay.

use yew::prelude::*;

use super::provider::use_modal_container;
use crate::style::{OVERLAY, RESET, SURFACE};

/// Properties for [`ModalOverlay`].
#[derive(Properties, PartialEq)]
pub struct ModalOverlayProps {
    /// Content layered above the backdrop.
    #[prop_or_default]
    pub children: Children,
}

/// Fixed, dimmed backdrop covering the viewport at the overlay stacking priority.
#[function_component(ModalOverlay)]
pub fn modal_overlay(props: &ModalOverlayProps) -> Html {
    html! {
        <div class={OVERLAY}>
            { for props.children.iter() }
        </div>
    }
}

/// Properties for [`Modal`].
#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Dialog content.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes for the dialog surface.
    #[prop_or_default]
    pub class: Classes,
}

/// Renders its children into the provider's mount node.
///
/// Renders nothing until the mount node is attached. Closing is the caller's
/// job: stop rendering the modal.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let container = use_modal_container();
    let Some(host) = container.mount_node().cloned() else {
        return html! {};
    };

    yew::create_portal(
        html! {
            <div class={RESET}>
                <ModalOverlay>
                    <div class={classes!(SURFACE, props.class.clone())} role="dialog" aria-modal="true">
                        { for props.children.iter() }
                    </div>
                </ModalOverlay>
            </div>
        },
        host,
    )
}
