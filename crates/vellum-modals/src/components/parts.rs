//! Stateless building blocks for dialog content.

use yew::prelude::*;

use super::icons::CloseIcon;
use crate::style::{ACTIONS, CLOSE, HEADER, TITLE, body_classes};

/// Properties for [`ModalHeader`].
#[derive(Properties, PartialEq)]
pub struct ModalHeaderProps {
    /// Title content.
    #[prop_or_default]
    pub children: Children,
    /// Fired when the close affordance is activated.
    pub on_close: Callback<()>,
    /// Accessible label for the close button.
    #[prop_or(AttrValue::Static("Close"))]
    pub close_label: AttrValue,
}

/// Title row with a close affordance. Holds no open/close state.
#[function_component(ModalHeader)]
pub fn modal_header(props: &ModalHeaderProps) -> Html {
    let on_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={HEADER}>
            <h2 class={TITLE}>{ for props.children.iter() }</h2>
            <button
                type="button"
                class={CLOSE}
                aria-label={props.close_label.clone()}
                onclick={on_click}
            >
                <CloseIcon />
            </button>
        </div>
    }
}

/// Properties for [`ModalBody`].
#[derive(Properties, PartialEq)]
pub struct ModalBodyProps {
    /// Body content.
    #[prop_or_default]
    pub children: Children,
    /// Apply the theme padding.
    #[prop_or_default]
    pub padded: bool,
}

/// Dialog body; unpadded with a minimum height unless `padded` is set.
#[function_component(ModalBody)]
pub fn modal_body(props: &ModalBodyProps) -> Html {
    html! {
        <div class={body_classes(props.padded)}>
            { for props.children.iter() }
        </div>
    }
}

/// Properties for [`ModalActions`].
#[derive(Properties, PartialEq)]
pub struct ModalActionsProps {
    /// Action controls in display order.
    #[prop_or_default]
    pub children: Children,
}

/// Right-aligned row of action controls.
#[function_component(ModalActions)]
pub fn modal_actions(props: &ModalActionsProps) -> Html {
    html! {
        <div class={ACTIONS}>
            { for props.children.iter() }
        </div>
    }
}
