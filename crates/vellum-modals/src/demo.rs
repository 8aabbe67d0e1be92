//! Demo editor page wiring the modal layer end to end.

use gloo::console;
use yew::prelude::*;

use crate::components::modal::Modal;
use crate::components::parts::{ModalActions, ModalBody, ModalHeader};
use crate::components::provider::ModalProvider;

#[function_component(DemoApp)]
fn demo_app() -> Html {
    html! {
        <ModalProvider>
            <PostEditor />
        </ModalProvider>
    }
}

#[function_component(PostEditor)]
fn post_editor() -> Html {
    let confirming = use_state(|| false);
    let deleted = use_state(|| false);

    let open = {
        let confirming = confirming.clone();
        Callback::from(move |_: MouseEvent| confirming.set(true))
    };
    let close = {
        let confirming = confirming.clone();
        Callback::from(move |()| confirming.set(false))
    };
    let cancel = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let confirm = {
        let confirming = confirming.clone();
        let deleted = deleted.clone();
        Callback::from(move |_: MouseEvent| {
            console::debug!("post deleted");
            deleted.set(true);
            confirming.set(false);
        })
    };

    html! {
        <main class="editor">
            <h1>{ if *deleted { "Post deleted" } else { "Untitled post" } }</h1>
            <button type="button" onclick={open} disabled={*deleted}>{"Delete post"}</button>
            if *confirming {
                <Modal>
                    <ModalHeader on_close={close}>{"Delete post"}</ModalHeader>
                    <ModalBody padded=true>
                        <p>{"This post will be removed permanently."}</p>
                    </ModalBody>
                    <ModalActions>
                        <button type="button" onclick={cancel}>{"Cancel"}</button>
                        <button type="button" onclick={confirm}>{"Delete"}</button>
                    </ModalActions>
                </Modal>
            }
        </main>
    }
}

/// Mount the demo editor into the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<DemoApp>::new().render();
}
