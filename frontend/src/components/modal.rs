use log::{debug, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::class_names::ModalClassNames;
use crate::error::{ModalError, ModalResult};
use crate::escape::EscapeListener;

pub const TITLE_ID: &str = "modalTitle";
pub const DESCRIPTION_ID: &str = "modalDescription";

#[derive(Properties, Clone, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub title: AttrValue,
    #[prop_or_default]
    pub content: Option<Html>,
    #[prop_or_default]
    pub overlay_class_name: AttrValue,
    #[prop_or_default]
    pub content_class_name: AttrValue,
    #[prop_or_default]
    pub title_class_name: AttrValue,
    #[prop_or_default]
    pub body_class_name: AttrValue,
    #[prop_or_default]
    pub footer_class_name: AttrValue,
    #[prop_or_default]
    pub close_button_class_name: AttrValue,
}

impl ModalProps {
    pub fn class_names(&self) -> ModalClassNames {
        ModalClassNames {
            overlay_class_name: self.overlay_class_name.to_string(),
            content_class_name: self.content_class_name.to_string(),
            title_class_name: self.title_class_name.to_string(),
            body_class_name: self.body_class_name.to_string(),
            footer_class_name: self.footer_class_name.to_string(),
            close_button_class_name: self.close_button_class_name.to_string(),
        }
    }
}

/// Moves input focus to the element behind `node`.
pub fn focus_root(node: &NodeRef) -> ModalResult<()> {
    let element = node
        .cast::<HtmlElement>()
        .ok_or(ModalError::RootNotMounted)?;
    element
        .focus()
        .map_err(|err| ModalError::Focus(format!("{:?}", err)))
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let root_ref = use_node_ref();

    // Escape listener lives exactly as long as the modal is open
    {
        let root_ref = root_ref.clone();
        use_effect_with(
            (props.is_open, props.on_close.clone()),
            move |(is_open, on_close)| {
                let listener = if *is_open {
                    debug!("Modal opened");
                    let listener = match EscapeListener::register(on_close.clone()) {
                        Ok(listener) => Some(listener),
                        Err(err) => {
                            warn!("Escape listener not registered: {}", err);
                            None
                        }
                    };
                    if let Err(err) = focus_root(&root_ref) {
                        warn!("Modal root not focused: {}", err);
                    }
                    listener
                } else {
                    None
                };

                move || drop(listener)
            },
        );
    }

    if !props.is_open {
        return html! {};
    }

    let class_names = props.class_names();

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let on_content_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    html! {
        <div
            ref={root_ref}
            class={class_names.overlay()}
            onclick={on_overlay_click}
            role="dialog"
            aria-modal="true"
            tabindex="-1"
            data-testid="modal-overlay"
        >
            <div
                class={class_names.content()}
                onclick={on_content_click}
                aria-labelledby={TITLE_ID}
                aria-describedby={DESCRIPTION_ID}
                data-testid="modal-content"
            >
                if !props.title.is_empty() {
                    <div
                        id={TITLE_ID}
                        class={class_names.title()}
                        data-testid="modal-title"
                    >
                        <h2>{ props.title.to_string() }</h2>
                    </div>
                }
                <div
                    id={DESCRIPTION_ID}
                    class={class_names.body()}
                    data-testid="modal-body"
                >
                    { props.content.clone().unwrap_or_default() }
                </div>
                <div class={class_names.footer()} data-testid="modal-footer">
                    <button
                        onclick={on_close_click}
                        class={class_names.close_button()}
                        data-testid="modal-close-button"
                    >
                        {"Close"}
                    </button>
                </div>
            </div>
        </div>
    }
}
