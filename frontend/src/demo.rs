use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::class_names::ModalClassNames;
use crate::components::modal::Modal;

const DEMO_THEME: &str = r#"{
    "overlayClassName": "demo-overlay",
    "closeButtonClassName": "demo-close-button"
}"#;

#[function_component(App)]
fn app() -> Html {
    let is_open = use_state(|| false);
    let theme = use_memo((), |_| {
        ModalClassNames::from_json(DEMO_THEME).unwrap_or_else(|err| {
            log::warn!("Falling back to default modal theme: {}", err);
            ModalClassNames::default()
        })
    });

    let on_open = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            debug!("Demo: opening modal");
            is_open.set(true);
        })
    };

    // Stable across renders so the modal keeps its escape listener
    let on_close = {
        let is_open = is_open.setter();
        use_callback((), move |_: (), _| {
            debug!("Demo: closing modal");
            is_open.set(false);
        })
    };

    html! {
        <div class="app-container">
            <button class="demo-open-button" onclick={on_open}>{"Open dialog"}</button>
            <Modal
                is_open={*is_open}
                on_close={on_close}
                title="Hello from Yew"
                content={html! { <p>{"Press Escape, click outside, or use the button below."}</p> }}
                overlay_class_name={theme.overlay_class_name.clone()}
                close_button_class_name={theme.close_button_class_name.clone()}
            />
        </div>
    }
}

pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    console_error_panic_hook::set_once();

    info!("Mounting modal demo");
    yew::Renderer::<App>::new().render();

    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(err) = run_app().await {
            log::error!("Failed to run demo: {:?}", err);
        }
    });
    Ok(())
}
