use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub src: AttrValue,
    pub on_close: Callback<()>,
}

/// Fullscreen video overlay. Closes on the × button, a click on the
/// backdrop, or Escape; the keydown listener lives only while the modal is
/// mounted.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let keydown = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        on_close.emit(());
                    }
                }) as Box<dyn FnMut(KeyboardEvent)>);

                document
                    .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            // Only the backdrop itself, not a click inside the content.
            let on_backdrop = e.target().map(JsValue::from) == e.current_target().map(JsValue::from);
            if on_backdrop {
                on_close.emit(());
            }
        })
    };

    let on_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="video-modal" onclick={on_backdrop}>
            <style>{MODAL_CSS}</style>
            <div class="video-modal-content">
                <button class="modal-close" onclick={on_button}>{"×"}</button>
                <video controls=true autoplay=true>
                    <source src={props.src.clone()} type="video/mp4" />
                    {"Your browser does not support the video tag."}
                </video>
            </div>
        </div>
    }
}

const MODAL_CSS: &str = r#"
    .video-modal {
        position: fixed;
        top: 0;
        left: 0;
        width: 100%;
        height: 100%;
        background-color: rgba(0, 0, 0, 0.95);
        display: flex;
        align-items: center;
        justify-content: center;
        z-index: 1000;
        animation: modalFadeIn 0.3s ease;
    }
    @keyframes modalFadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .video-modal-content {
        position: relative;
        width: 90%;
        max-width: 900px;
        aspect-ratio: 16 / 9;
    }
    .video-modal video {
        width: 100%;
        height: 100%;
        object-fit: contain;
    }
    .modal-close {
        position: absolute;
        top: -40px;
        right: 0;
        background: none;
        border: none;
        color: white;
        font-size: 40px;
        cursor: pointer;
        transition: color 0.3s;
        z-index: 1001;
    }
    .modal-close:hover {
        color: #ff6b35;
    }
    @media (max-width: 768px) {
        .video-modal-content {
            width: 95%;
        }
        .modal-close {
            top: -50px;
            right: 10px;
            font-size: 35px;
        }
    }
"#;
