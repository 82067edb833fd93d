use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::HtmlMediaElement;
use yew::prelude::*;

use crate::components::observe::ViewportWatch;

/// A touchmove drifting further than this vertically means the visitor is
/// scrolling, not pressing the card.
const SCROLL_CANCEL_PX: i32 = 10;

/// Mirrors the `'connection' in navigator` probe: the Network Information
/// API is not universally available, so the fields are read reflectively.
fn data_saver_active() -> bool {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return false,
    };
    let connection = match Reflect::get(window.navigator().as_ref(), &JsValue::from_str("connection")) {
        Ok(connection) if !connection.is_undefined() && !connection.is_null() => connection,
        _ => return false,
    };
    let save_data = Reflect::get(&connection, &JsValue::from_str("saveData"))
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false);
    let effective_type = Reflect::get(&connection, &JsValue::from_str("effectiveType"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    save_data || effective_type.contains("2g")
}

struct Exercise {
    name: &'static str,
    focus: &'static str,
    video_src: &'static str,
}

const EXERCISES: &[Exercise] = &[
    Exercise {
        name: "Goblet Squat",
        focus: "Legs · weeks 1–4",
        video_src: "/assets/exercises/goblet-squat.mp4",
    },
    Exercise {
        name: "One-Arm Row",
        focus: "Back · weeks 1–6",
        video_src: "/assets/exercises/one-arm-row.mp4",
    },
    Exercise {
        name: "Kettlebell Swing",
        focus: "Hinge · weeks 3–12",
        video_src: "/assets/exercises/kettlebell-swing.mp4",
    },
    Exercise {
        name: "Push-Up Ladder",
        focus: "Push · weeks 1–8",
        video_src: "/assets/exercises/push-up-ladder.mp4",
    },
    Exercise {
        name: "Turkish Get-Up",
        focus: "Full body · weeks 5–12",
        video_src: "/assets/exercises/turkish-get-up.mp4",
    },
    Exercise {
        name: "Racked Carry",
        focus: "Core · weeks 7–12",
        video_src: "/assets/exercises/racked-carry.mp4",
    },
];

#[derive(Properties, PartialEq)]
struct ExerciseCardProps {
    name: AttrValue,
    focus: AttrValue,
    video_src: AttrValue,
}

#[function_component(ExerciseCard)]
fn exercise_card(props: &ExerciseCardProps) -> Html {
    let pressed = use_state(|| false);
    let touch_start_y = use_mut_ref(|| 0i32);

    let ontouchstart = {
        let pressed = pressed.clone();
        let touch_start_y = touch_start_y.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                *touch_start_y.borrow_mut() = touch.client_y();
            }
            pressed.set(true);
        })
    };

    let ontouchend = {
        let pressed = pressed.clone();
        Callback::from(move |_: TouchEvent| pressed.set(false))
    };

    let ontouchmove = {
        let pressed = pressed.clone();
        let touch_start_y = touch_start_y.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.touches().get(0) {
                if (touch.client_y() - *touch_start_y.borrow()).abs() > SCROLL_CANCEL_PX {
                    pressed.set(false);
                }
            }
        })
    };

    let card_style = if *pressed {
        "transition: transform 0.1s ease; transform: scale(0.99);"
    } else {
        "transform: scale(1);"
    };

    html! {
        <article
            class="exercise-card"
            style={card_style}
            ontouchstart={ontouchstart}
            ontouchend={ontouchend}
            ontouchmove={ontouchmove}
        >
            <video controls=true muted=true preload="metadata">
                <source src={props.video_src.clone()} type="video/mp4" />
                {"Your browser does not support the video tag."}
            </video>
            <h3>{ props.name.clone() }</h3>
            <p class="exercise-focus">{ props.focus.clone() }</p>
        </article>
    }
}

#[function_component(Exercises)]
pub fn exercises() -> Html {
    // Videos only load once they approach the viewport; on metered
    // connections the preload hint is dropped entirely.
    {
        use_effect_with_deps(
            move |_| {
                let saver = data_saver_active();
                let watch = ViewportWatch::install(
                    ".exercise-card video",
                    "50px",
                    0.1,
                    move |el| {
                        if saver {
                            if let Some(video) = el.dyn_ref::<HtmlMediaElement>() {
                                video.set_preload("none");
                            }
                        }
                    },
                    |el| {
                        if el.get_attribute("data-loaded").is_some() {
                            return;
                        }
                        if let Some(video) = el.dyn_ref::<HtmlMediaElement>() {
                            video.load();
                            let _ = el.set_attribute("data-loaded", "true");
                        }
                    },
                );
                move || {
                    if let Some(watch) = watch {
                        watch.dispose();
                    }
                }
            },
            (),
        );
    }

    let go_back = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.back();
            }
        }
    });

    html! {
        <div class="exercises-page">
            <style>{EXERCISES_CSS}</style>
            <div class="exercises-header">
                <a href="/" class="back-link" onclick={go_back}>{"← Back"}</a>
                <h1>{"The Exercise Library"}</h1>
                <p>{"Every movement in the program, filmed and annotated. Videos load as you scroll."}</p>
            </div>
            <div class="exercise-grid">
                {
                    EXERCISES.iter().map(|exercise| html! {
                        <ExerciseCard
                            key={exercise.name}
                            name={exercise.name}
                            focus={exercise.focus}
                            video_src={exercise.video_src}
                        />
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

const EXERCISES_CSS: &str = r#"
    .exercises-page {
        background: #1d1917;
        color: #f5f0eb;
        min-height: 100vh;
        padding: 6rem 1.5rem 3rem;
    }
    .exercises-header {
        max-width: 64rem;
        margin: 0 auto 2rem;
    }
    .exercises-header p {
        color: rgba(245, 240, 235, 0.7);
    }
    .back-link {
        display: inline-block;
        margin-bottom: 1rem;
        color: #ff6b35;
    }
    .exercise-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
        gap: 1.5rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .exercise-card {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        overflow: hidden;
    }
    .exercise-card video {
        width: 100%;
        aspect-ratio: 16 / 9;
        object-fit: cover;
        background: #000;
    }
    .exercise-card h3 {
        margin: 1rem 1rem 0.25rem;
    }
    .exercise-focus {
        margin: 0 1rem 1rem;
        color: rgba(245, 240, 235, 0.6);
        font-size: 0.9rem;
    }
"#;
