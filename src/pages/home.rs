use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::components::observe::ViewportWatch;
use crate::components::video_modal::VideoModal;
use crate::lead::form::LeadForm;

const REVEAL_HIDDEN: &str =
    "opacity: 0; transform: translateY(20px); transition: opacity 0.6s ease, transform 0.6s ease;";
const REVEAL_VISIBLE: &str =
    "opacity: 1; transform: translateY(0); transition: opacity 0.6s ease, transform 0.6s ease;";

fn scroll_to(selector: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Ok(Some(target)) = document.query_selector(selector) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let preview_open = use_state(|| false);
    let indicator_visible = use_state(|| true);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // The scroll indicator hides once the visitor has started moving.
    {
        let indicator_visible = indicator_visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let past_top = window_clone.scroll_y().map(|y| y > 100.0).unwrap_or(false);
                    indicator_visible.set(!past_top);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    // Stat and testimonial cards slide in when they reach the viewport.
    {
        use_effect_with_deps(
            move |_| {
                let watch = ViewportWatch::install(
                    ".stat-card, .testimonial-card",
                    "0px 0px -50px 0px",
                    0.1,
                    |card| {
                        let _ = card.set_attribute("style", REVEAL_HIDDEN);
                    },
                    |card| {
                        let _ = card.set_attribute("style", REVEAL_VISIBLE);
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

    let open_preview = {
        let preview_open = preview_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            preview_open.set(true);
        })
    };

    let close_preview = {
        let preview_open = preview_open.clone();
        Callback::from(move |_| preview_open.set(false))
    };

    let jump_to_join = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to("#join");
    });

    let indicator_style = if *indicator_visible {
        "opacity: 1; pointer-events: auto; transition: opacity 0.3s ease;"
    } else {
        "opacity: 0; pointer-events: none; transition: opacity 0.3s ease;"
    };

    html! {
        <div class="home-page">
            <style>{HOME_CSS}</style>

            <section class="hero">
                <div class="hero-content">
                    <h1>{"Forge Strength That Lasts"}</h1>
                    <p class="hero-subtitle">
                        {"A free 12-week kettlebell and bodyweight program, delivered straight to your inbox. No gym, no gimmicks."}
                    </p>
                    <LeadForm form_id="hero-form" button_label="GET THE FREE PROGRAM" />
                    <a href="#join" class="hero-secondary" onclick={jump_to_join}>
                        {"or jump straight to the details"}
                    </a>
                </div>
                <div class="scroll-indicator" style={indicator_style}>
                    <span>{"↓"}</span>
                </div>
            </section>

            <section class="stats">
                <div class="stat-card">
                    <h3>{"12 weeks"}</h3>
                    <p>{"Three phases that build on each other, from foundations to heavy pulls."}</p>
                </div>
                <div class="stat-card">
                    <h3>{"40+ movements"}</h3>
                    <p>{"Every exercise filmed from two angles with common faults called out."}</p>
                </div>
                <div class="stat-card">
                    <h3>{"3 sessions / week"}</h3>
                    <p>{"Forty-five minutes each. Built for people with jobs."}</p>
                </div>
            </section>

            <section class="preview">
                <h2>{"See What a Session Looks Like"}</h2>
                <button class="play-btn" onclick={open_preview}>
                    <span>{"▶"}</span>{" Watch the preview"}
                </button>
            </section>

            <section class="testimonials">
                <h2>{"From the People Lifting Along"}</h2>
                <div class="testimonial-grid">
                    <div class="testimonial-card">
                        <p>{"\"I deadlifted my bodyweight in week nine. In January I couldn't hang from a bar.\""}</p>
                        <span class="who">{"— Sanna, cohort 3"}</span>
                    </div>
                    <div class="testimonial-card">
                        <p>{"\"The fault-spotting clips are worth more than the year of personal training I paid for.\""}</p>
                        <span class="who">{"— Tomas, cohort 2"}</span>
                    </div>
                    <div class="testimonial-card">
                        <p>{"\"Short sessions, zero fluff. I finally stuck with something.\""}</p>
                        <span class="who">{"— Ada, cohort 4"}</span>
                    </div>
                </div>
            </section>

            <section id="join" class="cta">
                <h2>{"Ready to Start?"}</h2>
                <p>{"Tell us where to send the program. The first session lands in your inbox today."}</p>
                <LeadForm form_id="cta-form" button_label="SEND ME THE PROGRAM" />
            </section>

            <footer class="footer">
                <p>{"© 2026 GritForge. Train hard, recover harder."}</p>
            </footer>

            {
                if *preview_open {
                    html! {
                        <VideoModal
                            src="/assets/program-preview.mp4"
                            on_close={close_preview}
                        />
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

const HOME_CSS: &str = r#"
    .home-page {
        background: #1d1917;
        color: #f5f0eb;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
        position: relative;
        padding: 6rem 1.5rem 4rem;
    }
    .hero h1 {
        font-size: 3rem;
        margin-bottom: 1rem;
    }
    .hero-subtitle {
        color: rgba(245, 240, 235, 0.8);
        max-width: 36rem;
        margin: 0 auto 2rem;
        font-size: 1.2rem;
    }
    .hero-secondary {
        display: inline-block;
        margin-top: 1.5rem;
        color: #ff6b35;
        font-size: 0.9rem;
    }
    .scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        font-size: 1.5rem;
        animation: bob 1.5s ease-in-out infinite;
    }
    @keyframes bob {
        0%, 100% { transform: translate(-50%, 0); }
        50% { transform: translate(-50%, 8px); }
    }
    .stats, .testimonial-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 1.5rem;
        max-width: 64rem;
        margin: 0 auto;
        padding: 2rem 1.5rem;
    }
    .stat-card, .testimonial-card {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 12px;
        padding: 1.5rem;
    }
    .stat-card h3 {
        color: #ff6b35;
        margin-bottom: 0.5rem;
    }
    .testimonial-card .who {
        display: block;
        margin-top: 0.75rem;
        color: rgba(245, 240, 235, 0.6);
        font-size: 0.9rem;
    }
    .preview, .testimonials, .cta {
        text-align: center;
        padding: 4rem 1.5rem;
    }
    .play-btn {
        margin-top: 1rem;
        padding: 0.9rem 2rem;
        border: 1px solid #ff6b35;
        border-radius: 999px;
        background: transparent;
        color: #ff6b35;
        font-size: 1rem;
        cursor: pointer;
    }
    .play-btn:hover {
        background: rgba(255, 107, 53, 0.1);
    }
    .cta p {
        color: rgba(245, 240, 235, 0.8);
        margin-bottom: 2rem;
    }
    .footer {
        text-align: center;
        padding: 2rem 1.5rem;
        color: rgba(245, 240, 235, 0.5);
        font-size: 0.9rem;
    }
    @media (max-width: 768px) {
        .hero h1 {
            font-size: 2.2rem;
        }
    }
"#;
