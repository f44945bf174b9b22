use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::parallax::ParallaxBackground;
use crate::deck::{Deck, DeckAction, Direction, SLIDE_LOCK_MS};
use crate::predict::{predict, ListingForm};
use crate::slides::conclusion::ConclusionSlide;
use crate::slides::dataset::DatasetSlide;
use crate::slides::intro::IntroSlide;
use crate::slides::methodology::MethodologySlide;
use crate::slides::prediction::PredictionSlide;
use crate::slides::problem::ProblemSlide;
use crate::slides::results::ResultsSlide;

const SLIDE_TITLES: [&str; 7] = [
    "Introduction",
    "Problem Statement",
    "Data Overview",
    "Methodology",
    "Live Prediction",
    "Results & Insights",
    "Conclusion",
];

impl Reducible for Deck {
    type Action = DeckAction;

    fn reduce(self: Rc<Self>, action: DeckAction) -> Rc<Self> {
        let mut next = *self;
        if next.apply(action) {
            info!(
                "Showing slide {} of {}",
                next.current() + 1,
                next.slide_count()
            );
        }
        Rc::new(next)
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let initial_slide = use_search_param("slide".to_string());
    let deck = use_reducer(move || {
        let start = initial_slide
            .and_then(|raw| raw.parse::<usize>().ok())
            .unwrap_or(0);
        Deck::starting_at(SLIDE_TITLES.len(), start)
    });
    let form = use_state(ListingForm::default);
    let prediction = use_state(|| None::<u32>);

    // Unlock navigation once the stage transition has played out. The
    // timeout is dropped, and thereby cancelled, when the deck leaves
    // the transitioning state or the page unmounts.
    {
        let deck_clone = deck.clone();
        use_effect_with_deps(
            move |in_transition: &bool| {
                let unlock = in_transition.then(|| {
                    Timeout::new(SLIDE_LOCK_MS, move || deck_clone.dispatch(DeckAction::Settle))
                });
                move || drop(unlock)
            },
            deck.is_transitioning(),
        );
    }

    // Arrow keys drive the deck unless the user is typing in the
    // prediction form.
    {
        let deck = deck.clone();
        use_effect_with_deps(
            move |_| {
                let document = web_sys::window().unwrap().document().unwrap();
                let on_keydown = Closure::wrap(Box::new(move |e: web_sys::KeyboardEvent| {
                    let typing = e
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                        .map(|el| {
                            matches!(el.tag_name().as_str(), "INPUT" | "SELECT" | "TEXTAREA")
                        })
                        .unwrap_or(false);
                    if typing {
                        return;
                    }
                    match e.key().as_str() {
                        "ArrowRight" => deck.dispatch(DeckAction::Next),
                        "ArrowLeft" => deck.dispatch(DeckAction::Prev),
                        _ => {}
                    }
                })
                    as Box<dyn FnMut(web_sys::KeyboardEvent)>);

                document
                    .add_event_listener_with_callback(
                        "keydown",
                        on_keydown.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    document
                        .remove_event_listener_with_callback(
                            "keydown",
                            on_keydown.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let on_prev = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| deck.dispatch(DeckAction::Prev))
    };
    let on_next = {
        let deck = deck.clone();
        Callback::from(move |_: MouseEvent| deck.dispatch(DeckAction::Next))
    };

    let on_change = {
        let form = form.clone();
        Callback::from(move |next: ListingForm| form.set(next))
    };
    let on_predict = {
        let form = form.clone();
        let prediction = prediction.clone();
        Callback::from(move |_: ()| {
            let price = predict(&form, &mut rand::thread_rng());
            info!("Predicted ${price}/night for {}", form.neighbourhood_group);
            prediction.set(Some(price));
        })
    };
    let on_reset = {
        let form = form.clone();
        let prediction = prediction.clone();
        Callback::from(move |_: ()| {
            form.set(ListingForm::default());
            prediction.set(None);
        })
    };

    let current = deck.current();
    let locked = deck.is_transitioning();
    let at_first = current == 0;
    let at_last = current + 1 == SLIDE_TITLES.len();
    let frame_class = match deck.direction() {
        Some(Direction::Forward) => "slide-frame entering-forward",
        Some(Direction::Backward) => "slide-frame entering-backward",
        None => "slide-frame",
    };

    let slide = match current {
        0 => html! { <IntroSlide /> },
        1 => html! { <ProblemSlide /> },
        2 => html! { <DatasetSlide /> },
        3 => html! { <MethodologySlide /> },
        4 => html! {
            <PredictionSlide
                form={(*form).clone()}
                prediction={*prediction}
                on_change={on_change}
                on_predict={on_predict}
                on_reset={on_reset}
            />
        },
        5 => html! { <ResultsSlide /> },
        6 => html! { <ConclusionSlide /> },
        _ => html! {},
    };

    html! {
        <ParallaxBackground>
            <style>{r#"
                .deck-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.9rem 1.5rem;
                    background: hsl(222, 47%, 7%, 0.8);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid hsl(217, 28%, 24%);
                }
                .nav-brand { font-weight: 700; font-size: 1.05rem; }
                .nav-jumps { display: flex; gap: 0.4rem; }
                .jump-button {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    border: 1px solid hsl(217, 28%, 24%);
                    background: transparent;
                    color: hsl(215, 16%, 60%);
                    font-size: 0.8rem;
                    cursor: pointer;
                }
                .jump-button:hover { color: hsl(213, 31%, 91%); border-color: hsl(217, 91%, 60%); }
                .jump-button.active {
                    background: hsl(217, 91%, 60%);
                    border-color: hsl(217, 91%, 60%);
                    color: white;
                }
                .deck-stage {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 110px 2rem 140px;
                }
                .slide-frame.entering-forward { animation: enter-forward 0.8s ease-in-out; }
                .slide-frame.entering-backward { animation: enter-backward 0.8s ease-in-out; }
                @keyframes enter-forward {
                    from { opacity: 0; transform: translateX(80px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes enter-backward {
                    from { opacity: 0; transform: translateX(-80px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                .deck-controls {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 0.6rem 1rem;
                    border-radius: 999px;
                    background: hsl(222, 47%, 7%, 0.8);
                    backdrop-filter: blur(8px);
                    border: 1px solid hsl(217, 28%, 24%);
                }
                .control-button {
                    padding: 0.45rem 1rem;
                    border-radius: 999px;
                    border: 1px solid hsl(217, 28%, 24%);
                    background: transparent;
                    color: hsl(213, 31%, 91%);
                    font-size: 0.85rem;
                    cursor: pointer;
                }
                .control-button:hover:not(:disabled) { border-color: hsl(217, 91%, 60%); }
                .control-button:disabled { opacity: 0.4; cursor: default; }
                .deck-dots { display: flex; gap: 0.4rem; }
                .dot {
                    width: 0.55rem;
                    height: 0.55rem;
                    border-radius: 50%;
                    background: hsl(217, 28%, 24%);
                }
                .dot.active { background: hsl(217, 91%, 60%); }

                .slide { text-align: center; }
                .slide-heading { font-size: 2.4rem; margin: 0 0 2.5rem; }
                .gradient-text {
                    background: linear-gradient(90deg, hsl(217, 91%, 60%), hsl(262, 83%, 66%), hsl(189, 94%, 50%));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .slide-card {
                    background: hsl(222, 47%, 11%, 0.6);
                    border: 1px solid hsl(217, 28%, 24%);
                    border-radius: 14px;
                    padding: 1.8rem;
                    backdrop-filter: blur(6px);
                }
                .card-title { font-size: 1.25rem; margin: 0 0 1rem; }
                .card-lead { color: hsl(215, 16%, 60%); margin: 0 0 0.8rem; font-weight: 600; }
                .icon-chip {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 12px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    margin-bottom: 1rem;
                }
                .icon-chip.primary { background: hsl(217, 91%, 60%, 0.15); }
                .icon-chip.secondary { background: hsl(262, 83%, 66%, 0.15); }
                .bullet-list { list-style: none; margin: 0; padding: 0; text-align: left; }
                .bullet-list li {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin-bottom: 0.55rem;
                    font-size: 0.95rem;
                    color: hsl(215, 16%, 60%);
                }
                .bullet-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 50%;
                    flex-shrink: 0;
                }
                .c-primary { background: hsl(217, 91%, 60%); }
                .c-secondary { background: hsl(262, 83%, 66%); }
                .c-accent { background: hsl(189, 94%, 50%); }
                .c-success { background: hsl(142, 71%, 45%); }
                .bar-rows { display: flex; flex-direction: column; gap: 0.8rem; }
                .bar-row { display: flex; align-items: center; gap: 0.8rem; }
                .bar-label {
                    flex: 0 0 10rem;
                    text-align: right;
                    font-size: 0.85rem;
                    color: hsl(215, 16%, 60%);
                }
                .bar-track {
                    flex: 1;
                    height: 0.6rem;
                    border-radius: 999px;
                    background: hsl(217, 28%, 24%);
                    overflow: hidden;
                }
                .bar-fill { height: 100%; border-radius: 999px; transition: width 1s ease-out; }
                .bar-value {
                    flex: 0 0 3.2rem;
                    text-align: left;
                    font-size: 0.85rem;
                    font-weight: 600;
                }
                .badge-pill {
                    display: inline-block;
                    padding: 0.35rem 1rem;
                    border-radius: 999px;
                    font-size: 0.8rem;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    color: hsl(217, 91%, 60%);
                    background: hsl(217, 91%, 60%, 0.12);
                    border: 1px solid hsl(217, 91%, 60%, 0.35);
                }
                .primary-text { color: hsl(217, 91%, 60%); }
                .secondary-text { color: hsl(262, 83%, 66%); }
                .accent-text { color: hsl(189, 94%, 50%); }
                .success-text { color: hsl(142, 71%, 45%); }
                @keyframes fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @keyframes slide-up {
                    from { opacity: 0; transform: translateY(24px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes scale-in {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes typewriter {
                    from { width: 0; }
                    to { width: 100%; }
                }
            "#}</style>
            <nav class="deck-nav">
                <div class="nav-brand">{"📊 NYC Airbnb Analysis"}</div>
                <div class="nav-jumps">
                    { for SLIDE_TITLES.iter().enumerate().map(|(index, title)| {
                        let deck = deck.clone();
                        html! {
                            <button
                                key={index}
                                class={classes!("jump-button", (index == current).then(|| "active"))}
                                title={*title}
                                onclick={Callback::from(move |_: MouseEvent| {
                                    deck.dispatch(DeckAction::GoTo(index));
                                })}>
                                { index + 1 }
                            </button>
                        }
                    }) }
                </div>
            </nav>
            <main class="deck-stage">
                <div class={frame_class} key={current.to_string()}>
                    { slide }
                </div>
            </main>
            <div class="deck-controls">
                <button class="control-button" onclick={on_prev} disabled={at_first || locked}>
                    {"← Previous"}
                </button>
                <div class="deck-dots">
                    { for (0..SLIDE_TITLES.len()).map(|index| html! {
                        <span key={index}
                            class={classes!("dot", (index == current).then(|| "active"))}>
                        </span>
                    }) }
                </div>
                <button class="control-button" onclick={on_next} disabled={at_last || locked}>
                    {"Next →"}
                </button>
            </div>
        </ParallaxBackground>
    }
}
