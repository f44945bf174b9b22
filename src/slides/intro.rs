use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::neural_network::NeuralNetwork;

#[function_component(IntroSlide)]
pub fn intro_slide() -> Html {
    html! {
        <section class="slide intro-slide">
            <style>{r#"
                .intro-slide {
                    text-align: center;
                    padding-top: 4rem;
                }
                .intro-title {
                    font-size: 3.4rem;
                    margin: 1.5rem auto;
                    white-space: nowrap;
                    overflow: hidden;
                    max-width: fit-content;
                    animation: typewriter 2s steps(27) both;
                }
                .intro-subtitle {
                    font-size: 1.2rem;
                    color: hsl(215, 16%, 60%);
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    animation: fade-in 1s ease 1s both;
                }
                .intro-stats {
                    display: flex;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 2rem;
                    margin-top: 3rem;
                }
                .intro-stat {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.9rem;
                    font-weight: 500;
                    animation: slide-up 0.6s ease both;
                }
                .intro-stat .icon-chip {
                    width: 2.2rem;
                    height: 2.2rem;
                    font-size: 1.1rem;
                    margin-bottom: 0;
                }
                .intro-stat:nth-child(1) { animation-delay: 1.2s; }
                .intro-stat:nth-child(2) { animation-delay: 1.4s; }
                .intro-stat:nth-child(3) { animation-delay: 1.6s; }
                .intro-network {
                    max-width: 28rem;
                    margin: 4rem auto 0;
                    opacity: 0.8;
                    animation: fade-in 1s ease 2s both;
                }
            "#}</style>
            <div class="badge-pill">{"Big Data Case Study"}</div>
            <h1 class="intro-title gradient-text">{"NYC Airbnb Price Prediction"}</h1>
            <p class="intro-subtitle">
                {"Advanced machine learning analysis using XGBoost to predict optimal \
                  pricing strategies for Airbnb listings across New York City's five boroughs"}
            </p>
            <div class="intro-stats">
                <div class="intro-stat">
                    <span class="icon-chip primary">{"🧠"}</span>
                    <span>{"XGBoost ML Model"}</span>
                </div>
                <div class="intro-stat">
                    <span class="icon-chip secondary">{"💾"}</span>
                    <span><AnimatedCounter end={48895.0} suffix=" Listings" /></span>
                </div>
                <div class="intro-stat">
                    <span class="icon-chip primary">{"⚡"}</span>
                    <span>{"Real-time Predictions"}</span>
                </div>
            </div>
            <div class="intro-network">
                <NeuralNetwork />
            </div>
        </section>
    }
}
