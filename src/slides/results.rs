use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::theme;

#[function_component(ResultsSlide)]
pub fn results_slide() -> Html {
    let importances = [
        ("Location (Lat/Long)", 28, theme::PRIMARY),
        ("Neighbourhood Group", 22, theme::DATA_SECONDARY),
        ("Room Type", 18, theme::ACCENT),
        ("Number of Reviews", 15, theme::DATA_SUCCESS),
        ("Availability", 10, theme::DATA_WARNING),
        ("Host Listings", 7, theme::CHART_5),
    ];

    html! {
        <section class="slide">
            <style>{r#"
                .results-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                @media (min-width: 768px) {
                    .results-grid { grid-template-columns: 1fr 1fr; }
                }
                .metric-tiles {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .metric-tile { text-align: center; }
                .metric-value { font-size: 2rem; font-weight: 700; }
                .metric-label { font-size: 0.85rem; color: hsl(215, 16%, 60%); }
                .findings-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .finding-rank {
                    width: 2.4rem;
                    height: 2.4rem;
                    margin: 0 auto 0.8rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    background: hsl(217, 91%, 60%, 0.15);
                    color: hsl(217, 91%, 60%);
                }
                .finding-text {
                    font-size: 0.9rem;
                    color: hsl(215, 16%, 60%);
                    line-height: 1.5;
                }
                .finding-text strong { color: hsl(213, 31%, 91%); }
            "#}</style>
            <h2 class="slide-heading gradient-text">{"Results & Key Insights"}</h2>
            <div class="results-grid">
                <div class="slide-card">
                    <h3 class="card-title">{"Model Performance"}</h3>
                    <div class="metric-tiles">
                        <div class="metric-tile">
                            <div class="metric-value primary-text">
                                <AnimatedCounter end={87.3} suffix="%" duration={2000.0} />
                            </div>
                            <div class="metric-label">{"Accuracy Score"}</div>
                        </div>
                        <div class="metric-tile">
                            <div class="metric-value secondary-text">
                                <AnimatedCounter end={23.45} prefix="$" duration={2000.0} />
                            </div>
                            <div class="metric-label">{"Mean RMSE"}</div>
                        </div>
                        <div class="metric-tile">
                            <div class="metric-value accent-text">
                                <AnimatedCounter end={0.892} duration={2000.0} />
                            </div>
                            <div class="metric-label">{"R² Score"}</div>
                        </div>
                        <div class="metric-tile">
                            <div class="metric-value success-text">
                                <AnimatedCounter end={94.2} suffix="%" duration={2000.0} />
                            </div>
                            <div class="metric-label">{"Precision"}</div>
                        </div>
                    </div>
                </div>
                <div class="slide-card">
                    <h3 class="card-title">{"Feature Importance"}</h3>
                    <div class="bar-rows">
                        { for importances.iter().map(|(feature, share, color)| html! {
                            <div class="bar-row">
                                <div class="bar-label">{ *feature }</div>
                                <div class="bar-track">
                                    <div class="bar-fill"
                                        style={format!("width: {share}%; background: {color};")}>
                                    </div>
                                </div>
                                <div class="bar-value">
                                    <AnimatedCounter end={f64::from(*share)} suffix="%" duration={1500.0} />
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <div class="findings-grid">
                <div class="slide-card">
                    <div class="finding-rank">{"#1"}</div>
                    <p class="finding-text">
                        <strong>{"Location is the strongest predictor"}</strong>
                        {" - Manhattan listings command 80% higher prices than other \
                          boroughs on average."}
                    </p>
                </div>
                <div class="slide-card">
                    <div class="finding-rank">{"#2"}</div>
                    <p class="finding-text">
                        <strong>{"Review count correlation"}</strong>
                        {" - Properties with 50+ reviews can charge 25% premium due to \
                          increased trust."}
                    </p>
                </div>
                <div class="slide-card">
                    <div class="finding-rank">{"#3"}</div>
                    <p class="finding-text">
                        <strong>{"Room type impact"}</strong>
                        {" - Entire homes average $180/night vs $75 for private rooms \
                          in the same neighborhoods."}
                    </p>
                </div>
            </div>
        </section>
    }
}
