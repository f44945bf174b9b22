use yew::prelude::*;

#[function_component(ProblemSlide)]
pub fn problem_slide() -> Html {
    html! {
        <section class="slide">
            <style>{r#"
                .problem-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }
                @media (min-width: 768px) {
                    .problem-grid { grid-template-columns: 1fr 1fr; }
                }
                .card-title .icon-chip {
                    display: inline-flex;
                    width: 2.2rem;
                    height: 2.2rem;
                    font-size: 1.1rem;
                    margin: 0 0.6rem 0 0;
                    vertical-align: middle;
                }
            "#}</style>
            <h2 class="slide-heading gradient-text">{"Problem Statement"}</h2>
            <div class="problem-grid">
                <div class="slide-card">
                    <h3 class="card-title primary-text">
                        <span class="icon-chip primary">{"📈"}</span>
                        {"Market Challenge"}
                    </h3>
                    <p class="card-lead">{"Airbnb hosts in NYC struggle to set competitive prices due to:"}</p>
                    <ul class="bullet-list">
                        <li><span class="bullet-dot c-primary"></span>{"Dynamic market conditions across boroughs"}</li>
                        <li><span class="bullet-dot c-secondary"></span>{"Complex feature interactions affecting pricing"}</li>
                        <li><span class="bullet-dot c-accent"></span>{"Lack of data-driven pricing tools"}</li>
                        <li><span class="bullet-dot c-success"></span>{"Seasonal and location-based variations"}</li>
                    </ul>
                </div>
                <div class="slide-card">
                    <h3 class="card-title secondary-text">
                        <span class="icon-chip secondary">{"🧠"}</span>
                        {"Our Solution"}
                    </h3>
                    <p class="card-lead">{"Machine learning-powered price prediction system that:"}</p>
                    <ul class="bullet-list">
                        <li><span class="bullet-dot c-success"></span>{"Analyzes 48,895+ listings across all boroughs"}</li>
                        <li><span class="bullet-dot c-primary"></span>{"Uses advanced XGBoost algorithm"}</li>
                        <li><span class="bullet-dot c-accent"></span>{"Considers 13+ key features"}</li>
                        <li><span class="bullet-dot c-secondary"></span>{"Provides real-time price recommendations"}</li>
                    </ul>
                </div>
            </div>
        </section>
    }
}
