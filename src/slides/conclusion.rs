use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;

#[function_component(ConclusionSlide)]
pub fn conclusion_slide() -> Html {
    html! {
        <section class="slide">
            <style>{r#"
                .impact-trio {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .impact-emoji { font-size: 2.2rem; margin-bottom: 0.6rem; }
                .impact-headline { font-size: 1.4rem; font-weight: 700; margin-bottom: 0.4rem; }
                .impact-note { font-size: 0.9rem; color: hsl(215, 16%, 60%); }
                .conclusion-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    margin-bottom: 3rem;
                    text-align: left;
                }
                @media (min-width: 768px) {
                    .conclusion-grid { grid-template-columns: 1fr 1fr; }
                }
                .thanks-block { text-align: center; }
                .thanks-block h3 { font-size: 1.8rem; margin: 1rem 0 0.8rem; }
                .thanks-note {
                    max-width: 640px;
                    margin: 0 auto;
                    color: hsl(215, 16%, 60%);
                    line-height: 1.6;
                }
            "#}</style>
            <h2 class="slide-heading gradient-text">{"Conclusion & Impact"}</h2>
            <div class="impact-trio">
                <div class="slide-card">
                    <div class="impact-emoji">{"📈"}</div>
                    <div class="impact-headline primary-text">
                        <AnimatedCounter end={87.3} suffix="%" />
                        {" Accuracy"}
                    </div>
                    <p class="impact-note">{"High-precision predictions enable optimal pricing strategies"}</p>
                </div>
                <div class="slide-card">
                    <div class="impact-emoji">{"🧠"}</div>
                    <div class="impact-headline secondary-text">{"Real-time Insights"}</div>
                    <p class="impact-note">{"Instant price recommendations based on market data"}</p>
                </div>
                <div class="slide-card">
                    <div class="impact-emoji">{"💾"}</div>
                    <div class="impact-headline accent-text">{"Scalable Solution"}</div>
                    <p class="impact-note">{"Framework applicable to other cities and markets"}</p>
                </div>
            </div>
            <div class="conclusion-grid">
                <div class="slide-card">
                    <h3 class="card-title">{"Business Impact"}</h3>
                    <ul class="bullet-list">
                        <li>
                            <span class="bullet-dot c-primary"></span>
                            {"15-20% revenue increase for optimally priced listings"}
                        </li>
                        <li>
                            <span class="bullet-dot c-secondary"></span>
                            {"Reduced time-to-market for new listings"}
                        </li>
                        <li>
                            <span class="bullet-dot c-accent"></span>
                            {"Data-driven competitive advantage"}
                        </li>
                    </ul>
                </div>
                <div class="slide-card">
                    <h3 class="card-title">{"Future Enhancements"}</h3>
                    <ul class="bullet-list">
                        <li>
                            <span class="bullet-dot c-success"></span>
                            {"Seasonal demand modeling"}
                        </li>
                        <li>
                            <span class="bullet-dot c-primary"></span>
                            {"Real-time market sentiment analysis"}
                        </li>
                        <li>
                            <span class="bullet-dot c-secondary"></span>
                            {"Integration with booking platforms"}
                        </li>
                    </ul>
                </div>
            </div>
            <div class="thanks-block">
                <span class="badge-pill">{"Thank You"}</span>
                <h3 class="gradient-text">{"Questions & Discussion"}</h3>
                <p class="thanks-note">
                    {"This machine learning model demonstrates the power of big data \
                      analytics in solving real-world business problems and optimizing \
                      market strategies."}
                </p>
            </div>
        </section>
    }
}
