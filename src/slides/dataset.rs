use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::theme;

#[function_component(DatasetSlide)]
pub fn dataset_slide() -> Html {
    // Share of listings per borough, in presentation order.
    let boroughs = [
        ("Manhattan", 44, theme::PRIMARY),
        ("Brooklyn", 41, theme::DATA_SECONDARY),
        ("Queens", 11, theme::ACCENT),
        ("Bronx", 3, theme::DATA_SUCCESS),
        ("Staten Island", 1, theme::DATA_WARNING),
    ];

    html! {
        <section class="slide">
            <style>{r#"
                .dataset-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .stat-card { text-align: center; }
                .stat-value { font-size: 2.6rem; font-weight: 700; }
                .stat-label { font-size: 1.05rem; color: hsl(215, 16%, 60%); }
                .dataset-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .dataset-grid { grid-template-columns: 1fr 1fr; }
                }
                .feature-groups {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem 2rem;
                }
                .feature-groups h4 { margin: 0 0 0.4rem; }
                .feature-groups ul {
                    margin: 0;
                    padding: 0;
                    list-style: none;
                    font-size: 0.85rem;
                    color: hsl(215, 16%, 60%);
                }
            "#}</style>
            <h2 class="slide-heading gradient-text">{"Dataset Overview"}</h2>
            <div class="dataset-stats">
                <div class="slide-card stat-card">
                    <div class="stat-value primary-text"><AnimatedCounter end={48895.0} /></div>
                    <div class="stat-label">{"Total Listings"}</div>
                </div>
                <div class="slide-card stat-card">
                    <div class="stat-value secondary-text"><AnimatedCounter end={5.0} /></div>
                    <div class="stat-label">{"NYC Boroughs"}</div>
                </div>
                <div class="slide-card stat-card">
                    <div class="stat-value accent-text"><AnimatedCounter end={13.0} suffix="+" /></div>
                    <div class="stat-label">{"Features Analyzed"}</div>
                </div>
            </div>
            <div class="dataset-grid">
                <div class="slide-card">
                    <h3 class="card-title">{"Key Features"}</h3>
                    <div class="feature-groups">
                        <div>
                            <h4 class="primary-text">{"Location"}</h4>
                            <ul>
                                <li>{"Latitude & Longitude"}</li>
                                <li>{"Neighbourhood Group"}</li>
                            </ul>
                        </div>
                        <div>
                            <h4 class="secondary-text">{"Property"}</h4>
                            <ul>
                                <li>{"Room Type"}</li>
                                <li>{"Minimum Nights"}</li>
                            </ul>
                        </div>
                        <div>
                            <h4 class="accent-text">{"Reviews"}</h4>
                            <ul>
                                <li>{"Number of Reviews"}</li>
                                <li>{"Reviews per Month"}</li>
                            </ul>
                        </div>
                        <div>
                            <h4 class="success-text">{"Host"}</h4>
                            <ul>
                                <li>{"Listings Count"}</li>
                                <li>{"Availability"}</li>
                            </ul>
                        </div>
                    </div>
                </div>
                <div class="slide-card">
                    <h3 class="card-title">{"Borough Distribution"}</h3>
                    <div class="bar-rows">
                        { for boroughs.iter().map(|(name, share, color)| html! {
                            <div class="bar-row">
                                <div class="bar-label">{ *name }</div>
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
        </section>
    }
}
