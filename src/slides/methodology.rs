use yew::prelude::*;

use crate::components::interactive_chart::{DataPoint, InteractiveChart};

/// Sample of the price vs reviews-per-month relationship, one point per borough.
fn chart_data() -> Vec<DataPoint> {
    [
        (0.2, 0.3, "Manhattan", 180.0),
        (0.4, 0.5, "Brooklyn", 120.0),
        (0.6, 0.2, "Queens", 90.0),
        (0.8, 0.4, "Staten Island", 85.0),
        (0.3, 0.7, "Bronx", 75.0),
    ]
    .into_iter()
    .enumerate()
    .map(|(id, (x, y, borough, price))| DataPoint {
        id,
        x,
        y,
        borough: borough.to_string(),
        price,
    })
    .collect()
}

#[function_component(MethodologySlide)]
pub fn methodology_slide() -> Html {
    html! {
        <section class="slide">
            <style>{r#"
                .method-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    margin-bottom: 3rem;
                }
                .process-strip {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                    margin-bottom: 3rem;
                }
                .process-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.4rem;
                    min-width: 110px;
                }
                .process-number {
                    width: 2.4rem;
                    height: 2.4rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    background: hsl(217, 91%, 60%, 0.15);
                    color: hsl(217, 91%, 60%);
                    border: 1px solid hsl(217, 91%, 60%, 0.4);
                }
                .process-step span { font-size: 0.85rem; color: hsl(215, 16%, 60%); }
                .process-link {
                    width: 3rem;
                    height: 2px;
                    background: linear-gradient(90deg, hsl(217, 91%, 60%), hsl(262, 83%, 66%));
                }
                .method-chart { display: flex; justify-content: center; }
            "#}</style>
            <h2 class="slide-heading gradient-text">{"Methodology"}</h2>
            <div class="method-grid">
                <div class="slide-card">
                    <div class="icon-chip primary">{"🗄️"}</div>
                    <h3 class="card-title">{"Data Processing"}</h3>
                    <h4 class="card-lead">{"Preprocessing Steps"}</h4>
                    <ul class="bullet-list">
                        <li><span class="bullet-dot c-primary"></span>{"Data cleaning & validation"}</li>
                        <li><span class="bullet-dot c-primary"></span>{"Feature engineering"}</li>
                        <li><span class="bullet-dot c-primary"></span>{"Categorical encoding"}</li>
                        <li><span class="bullet-dot c-primary"></span>{"Outlier detection"}</li>
                    </ul>
                </div>
                <div class="slide-card">
                    <div class="icon-chip secondary">{"🧠"}</div>
                    <h3 class="card-title">{"Model Training"}</h3>
                    <h4 class="card-lead">{"XGBoost Algorithm"}</h4>
                    <ul class="bullet-list">
                        <li><span class="bullet-dot c-secondary"></span>{"Gradient boosting framework"}</li>
                        <li><span class="bullet-dot c-secondary"></span>{"Cross-validation tuning"}</li>
                        <li><span class="bullet-dot c-secondary"></span>{"Feature importance analysis"}</li>
                        <li><span class="bullet-dot c-secondary"></span>{"Hyperparameter optimization"}</li>
                    </ul>
                </div>
                <div class="slide-card">
                    <div class="icon-chip primary">{"📈"}</div>
                    <h3 class="card-title">{"Validation"}</h3>
                    <h4 class="card-lead">{"Model Evaluation"}</h4>
                    <ul class="bullet-list">
                        <li><span class="bullet-dot c-accent"></span>{"Train-test split (80/20)"}</li>
                        <li><span class="bullet-dot c-accent"></span>{"RMSE optimization"}</li>
                        <li><span class="bullet-dot c-accent"></span>{"Feature correlation analysis"}</li>
                        <li><span class="bullet-dot c-accent"></span>{"Performance metrics"}</li>
                    </ul>
                </div>
            </div>
            <div class="slide-card">
                <h3 class="card-title">{"Feature Engineering Process"}</h3>
                <div class="process-strip">
                    <div class="process-step">
                        <div class="process-number">{"1"}</div>
                        <span>{"Raw Data"}</span>
                    </div>
                    <div class="process-link"></div>
                    <div class="process-step">
                        <div class="process-number">{"2"}</div>
                        <span>{"One-Hot Encoding"}</span>
                    </div>
                    <div class="process-link"></div>
                    <div class="process-step">
                        <div class="process-number">{"3"}</div>
                        <span>{"Feature Selection"}</span>
                    </div>
                    <div class="process-link"></div>
                    <div class="process-step">
                        <div class="process-number">{"4"}</div>
                        <span>{"XGBoost Model"}</span>
                    </div>
                </div>
            </div>
            <div class="method-chart">
                <InteractiveChart title="Price vs Reviews Distribution" data={chart_data()} />
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_data_has_one_point_per_borough() {
        let data = chart_data();
        assert_eq!(data.len(), 5);
        let boroughs: Vec<&str> = data.iter().map(|p| p.borough.as_str()).collect();
        assert_eq!(
            boroughs,
            ["Manhattan", "Brooklyn", "Queens", "Staten Island", "Bronx"]
        );
    }

    #[test]
    fn test_chart_data_ids_are_stable_and_sequential() {
        let data = chart_data();
        for (i, point) in data.iter().enumerate() {
            assert_eq!(point.id, i);
        }
    }

    #[test]
    fn test_manhattan_is_the_priciest_sample() {
        let data = chart_data();
        let max = data
            .iter()
            .max_by(|a, b| a.price.total_cmp(&b.price))
            .unwrap();
        assert_eq!(max.borough, "Manhattan");
        assert_eq!(max.price, 180.0);
    }
}
