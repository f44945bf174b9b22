//! SVG scatter of listing clusters with a hover tooltip.
//!
//! Points pop in half a second after the data arrives; the hovered
//! point is tracked by its id so re-renders never detach the tooltip.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::theme;

/// Milliseconds before freshly supplied points appear.
const REVEAL_DELAY_MS: u32 = 500;

/// One listing cluster on the scatter. `id` is the hover key and has
/// to be unique within a dataset.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub id: usize,
    pub x: f64,
    pub y: f64,
    pub borough: String,
    pub price: f64,
}

/// Horizontal position for a normalized `x` inside the plot area.
pub fn point_x(x: f64) -> f64 {
    40.0 + x * 320.0
}

/// Vertical position for `price` between the chart's price bounds.
/// A flat dataset, every price equal, sits on the midline instead of
/// dividing by zero.
pub fn point_y(price: f64, min_price: f64, max_price: f64) -> f64 {
    if max_price == min_price {
        return 150.0;
    }
    250.0 - ((price - min_price) / (max_price - min_price)) * 200.0
}

/// Price bounds over the supplied points, not the revealed subset.
pub fn price_bounds(data: &[DataPoint]) -> (f64, f64) {
    if data.is_empty() {
        return (0.0, 0.0);
    }
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), point| {
            (lo.min(point.price), hi.max(point.price))
        })
}

/// Gridline label `i` rows down from the top, prices descending.
pub fn axis_price(i: usize, min_price: f64, max_price: f64) -> i64 {
    (max_price - i as f64 * (max_price - min_price) / 4.0).round() as i64
}

#[derive(Properties, PartialEq)]
pub struct InteractiveChartProps {
    pub title: AttrValue,
    pub data: Vec<DataPoint>,
}

#[function_component(InteractiveChart)]
pub fn interactive_chart(props: &InteractiveChartProps) -> Html {
    let revealed = use_state(Vec::<DataPoint>::new);
    let hovered = use_state(|| None::<usize>);

    // New data clears the stage and schedules the reveal; dropping the
    // timeout on data change or unmount cancels a pending one.
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |data: &Vec<DataPoint>| {
                revealed.set(Vec::new());
                let incoming = data.clone();
                let reveal = Timeout::new(REVEAL_DELAY_MS, move || revealed.set(incoming));
                move || drop(reveal)
            },
            props.data.clone(),
        );
    }

    let (min_price, max_price) = price_bounds(&props.data);

    let clear_hover = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    html! {
        <div class="chart-card">
            <style>{r#"
                .chart-card {
                    background: linear-gradient(160deg, hsla(222, 47%, 13%, 0.85), hsla(222, 47%, 9%, 0.85));
                    border: 1px solid hsla(217, 28%, 24%, 0.5);
                    border-radius: 12px;
                    padding: 1.5rem;
                    backdrop-filter: blur(12px);
                }
                .chart-title {
                    margin: 0 0 1rem;
                    text-align: center;
                    font-size: 1.1rem;
                }
                .chart-svg {
                    width: 100%;
                    height: 300px;
                    overflow: visible;
                }
                .chart-point {
                    cursor: pointer;
                    transition: r 0.3s ease;
                }
                .chart-legend {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 1rem;
                }
                .chart-legend-item {
                    display: flex;
                    align-items: center;
                    gap: 0.4rem;
                    font-size: 0.75rem;
                    color: hsl(215, 16%, 60%);
                }
                .chart-legend-dot {
                    width: 12px;
                    height: 12px;
                    border-radius: 50%;
                }
            "#}</style>
            <h3 class="chart-title">{ props.title.clone() }</h3>
            <div class="chart-body">
                <svg viewBox="0 0 400 300" class="chart-svg" onmouseleave={clear_hover}>
                    // Gridlines with their price labels
                    { for (0..5).map(|i| {
                        let y = 50 + i * 50;
                        html! {
                            <g>
                                <line x1="40" y1={y.to_string()} x2="360" y2={y.to_string()}
                                    stroke={theme::BORDER} stroke-width="1" opacity="0.3" />
                                <text x="30" y={(y + 5).to_string()} fill={theme::MUTED}
                                    font-size="10" text-anchor="end">
                                    { format!("${}", axis_price(i, min_price, max_price)) }
                                </text>
                            </g>
                        }
                    }) }
                    { for revealed.iter().map(|point| {
                        let cx = point_x(point.x);
                        let cy = point_y(point.price, min_price, max_price);
                        let is_hovered = *hovered == Some(point.id);
                        let enter = {
                            let hovered = hovered.clone();
                            let id = point.id;
                            Callback::from(move |_: MouseEvent| hovered.set(Some(id)))
                        };
                        html! {
                            <g key={point.id}>
                                <circle
                                    cx={cx.to_string()}
                                    cy={cy.to_string()}
                                    r={if is_hovered { "8" } else { "5" }}
                                    fill={theme::borough_color(&point.borough)}
                                    class="chart-point"
                                    onmouseenter={enter}
                                />
                                { if is_hovered {
                                    html! {
                                        <g>
                                            <rect x={(cx - 40.0).to_string()} y={(cy - 35.0).to_string()}
                                                width="80" height="25" rx="4"
                                                fill={theme::BACKGROUND} stroke={theme::BORDER} />
                                            <text x={cx.to_string()} y={(cy - 20.0).to_string()}
                                                fill={theme::FOREGROUND} font-size="10" text-anchor="middle">
                                                { format!("${}", point.price) }
                                            </text>
                                            <text x={cx.to_string()} y={(cy - 10.0).to_string()}
                                                fill={theme::MUTED} font-size="8" text-anchor="middle">
                                                { point.borough.clone() }
                                            </text>
                                        </g>
                                    }
                                } else {
                                    html! {}
                                } }
                            </g>
                        }
                    }) }
                    <line x1="40" y1="250" x2="360" y2="250" stroke={theme::BORDER} stroke-width="2" />
                    <line x1="40" y1="50" x2="40" y2="250" stroke={theme::BORDER} stroke-width="2" />
                    <text x="200" y="280" fill={theme::MUTED} font-size="12" text-anchor="middle">
                        { "Reviews per Month" }
                    </text>
                    <text x="20" y="150" fill={theme::MUTED} font-size="12" text-anchor="middle"
                        transform="rotate(-90 20 150)">
                        { "Price ($)" }
                    </text>
                </svg>
                <div class="chart-legend">
                    { for ["Manhattan", "Brooklyn", "Queens", "Staten Island", "Bronx"].iter().map(|borough| html! {
                        <div class="chart-legend-item">
                            <span class="chart-legend-dot"
                                style={format!("background: {};", theme::borough_color(borough))}>
                            </span>
                            <span>{ *borough }</span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DataPoint> {
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

    #[test]
    fn test_point_x_spans_the_plot_area() {
        assert_eq!(point_x(0.0), 40.0);
        assert_eq!(point_x(1.0), 360.0);
    }

    #[test]
    fn test_pricier_points_sit_higher() {
        let data = sample();
        let (lo, hi) = price_bounds(&data);
        assert_eq!((lo, hi), (75.0, 180.0));

        let mut by_price = data;
        by_price.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap());
        for pair in by_price.windows(2) {
            assert!(point_y(pair[1].price, lo, hi) < point_y(pair[0].price, lo, hi));
        }
        assert_eq!(point_y(hi, lo, hi), 50.0);
        assert_eq!(point_y(lo, lo, hi), 250.0);
    }

    #[test]
    fn test_flat_prices_fall_back_to_the_midline() {
        let y = point_y(90.0, 90.0, 90.0);
        assert_eq!(y, 150.0);
        assert!(y.is_finite());
    }

    #[test]
    fn test_axis_labels_descend_from_max_to_min() {
        let labels: Vec<i64> = (0..5).map(|i| axis_price(i, 75.0, 180.0)).collect();
        assert_eq!(labels, vec![180, 154, 128, 101, 75]);
    }

    #[test]
    fn test_price_bounds_of_empty_data() {
        assert_eq!(price_bounds(&[]), (0.0, 0.0));
    }
}
