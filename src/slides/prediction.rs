use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::predict::ListingForm;

const NEIGHBOURHOOD_GROUPS: [&str; 5] =
    ["Manhattan", "Brooklyn", "Queens", "Staten Island", "Bronx"];
const ROOM_TYPES: [&str; 3] = ["Entire home/apt", "Private room", "Shared room"];

#[derive(Properties, PartialEq)]
pub struct PredictionSlideProps {
    pub form: ListingForm,
    pub prediction: Option<u32>,
    pub on_change: Callback<ListingForm>,
    pub on_predict: Callback<()>,
    pub on_reset: Callback<()>,
}

#[function_component(PredictionSlide)]
pub fn prediction_slide(props: &PredictionSlideProps) -> Html {
    // Unparseable input keeps the last valid value rather than zeroing
    // the field out mid-edit.
    let on_latitude = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(latitude) = input.value().parse::<f64>() {
                    on_change.emit(ListingForm { latitude, ..form.clone() });
                }
            }
        })
    };
    let on_longitude = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(longitude) = input.value().parse::<f64>() {
                    on_change.emit(ListingForm { longitude, ..form.clone() });
                }
            }
        })
    };
    let on_neighbourhood = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                on_change.emit(ListingForm {
                    neighbourhood_group: select.value(),
                    ..form.clone()
                });
            }
        })
    };
    let on_room_type = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                on_change.emit(ListingForm {
                    room_type: select.value(),
                    ..form.clone()
                });
            }
        })
    };
    let on_minimum_nights = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(minimum_nights) = input.value().parse::<u32>() {
                    on_change.emit(ListingForm { minimum_nights, ..form.clone() });
                }
            }
        })
    };
    let on_number_of_reviews = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(number_of_reviews) = input.value().parse::<u32>() {
                    on_change.emit(ListingForm { number_of_reviews, ..form.clone() });
                }
            }
        })
    };
    let on_reviews_per_month = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(reviews_per_month) = input.value().parse::<f64>() {
                    on_change.emit(ListingForm { reviews_per_month, ..form.clone() });
                }
            }
        })
    };
    let on_days_since_review = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(days_since_last_review) = input.value().parse::<u32>() {
                    on_change.emit(ListingForm { days_since_last_review, ..form.clone() });
                }
            }
        })
    };
    let on_host_listings = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(host_listings_count) = input.value().parse::<u32>() {
                    on_change.emit(ListingForm { host_listings_count, ..form.clone() });
                }
            }
        })
    };
    let on_availability = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                if let Ok(availability_365) = input.value().parse::<u32>() {
                    on_change.emit(ListingForm { availability_365, ..form.clone() });
                }
            }
        })
    };
    let on_popular_host = {
        let form = props.form.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                on_change.emit(ListingForm {
                    is_popular_host: input.checked(),
                    ..form.clone()
                });
            }
        })
    };
    let on_predict = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |_: MouseEvent| on_predict.emit(()))
    };
    let on_reset = {
        let on_reset = props.on_reset.clone();
        Callback::from(move |_: MouseEvent| on_reset.emit(()))
    };

    html! {
        <section class="slide">
            <style>{r#"
                .predict-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    text-align: left;
                }
                @media (min-width: 900px) {
                    .predict-grid { grid-template-columns: 1fr 1fr 1fr; }
                }
                .field { margin-bottom: 1rem; }
                .field-label {
                    display: block;
                    font-size: 0.85rem;
                    color: hsl(215, 16%, 60%);
                    margin-bottom: 0.35rem;
                }
                .field-input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.55rem 0.75rem;
                    border-radius: 8px;
                    border: 1px solid hsl(217, 33%, 20%);
                    background: hsl(222, 47%, 13%);
                    color: hsl(213, 31%, 91%);
                    font-size: 0.95rem;
                }
                .field-input:focus {
                    outline: none;
                    border-color: hsl(217, 91%, 60%);
                }
                .check-row {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                    margin: 1.2rem 0;
                    font-size: 0.9rem;
                }
                .check-row input { width: 1.1rem; height: 1.1rem; }
                .predict-button {
                    width: 100%;
                    padding: 0.8rem;
                    border: none;
                    border-radius: 8px;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    color: white;
                    background: linear-gradient(135deg, hsl(217, 91%, 60%), hsl(262, 83%, 66%));
                }
                .predict-button:hover { filter: brightness(1.1); }
                .reset-button {
                    width: 100%;
                    margin-top: 0.75rem;
                    padding: 0.7rem;
                    border-radius: 8px;
                    font-size: 0.9rem;
                    cursor: pointer;
                    color: hsl(215, 16%, 60%);
                    background: transparent;
                    border: 1px solid hsl(217, 33%, 20%);
                }
                .reset-button:hover { color: hsl(213, 31%, 91%); }
                .prediction-result {
                    margin-top: 1.5rem;
                    padding: 1.5rem;
                    border-radius: 12px;
                    text-align: center;
                    border: 1px solid hsl(217, 91%, 60%, 0.3);
                    background: linear-gradient(90deg, hsl(217, 91%, 60%, 0.2), hsl(262, 83%, 66%, 0.2));
                    animation: scale-in 0.4s ease-out;
                }
                .prediction-result h4 { margin: 0 0 0.5rem; }
                .prediction-price {
                    font-size: 2.5rem;
                    font-weight: 700;
                    color: hsl(217, 91%, 60%);
                }
                .prediction-result p { color: hsl(215, 16%, 60%); margin: 0.5rem 0 0; }
            "#}</style>
            <h2 class="slide-heading gradient-text">{"Live Price Prediction"}</h2>
            <div class="predict-grid">
                <div class="slide-card">
                    <h3 class="card-title">{"Location & Property"}</h3>
                    <div class="field">
                        <label class="field-label">{"Latitude"}</label>
                        <input class="field-input" type="number" step="0.0001"
                            value={props.form.latitude.to_string()}
                            oninput={on_latitude} />
                    </div>
                    <div class="field">
                        <label class="field-label">{"Longitude"}</label>
                        <input class="field-input" type="number" step="0.0001"
                            value={props.form.longitude.to_string()}
                            oninput={on_longitude} />
                    </div>
                    <div class="field">
                        <label class="field-label">{"Neighbourhood Group"}</label>
                        <select class="field-input" onchange={on_neighbourhood}>
                            { for NEIGHBOURHOOD_GROUPS.iter().map(|group| html! {
                                <option value={*group}
                                    selected={props.form.neighbourhood_group == *group}>
                                    { *group }
                                </option>
                            }) }
                        </select>
                    </div>
                    <div class="field">
                        <label class="field-label">{"Room Type"}</label>
                        <select class="field-input" onchange={on_room_type}>
                            { for ROOM_TYPES.iter().map(|room| html! {
                                <option value={*room}
                                    selected={props.form.room_type == *room}>
                                    { *room }
                                </option>
                            }) }
                        </select>
                    </div>
                </div>
                <div class="slide-card">
                    <h3 class="card-title">{"Booking & Reviews"}</h3>
                    <div class="field">
                        <label class="field-label">{"Minimum Nights"}</label>
                        <input class="field-input" type="number" min="1"
                            value={props.form.minimum_nights.to_string()}
                            oninput={on_minimum_nights} />
                    </div>
                    <div class="field">
                        <label class="field-label">{"Number of Reviews"}</label>
                        <input class="field-input" type="number" min="0"
                            value={props.form.number_of_reviews.to_string()}
                            oninput={on_number_of_reviews} />
                    </div>
                    <div class="field">
                        <label class="field-label">{"Reviews per Month"}</label>
                        <input class="field-input" type="number" step="0.1" min="0"
                            value={props.form.reviews_per_month.to_string()}
                            oninput={on_reviews_per_month} />
                    </div>
                    <div class="field">
                        <label class="field-label">{"Days Since Last Review"}</label>
                        <input class="field-input" type="number" min="0"
                            value={props.form.days_since_last_review.to_string()}
                            oninput={on_days_since_review} />
                    </div>
                </div>
                <div class="slide-card">
                    <h3 class="card-title">{"Host & Availability"}</h3>
                    <div class="field">
                        <label class="field-label">{"Host Listings Count"}</label>
                        <input class="field-input" type="number" min="0"
                            value={props.form.host_listings_count.to_string()}
                            oninput={on_host_listings} />
                    </div>
                    <div class="field">
                        <label class="field-label">{"Availability (out of 365 days)"}</label>
                        <input class="field-input" type="number" min="0" max="365"
                            value={props.form.availability_365.to_string()}
                            oninput={on_availability} />
                    </div>
                    <div class="check-row">
                        <input type="checkbox" id="popular-host"
                            checked={props.form.is_popular_host}
                            onchange={on_popular_host} />
                        <label for="popular-host">{"Is a Popular Host (10+ listings)"}</label>
                    </div>
                    <button class="predict-button" onclick={on_predict}>
                        {"🧠 Predict Price"}
                    </button>
                    <button class="reset-button" onclick={on_reset}>
                        {"Reset to Defaults"}
                    </button>
                    {
                        if let Some(price) = props.prediction {
                            html! {
                                <div class="prediction-result">
                                    <h4>{"Predicted Price"}</h4>
                                    <div class="prediction-price">
                                        <AnimatedCounter end={f64::from(price)}
                                            duration={1000.0} prefix="$" />
                                    </div>
                                    <p>{"per night"}</p>
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        </section>
    }
}
