//! Scroll-tracking decorated backdrop the whole deck sits on.
//!
//! The decoration layer follows half the scroll offset; the blobs,
//! dots and faint lines are placed once per mount, so a remount lays
//! them out differently.

use rand::Rng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::theme;

/// Fraction of the scroll offset the decoration layer follows.
pub const SCROLL_FACTOR: f64 = 0.5;

pub fn layer_offset(scroll_y: f64) -> f64 {
    scroll_y * SCROLL_FACTOR
}

/// Background clutter, positioned in viewport percentages.
#[derive(Clone, Debug, PartialEq)]
pub struct Decorations {
    /// (x, y, radius)
    pub dots: Vec<(f64, f64, f64)>,
    /// (x1, y1, x2, y2)
    pub lines: Vec<(f64, f64, f64, f64)>,
}

pub fn scatter_decorations(rng: &mut impl Rng) -> Decorations {
    let dots = (0..20)
        .map(|_| {
            (
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 3.0 + 1.0,
            )
        })
        .collect();
    let lines = (0..10)
        .map(|_| {
            (
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
                rng.gen::<f64>() * 100.0,
            )
        })
        .collect();
    Decorations { dots, lines }
}

#[derive(Properties, PartialEq)]
pub struct ParallaxBackgroundProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ParallaxBackground)]
pub fn parallax_background(props: &ParallaxBackgroundProps) -> Html {
    let offset = use_state(|| 0.0f64);
    let decorations = use_state(|| scatter_decorations(&mut rand::thread_rng()));

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let scroll_target = window.clone();
                let on_scroll = Closure::wrap(Box::new(move || {
                    let scrolled = scroll_target.scroll_y().unwrap_or(0.0);
                    offset.set(layer_offset(scrolled));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    html! {
        <div class="parallax">
            <style>{r#"
                .parallax {
                    position: relative;
                    overflow: hidden;
                    min-height: 100vh;
                }
                .parallax-layer {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    pointer-events: none;
                }
                .parallax-blob {
                    position: absolute;
                    border-radius: 50%;
                    animation: parallax-float 6s ease-in-out infinite;
                }
                .parallax-blob.one {
                    top: 80px;
                    left: 40px;
                    width: 128px;
                    height: 128px;
                    background: linear-gradient(135deg, hsl(217, 91%, 60%), hsl(189, 94%, 50%));
                    filter: blur(24px);
                }
                .parallax-blob.two {
                    top: 160px;
                    right: 80px;
                    width: 96px;
                    height: 96px;
                    background: linear-gradient(135deg, hsl(262, 83%, 66%), hsl(217, 91%, 60%));
                    filter: blur(16px);
                    animation-delay: 1s;
                }
                .parallax-blob.three {
                    bottom: 80px;
                    left: 33%;
                    width: 160px;
                    height: 160px;
                    background: linear-gradient(135deg, hsl(189, 94%, 50%), hsl(262, 83%, 66%));
                    filter: blur(40px);
                    animation-delay: 2s;
                }
                .parallax-svg {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    opacity: 0.1;
                }
                .parallax-content {
                    position: relative;
                    z-index: 10;
                }
                @keyframes parallax-float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
            "#}</style>
            <div class="parallax-layer" style={format!("transform: translateY({}px);", *offset)}>
                <div class="parallax-blob one"></div>
                <div class="parallax-blob two"></div>
                <div class="parallax-blob three"></div>
                <svg class="parallax-svg">
                    { for decorations.dots.iter().map(|(x, y, r)| html! {
                        <circle cx={format!("{x:.2}%")} cy={format!("{y:.2}%")}
                            r={format!("{r:.2}")} fill={theme::PRIMARY} />
                    }) }
                    { for decorations.lines.iter().map(|(x1, y1, x2, y2)| html! {
                        <line x1={format!("{x1:.2}%")} y1={format!("{y1:.2}%")}
                            x2={format!("{x2:.2}%")} y2={format!("{y2:.2}%")}
                            stroke={theme::PRIMARY} stroke-width="0.5" opacity="0.3" />
                    }) }
                </svg>
            </div>
            <div class="parallax-content">
                { props.children.clone() }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_layer_tracks_half_the_scroll() {
        assert_eq!(layer_offset(0.0), 0.0);
        assert_eq!(layer_offset(200.0), 100.0);
        assert_eq!(layer_offset(33.0), 16.5);
    }

    #[test]
    fn test_decorations_fill_the_viewport_box() {
        let mut rng = SmallRng::seed_from_u64(8);
        let decorations = scatter_decorations(&mut rng);
        assert_eq!(decorations.dots.len(), 20);
        assert_eq!(decorations.lines.len(), 10);
        for (x, y, r) in &decorations.dots {
            assert!((0.0..100.0).contains(x));
            assert!((0.0..100.0).contains(y));
            assert!((1.0..4.0).contains(r));
        }
        for (x1, y1, x2, y2) in &decorations.lines {
            for coord in [x1, y1, x2, y2] {
                assert!((0.0..100.0).contains(coord));
            }
        }
    }
}
