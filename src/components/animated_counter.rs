//! A number that counts up from zero with a quartic ease-out, driven
//! by `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Quartic ease-out; fast start, long settle.
fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

/// One counting run from zero toward `end` over `duration` ms.
///
/// The first timestamp fed to [`CounterTimeline::advance`] pins the
/// start of the run. The shown value is the eased fraction of `end`,
/// floored, so a fractional target like 87.3 rests at 87.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterTimeline {
    start: Option<f64>,
    end: f64,
    duration: f64,
}

impl CounterTimeline {
    pub fn new(end: f64, duration: f64) -> Self {
        Self {
            start: None,
            end,
            duration,
        }
    }

    /// Advances to `now`, returning the value to show and whether the
    /// run has finished.
    pub fn advance(&mut self, now: f64) -> (i64, bool) {
        let start = *self.start.get_or_insert(now);
        let progress = if self.duration > 0.0 {
            ((now - start) / self.duration).min(1.0)
        } else {
            1.0
        };
        let shown = (self.end * ease_out_quart(progress)).floor() as i64;
        (shown, progress >= 1.0)
    }
}

/// Digit grouping for the big numbers, 48895 -> "48,895".
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: f64,
    /// Milliseconds from zero to rest.
    #[prop_or(2000.0)]
    pub duration: f64,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let shown = use_state(|| 0i64);

    // Restart from zero whenever the target or the pace changes. The
    // pending frame and the closure slot are torn down on unmount so a
    // late frame can never write into a dead component.
    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |(end, duration): &(f64, f64)| {
                shown.set(0);
                let mut timeline = CounterTimeline::new(*end, *duration);

                let frame = Rc::new(Cell::new(None::<i32>));
                let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));

                {
                    let frame = frame.clone();
                    let tick_slot = tick.clone();
                    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
                        let (value, done) = timeline.advance(now);
                        shown.set(value);
                        if done {
                            return;
                        }
                        if let Some(window) = web_sys::window() {
                            if let Some(callback) = tick_slot.borrow().as_ref() {
                                if let Ok(id) = window
                                    .request_animation_frame(callback.as_ref().unchecked_ref())
                                {
                                    frame.set(Some(id));
                                }
                            }
                        }
                    })
                        as Box<dyn FnMut(f64)>));
                }

                if let Some(window) = web_sys::window() {
                    if let Some(callback) = tick.borrow().as_ref() {
                        if let Ok(id) =
                            window.request_animation_frame(callback.as_ref().unchecked_ref())
                        {
                            frame.set(Some(id));
                        }
                    }
                }

                move || {
                    if let (Some(window), Some(id)) = (web_sys::window(), frame.get()) {
                        let _ = window.cancel_animation_frame(id);
                    }
                    tick.borrow_mut().take();
                }
            },
            (props.end, props.duration),
        );
    }

    html! {
        <span class="animated-counter">
            { props.prefix.clone() }{ format_grouped(*shown) }{ props.suffix.clone() }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_quart_hits_both_ends() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_timeline_counts_monotonically_to_the_target() {
        let mut timeline = CounterTimeline::new(48_895.0, 2_000.0);
        let mut last = -1;
        for step in 0..=20 {
            let (value, _) = timeline.advance(1_000.0 + f64::from(step) * 100.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 48_895);
    }

    #[test]
    fn test_timeline_reports_done_exactly_at_duration() {
        let mut timeline = CounterTimeline::new(100.0, 1_000.0);
        assert_eq!(timeline.advance(0.0), (0, false));
        let (value, done) = timeline.advance(999.0);
        assert!(!done);
        assert!(value < 100);
        assert_eq!(timeline.advance(1_000.0), (100, true));
        assert_eq!(timeline.advance(5_000.0), (100, true));
    }

    #[test]
    fn test_fractional_targets_floor() {
        let mut timeline = CounterTimeline::new(87.3, 10.0);
        assert_eq!(timeline.advance(0.0), (0, false));
        assert_eq!(timeline.advance(10.0), (87, true));
    }

    #[test]
    fn test_zero_target_holds_zero_for_the_whole_run() {
        let mut timeline = CounterTimeline::new(0.0, 500.0);
        assert_eq!(timeline.advance(100.0), (0, false));
        assert_eq!(timeline.advance(350.0), (0, false));
        assert_eq!(timeline.advance(600.0), (0, true));
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(48_895), "48,895");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
        assert_eq!(format_grouped(-4_200), "-4,200");
    }
}
