//! Scroll progress tracking for the hero's scroll-driven stages.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

/// Normalizes a region's position against the viewport: 0 when the region's
/// top aligns with the viewport top, 1 when its bottom aligns with the
/// viewport bottom. `top` is the region's bounding-rect top relative to the
/// viewport, so it goes negative as the page scrolls past the region.
pub fn region_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let scrollable = height - viewport;
    if scrollable <= 0.0 {
        // Region no taller than the viewport: it is either ahead or behind.
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    (-top / scrollable).clamp(0.0, 1.0)
}

/// Tracks scroll progress through the element behind `target`.
///
/// Remeasures synchronously on every window scroll and resize event. While
/// the element is not mounted the last value (initially 0) is kept, so early
/// renders never panic.
#[hook]
pub fn use_scroll_progress(target: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let measure = Closure::wrap(Box::new(move || {
                    let Some(element) = target.cast::<Element>() else {
                        return;
                    };
                    let rect = element.get_bounding_client_rect();
                    let viewport = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|height| height.as_f64())
                        .unwrap_or(0.0);
                    progress.set(region_progress(rect.top(), rect.height(), viewport));
                }) as Box<dyn FnMut()>);

                for event in ["scroll", "resize"] {
                    window
                        .add_event_listener_with_callback(event, measure.as_ref().unchecked_ref())
                        .unwrap();
                }

                // Measure once up front so a reloaded mid-page scroll position
                // styles the first frame correctly.
                let _ = measure
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    for event in ["scroll", "resize"] {
                        let _ = window.remove_event_listener_with_callback(
                            event,
                            measure.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_aligned_region_reads_zero() {
        assert_eq!(region_progress(0.0, 4000.0, 1000.0), 0.0);
    }

    #[test]
    fn bottom_aligned_region_reads_one() {
        // Scrolled until the region bottom meets the viewport bottom.
        assert_eq!(region_progress(-3000.0, 4000.0, 1000.0), 1.0);
    }

    #[test]
    fn midway_is_proportional() {
        assert!((region_progress(-1500.0, 4000.0, 1000.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn progress_clamps_beyond_the_region() {
        assert_eq!(region_progress(250.0, 4000.0, 1000.0), 0.0);
        assert_eq!(region_progress(-9000.0, 4000.0, 1000.0), 1.0);
    }

    #[test]
    fn short_region_resolves_by_side() {
        assert_eq!(region_progress(100.0, 500.0, 1000.0), 0.0);
        assert_eq!(region_progress(-1.0, 500.0, 1000.0), 1.0);
    }
}
