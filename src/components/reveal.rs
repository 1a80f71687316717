//! One-shot scroll-into-view reveal wrapper for page sections.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::prelude::*;

/// A section reveals once its top rises above this fraction of the viewport.
const REVEAL_THRESHOLD: f64 = 0.9;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Wraps its children in a block that fades and rises into place the first
/// time it scrolls into view, then stays put.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible_setter = visible.clone();
        use_effect_with_deps(
            move |&shown: &bool| {
                if shown {
                    // Already revealed, no listener to keep.
                    return Box::new(|| ()) as Box<dyn FnOnce()>;
                }

                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let check = Closure::wrap(Box::new(move || {
                    let Some(element) = node.cast::<Element>() else {
                        return;
                    };
                    let viewport = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|height| height.as_f64())
                        .unwrap_or(0.0);
                    if element.get_bounding_client_rect().top() < viewport * REVEAL_THRESHOLD {
                        visible_setter.set(true);
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", check.as_ref().unchecked_ref())
                    .unwrap();

                // Sections already in view on mount reveal immediately.
                let _ = check
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                Box::new(move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        check.as_ref().unchecked_ref(),
                    );
                }) as Box<dyn FnOnce()>
            },
            *visible,
        );
    }

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", (*visible).then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}
