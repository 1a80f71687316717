//! Per-element English↔Korean hover toggle.
//!
//! Every labeled element carries both strings; hover or keyboard focus shows
//! the Korean one with a short crossfade. Each instance owns its own display
//! flag, nothing is shared between elements.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long the outgoing string fades before the swap, matching the
/// `bilingual` CSS transition.
const SWAP_DELAY_MS: u32 = 150;

/// Which of the two fixed strings is displayed.
pub fn display_text<'a>(primary: &'a str, secondary: &'a str, show_secondary: bool) -> &'a str {
    if show_secondary {
        secondary
    } else {
        primary
    }
}

#[derive(Properties, PartialEq)]
pub struct BilingualProps {
    pub en: AttrValue,
    pub ko: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Bilingual)]
pub fn bilingual(props: &BilingualProps) -> Html {
    let hovered = use_state_eq(|| false);
    let showing_ko = use_state_eq(|| false);

    // Fade the current string out first, swap once it is gone. Dropping the
    // timeout cancels a pending swap when the hover flips back mid-fade.
    {
        let showing_ko = showing_ko.clone();
        use_effect_with_deps(
            move |&target: &bool| {
                let timeout = Timeout::new(SWAP_DELAY_MS, move || showing_ko.set(target));
                move || drop(timeout)
            },
            *hovered,
        );
    }

    let enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let focus = {
        let hovered = hovered.clone();
        Callback::from(move |_: FocusEvent| hovered.set(true))
    };
    let blur = {
        let hovered = hovered.clone();
        Callback::from(move |_: FocusEvent| hovered.set(false))
    };

    let fading = *hovered != *showing_ko;

    html! {
        <span
            class={classes!("bilingual", fading.then_some("fading"), props.class.clone())}
            tabindex="0"
            onmouseenter={enter}
            onmouseleave={leave}
            onfocus={focus}
            onblur={blur}
        >
            { display_text(&props.en, &props.ko, *showing_ko) }
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_string_shows_by_default() {
        assert_eq!(display_text("Explore", "상세보기", false), "Explore");
    }

    #[test]
    fn secondary_string_shows_while_hovered_and_reverts() {
        assert_eq!(display_text("Explore", "상세보기", true), "상세보기");
        assert_eq!(display_text("Explore", "상세보기", false), "Explore");
    }
}
