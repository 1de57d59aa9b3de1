use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::components::visibility::SectionObserver;

/// Visibility state of one section. Starts hidden and flips to visible
/// on the first qualifying intersection sample; nothing flips it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Visible,
}

impl RevealState {
    pub fn new() -> Self {
        RevealState::Hidden
    }

    /// Feeds one "is intersecting" sample. Returns true only for the
    /// sample that causes the hidden-to-visible transition, so a caller
    /// reacting to the return value acts at most once.
    pub fn on_sample(&mut self, intersecting: bool) -> bool {
        if intersecting && *self == RevealState::Hidden {
            *self = RevealState::Visible;
            true
        } else {
            false
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// In-page anchor identifier for the section element.
    pub id: String,
    pub title: String,
    /// Fraction of the section's area that must be inside the viewport
    /// before the entrance animation fires.
    #[prop_or(0.1)]
    pub threshold: f64,
    #[prop_or_default]
    pub children: Children,
}

/// Titled section that fades and slides in the first time it scrolls
/// into view. Each instance owns its own reveal state; once revealed it
/// stops observing and stays visible for good. If the host offers no way
/// to observe visibility, the section renders revealed from the start.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(RevealState::new);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        let id = props.id.clone();
        let threshold = props.threshold;
        use_effect_with_deps(
            move |_| {
                let on_sample = {
                    let revealed = revealed.clone();
                    move |intersecting: bool| {
                        let mut state = *revealed;
                        if state.on_sample(intersecting) {
                            revealed.set(state);
                        }
                    }
                };

                let mut observer = None;
                match node_ref.cast::<Element>() {
                    Some(element) => {
                        let sample = on_sample.clone();
                        match SectionObserver::start(&element, threshold, move || sample(true)) {
                            Ok(started) => observer = Some(started),
                            Err(_) => {
                                warn!("no intersection observer support, revealing #{} immediately", id);
                                on_sample(true);
                            }
                        }
                    }
                    None => on_sample(true),
                }

                move || {
                    if let Some(observer) = observer {
                        observer.stop();
                    }
                }
            },
            (),
        );
    }

    html! {
        <section
            id={props.id.clone()}
            ref={node_ref}
            class={classes!("reveal-section", revealed.is_visible().then(|| "revealed"))}
        >
            <h2 class="section-heading">{ props.title.clone() }</h2>
            { for props.children.iter() }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::RevealState;

    #[test]
    fn starts_hidden() {
        assert!(!RevealState::new().is_visible());
    }

    #[test]
    fn stays_hidden_while_off_screen() {
        let mut state = RevealState::new();
        for _ in 0..5 {
            assert!(!state.on_sample(false));
        }
        assert!(!state.is_visible());
    }

    #[test]
    fn reveals_exactly_once() {
        let mut state = RevealState::new();
        assert!(!state.on_sample(false));
        assert!(state.on_sample(true));
        assert!(state.is_visible());
        // Further qualifying samples are no-ops, not repeat triggers.
        assert!(!state.on_sample(true));
        assert!(state.is_visible());
    }

    #[test]
    fn already_on_screen_reveals_on_first_sample() {
        let mut state = RevealState::new();
        assert!(state.on_sample(true));
        assert!(state.is_visible());
    }

    #[test]
    fn never_reverts_after_reveal() {
        let mut state = RevealState::new();
        state.on_sample(true);
        // Scrolling back out of view must not re-hide the section.
        for _ in 0..5 {
            assert!(!state.on_sample(false));
            assert!(state.is_visible());
        }
    }
}
