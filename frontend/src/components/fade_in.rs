use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Watches `element` and reports every change in its on-screen state. The
/// returned closure has to outlive the observer.
fn observe_visibility<F>(element: &Element, mut on_change: F) -> Option<(IntersectionObserver, EntriesCallback)>
where
    F: FnMut(bool) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            on_change(entry.is_intersecting());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::FADE_IN_THRESHOLD));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, callback))
        }
        Err(err) => {
            log::error!("Failed to create fade-in observer: {:?}", err);
            None
        }
    }
}

/// Wrapper that gains the `visible` class while on screen and loses it
/// again when scrolled away, so the entrance animation replays.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let watch = node
                    .cast::<Element>()
                    .and_then(|element| observe_visibility(&element, move |is_visible| visible.set(is_visible)));

                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!("fade-in", props.class.clone(), (*visible).then(|| "visible"))}>
            { for props.children.iter() }
        </div>
    }
}
