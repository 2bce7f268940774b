use yew::prelude::*;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::components::fade_in::FadeIn;
use crate::components::insights_panel::InsightsPanel;
use crate::components::nav::Nav;
use crate::config;
use crate::view::{scroll_top_below_header, ViewState};

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Smooth-scrolls so section `id` starts right under the fixed header.
fn scroll_to_section(id: &str, header_ref: &NodeRef) {
    let Some(window) = window() else {
        return;
    };
    let Some(section) = window.document().and_then(|doc| doc.get_element_by_id(id)) else {
        return;
    };

    let header_height = header_ref
        .cast::<HtmlElement>()
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);
    let top = scroll_top_below_header(
        section.get_bounding_client_rect().top(),
        window.scroll_y().unwrap_or(0.0),
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn section_body(id: &str) -> Html {
    match id {
        "home" => html! {
            <div class="hero">
                <FadeIn>
                    <h1>{"Precision Parts, Delivered on Spec"}</h1>
                    <p class="hero-subtitle">
                        {"CNC machining and VMC production for components where every micron counts."}
                    </p>
                </FadeIn>
            </div>
        },
        "services" => html! {
            <>
                <h2>{"What We Machine"}</h2>
                <div class="features-grid">
                    <FadeIn class={classes!("feature-item")}>
                        <h3>{"CNC Turning"}</h3>
                        <p>{"Shafts, bushings and fittings turned to tight tolerances in steel, brass and aluminium."}</p>
                    </FadeIn>
                    <FadeIn class={classes!("feature-item")}>
                        <h3>{"VMC Milling"}</h3>
                        <p>{"Multi-face vertical machining for housings, brackets and fixtures."}</p>
                    </FadeIn>
                    <FadeIn class={classes!("feature-item")}>
                        <h3>{"Inspection"}</h3>
                        <p>{"CMM reports and first-article inspection shipped with every batch."}</p>
                    </FadeIn>
                </div>
            </>
        },
        "about" => html! {
            <FadeIn>
                <h2>{"About Us"}</h2>
                <p>{"A family-run machine shop that has grown from two lathes into a full production floor, still checking every part by hand before it leaves."}</p>
            </FadeIn>
        },
        "insights" => html! {
            <>
                <FadeIn>
                    <h2>{"Industry Insights"}</h2>
                    <p>{"Tell us your industry and get a short overview of how precision manufacturing shapes it."}</p>
                </FadeIn>
                <InsightsPanel />
            </>
        },
        "contact" => html! {
            <FadeIn>
                <h2>{"Contact"}</h2>
                <p>{"Send drawings and quantities to "}<a href="mailto:quotes@apexprecision.example">{"quotes@apexprecision.example"}</a></p>
            </FadeIn>
        },
        _ => html! {},
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let header_ref = use_node_ref();
    let view = use_state(|| {
        ViewState::from_hash(config::SECTIONS.iter().map(|(id, _)| *id), &current_hash())
    });

    let on_navigate = {
        let view = view.clone();
        Callback::from(move |href: String| {
            let mut next = (*view).clone();
            next.navigate(&href);
            view.set(next);
        })
    };

    // Scroll once the clicked section has been rendered visible.
    {
        let header_ref = header_ref.clone();
        let (target, seq) = view.scroll_request();
        let target = target.map(str::to_string);
        use_effect_with_deps(
            move |(target, _seq)| {
                if let Some(target) = target {
                    scroll_to_section(target, &header_ref);
                }
                || ()
            },
            (target, seq),
        );
    }

    html! {
        <div class="landing-page">
            <Nav view={(*view).clone()} header_ref={header_ref.clone()} {on_navigate} />
            <main>
                {
                    for view.sections().map(|id| html! {
                        <section
                            key={id.to_string()}
                            id={id.to_string()}
                            class={classes!("section", view.is_active(id).then(|| "active"))}
                        >
                            { section_body(id) }
                        </section>
                    })
                }
            </main>
        </div>
    }
}
