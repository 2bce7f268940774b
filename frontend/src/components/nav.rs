use yew::prelude::*;

use crate::config;
use crate::view::{MenuState, ViewState};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub view: ViewState,
    pub header_ref: NodeRef,
    /// Receives the clicked link's `href`.
    pub on_navigate: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { view, header_ref, on_navigate } = props;
    let menu = use_state(MenuState::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    let link = |id: &'static str, label: &'static str| {
        let href = format!("#{}", id);
        let onclick = {
            let menu = menu.clone();
            let on_navigate = on_navigate.clone();
            let href = href.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(href.clone());
                let mut next = *menu;
                if next.close_after_navigation() {
                    menu.set(next);
                }
            })
        };
        html! {
            <a
                href={href}
                data-section={id}
                class={classes!("nav-link", view.is_active(id).then(|| "active"))}
                {onclick}
            >
                {label}
            </a>
        }
    };

    html! {
        <header ref={header_ref.clone()} class="site-header">
            <nav class="nav-content">
                <span class="nav-logo">{"Apex Precision Works"}</span>
                <div class="nav-right">
                    { for config::SECTIONS.iter().map(|(id, label)| link(*id, *label)) }
                </div>
                <button id="menu-button" class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </nav>
            <div id="mobile-menu" class={classes!("mobile-menu", menu.panel_class())}>
                { for config::SECTIONS.iter().map(|(id, label)| link(*id, *label)) }
            </div>
        </header>
    }
}
