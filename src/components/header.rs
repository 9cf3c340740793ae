//! Header Component
//!
//! Fixed page header with brand, anchor nav links and the mobile menu
//! button. Visibility reacts to the scroll effect; the nav panel and the
//! button icon react to the menu flag.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::listeners;

/// In-page anchor: smooth-scrolls instead of jumping, and closes the
/// mobile panel after navigating. Every `#` link in the header renders
/// through this, the logo included, so none escapes the behavior.
#[component]
fn AnchorLink(href: &'static str, label: &'static str) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        listeners::smooth_scroll_to(href);
        ctx.close_menu();
    };

    view! {
        <a href=href on:click=on_click>{label}</a>
    }
}

/// Nav panel entry wrapping an anchor link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li><AnchorLink href=href label=label/></li>
    }
}

/// Page header with hide-on-scroll behavior
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let header_style = move || {
        if ctx.header_hidden.get() {
            "transform: translateY(-100px);"
        } else {
            "transform: translateY(0);"
        }
    };

    let nav_class = move || {
        if ctx.menu_open.get() { "nav-links active" } else { "nav-links" }
    };

    let icon_class = move || {
        if ctx.menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
    };

    view! {
        <header style=header_style>
            <nav>
                <div class="logo">
                    <AnchorLink href="#home" label="Popy Studio"/>
                </div>

                <ul class=nav_class>
                    <NavLink href="#home" label="Home"/>
                    <NavLink href="#about" label="About"/>
                    <NavLink href="#projects" label="Articles"/>
                    <NavLink href="#contact" label="Contact"/>
                </ul>

                <button class="mobile-menu-btn" on:click=move |_| ctx.toggle_menu()>
                    <i class=icon_class></i>
                </button>
            </nav>
        </header>
    }
}
