//! Studio Landing App
//!
//! Root component: owns the app-wide signals, starts the initial feed
//! fetch, installs the global listeners and the 30-minute refresh timer.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::{ArticlesSection, Header};
use crate::context::{AppContext, FeedState};
use crate::feed::REFRESH_INTERVAL_MS;
use crate::listeners;

#[component]
pub fn App() -> impl IntoView {
    // State
    let menu_open = signal(false);
    let feed_state = signal(FeedState::Loading);
    let header_hidden = signal(false);
    let last_scroll = signal(0.0f64);
    let fetch_in_flight = signal(false);

    let ctx = AppContext::new(menu_open, feed_state, header_hidden, last_scroll, fetch_in_flight);

    // Provide context to all children
    provide_context(ctx);

    // Global listeners (page-lifetime, never unbound)
    listeners::bind_header_scroll(ctx);
    listeners::bind_menu_outside_click(ctx);

    // Fetch feed on mount
    Effect::new(move |_| {
        ctx.refresh();
    });

    // Periodic refresh; the interval is never cleared
    Interval::new(REFRESH_INTERVAL_MS, move || ctx.refresh()).forget();

    view! {
        <Header/>

        <main>
            <section id="home" class="hero">
                <h1>"Popy Studio"</h1>
                <p>"Stories, projects and experiments from the studio."</p>
            </section>

            <section id="about" class="about">
                <h2>"About"</h2>
                <p>
                    "A small independent studio writing about what it builds. "
                    "The latest posts below come straight from the blog feed."
                </p>
            </section>

            <ArticlesSection/>

            <section id="contact" class="contact">
                <h2>"Contact"</h2>
                <p><a href="mailto:hello@popy.studio">"hello@popy.studio"</a></p>
            </section>
        </main>
    }
}
