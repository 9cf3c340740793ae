//! Articles Section Component
//!
//! Renders the "Latest Articles" grid from the feed state signal:
//! three placeholder cards while loading, up to three article cards on
//! success, or a single error card with a retry button.

use leptos::prelude::*;

use crate::article::{ArticleView, PLACEHOLDER_IMAGE};
use crate::context::{AppContext, FeedState};

/// Shimmer placeholder shown while a fetch is pending
#[component]
fn LoadingCard() -> impl IntoView {
    view! {
        <div class="project-card loading">
            <div class="loading-placeholder">
                <div class="loading-image"></div>
                <div class="loading-title"></div>
                <div class="loading-text"></div>
            </div>
        </div>
    }
}

/// Error card with the failure reason and a manual retry button
#[component]
fn ErrorCard(message: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="project-card error">
            <div class="error-message">
                <i class="fas fa-exclamation-circle"></i>
                <p>{message}</p>
                <button class="retry-button" on:click=move |_| ctx.refresh()>
                    <i class="fas fa-sync-alt"></i>
                    " Retry"
                </button>
            </div>
        </div>
    }
}

/// One rendered feed entry
#[component]
fn ArticleCard(article: ArticleView) -> impl IntoView {
    // Swap in the placeholder if the resolved image fails to load
    let (image_src, set_image_src) = signal(article.image_url);
    let on_image_error = move |_| set_image_src.set(PLACEHOLDER_IMAGE.to_string());

    let alt_text = article.title.clone();

    view! {
        <div class="project-card">
            <div class="card-image">
                <img src=move || image_src.get() alt=alt_text on:error=on_image_error/>
            </div>
            <h3>{article.title}</h3>
            <p>{article.summary}</p>
            <a href=article.link class="read-more" target="_blank">
                "Read More "
                <i class="fas fa-arrow-right"></i>
            </a>
        </div>
    }
}

/// Articles section: grid plus, after a successful render, a single
/// refresh button. Both live in the `Loaded` branch, so repeated renders
/// replace them instead of accumulating controls.
#[component]
pub fn ArticlesSection() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <section id="projects" class="projects">
            <h2>"Latest Articles"</h2>

            {move || match ctx.feed_state.get() {
                FeedState::Loading => view! {
                    <div class="project-grid">
                        {(0..3).map(|_| view! { <LoadingCard/> }).collect_view()}
                    </div>
                }.into_any(),

                FeedState::Loaded(articles) => view! {
                    <div class="project-grid">
                        {articles
                            .into_iter()
                            .map(|article| view! { <ArticleCard article=article/> })
                            .collect_view()}
                    </div>
                    <button class="refresh-button" on:click=move |_| ctx.refresh()>
                        <i class="fas fa-sync-alt"></i>
                        " Refresh Articles"
                    </button>
                }.into_any(),

                FeedState::Failed(message) => view! {
                    <div class="project-grid">
                        <ErrorCard message=message/>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}
