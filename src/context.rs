//! Application Context
//!
//! Shared state provided via Leptos Context API. Holds the mobile menu
//! flag, the feed view state and the scroll-tracking fields as explicit
//! signals instead of free-floating globals.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::article::{self, ArticleView};
use crate::feed;
use crate::listeners::header_hidden;

/// Feed container view state. The articles section renders from this
/// signal, so it is always in exactly one of the three states.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedState {
    Loading,
    Loaded(Vec<ArticleView>),
    Failed(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Mobile nav panel visibility - read
    pub menu_open: ReadSignal<bool>,
    /// Mobile nav panel visibility - write
    set_menu_open: WriteSignal<bool>,
    /// Feed container state - read
    pub feed_state: ReadSignal<FeedState>,
    /// Feed container state - write
    set_feed_state: WriteSignal<FeedState>,
    /// Header hidden by the scroll effect - read
    pub header_hidden: ReadSignal<bool>,
    /// Header hidden by the scroll effect - write
    set_header_hidden: WriteSignal<bool>,
    /// Last known vertical scroll offset
    last_scroll: ReadSignal<f64>,
    set_last_scroll: WriteSignal<f64>,
    /// Fetch-in-flight guard: overlapping refreshes are ignored
    fetch_in_flight: ReadSignal<bool>,
    set_fetch_in_flight: WriteSignal<bool>,
}

impl AppContext {
    pub fn new(
        menu_open: (ReadSignal<bool>, WriteSignal<bool>),
        feed_state: (ReadSignal<FeedState>, WriteSignal<FeedState>),
        header_hidden: (ReadSignal<bool>, WriteSignal<bool>),
        last_scroll: (ReadSignal<f64>, WriteSignal<f64>),
        fetch_in_flight: (ReadSignal<bool>, WriteSignal<bool>),
    ) -> Self {
        Self {
            menu_open: menu_open.0,
            set_menu_open: menu_open.1,
            feed_state: feed_state.0,
            set_feed_state: feed_state.1,
            header_hidden: header_hidden.0,
            set_header_hidden: header_hidden.1,
            last_scroll: last_scroll.0,
            set_last_scroll: last_scroll.1,
            fetch_in_flight: fetch_in_flight.0,
            set_fetch_in_flight: fetch_in_flight.1,
        }
    }

    /// Toggle the mobile nav panel
    pub fn toggle_menu(&self) {
        self.set_menu_open.update(|open| *open = !*open);
    }

    /// Close the mobile nav panel (outside click, anchor navigation)
    pub fn close_menu(&self) {
        self.set_menu_open.set(false);
    }

    /// Feed one scroll event into the header effect
    pub fn on_scroll(&self, current: f64) {
        let last = self.last_scroll.get_untracked();
        self.set_header_hidden.set(header_hidden(last, current));
        self.set_last_scroll.set(current);
    }

    /// Start a fetch cycle. No-op while a previous fetch is still pending,
    /// so retry clicks and interval ticks never race each other.
    pub fn refresh(&self) {
        if self.fetch_in_flight.get_untracked() {
            return;
        }
        self.set_fetch_in_flight.set(true);
        self.set_feed_state.set(FeedState::Loading);

        let set_feed_state = self.set_feed_state;
        let set_fetch_in_flight = self.set_fetch_in_flight;
        spawn_local(async move {
            web_sys::console::log_1(&format!("[FEED] Fetching {}", feed::FEED_URL).into());
            match feed::fetch_feed().await {
                Ok(items) => {
                    web_sys::console::log_1(&format!("[FEED] Received {} items", items.len()).into());
                    set_feed_state.set(FeedState::Loaded(article::select_articles(&items)));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[FEED] {}", e).into());
                    set_feed_state.set(FeedState::Failed(e.to_string()));
                }
            }
            set_fetch_in_flight.set(false);
        });
    }
}
