//! Tweetscope Desktop — Dioxus-powered faceted search over a tweet corpus.

use dioxus::prelude::*;

mod app;
mod ask_panel;
mod filters;
mod results;
mod state;

use app::App;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tweetscope=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_background_color((18, 16, 14, 255))
                    .with_disable_context_menu(true)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Tweet Explorer")
                            .with_inner_size(LogicalSize::new(1380.0, 900.0))
                            .with_min_inner_size(LogicalSize::new(900.0, 560.0))
                            .with_resizable(true)
                            .with_decorations(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
