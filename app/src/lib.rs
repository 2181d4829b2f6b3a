// Core application modules and components
use crate::{
    components::{
        call_to_action,
        error_template::{self, AppError},
    },
    navigation::{RouterNavigator, SharedNavigator},
    view_state::ViewState,
};
use leptos::{
    html::{body, head, html, meta},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod components;
pub mod navigation;
pub mod style;
pub mod view_state;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/invitation.css")
                    .build(),
            ),
            Title(
                TitleProps::builder()
                    .text("Wedding Invitations \u{2013} Design Yours Online")
                    .build(),
            ),
        )),
        body().class("bg-[#fffaf7]").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="overflow-auto min-h-screen text-rose-950 font-serif">
                <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto max-w-4xl md:px-0">
                    {routes}
                </main>
            </div>
        </Router>
    }
}

// Runs inside `Router` so the navigator can reach the router's context.
fn routes() -> impl IntoView {
    let navigator = RouterNavigator::shared();
    let home_navigator = navigator.clone();

    view! {
        <FlatRoutes fallback=move || error_template::component(AppError::NotFound, navigator.clone())>
            <Route path=StaticSegment("") view=move || home(home_navigator.clone())/>
        </FlatRoutes>
    }
}

fn home(navigator: SharedNavigator) -> impl IntoView {
    let cta_navigator = navigator.clone();
    view_state::component(ViewState::Ready, navigator, move || {
        call_to_action::component(cta_navigator)
    })
}
