//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, navigation::Navigation, notification_stack::NotificationStack};
use crate::pages::{
    about::AboutPage, analysis_result::AnalysisResultPage, analyze::AnalyzePage, contact::ContactPage,
    demo::DemoPage, gemma::GemmaPage, home::HomePage, not_found::NotFoundPage, product::ProductPage,
    technology::TechnologyPage,
};
use crate::state::{notifications::NotificationsState, ui::UiState};
use crate::util::{bridge, notify::Notifier, viewport};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="AI-powered thermal monitoring for neonatal care."/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared UI and notification state, installs the browser-side
/// listeners once, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let notifier = Notifier::new(RwSignal::new(NotificationsState::default()));

    provide_context(ui);
    provide_context(notifier);

    Effect::new(move |_| {
        bridge::install(notifier);
        viewport::install(ui);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/thermovision.css"/>
        <Title text="ThermoVision AI"/>

        <Router>
            <Navigation/>
            <main class="main-content">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("technology") view=TechnologyPage/>
                    <Route path=StaticSegment("product") view=ProductPage/>
                    <Route path=StaticSegment("gemma") view=GemmaPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("demo") view=DemoPage/>
                    <Route path=StaticSegment("analyze") view=AnalyzePage/>
                    <Route path=(StaticSegment("analyze"), ParamSegment("id")) view=AnalysisResultPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
        <NotificationStack/>
    }
}
