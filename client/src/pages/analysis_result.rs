//! Report page for `/analyze/:id`, the redirect target of the upload form.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use vision::AnalysisReport;

use crate::components::report_view::ReportView;
use crate::net::api::ApiError;

#[component]
pub fn AnalysisResultPage() -> impl IntoView {
    let params = use_params_map();
    let report = RwSignal::new(None::<Result<AnalysisReport, ApiError>>);

    Effect::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        report.set(None);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_report(&id).await;
            if let Err(e) = &result {
                log::warn!("report {id} unavailable: {e}");
            }
            report.set(Some(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    Effect::new(move |_| {
        if report.with(|r| matches!(r, Some(Ok(_)))) {
            #[cfg(feature = "hydrate")]
            request_animation_frame(crate::util::reveal::observe_all);
        }
    });

    view! {
        <div class="page analyze-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"Analysis Results"</h1>
                </div>
            </header>
            <div class="container">
                {move || match report.get() {
                    None => view! { <div class="loading loading--inline"><div class="spinner"></div><p>"Loading report..."</p></div> }.into_any(),
                    Some(Ok(report)) => view! { <ReportView report=report /> }.into_any(),
                    Some(Err(e)) => {
                        view! {
                            <div class="result-card diagnosis-card diagnosis-card--error">
                                <p>{e.to_string()}</p>
                                <a href="/analyze" class="btn btn-primary">"Upload an Image"</a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
