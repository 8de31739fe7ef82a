//! Result cards for a finished analysis.

use leptos::prelude::*;
use vision::AnalysisReport;
use vision::guidance::considerations_title;

#[component]
pub fn ReportView(report: AnalysisReport) -> impl IntoView {
    let diagnosis = report.diagnosis;
    let card_class = format!("result-card diagnosis-card diagnosis-card--{}", diagnosis.css_class());
    let embed_url = report.video_embed_url();
    let considerations = (!report.considerations.is_empty()).then(|| {
        let title = considerations_title(diagnosis).unwrap_or("Condition Considerations");
        let items = report.considerations.clone();
        view! {
            <div class="result-card considerations-card">
                <h3>{title}</h3>
                <ul>{items.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}</ul>
            </div>
        }
    });

    view! {
        <section class="results-section">
            <div class=card_class>
                <h2>"Diagnosis"</h2>
                <p class="diagnosis-label">{diagnosis.label()}</p>
                <p class="diagnosis-file">{format!("Image: {}", report.file_name)}</p>
            </div>
            <div class="result-card nurse-plan-card">
                <h3>"Clinical Action Plan"</h3>
                <ol>{report.nurse_plan.into_iter().map(|step| view! { <li>{step}</li> }).collect_view()}</ol>
            </div>
            <div class="result-card parent-message-card">
                <h3>"Message for Parents"</h3>
                <p lang="hi">{report.parent_message}</p>
            </div>
            {considerations}
            <div class="video-section">
                <h3>"Instructional Video"</h3>
                <div class="video-container">
                    <iframe
                        src=embed_url
                        title="Instructional video"
                        allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                        allowfullscreen=true
                    ></iframe>
                </div>
            </div>
            <div class="result-actions">
                <a href="/analyze" class="btn btn-secondary">"Analyze Another Image"</a>
            </div>
        </section>
    }
}
