//! Technology overview: feature extraction, model and evaluation.

use leptos::prelude::*;

const PIPELINE: [(&str, &str); 4] = [
    (
        "Thermal Image Analysis",
        "Each frame is converted to HSV colour space. Hue, saturation and value are summarised in 16-bin histograms.",
    ),
    (
        "HSV + LBP Feature Extraction",
        "Uniform local binary patterns capture skin-surface texture, giving a compact 58-value signature per image.",
    ),
    (
        "Machine Learning",
        "A nearest-centroid classifier trained on labelled neonatal scans separates normal, hypothermic and hyperthermic patterns.",
    ),
    (
        "Real-time Processing",
        "Feature extraction and classification complete in under two seconds on commodity hardware.",
    ),
];

#[component]
pub fn TechnologyPage() -> impl IntoView {
    view! {
        <div class="page technology-page">
            <header class="header page-header">
                <div class="container">
                    <h1>"Our Technology"</h1>
                    <p>"Computer vision tuned for the thermal signatures of newborns."</p>
                </div>
            </header>
            <section class="container tech-pipeline">
                {PIPELINE
                    .iter()
                    .enumerate()
                    .map(|(i, (title, body))| {
                        view! {
                            <div class="tech-step">
                                <span class="tech-step__index">{i + 1}</span>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
            <section class="container tech-evaluation">
                <h2>"Confusion Matrix"</h2>
                <p>
                    "Every model release is evaluated on a held-out test split. The confusion matrix shows how "
                    "often each true condition is predicted as each class, so recall on the at-risk classes is "
                    "tracked release over release."
                </p>
            </section>
        </div>
    }
}
