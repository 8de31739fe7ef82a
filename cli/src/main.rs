mod dataset;
mod output;

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use vision::model::{CentroidModel, Evaluation, ModelError};
use vision::AnalysisReport;

use crate::dataset::Split;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("dataset directory not found: {0}")]
    MissingDataset(PathBuf),
    #[error("no usable images under {0}")]
    EmptyDataset(PathBuf),
    #[error("io error on {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("feature extraction failed for {path}: {source}")]
    Features { path: PathBuf, source: vision::features::FeatureError },
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "thermo", about = "ThermoVision model training and analysis CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train a centroid model from `<data>/{Hyperthermic,Hypothermic,Normal}/train`.
    Train {
        #[arg(long)]
        data: PathBuf,
        #[arg(long, default_value = "model.json")]
        out: PathBuf,
    },
    /// Score a model against the `test` split.
    Evaluate {
        #[arg(long)]
        data: PathBuf,
        #[arg(long, env = "MODEL_PATH")]
        model: PathBuf,
    },
    /// Classify one image locally.
    Classify {
        image: PathBuf,
        #[arg(long, env = "MODEL_PATH")]
        model: PathBuf,
    },
    /// Upload one image to a running server and print the report.
    Analyze {
        image: PathBuf,
        #[arg(long, env = "THERMO_SERVER_URL", default_value = "http://127.0.0.1:5050")]
        server: String,
        #[arg(long, help = "Print the raw JSON report")]
        json: bool,
    },
    /// Check that a server is up.
    Ping {
        #[arg(long, env = "THERMO_SERVER_URL", default_value = "http://127.0.0.1:5050")]
        server: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Train { data, out } => run_train(&data, &out),
        Command::Evaluate { data, model } => run_evaluate(&data, &model),
        Command::Classify { image, model } => run_classify(&image, &model),
        Command::Analyze { image, server, json } => run_analyze(&image, &server, json).await,
        Command::Ping { server } => run_ping(&server).await,
    }
}

fn run_train(data: &Path, out: &Path) -> Result<(), CliError> {
    let samples = dataset::load_samples(data, Split::Train)?;
    let model = CentroidModel::train(&samples)?;
    model.save(out)?;
    for class in &model.classes {
        println!("{:<13} {} samples", class.diagnosis.label(), class.samples);
    }
    println!("wrote {}", out.display());
    Ok(())
}

fn run_evaluate(data: &Path, model_path: &Path) -> Result<(), CliError> {
    let model = CentroidModel::load(model_path)?;
    let samples = dataset::load_samples(data, Split::Test)?;
    let mut evaluation = Evaluation::default();
    for (actual, features) in &samples {
        let predicted = model.predict(features)?.diagnosis;
        evaluation.record(*actual, predicted);
    }
    print!("{}", output::evaluation_summary(&evaluation));
    Ok(())
}

fn run_classify(image: &Path, model_path: &Path) -> Result<(), CliError> {
    let model = CentroidModel::load(model_path)?;
    let features = vision::features::extract_from_path(image)
        .map_err(|source| CliError::Features { path: image.to_path_buf(), source })?;
    let prediction = model.predict(&features)?;
    println!("{} (distance {:.4})", prediction.diagnosis, prediction.distance);
    Ok(())
}

async fn run_analyze(image: &Path, server: &str, json: bool) -> Result<(), CliError> {
    let bytes = std::fs::read(image).map_err(|source| CliError::Io { path: image.to_path_buf(), source })?;
    let file_name = image
        .file_name()
        .map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(dataset::guess_mime(image))?;
    let form = reqwest::multipart::Form::new().part("file", part);

    let client = reqwest::Client::builder().timeout(Duration::from_secs(120)).build()?;
    let response = client.post(endpoint(server, "/api/analyze")).multipart(form).send().await?;
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), body });
    }

    if json {
        let value = serde_json::from_str::<serde_json::Value>(&body)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        let report = serde_json::from_str::<AnalysisReport>(&body)?;
        print!("{}", output::report_text(&report));
    }
    Ok(())
}

async fn run_ping(server: &str) -> Result<(), CliError> {
    let response = reqwest::get(endpoint(server, "/healthz")).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Server { status: status.as_u16(), body: "health check failed".to_owned() });
    }
    println!("ok");
    Ok(())
}

fn endpoint(server: &str, path: &str) -> String {
    format!("{}{path}", server.trim_end_matches('/'))
}
