use anyhow::{bail, Context, Result};
use rental_predictor::{FieldName, PredictOutcome, Predictor, RequestState, ServiceConfig};

// ---------- Argument parsing ----------

// Each argument is one form edit: `hour=8`, `season=Winter`, `dewPoint=-3.5`.
fn parse_edit(arg: &str) -> Result<(FieldName, String)> {
    let Some((name, value)) = arg.split_once('=') else {
        bail!("expected field=value, got {:?}", arg);
    };
    let name: FieldName = name.parse()?;
    Ok((name, value.to_string()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let edits = std::env::args()
        .skip(1)
        .map(|a| parse_edit(&a))
        .collect::<Result<Vec<_>>>()?;

    let config = ServiceConfig::from_env()?;
    tracing::info!("prediction service at {}", config.base_url);

    let predictor = Predictor::new(config).context("failed to set up prediction client")?;
    for (name, value) in edits {
        predictor.set_field(name, value);
    }

    let fields = predictor.fields();
    for name in FieldName::ALL {
        println!("{:>15}: {}", name.label(), fields.get(name));
    }

    let state = match predictor.predict().await {
        PredictOutcome::Completed(state) => state,
        PredictOutcome::Rejected => predictor.state(),
    };
    println!("Predicted rental count: {}", state);

    if let RequestState::Failed { .. } = state {
        std::process::exit(1);
    }
    Ok(())
}
