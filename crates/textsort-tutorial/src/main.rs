use clap::Parser;
use textsort_client::{ClassifierClient, ClassifierTransport, ConfigData};
use textsort_tutorial::cli::Cli;
use textsort_tutorial::{classify, resources, train};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Snapshot id used for the save/load round trip
const SAVE_ID: &str = "tutorial";

/// Connection-level timeout, in seconds
const CONNECT_TIMEOUT_SECS: f64 = 10.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut client = ClassifierClient::connect(&cli.host, cli.port, CONNECT_TIMEOUT_SECS)?;
    let result = run(&client, &cli).await;
    client.close();

    result
}

async fn run<T: ClassifierTransport>(
    client: &ClassifierClient<T>,
    cli: &Cli,
) -> anyhow::Result<()> {
    let config = ConfigData::new(&cli.algorithm, resources::load_text("converter.json")?);

    client.set_config(&cli.name, &config).await?;
    log_remote_state(client, &cli.name).await?;

    let train_entries = resources::parse_manifest(&resources::load_text("train.dat")?)?;
    train::run_training(client, &cli.name, &train_entries).await?;

    client.save(&cli.name, SAVE_ID).await?;
    client.load(&cli.name, SAVE_ID).await?;

    client.set_config(&cli.name, &config).await?;
    log_remote_state(client, &cli.name).await?;

    let test_entries = resources::parse_manifest(&resources::load_text("test.dat")?)?;
    let mut stdout = std::io::stdout();
    classify::run_classification(client, &cli.name, &test_entries, &mut stdout).await?;

    Ok(())
}

/// Log the instance's remote configuration and status snapshots
async fn log_remote_state<T: ClassifierTransport>(
    client: &ClassifierClient<T>,
    instance: &str,
) -> anyhow::Result<()> {
    let config = serde_json::to_string(&client.get_config(instance).await?)?;
    tracing::debug!(config = %config, "remote config");

    let status = serde_json::to_string(&client.get_status(instance).await?)?;
    tracing::trace!(status = %status, "remote status");

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "textsort_tutorial=trace,textsort_client=trace"
    } else {
        "textsort_tutorial=info,textsort_client=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
