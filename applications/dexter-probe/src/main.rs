use anyhow::{Context as _, Result};

use chain_ops::{node, signer::Signer};
use interaction::{ChainClient, Helper};

use self::configuration::Configuration;

mod configuration;
mod probe;

macro_rules! log {
    ($macro:ident!($($body:tt)+)) => {
        ::tracing::$macro!(
            target: "probe",
            $($body)+
        );
    };
}

#[tokio::main]
async fn main() -> Result<()> {
    log::init().context("Failed to initialize logging!")?;

    run().await
}

async fn run() -> Result<()> {
    let configuration = Configuration::read_from_env()
        .context("Failed to load probe configuration!")?;

    let network = configuration.network();

    log!(info!(
        network = network.name(),
        chain_id = network.chain_id(),
        endpoint = configuration.node_grpc_uri(),
        rest_endpoint = network.rest_endpoint(),
        "Connecting to node.",
    ));

    let node_client = node::Client::connect(configuration.node_grpc_uri())
        .await
        .context("Failed to connect to node's gRPC!")?;

    let signer = Signer::new(
        node_client.clone(),
        configuration.into_signing_key(),
        network.account_prefix(),
        network.fee_denom().to_owned(),
        network.chain_id(),
    )
    .await
    .context("Failed to initialize signer!")?;

    let mut helper = Helper::new(ChainClient::new(node_client), signer);

    let height = helper
        .block_height()
        .await
        .context("Failed to fetch latest block height!")?;

    log!(info!(
        address = helper.wallet().address(),
        height,
        "Wallet ready.",
    ));

    probe::sweep(&mut helper, network).await;

    log!(info!("Probe finished."));

    Ok(())
}
