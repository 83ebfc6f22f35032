use anyhow::{Context as _, Result};
use cosmrs::{
    proto::cosmos::base::tendermint::v1beta1::{
        service_client::ServiceClient, GetLatestBlockRequest,
        GetNodeInfoRequest,
    },
    tendermint::chain::Id as ChainId,
};

use super::QueryTendermint;

impl QueryTendermint {
    /// Network identifier reported by the connected node.
    pub async fn chain_id(&mut self) -> Result<ChainId> {
        let mut client =
            self.connection.client(ServiceClient::with_origin).await?;

        let node_info = client
            .get_node_info(GetNodeInfoRequest {})
            .await
            .inspect_err(|status| self.connection.observe(status))
            .context("Failed to query node information!")?
            .into_inner()
            .default_node_info
            .context("Node information response is empty!")?;

        node_info
            .network
            .parse()
            .with_context(|| {
                format!("Malformed chain ID {:?}!", node_info.network)
            })
    }

    pub async fn latest_block_height(&mut self) -> Result<u64> {
        let mut client =
            self.connection.client(ServiceClient::with_origin).await?;

        let block = client
            .get_latest_block(GetLatestBlockRequest {})
            .await
            .inspect_err(|status| self.connection.observe(status))
            .context("Failed to query latest block!")?
            .into_inner()
            .sdk_block
            .context("Latest block response carries no block!")?;

        block
            .header
            .map(|header| header.height.unsigned_abs())
            .context("Latest block carries no header!")
    }
}
