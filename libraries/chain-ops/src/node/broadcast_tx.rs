use anyhow::{anyhow, Context as _, Result};
use cosmrs::{
    proto::cosmos::{
        base::abci::v1beta1::TxResponse,
        tx::v1beta1::{
            service_client::ServiceClient, BroadcastMode, BroadcastTxRequest,
        },
    },
    tx::Raw as RawTx,
};

use super::BroadcastTx;

impl BroadcastTx {
    /// Broadcasts in synchronous mode. The node answers after `CheckTx`, so
    /// a successful return says nothing about block inclusion.
    pub async fn sync(&mut self, tx: RawTx) -> Result<TxResponse> {
        let tx_bytes = tx
            .to_bytes()
            .map_err(|error| anyhow!(error))
            .context("Failed to encode signed transaction!")?;

        let mut client =
            self.connection.client(ServiceClient::with_origin).await?;

        let response = client
            .broadcast_tx(BroadcastTxRequest {
                tx_bytes,
                mode: BroadcastMode::Sync.into(),
            })
            .await
            .inspect_err(|status| self.connection.observe(status))
            .context("Failed to broadcast transaction!")?;

        response
            .into_inner()
            .tx_response
            .context("Broadcast response carries no transaction response!")
    }
}
