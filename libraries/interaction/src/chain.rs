use anyhow::Result;
use cosmrs::{
    proto::cosmos::base::abci::v1beta1::TxResponse,
    tx::{Body as TxBody, Raw},
};

use chain_ops::{
    node,
    signer::{Fee, Signer},
};

use crate::{Node, QueryFailure, Wallet};

/// [`Node`] backed by a node's gRPC endpoint.
#[derive(Clone)]
#[must_use]
pub struct ChainClient {
    query_wasm: node::QueryWasm,
    query_tendermint: node::QueryTendermint,
    broadcast_tx: node::BroadcastTx,
}

impl ChainClient {
    pub fn new(client: node::Client) -> Self {
        Self {
            query_wasm: client.clone().query_wasm(),
            query_tendermint: client.clone().query_tendermint(),
            broadcast_tx: client.broadcast_tx(),
        }
    }
}

impl Node for ChainClient {
    async fn query_smart(
        &mut self,
        address: String,
        query: Vec<u8>,
    ) -> Result<Vec<u8>, QueryFailure> {
        self.query_wasm
            .smart_raw(address, query)
            .await
            .map_err(QueryFailure::from)
    }

    async fn broadcast(&mut self, tx: Raw) -> Result<TxResponse> {
        self.broadcast_tx.sync(tx).await
    }

    async fn latest_block_height(&mut self) -> Result<u64> {
        self.query_tendermint.latest_block_height().await
    }
}

impl Wallet for Signer {
    #[inline]
    fn address(&self) -> &str {
        Signer::address(self)
    }

    #[inline]
    fn sign(&self, body: &TxBody, fee: &Fee) -> Result<Raw> {
        self.tx(body, fee)
    }

    #[inline]
    fn commit_sequence(&mut self) {
        self.increment_sequence_number();
    }
}
