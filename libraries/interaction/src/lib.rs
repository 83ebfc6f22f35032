//! Query and execute façade over the Dexter vault, pool and CW20 contracts.
//!
//! Queries never fail loudly: every problem is folded into
//! [`QueryResult::Absent`] together with its [`FailureKind`]. Executions
//! propagate every error to the caller.

use std::future::Future;

use anyhow::Result;
use cosmrs::{
    proto::cosmos::base::abci::v1beta1::TxResponse,
    tx::{Body as TxBody, Raw},
};

use chain_ops::signer::Fee;

pub use self::{
    chain::ChainClient,
    execute::EXECUTE_FEE,
    result::{FailureKind, QueryFailure, QueryResult},
};

mod chain;
mod execute;
mod query;
mod result;

/// Chain access needed by [`Helper`].
pub trait Node {
    /// Sends a smart query and returns the contract's raw JSON response.
    fn query_smart(
        &mut self,
        address: String,
        query: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, QueryFailure>> + Send + '_;

    fn broadcast(
        &mut self,
        tx: Raw,
    ) -> impl Future<Output = Result<TxResponse>> + Send + '_;

    fn latest_block_height(
        &mut self,
    ) -> impl Future<Output = Result<u64>> + Send + '_;
}

pub trait Wallet {
    fn address(&self) -> &str;

    fn sign(&self, body: &TxBody, fee: &Fee) -> Result<Raw>;

    /// Called once the node accepted a transaction signed by this wallet.
    fn commit_sequence(&mut self);
}

/// Builds contract messages, signs them with the wallet and talks to the
/// chain through the node.
pub struct Helper<N, W>
where
    N: Node,
    W: Wallet,
{
    node: N,
    wallet: W,
}

impl<N, W> Helper<N, W>
where
    N: Node,
    W: Wallet,
{
    #[inline]
    pub const fn new(node: N, wallet: W) -> Self {
        Self { node, wallet }
    }

    #[inline]
    #[must_use]
    pub const fn node(&self) -> &N {
        &self.node
    }

    #[inline]
    #[must_use]
    pub const fn wallet(&self) -> &W {
        &self.wallet
    }

    pub async fn block_height(&mut self) -> Result<u64> {
        self.node.latest_block_height().await
    }
}
