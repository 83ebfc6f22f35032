use std::collections::VecDeque;

use anyhow::{anyhow, Result};
use cosmrs::{
    proto::{
        cosmos::{base::abci::v1beta1::TxResponse, tx::v1beta1::TxRaw},
        cosmwasm::wasm::v1::MsgExecuteContract,
    },
    tx::{Body as TxBody, Raw},
};

use chain_ops::{node::SmartQueryError, signer::Fee};
use tonic::Status;
use interaction::{FailureKind, Helper, Node, QueryFailure, Wallet};

pub(crate) const WALLET_ADDRESS: &str = "persistence1wallet";

pub(crate) const VAULT: &str = "persistence1vault";

pub(crate) const POOL: &str = "persistence1pool";

pub(crate) const LP_TOKEN: &str = "persistence1lptoken";

pub(crate) enum Broadcast {
    Accepted,
    Refused(u32),
    Fails(&'static str),
}

pub(crate) struct MockNode {
    pub(crate) queries: Vec<(String, String)>,
    pub(crate) replies: VecDeque<Result<Vec<u8>, QueryFailure>>,
    pub(crate) broadcast: Broadcast,
    pub(crate) broadcasts: usize,
    pub(crate) height: u64,
}

impl MockNode {
    pub(crate) fn new() -> Self {
        Self {
            queries: vec![],
            replies: VecDeque::new(),
            broadcast: Broadcast::Accepted,
            broadcasts: 0,
            height: 1_234_567,
        }
    }

    pub(crate) fn reply(mut self, reply: &str) -> Self {
        self.replies.push_back(Ok(reply.as_bytes().to_vec()));

        self
    }

    pub(crate) fn fail(mut self, kind: FailureKind, reason: &str) -> Self {
        self.replies.push_back(Err(QueryFailure::new(kind, reason)));

        self
    }

    /// Queues the reply a gRPC node gives when it answers with `status`.
    pub(crate) fn status(mut self, status: Status) -> Self {
        self.replies
            .push_back(Err(SmartQueryError::from(status).into()));

        self
    }

    pub(crate) fn broadcasting(mut self, broadcast: Broadcast) -> Self {
        self.broadcast = broadcast;

        self
    }
}

impl Node for MockNode {
    async fn query_smart(
        &mut self,
        address: String,
        query: Vec<u8>,
    ) -> Result<Vec<u8>, QueryFailure> {
        self.queries.push((
            address,
            String::from_utf8(query).expect("queries are UTF-8 JSON"),
        ));

        self.replies.pop_front().unwrap_or_else(|| {
            Err(QueryFailure::new(
                FailureKind::Rejected,
                "no such contract",
            ))
        })
    }

    async fn broadcast(&mut self, _: Raw) -> Result<TxResponse> {
        self.broadcasts += 1;

        match self.broadcast {
            Broadcast::Accepted => Ok(TxResponse {
                txhash: "ACCEPTED".into(),
                ..TxResponse::default()
            }),
            Broadcast::Refused(code) => Ok(TxResponse {
                code,
                txhash: "REFUSED".into(),
                raw_log: "out of gas".into(),
                ..TxResponse::default()
            }),
            Broadcast::Fails(reason) => Err(anyhow!(reason)),
        }
    }

    async fn latest_block_height(&mut self) -> Result<u64> {
        Ok(self.height)
    }
}

#[derive(Default)]
pub(crate) struct MockWallet {
    pub(crate) signed: std::cell::RefCell<Vec<(TxBody, Fee)>>,
    pub(crate) committed: u64,
}

impl MockWallet {
    /// The single execute message of each signed transaction.
    pub(crate) fn executed(&self) -> Vec<MsgExecuteContract> {
        self.signed
            .borrow()
            .iter()
            .map(|(body, _)| {
                assert_eq!(body.messages.len(), 1);

                body.messages[0].to_msg().unwrap()
            })
            .collect()
    }

    pub(crate) fn fees(&self) -> Vec<Fee> {
        self.signed.borrow().iter().map(|&(_, fee)| fee).collect()
    }
}

impl Wallet for MockWallet {
    fn address(&self) -> &str {
        WALLET_ADDRESS
    }

    fn sign(&self, body: &TxBody, fee: &Fee) -> Result<Raw> {
        self.signed.borrow_mut().push((body.clone(), *fee));

        Ok(Raw::from(TxRaw::default()))
    }

    fn commit_sequence(&mut self) {
        self.committed += 1;
    }
}

pub(crate) fn helper(node: MockNode) -> Helper<MockNode, MockWallet> {
    Helper::new(node, MockWallet::default())
}

pub(crate) fn sent_queries(
    helper: &Helper<MockNode, MockWallet>,
) -> Vec<(&str, &str)> {
    helper
        .node()
        .queries
        .iter()
        .map(|(address, query)| (address.as_str(), query.as_str()))
        .collect()
}
