use std::sync::Arc;

use anyhow::{anyhow, bail, Context as _, Result};
pub use cosmrs::{Amount, Gas};
use cosmrs::{
    tendermint::chain::Id as ChainId,
    tx::{
        AccountNumber, Body as TxBody, Fee as AuthFee, Raw, SequenceNumber,
        SignDoc, SignerInfo,
    },
    AccountId, Coin,
};

use crate::{
    key::{Public as PublicKey, Signing as SigningKey},
    node,
};

macro_rules! log {
    ($macro:ident!($($body:tt)+)) => {
        ::tracing::$macro!(
            target: "signer",
            $($body)+
        );
    };
}

/// Gas limit and fee amount attached to a transaction. The amount is
/// denominated in the signer's fee token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fee {
    pub gas_limit: Gas,
    pub amount: Amount,
}

impl Fee {
    pub fn to_auth_fee(&self, denom: &str) -> Result<AuthFee> {
        let coin = Coin::new(self.amount, denom)
            .map_err(|error| anyhow!(error))
            .with_context(|| format!("Invalid fee denomination {denom:?}!"))?;

        Ok(AuthFee::from_amount_and_gas(coin, self.gas_limit))
    }
}

/// Signs transactions on behalf of a single account, tracking the sequence
/// number locally between broadcasts.
#[derive(Clone)]
#[must_use]
pub struct Signer {
    account: Arc<Account>,
    sequence_number: SequenceNumber,
}

impl Signer {
    /// Checks that the node serves `expected_chain_id`, then loads the
    /// account's number and current sequence number.
    pub async fn new(
        node_client: node::Client,
        signing_key: SigningKey,
        account_prefix: &str,
        fee_token: String,
        expected_chain_id: &str,
    ) -> Result<Self> {
        let chain_id = node_client
            .clone()
            .query_tendermint()
            .chain_id()
            .await?;

        if chain_id.as_str() != expected_chain_id {
            bail!(
                "Connected to chain {:?} instead of {expected_chain_id:?}!",
                chain_id.as_str(),
            );
        }

        let public_key = signing_key.public_key();

        let id = public_key
            .account_id(account_prefix)
            .map_err(|error| anyhow!(error))
            .with_context(|| {
                format!("Failed to derive {account_prefix:?} address!")
            })?;

        let on_chain = node_client
            .query_auth()
            .account(id.to_string())
            .await
            .context("Failed to load signer's account!")?;

        log!(debug!(
            address = %id,
            account_number = on_chain.account_number,
            sequence_number = on_chain.sequence,
            "Loaded signer's account.",
        ));

        Ok(Self {
            account: Arc::new(Account {
                signing_key,
                public_key,
                id,
                number: on_chain.account_number,
                fee_token,
                chain_id,
            }),
            sequence_number: on_chain.sequence,
        })
    }

    #[must_use]
    #[inline]
    pub fn address(&self) -> &str {
        self.account.id.as_ref()
    }

    /// Signs `body` with the current sequence number. The sequence number is
    /// left untouched; see [`Self::increment_sequence_number`].
    pub fn tx(&self, body: &TxBody, fee: &Fee) -> Result<Raw> {
        let auth_info = SignerInfo::single_direct(
            Some(self.account.public_key),
            self.sequence_number,
        )
        .auth_info(fee.to_auth_fee(&self.account.fee_token)?);

        let sign_doc = SignDoc::new(
            body,
            &auth_info,
            &self.account.chain_id,
            self.account.number,
        )
        .map_err(|error| anyhow!(error))
        .context("Failed to build sign document!")?;

        sign_doc
            .sign(&self.account.signing_key)
            .map_err(|error| anyhow!(error))
            .context("Failed to sign transaction!")
    }

    #[inline]
    pub fn increment_sequence_number(&mut self) {
        self.sequence_number += 1;

        log!(debug!(
            sequence_number = self.sequence_number,
            "Sequence number advanced.",
        ));
    }
}

struct Account {
    signing_key: SigningKey,
    public_key: PublicKey,
    id: AccountId,
    number: AccountNumber,
    fee_token: String,
    chain_id: ChainId,
}
