use anyhow::{Context as _, Result};
use cosmrs::proto::cosmos::base::abci::v1beta1::TxResponse;
use serde::Serialize;

use chain_ops::{signer::Fee, tx::ExecuteTemplate};
use dexter::{
    amount::Uint128,
    asset::{Asset, AssetInfo},
    binary::Binary,
    cw20::{self, Expiration},
    pool::PoolKind,
    vault::{self, Cw20HookMsg, FeeInfo, PoolConfig, SingleSwapRequest},
};

use crate::{Helper, Node, Wallet};

macro_rules! log {
    ($macro:ident!($($body:tt)+)) => {
        ::tracing::$macro!(
            target: "execute",
            $($body)+
        );
    };
}

/// Fee attached to every execution, denominated in the network's fee token.
pub const EXECUTE_FEE: Fee = Fee {
    gas_limit: 5_000_000,
    amount: 6_250_000,
};

impl<N, W> Helper<N, W>
where
    N: Node,
    W: Wallet,
{
    async fn execute<M>(
        &mut self,
        contract: &str,
        operation: &'static str,
        message: &M,
    ) -> Result<TxResponse>
    where
        M: Serialize + ?Sized,
    {
        let body = ExecuteTemplate::new(
            self.wallet.address().to_owned(),
            contract.to_owned(),
        )
        .apply(message)?;

        let tx = self
            .wallet
            .sign(&body, &EXECUTE_FEE)
            .context("Failed to sign transaction!")?;

        let response = self.node.broadcast(tx).await?;

        if response.code == 0 {
            self.wallet.commit_sequence();

            log!(info!(
                contract,
                operation,
                hash = %response.txhash,
                "Transaction accepted by node.",
            ));
        } else {
            log!(warn!(
                contract,
                operation,
                hash = %response.txhash,
                code = response.code,
                log = %response.raw_log,
                "Transaction refused by node.",
            ));
        }

        Ok(response)
    }

    async fn execute_vault(
        &mut self,
        vault: &str,
        message: &vault::ExecuteMsg,
    ) -> Result<TxResponse> {
        self.execute(vault, message.name(), message).await
    }

    pub async fn update_config(
        &mut self,
        vault: &str,
        lp_token_code_id: Option<u64>,
        fee_collector: Option<String>,
        generator_address: Option<String>,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::UpdateConfig {
                lp_token_code_id,
                fee_collector,
                generator_address,
            },
        )
        .await
    }

    pub async fn update_pool_config(
        &mut self,
        vault: &str,
        pool_type: PoolKind,
        is_disabled: Option<bool>,
        new_fee_info: Option<FeeInfo>,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::UpdatePoolConfig {
                pool_type,
                is_disabled,
                new_fee_info,
            },
        )
        .await
    }

    pub async fn add_to_registry(
        &mut self,
        vault: &str,
        new_pool_config: PoolConfig,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::AddToRegistry { new_pool_config },
        )
        .await
    }

    pub async fn create_pool_instance(
        &mut self,
        vault: &str,
        pool_type: PoolKind,
        asset_infos: Vec<AssetInfo>,
        lp_token_name: Option<String>,
        lp_token_symbol: Option<String>,
        init_params: Option<Binary>,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::CreatePoolInstance {
                pool_type,
                asset_infos,
                lp_token_name,
                lp_token_symbol,
                init_params,
            },
        )
        .await
    }

    pub async fn join_pool(
        &mut self,
        vault: &str,
        pool_id: Uint128,
        recipient: Option<String>,
        assets: Option<Vec<Asset>>,
        lp_to_mint: Option<Uint128>,
        init_params: Option<Binary>,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::JoinPool {
                pool_id,
                recipient,
                assets,
                lp_to_mint,
                init_params,
            },
        )
        .await
    }

    pub async fn swap(
        &mut self,
        vault: &str,
        swap_request: SingleSwapRequest,
        recipient: Option<String>,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::Swap {
                swap_request,
                recipient,
            },
        )
        .await
    }

    pub async fn propose_new_owner(
        &mut self,
        vault: &str,
        owner: String,
        expires_in: Option<u64>,
    ) -> Result<TxResponse> {
        self.execute_vault(
            vault,
            &vault::ExecuteMsg::ProposeNewOwner { owner, expires_in },
        )
        .await
    }

    pub async fn drop_ownership_proposal(
        &mut self,
        vault: &str,
    ) -> Result<TxResponse> {
        self.execute_vault(vault, &vault::ExecuteMsg::DropOwnershipProposal {})
            .await
    }

    pub async fn claim_ownership(&mut self, vault: &str) -> Result<TxResponse> {
        self.execute_vault(vault, &vault::ExecuteMsg::ClaimOwnership {})
            .await
    }

    /// Exits a pool by sending `amount` LP tokens to the vault together with
    /// an `exit_pool` hook. The transaction targets the LP-token contract.
    #[allow(clippy::too_many_arguments)]
    pub async fn exit_pool(
        &mut self,
        vault: &str,
        lp_token: &str,
        amount: Uint128,
        pool_id: Uint128,
        recipient: Option<String>,
        assets: Option<Vec<Asset>>,
        burn_amount: Option<Uint128>,
    ) -> Result<TxResponse> {
        let message = Cw20HookMsg::ExitPool {
            pool_id,
            recipient,
            assets,
            burn_amount,
        }
        .into_send(vault.to_owned(), amount)?;

        self.execute(lp_token, "exit_pool", &message).await
    }

    pub async fn increase_allowance(
        &mut self,
        token: &str,
        spender: &str,
        amount: Uint128,
        expires: Option<Expiration>,
    ) -> Result<TxResponse> {
        self.execute(
            token,
            "increase_allowance",
            &cw20::ExecuteMsg::IncreaseAllowance {
                spender: spender.to_owned(),
                amount,
                expires,
            },
        )
        .await
    }
}
