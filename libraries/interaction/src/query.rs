use serde::{de::DeserializeOwned, Serialize};

use dexter::{
    amount::{Decimal, Uint128},
    asset::{Asset, AssetInfo},
    cw20,
    pool::{self, PoolKind, SwapType},
    vault,
};

use crate::{FailureKind, Helper, Node, QueryFailure, QueryResult, Wallet};

macro_rules! log {
    ($macro:ident!($($body:tt)+)) => {
        ::tracing::$macro!(
            target: "query",
            $($body)+
        );
    };
}

impl<N, W> Helper<N, W>
where
    N: Node,
    W: Wallet,
{
    async fn query<M, T>(
        &mut self,
        contract: &str,
        operation: &'static str,
        message: &M,
    ) -> QueryResult<T>
    where
        M: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let result = match serde_json_wasm::to_vec(message) {
            Ok(query) => self
                .node
                .query_smart(contract.to_owned(), query)
                .await
                .and_then(|response| {
                    serde_json_wasm::from_slice(&response).map_err(|error| {
                        QueryFailure::new(FailureKind::Decode, error)
                    })
                }),
            Err(error) => Err(QueryFailure::new(FailureKind::Decode, error)),
        };

        if let Err(failure) = &result {
            log!(warn!(
                contract,
                operation,
                kind = %failure.kind(),
                reason = failure.reason(),
                "Query returned no result.",
            ));
        } else {
            log!(debug!(contract, operation, "Query answered."));
        }

        result.into()
    }

    pub async fn vault_config<T>(&mut self, vault: &str) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = vault::QueryMsg::Config {};

        self.query(vault, message.name(), &message).await
    }

    pub async fn vault_query_registry<T>(
        &mut self,
        vault: &str,
        pool_type: PoolKind,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = vault::QueryMsg::QueryRegistry { pool_type };

        self.query(vault, message.name(), &message).await
    }

    pub async fn vault_pool_by_id<T>(
        &mut self,
        vault: &str,
        pool_id: Uint128,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = vault::QueryMsg::GetPoolById { pool_id };

        self.query(vault, message.name(), &message).await
    }

    pub async fn vault_pool_by_address<T>(
        &mut self,
        vault: &str,
        pool_addr: &str,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = vault::QueryMsg::GetPoolByAddress {
            pool_addr: pool_addr.to_owned(),
        };

        self.query(vault, message.name(), &message).await
    }

    pub async fn pool_config<T>(&mut self, pool: &str) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::Config {};

        self.query(pool, message.name(), &message).await
    }

    pub async fn pool_fee_params<T>(&mut self, pool: &str) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::FeeParams {};

        self.query(pool, message.name(), &message).await
    }

    pub async fn pool_id<T>(&mut self, pool: &str) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::PoolId {};

        self.query(pool, message.name(), &message).await
    }

    pub async fn pool_on_join<T>(
        &mut self,
        pool: &str,
        assets_in: Option<Vec<Asset>>,
        mint_amount: Option<Uint128>,
        slippage_tolerance: Option<Decimal>,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::OnJoinPool {
            assets_in,
            mint_amount,
            slippage_tolerance,
        };

        self.query(pool, message.name(), &message).await
    }

    pub async fn pool_on_exit<T>(
        &mut self,
        pool: &str,
        assets_out: Option<Vec<Asset>>,
        burn_amount: Option<Uint128>,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::OnExitPool {
            assets_out,
            burn_amount,
        };

        self.query(pool, message.name(), &message).await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn pool_on_swap<T>(
        &mut self,
        pool: &str,
        swap_type: SwapType,
        offer_asset: AssetInfo,
        ask_asset: AssetInfo,
        amount: Uint128,
        max_spread: Option<Decimal>,
        belief_price: Option<Decimal>,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::OnSwap {
            swap_type,
            offer_asset,
            ask_asset,
            amount,
            max_spread,
            belief_price,
        };

        self.query(pool, message.name(), &message).await
    }

    pub async fn cumulative_price<T>(
        &mut self,
        pool: &str,
        offer_asset: AssetInfo,
        ask_asset: AssetInfo,
    ) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::CumulativePrice {
            offer_asset,
            ask_asset,
        };

        self.query(pool, message.name(), &message).await
    }

    pub async fn cumulative_prices<T>(&mut self, pool: &str) -> QueryResult<T>
    where
        T: DeserializeOwned,
    {
        let message = pool::QueryMsg::CumulativePrices {};

        self.query(pool, message.name(), &message).await
    }

    /// CW20 balance of `address` held in `token`.
    pub async fn token_balance(
        &mut self,
        token: &str,
        address: &str,
    ) -> QueryResult<cw20::BalanceResponse> {
        self.query(
            token,
            "balance",
            &cw20::QueryMsg::Balance {
                address: address.to_owned(),
            },
        )
        .await
    }
}
