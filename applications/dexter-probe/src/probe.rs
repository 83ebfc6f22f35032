use std::fmt::Debug;

use dexter::{
    amount::Uint128,
    pool::{ConfigResponse, CumulativePricesResponse, FeeResponse},
    vault::{self, PoolInfo},
};
use interaction::{Helper, Node, QueryResult, Wallet};
use network::{Network, PoolDescriptor};

macro_rules! log {
    ($macro:ident!($($body:tt)+)) => {
        ::tracing::$macro!(
            target: "probe",
            $($body)+
        );
    };
}

/// Runs every read-only query against the network's vault, its pools and
/// the wallet's test-token balances.
pub(crate) async fn sweep<N, W>(helper: &mut Helper<N, W>, network: &Network)
where
    N: Node,
    W: Wallet,
{
    let vault = network.vault_address();

    report(
        "vault",
        "config",
        helper.vault_config::<vault::ConfigResponse>(vault).await,
    );

    for (name, pool) in network.pools() {
        sweep_pool(helper, vault, name, pool).await;
    }

    let address = helper.wallet().address().to_owned();

    for token in network.test_tokens() {
        report(
            token,
            "balance",
            helper.token_balance(token, &address).await,
        );
    }
}

async fn sweep_pool<N, W>(
    helper: &mut Helper<N, W>,
    vault: &str,
    name: &str,
    pool: &PoolDescriptor,
) where
    N: Node,
    W: Wallet,
{
    let address = pool.pool_address();

    log!(info!(
        pool = name,
        id = pool.id(),
        kind = %pool.kind(),
        address,
        "Probing pool.",
    ));

    report(
        name,
        "config",
        helper.pool_config::<ConfigResponse>(address).await,
    );

    report(
        name,
        "fee_params",
        helper.pool_fee_params::<FeeResponse>(address).await,
    );

    if let QueryResult::Response(id) = helper.pool_id::<Uint128>(address).await
    {
        if id.u128() == u128::from(pool.id()) {
            log!(info!(pool = name, %id, "Pool ID matches configuration."));
        } else {
            log!(warn!(
                pool = name,
                reported = %id,
                configured = pool.id(),
                "Pool reports a different ID than configured!",
            ));
        }
    }

    report(
        name,
        "cumulative_prices",
        helper
            .cumulative_prices::<CumulativePricesResponse>(address)
            .await,
    );

    report(
        name,
        "get_pool_by_id",
        helper
            .vault_pool_by_id::<PoolInfo>(vault, Uint128::from(pool.id()))
            .await,
    );

    report(
        name,
        "get_pool_by_address",
        helper.vault_pool_by_address::<PoolInfo>(vault, address).await,
    );
}

fn report<T>(subject: &str, operation: &str, result: QueryResult<T>)
where
    T: Debug,
{
    match result {
        QueryResult::Response(response) => {
            log!(info!(subject, operation, ?response, "Query answered."));
        },
        QueryResult::Absent(failure) => {
            log!(warn!(
                subject,
                operation,
                kind = %failure.kind(),
                reason = failure.reason(),
                "No result.",
            ));
        },
    }
}
