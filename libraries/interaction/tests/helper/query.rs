use dexter::{
    amount::Uint128,
    asset::{Asset, AssetInfo},
    pool::{ConfigResponse, FeeResponse, PoolKind, SwapResponse, SwapType},
    vault::PoolInfo,
};
use interaction::{FailureKind, QueryResult};
use tonic::Status;

use super::mock::{helper, sent_queries, MockNode, POOL, VAULT};

const FEE_RESPONSE: &str = r#"{"total_fee_bps":30}"#;

#[tokio::test]
async fn vault_queries_carry_single_operation_key() {
    let mut helper = helper(MockNode::new());

    assert!(helper.vault_config::<PoolInfo>(VAULT).await.is_absent());

    assert!(helper
        .vault_query_registry::<PoolInfo>(VAULT, PoolKind::Stableswap {})
        .await
        .is_absent());

    assert!(helper
        .vault_pool_by_id::<PoolInfo>(VAULT, Uint128::new(15))
        .await
        .is_absent());

    assert!(helper
        .vault_pool_by_address::<PoolInfo>(VAULT, POOL)
        .await
        .is_absent());

    assert_eq!(
        sent_queries(&helper),
        [
            (VAULT, r#"{"config":{}}"#),
            (
                VAULT,
                r#"{"query_registry":{"pool_type":{"stableswap":{}}}}"#,
            ),
            (VAULT, r#"{"get_pool_by_id":{"pool_id":"15"}}"#),
            (
                VAULT,
                r#"{"get_pool_by_address":{"pool_addr":"persistence1pool"}}"#,
            ),
        ],
    );
}

#[tokio::test]
async fn simulations_send_explicit_nulls() {
    let mut helper = helper(MockNode::new());

    let _ = helper
        .pool_on_join::<SwapResponse>(
            POOL,
            None,
            Some(Uint128::new(1_000)),
            None,
        )
        .await;

    let _ = helper
        .pool_on_exit::<SwapResponse>(
            POOL,
            Some(vec![Asset::new(AssetInfo::native("uxprt"), 5_u128)]),
            None,
        )
        .await;

    let _ = helper
        .pool_on_swap::<SwapResponse>(
            POOL,
            SwapType::GiveIn {},
            AssetInfo::native("uxprt"),
            AssetInfo::token("persistence1token"),
            Uint128::new(42),
            None,
            Some("1.5".parse().unwrap()),
        )
        .await;

    assert_eq!(
        sent_queries(&helper),
        [
            (
                POOL,
                r#"{"on_join_pool":{"assets_in":null,"mint_amount":"1000","slippage_tolerance":null}}"#,
            ),
            (
                POOL,
                r#"{"on_exit_pool":{"assets_out":[{"info":{"native_token":{"denom":"uxprt"}},"amount":"5"}],"burn_amount":null}}"#,
            ),
            (
                POOL,
                r#"{"on_swap":{"swap_type":{"give_in":{}},"offer_asset":{"native_token":{"denom":"uxprt"}},"ask_asset":{"token":{"contract_addr":"persistence1token"}},"amount":"42","max_spread":null,"belief_price":"1.5"}}"#,
            ),
        ],
    );
}

#[tokio::test]
async fn pool_state_queries() {
    let mut helper = helper(MockNode::new());

    let _ = helper.pool_config::<ConfigResponse>(POOL).await;

    let _ = helper.pool_fee_params::<FeeResponse>(POOL).await;

    let _ = helper.pool_id::<Uint128>(POOL).await;

    let _ = helper
        .cumulative_price::<FeeResponse>(
            POOL,
            AssetInfo::token("persistence1a"),
            AssetInfo::token("persistence1b"),
        )
        .await;

    let _ = helper.cumulative_prices::<FeeResponse>(POOL).await;

    assert_eq!(
        sent_queries(&helper)
            .into_iter()
            .map(|(_, query)| query)
            .collect::<Vec<_>>(),
        [
            r#"{"config":{}}"#,
            r#"{"fee_params":{}}"#,
            r#"{"pool_id":{}}"#,
            r#"{"cumulative_price":{"offer_asset":{"token":{"contract_addr":"persistence1a"}},"ask_asset":{"token":{"contract_addr":"persistence1b"}}}}"#,
            r#"{"cumulative_prices":{}}"#,
        ],
    );
}

#[tokio::test]
async fn response_is_decoded_verbatim() {
    let mut helper = helper(MockNode::new().reply(FEE_RESPONSE).reply(r#""19""#));

    assert_eq!(
        helper.pool_fee_params::<FeeResponse>(POOL).await,
        QueryResult::Response(FeeResponse { total_fee_bps: 30 }),
    );

    assert_eq!(
        helper.pool_id::<Uint128>(POOL).await.into_response(),
        Some(Uint128::new(19)),
    );
}

#[tokio::test]
async fn transport_failure_becomes_absence() {
    let mut helper = helper(
        MockNode::new().fail(FailureKind::Transport, "connection refused"),
    );

    let result = helper.pool_config::<ConfigResponse>(POOL).await;

    let failure = result.failure().unwrap();

    assert_eq!(failure.kind(), FailureKind::Transport);

    assert_eq!(failure.reason(), "connection refused");
}

#[tokio::test]
async fn node_statuses_keep_their_kind() {
    let mut helper = helper(
        MockNode::new()
            .status(Status::not_found("contract: not found"))
            .status(Status::unavailable("connection reset by peer")),
    );

    assert_eq!(
        helper
            .vault_config::<PoolInfo>("persistence1nonexistent")
            .await
            .failure()
            .map(interaction::QueryFailure::kind),
        Some(FailureKind::Rejected),
    );

    assert_eq!(
        helper
            .vault_config::<PoolInfo>(VAULT)
            .await
            .failure()
            .map(interaction::QueryFailure::kind),
        Some(FailureKind::Transport),
    );
}

#[tokio::test]
async fn malformed_response_becomes_decode_failure() {
    let mut helper =
        helper(MockNode::new().reply(r#"{"total_fee_bps":"thirty"}"#));

    assert_eq!(
        helper
            .pool_fee_params::<FeeResponse>(POOL)
            .await
            .failure()
            .map(interaction::QueryFailure::kind),
        Some(FailureKind::Decode),
    );
}

#[tokio::test]
async fn identical_queries_are_not_memoized() {
    let mut helper =
        helper(MockNode::new().reply(FEE_RESPONSE).reply(FEE_RESPONSE));

    let first = helper.pool_fee_params::<FeeResponse>(POOL).await;

    let second = helper.pool_fee_params::<FeeResponse>(POOL).await;

    assert_eq!(first, second);

    assert_eq!(
        sent_queries(&helper),
        [
            (POOL, r#"{"fee_params":{}}"#),
            (POOL, r#"{"fee_params":{}}"#),
        ],
    );

    assert!(helper.pool_fee_params::<FeeResponse>(POOL).await.is_absent());

    assert_eq!(helper.node().queries.len(), 3);
}

#[tokio::test]
async fn token_balance_query() {
    let mut helper = helper(MockNode::new().reply(r#"{"balance":"500"}"#));

    assert_eq!(
        helper
            .token_balance("persistence1token", "persistence1holder")
            .await
            .into_response()
            .map(|response| response.balance),
        Some(Uint128::new(500)),
    );

    assert_eq!(
        sent_queries(&helper),
        [(
            "persistence1token",
            r#"{"balance":{"address":"persistence1holder"}}"#,
        )],
    );
}
