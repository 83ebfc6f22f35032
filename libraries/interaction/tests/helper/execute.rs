use proptest::{
    arbitrary::any, collection::vec, option, prop_assert_eq, proptest,
};
use serde::Deserialize;

use dexter::{
    amount::Uint128,
    asset::{Asset, AssetInfo},
    binary::Binary,
    pool::{PoolKind, SwapType},
    vault::{Cw20HookMsg, FeeInfo, PoolConfig, SingleSwapRequest},
};
use interaction::EXECUTE_FEE;

use super::mock::{
    helper, Broadcast, MockNode, LP_TOKEN, VAULT, WALLET_ADDRESS,
};

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Cw20Send {
    Send {
        contract: String,
        amount: Uint128,
        msg: Binary,
    },
}

#[tokio::test]
async fn execution_wraps_one_message_for_vault() {
    let mut helper = helper(MockNode::new());

    let response = helper
        .update_config(VAULT, None, Some("persistence1collector".into()), None)
        .await
        .unwrap();

    assert_eq!(response.txhash, "ACCEPTED");

    assert_eq!(helper.node().broadcasts, 1);

    let executed = helper.wallet().executed();

    assert_eq!(executed.len(), 1);

    assert_eq!(executed[0].sender, WALLET_ADDRESS);

    assert_eq!(executed[0].contract, VAULT);

    assert!(executed[0].funds.is_empty());

    assert_eq!(
        String::from_utf8(executed[0].msg.clone()).unwrap(),
        r#"{"update_config":{"lp_token_code_id":null,"fee_collector":"persistence1collector","generator_address":null}}"#,
    );
}

#[tokio::test]
async fn every_vault_action_uses_its_name_and_constant_fee() {
    let mut helper = helper(MockNode::new());

    let fee_info = FeeInfo {
        total_fee_bps: 30,
        protocol_fee_percent: 40,
    };

    helper
        .update_config(VAULT, Some(3), None, None)
        .await
        .unwrap();

    helper
        .update_pool_config(VAULT, PoolKind::Xyk {}, Some(true), Some(fee_info))
        .await
        .unwrap();

    helper
        .add_to_registry(
            VAULT,
            PoolConfig {
                code_id: 9,
                pool_type: PoolKind::Weighted {},
                fee_info,
                is_disabled: false,
                is_generator_disabled: false,
            },
        )
        .await
        .unwrap();

    helper
        .create_pool_instance(
            VAULT,
            PoolKind::Stable5swap {},
            vec![AssetInfo::native("uxprt"), AssetInfo::token("persistence1a")],
            None,
            None,
            None,
        )
        .await
        .unwrap();

    helper
        .join_pool(
            VAULT,
            Uint128::new(15),
            None,
            Some(vec![Asset::new(AssetInfo::native("uxprt"), 10_u128)]),
            None,
            None,
        )
        .await
        .unwrap();

    helper
        .swap(
            VAULT,
            SingleSwapRequest {
                pool_id: Uint128::new(19),
                asset_in: AssetInfo::token("persistence1a"),
                asset_out: AssetInfo::token("persistence1b"),
                swap_type: SwapType::GiveIn {},
                amount: Uint128::new(100),
                max_spread: None,
                belief_price: None,
            },
            None,
        )
        .await
        .unwrap();

    helper
        .propose_new_owner(VAULT, "persistence1owner".into(), Some(600))
        .await
        .unwrap();

    helper.drop_ownership_proposal(VAULT).await.unwrap();

    helper.claim_ownership(VAULT).await.unwrap();

    let keys = helper
        .wallet()
        .executed()
        .into_iter()
        .map(|message| {
            assert_eq!(message.contract, VAULT);

            let message = String::from_utf8(message.msg).unwrap();

            let key = message
                .strip_prefix(r#"{""#)
                .and_then(|rest| rest.split_once('"'))
                .map(|(key, _)| key.to_owned())
                .unwrap();

            assert!(message.ends_with("}}"), "{message}");

            key
        })
        .collect::<Vec<_>>();

    assert_eq!(
        keys,
        [
            "update_config",
            "update_pool_config",
            "add_to_registry",
            "create_pool_instance",
            "join_pool",
            "swap",
            "propose_new_owner",
            "drop_ownership_proposal",
            "claim_ownership",
        ],
    );

    assert!(helper.wallet().fees().iter().all(|&fee| fee == EXECUTE_FEE));

    assert_eq!(EXECUTE_FEE.gas_limit, 5_000_000);

    assert_eq!(EXECUTE_FEE.amount, 6_250_000);

    assert_eq!(helper.wallet().committed, 9);
}

#[tokio::test]
async fn exit_pool_sends_lp_tokens_with_hook() {
    let mut helper = helper(MockNode::new());

    helper
        .exit_pool(
            VAULT,
            LP_TOKEN,
            Uint128::new(1_000),
            Uint128::new(4),
            Some("persistence1recipient".into()),
            None,
            Some(Uint128::new(1_000)),
        )
        .await
        .unwrap();

    let executed = helper.wallet().executed();

    assert_eq!(executed.len(), 1);

    assert_eq!(executed[0].contract, LP_TOKEN);

    let Cw20Send::Send {
        contract,
        amount,
        msg,
    } = serde_json_wasm::from_slice(&executed[0].msg).unwrap();

    assert_eq!(contract, VAULT);

    assert_eq!(amount, Uint128::new(1_000));

    assert_eq!(
        String::from_utf8(msg.into_inner()).unwrap(),
        r#"{"exit_pool":{"pool_id":"4","recipient":"persistence1recipient","assets":null,"burn_amount":"1000"}}"#,
    );
}

#[tokio::test]
async fn allowance_targets_token_contract() {
    let mut helper = helper(MockNode::new());

    helper
        .increase_allowance(
            "persistence1token",
            VAULT,
            Uint128::new(77),
            None,
        )
        .await
        .unwrap();

    let executed = helper.wallet().executed();

    assert_eq!(executed[0].contract, "persistence1token");

    assert_eq!(
        String::from_utf8(executed[0].msg.clone()).unwrap(),
        r#"{"increase_allowance":{"spender":"persistence1vault","amount":"77","expires":null}}"#,
    );
}

#[tokio::test]
async fn broadcast_errors_propagate_unchanged() {
    let mut helper =
        helper(MockNode::new().broadcasting(Broadcast::Fails("node is down")));

    let error = helper.claim_ownership(VAULT).await.unwrap_err();

    assert_eq!(error.to_string(), "node is down");

    assert_eq!(error.chain().count(), 1);

    assert_eq!(helper.wallet().committed, 0);
}

#[tokio::test]
async fn refused_transaction_is_returned_without_advancing_sequence() {
    let mut helper =
        helper(MockNode::new().broadcasting(Broadcast::Refused(11)));

    let response = helper.claim_ownership(VAULT).await.unwrap();

    assert_eq!(response.code, 11);

    assert_eq!(response.raw_log, "out of gas");

    assert_eq!(helper.wallet().committed, 0);
}

#[tokio::test]
async fn block_height_comes_from_node() {
    let mut helper = helper(MockNode::new());

    assert_eq!(helper.block_height().await.unwrap(), 1_234_567);
}

fn asset_strategy() -> impl proptest::strategy::Strategy<Value = Asset> {
    use proptest::strategy::Strategy as _;

    ("[a-z]{1,12}", any::<u128>())
        .prop_map(|(denom, amount)| Asset::new(AssetInfo::native(denom), amount))
}

proptest! {
    #[test]
    fn exit_payload_decodes_to_supplied_hook(
        pool_id in any::<u128>(),
        recipient in option::of("persistence1[a-z0-9]{38}"),
        assets in option::of(vec(asset_strategy(), 1..4)),
        burn_amount in option::of(any::<u128>()),
        amount in any::<u128>(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        let mut helper = helper(MockNode::new());

        runtime
            .block_on(helper.exit_pool(
                VAULT,
                LP_TOKEN,
                Uint128::new(amount),
                Uint128::new(pool_id),
                recipient.clone(),
                assets.clone(),
                burn_amount.map(Uint128::new),
            ))
            .unwrap();

        let executed = helper.wallet().executed();

        prop_assert_eq!(executed.len(), 1);

        prop_assert_eq!(&executed[0].contract, LP_TOKEN);

        let Cw20Send::Send { contract, amount: sent, msg } =
            serde_json_wasm::from_slice(&executed[0].msg).unwrap();

        prop_assert_eq!(contract, VAULT);

        prop_assert_eq!(sent, Uint128::new(amount));

        let decoded = Binary::from_base64(&msg.to_base64())
            .and_then(|payload| payload.parse_json::<Cw20HookMsg>())
            .unwrap();

        prop_assert_eq!(
            decoded,
            Cw20HookMsg::ExitPool {
                pool_id: Uint128::new(pool_id),
                recipient,
                assets,
                burn_amount: burn_amount.map(Uint128::new),
            },
        );
    }
}
