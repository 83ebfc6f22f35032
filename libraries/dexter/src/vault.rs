use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::{
    amount::{Decimal, Uint128},
    asset::{Asset, AssetInfo},
    binary::Binary,
    cw20,
    pool::{PoolKind, SwapType},
};

/// Fee configuration of a pool kind, in basis points of the traded amount
/// and percent of that fee routed to the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FeeInfo {
    pub total_fee_bps: u16,
    pub protocol_fee_percent: u16,
}

/// Registry entry describing how the vault instantiates pools of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PoolConfig {
    pub code_id: u64,
    pub pool_type: PoolKind,
    pub fee_info: FeeInfo,
    #[serde(default)]
    pub is_disabled: bool,
    #[serde(default)]
    pub is_generator_disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SingleSwapRequest {
    pub pool_id: Uint128,
    pub asset_in: AssetInfo,
    pub asset_out: AssetInfo,
    pub swap_type: SwapType,
    pub amount: Uint128,
    pub max_spread: Option<Decimal>,
    pub belief_price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    QueryRegistry { pool_type: PoolKind },
    GetPoolById { pool_id: Uint128 },
    GetPoolByAddress { pool_addr: String },
}

impl QueryMsg {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Config {} => "config",
            Self::QueryRegistry { .. } => "query_registry",
            Self::GetPoolById { .. } => "get_pool_by_id",
            Self::GetPoolByAddress { .. } => "get_pool_by_address",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    UpdateConfig {
        lp_token_code_id: Option<u64>,
        fee_collector: Option<String>,
        generator_address: Option<String>,
    },
    UpdatePoolConfig {
        pool_type: PoolKind,
        is_disabled: Option<bool>,
        new_fee_info: Option<FeeInfo>,
    },
    AddToRegistry {
        new_pool_config: PoolConfig,
    },
    CreatePoolInstance {
        pool_type: PoolKind,
        asset_infos: Vec<AssetInfo>,
        lp_token_name: Option<String>,
        lp_token_symbol: Option<String>,
        init_params: Option<Binary>,
    },
    JoinPool {
        pool_id: Uint128,
        recipient: Option<String>,
        assets: Option<Vec<Asset>>,
        lp_to_mint: Option<Uint128>,
        init_params: Option<Binary>,
    },
    Swap {
        swap_request: SingleSwapRequest,
        recipient: Option<String>,
    },
    ProposeNewOwner {
        owner: String,
        expires_in: Option<u64>,
    },
    DropOwnershipProposal {},
    ClaimOwnership {},
}

impl ExecuteMsg {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateConfig { .. } => "update_config",
            Self::UpdatePoolConfig { .. } => "update_pool_config",
            Self::AddToRegistry { .. } => "add_to_registry",
            Self::CreatePoolInstance { .. } => "create_pool_instance",
            Self::JoinPool { .. } => "join_pool",
            Self::Swap { .. } => "swap",
            Self::ProposeNewOwner { .. } => "propose_new_owner",
            Self::DropOwnershipProposal {} => "drop_ownership_proposal",
            Self::ClaimOwnership {} => "claim_ownership",
        }
    }
}

/// Message embedded into a CW20 `send` of LP tokens to the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cw20HookMsg {
    ExitPool {
        pool_id: Uint128,
        recipient: Option<String>,
        assets: Option<Vec<Asset>>,
        burn_amount: Option<Uint128>,
    },
}

impl Cw20HookMsg {
    /// Wraps the hook into a CW20 `send` transferring `amount` LP tokens to
    /// `vault`. The result must be executed against the LP-token contract.
    pub fn into_send(
        self,
        vault: String,
        amount: Uint128,
    ) -> Result<cw20::ExecuteMsg> {
        Binary::to_json(&self).map(|msg| cw20::ExecuteMsg::Send {
            contract: vault,
            amount,
            msg,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigResponse {
    pub owner: String,
    pub lp_token_code_id: Option<u64>,
    pub fee_collector: Option<String>,
    pub generator_address: Option<String>,
    pub next_pool_id: Option<Uint128>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PauseInfo {
    pub swap: bool,
    pub deposit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PoolInfo {
    pub pool_id: Uint128,
    pub pool_addr: String,
    pub lp_token_addr: String,
    pub fee_info: FeeInfo,
    pub assets: Vec<Asset>,
    pub pool_type: PoolKind,
    #[serde(default)]
    pub paused: PauseInfo,
}
