use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

use crate::{
    amount::{Decimal, Uint128},
    asset::{Asset, AssetInfo},
};

/// Automated market-maker variant implemented by a pool contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Xyk {},
    Stableswap {},
    Stable5swap {},
    Weighted {},
}

impl PoolKind {
    pub const ALL: [Self; 4] = [
        Self::Xyk {},
        Self::Stableswap {},
        Self::Stable5swap {},
        Self::Weighted {},
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Xyk {} => "xyk",
            Self::Stableswap {} => "stableswap",
            Self::Stable5swap {} => "stable5swap",
            Self::Weighted {} => "weighted",
        }
    }
}

impl Display for PoolKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Unknown pool kind {0:?}! Expected one of: xyk, stableswap, stable5swap, weighted.")]
pub struct UnknownPoolKind(Box<str>);

impl FromStr for PoolKind {
    type Err = UnknownPoolKind;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownPoolKind(name.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapType {
    GiveIn {},
    GiveOut {},
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    FeeParams {},
    PoolId {},
    OnJoinPool {
        assets_in: Option<Vec<Asset>>,
        mint_amount: Option<Uint128>,
        slippage_tolerance: Option<Decimal>,
    },
    OnExitPool {
        assets_out: Option<Vec<Asset>>,
        burn_amount: Option<Uint128>,
    },
    OnSwap {
        swap_type: SwapType,
        offer_asset: AssetInfo,
        ask_asset: AssetInfo,
        amount: Uint128,
        max_spread: Option<Decimal>,
        belief_price: Option<Decimal>,
    },
    CumulativePrice {
        offer_asset: AssetInfo,
        ask_asset: AssetInfo,
    },
    CumulativePrices {},
}

impl QueryMsg {
    /// Top-level key of the serialized message.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Config {} => "config",
            Self::FeeParams {} => "fee_params",
            Self::PoolId {} => "pool_id",
            Self::OnJoinPool { .. } => "on_join_pool",
            Self::OnExitPool { .. } => "on_exit_pool",
            Self::OnSwap { .. } => "on_swap",
            Self::CumulativePrice { .. } => "cumulative_price",
            Self::CumulativePrices {} => "cumulative_prices",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigResponse {
    pub pool_id: Uint128,
    pub lp_token_addr: String,
    pub vault_addr: String,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FeeResponse {
    pub total_fee_bps: u16,
}

/// Whether the pool's math accepted the simulated operation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    Success {},
    Failure(String),
}

impl ResponseType {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success {})
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AfterJoinResponse {
    pub provided_assets: Vec<Asset>,
    pub new_shares: Uint128,
    pub response: ResponseType,
    pub fee: Option<Vec<Asset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AfterExitResponse {
    pub assets_out: Vec<Asset>,
    pub burn_shares: Uint128,
    pub response: ResponseType,
    pub fee: Option<Vec<Asset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Trade {
    pub amount_in: Uint128,
    pub amount_out: Uint128,
    pub spread: Uint128,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SwapResponse {
    pub trade_params: Trade,
    pub response: ResponseType,
    pub fee: Option<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AssetExchangeRate {
    pub offer_info: AssetInfo,
    pub ask_info: AssetInfo,
    pub rate: Uint128,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CumulativePriceResponse {
    pub exchange_info: AssetExchangeRate,
    pub total_share: Uint128,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CumulativePricesResponse {
    pub exchange_infos: Vec<AssetExchangeRate>,
    pub total_share: Uint128,
}
