use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::amount::Uint128;

/// Fungible asset accepted by a pool: either a chain-native denomination or
/// a CW20 token contract, never both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetInfo {
    Token { contract_addr: String },
    NativeToken { denom: String },
}

impl AssetInfo {
    #[inline]
    pub fn token<T>(contract_addr: T) -> Self
    where
        T: Into<String>,
    {
        Self::Token {
            contract_addr: contract_addr.into(),
        }
    }

    #[inline]
    pub fn native<T>(denom: T) -> Self
    where
        T: Into<String>,
    {
        Self::NativeToken {
            denom: denom.into(),
        }
    }
}

impl Display for AssetInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token { contract_addr } => f.write_str(contract_addr),
            Self::NativeToken { denom } => f.write_str(denom),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    #[inline]
    pub fn new<T>(info: AssetInfo, amount: T) -> Self
    where
        T: Into<Uint128>,
    {
        Self {
            info,
            amount: amount.into(),
        }
    }
}
