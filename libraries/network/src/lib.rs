//! Process-wide, immutable table of Dexter deployments.

use std::{collections::BTreeMap, sync::LazyLock};

use thiserror::Error as ThisError;

pub use self::pool::PoolDescriptor;

mod pool;
mod testnet;

/// Incremented whenever an address or descriptor of a built-in network
/// changes.
pub const REGISTRY_VERSION: u32 = 1;

pub const DEFAULT_NETWORK: &str = "testnet";

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    #[error("Network {0:?} is not configured!")]
    UnknownNetwork(Box<str>),
    #[error("Pool {pool:?} is not configured for network {network:?}!")]
    UnknownPool { network: Box<str>, pool: Box<str> },
    #[error("Contract {symbol:?} is not configured for network {network:?}!")]
    UnknownContract { network: Box<str>, symbol: Box<str> },
    #[error("Pool with ID {pool} has an empty {field}!")]
    EmptyField { pool: u64, field: &'static str },
    #[error("Pool with ID {pool} lists no assets!")]
    NoAssets { pool: u64 },
    #[error("Network {network:?} has an empty {field}!")]
    EmptyNetworkField {
        network: Box<str>,
        field: &'static str,
    },
}

/// Returns the registry of built-in networks, constructing it on first use.
pub fn registry() -> Result<&'static Registry, Error> {
    static REGISTRY: LazyLock<Result<Registry, Error>> = LazyLock::new(|| {
        testnet::network().map(|testnet| Registry {
            version: REGISTRY_VERSION,
            networks: BTreeMap::from([(testnet.name.clone(), testnet)]),
        })
    });

    REGISTRY.as_ref().map_err(Clone::clone)
}

#[derive(Debug)]
pub struct Registry {
    version: u32,
    networks: BTreeMap<Box<str>, Network>,
}

impl Registry {
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    pub fn network(&self, name: &str) -> Result<&Network, Error> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::UnknownNetwork(name.into()))
    }

    pub fn networks(&self) -> impl Iterator<Item = &Network> + '_ {
        self.networks.values()
    }
}

#[derive(Debug)]
pub struct Network {
    name: Box<str>,
    chain_id: Box<str>,
    fee_denom: Box<str>,
    account_prefix: Box<str>,
    grpc_endpoint: Box<str>,
    rest_endpoint: Box<str>,
    vault_address: Box<str>,
    test_tokens: Box<[Box<str>]>,
    pools: BTreeMap<Box<str>, PoolDescriptor>,
}

impl Network {
    const VAULT_SYMBOL: &'static str = "vault_contract_address";

    const POOL_SYMBOL_SUFFIX: &'static str = "_pool_addr";

    const LP_TOKEN_SYMBOL_SUFFIX: &'static str = "_lp_token_addr";

    fn validated(self) -> Result<Self, Error> {
        let missing = [
            ("chain ID", &self.chain_id),
            ("fee denomination", &self.fee_denom),
            ("account prefix", &self.account_prefix),
            ("node endpoint", &self.grpc_endpoint),
            ("REST endpoint", &self.rest_endpoint),
            ("vault address", &self.vault_address),
        ]
        .into_iter()
        .find_map(|(field, value)| value.is_empty().then_some(field))
        .or_else(|| {
            self.test_tokens
                .iter()
                .any(|token| token.is_empty())
                .then_some("test token address")
        });

        if let Some(field) = missing {
            Err(Error::EmptyNetworkField {
                network: self.name,
                field,
            })
        } else {
            Ok(self)
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    #[must_use]
    pub fn fee_denom(&self) -> &str {
        &self.fee_denom
    }

    #[must_use]
    pub fn account_prefix(&self) -> &str {
        &self.account_prefix
    }

    #[must_use]
    pub fn grpc_endpoint(&self) -> &str {
        &self.grpc_endpoint
    }

    /// Node's LCD (REST) endpoint. Informational only; all traffic goes
    /// through [`Self::grpc_endpoint`].
    #[must_use]
    pub fn rest_endpoint(&self) -> &str {
        &self.rest_endpoint
    }

    #[must_use]
    pub fn vault_address(&self) -> &str {
        &self.vault_address
    }

    pub fn test_tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.test_tokens.iter().map(|token| &**token)
    }

    pub fn pool(&self, name: &str) -> Result<&PoolDescriptor, Error> {
        self.pools.get(name).ok_or_else(|| Error::UnknownPool {
            network: self.name.clone(),
            pool: name.into(),
        })
    }

    /// Iterates pools in ascending order of their symbolic names.
    pub fn pools(
        &self,
    ) -> impl Iterator<Item = (&str, &PoolDescriptor)> + '_ {
        self.pools.iter().map(|(name, pool)| (&**name, pool))
    }

    /// Resolves flat symbols like `vault_contract_address`,
    /// `xyk_2_pool_addr` or `weighted_lp_token_addr`.
    pub fn contract_address(&self, symbol: &str) -> Result<&str, Error> {
        if symbol == Self::VAULT_SYMBOL {
            return Ok(&self.vault_address);
        }

        self.pools
            .values()
            .find_map(|pool| {
                let label = symbol.strip_suffix(Self::POOL_SYMBOL_SUFFIX);

                if label == Some(pool.label()) {
                    return Some(pool.pool_address());
                }

                let label = symbol.strip_suffix(Self::LP_TOKEN_SYMBOL_SUFFIX);

                (label == Some(pool.label())).then(|| pool.lp_token_address())
            })
            .ok_or_else(|| Error::UnknownContract {
                network: self.name.clone(),
                symbol: symbol.into(),
            })
    }
}
