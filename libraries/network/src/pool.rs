use dexter::{asset::AssetInfo, pool::PoolKind};

use crate::Error;

/// Immutable description of one deployed pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDescriptor {
    id: u64,
    kind: PoolKind,
    label: Box<str>,
    pool_address: Box<str>,
    lp_token_address: Box<str>,
    assets: Box<[AssetInfo]>,
}

impl PoolDescriptor {
    /// `label` names the contract family, e.g. `xyk_2`, and is the prefix of
    /// the pool's flat contract symbols.
    pub fn new(
        id: u64,
        kind: PoolKind,
        label: &str,
        pool_address: &str,
        lp_token_address: &str,
        assets: Vec<AssetInfo>,
    ) -> Result<Self, Error> {
        let missing = [
            ("label", label),
            ("pool address", pool_address),
            ("LP-token address", lp_token_address),
        ]
        .into_iter()
        .find_map(|(field, value)| value.is_empty().then_some(field));

        if let Some(field) = missing {
            return Err(Error::EmptyField { pool: id, field });
        }

        if assets.is_empty() {
            return Err(Error::NoAssets { pool: id });
        }

        if assets.iter().any(|asset| asset.to_string().is_empty()) {
            return Err(Error::EmptyField {
                pool: id,
                field: "asset",
            });
        }

        Ok(Self {
            id,
            kind,
            label: label.into(),
            pool_address: pool_address.into(),
            lp_token_address: lp_token_address.into(),
            assets: assets.into_boxed_slice(),
        })
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub const fn kind(&self) -> PoolKind {
        self.kind
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn pool_address(&self) -> &str {
        &self.pool_address
    }

    #[must_use]
    pub fn lp_token_address(&self) -> &str {
        &self.lp_token_address
    }

    #[must_use]
    pub fn assets(&self) -> &[AssetInfo] {
        &self.assets
    }
}
