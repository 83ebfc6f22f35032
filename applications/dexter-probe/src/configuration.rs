use anyhow::{Context as _, Result};
use zeroize::Zeroizing;

use chain_ops::key;
use environment::ReadFromVar as _;
use network::{Network, DEFAULT_NETWORK};

#[must_use]
pub(crate) struct Configuration {
    network: &'static Network,
    node_grpc_uri: String,
    signing_key: key::Signing,
}

impl Configuration {
    pub(crate) fn read_from_env() -> Result<Self> {
        let network = Self::read_network()?;

        let node_grpc_uri = Self::read_node_grpc_uri()?
            .unwrap_or_else(|| network.grpc_endpoint().to_owned());

        let signing_key = Self::derive_signing_key()?;

        Ok(Self {
            network,
            node_grpc_uri,
            signing_key,
        })
    }

    pub(crate) const fn network(&self) -> &'static Network {
        self.network
    }

    pub(crate) fn node_grpc_uri(&self) -> &str {
        &self.node_grpc_uri
    }

    pub(crate) fn into_signing_key(self) -> key::Signing {
        self.signing_key
    }

    fn read_network() -> Result<&'static Network> {
        let name = String::read_optional_from_var("DEXTER_NETWORK")
            .context("Failed to read network's name!")?;

        let name = name.as_deref().unwrap_or(DEFAULT_NETWORK);

        network::registry()
            .and_then(|registry| registry.network(name))
            .context("Failed to resolve network configuration!")
    }

    fn read_node_grpc_uri() -> Result<Option<String>> {
        String::read_optional_from_var("NODE_GRPC_URI")
            .context("Failed to read node's gRPC URI!")
    }

    fn derive_signing_key() -> Result<key::Signing> {
        let derivation_path =
            String::read_optional_from_var("SIGNING_KEY_DERIVATION_PATH")
                .context("Failed to read signing key's derivation path!")?;

        key::derive_from_mnemonic(
            &Self::read_signing_key_mnemonic()?,
            "",
            derivation_path
                .as_deref()
                .unwrap_or(key::DEFAULT_COSMOS_DERIVATION_PATH),
        )
        .context("Failed to derive signing key from mnemonic!")
    }

    fn read_signing_key_mnemonic() -> Result<Zeroizing<String>> {
        String::read_from_var("SIGNING_KEY_MNEMONIC")
            .context("Failed to read signing key's mnemonic!")
            .map(Zeroizing::new)
    }
}
