use anyhow::{Context as _, Result};
use bip32::{DerivationPath, Language, Mnemonic};

pub type Signing = cosmrs::crypto::secp256k1::SigningKey;

pub type Public = cosmrs::crypto::PublicKey;

pub const DEFAULT_COSMOS_DERIVATION_PATH: &str = "m/44'/118'/0'/0/0";

pub fn derive_from_mnemonic(
    phrase: &str,
    password: &str,
    derivation_path: &str,
) -> Result<Signing> {
    derivation_path
        .parse::<DerivationPath>()
        .with_context(|| {
            format!("Failed to parse key derivation path {derivation_path:?}!")
        })
        .and_then(|derivation_path| {
            Mnemonic::new(phrase, Language::English)
                .map(|phrase| phrase.to_seed(password))
                .context("Failed to parse mnemonic!")
                .and_then(|seed| {
                    Signing::derive_from_path(seed, &derivation_path)
                        .context("Failed to derive signing key!")
                })
        })
}
