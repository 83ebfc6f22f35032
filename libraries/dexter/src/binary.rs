use std::ops::Deref;

use anyhow::{Context as _, Result};
use data_encoding::BASE64;
use serde::{
    de::{DeserializeOwned, Error as _},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Opaque byte payload, carried on the wire as standard padded base64.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Binary(Vec<u8>);

impl Binary {
    #[inline]
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Serializes `message` to JSON; the result is what contracts expect in
    /// `msg` fields of hook-style messages.
    pub fn to_json<M>(message: &M) -> Result<Self>
    where
        M: Serialize + ?Sized,
    {
        serde_json_wasm::to_vec(message)
            .map(Self)
            .context("Failed to serialize embedded message into JSON format!")
    }

    pub fn from_base64(encoded: &str) -> Result<Self> {
        BASE64
            .decode(encoded.as_bytes())
            .map(Self)
            .context("Payload is not valid padded base64!")
    }

    #[must_use]
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.0)
    }

    pub fn parse_json<T>(&self) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json_wasm::from_slice(&self.0)
            .context("Failed to parse embedded message from JSON format!")
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.0
    }
}

impl Deref for Binary {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<u8>> for Binary {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Serialize for Binary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).and_then(|encoded| {
            BASE64
                .decode(encoded.as_bytes())
                .map(Self)
                .map_err(D::Error::custom)
        })
    }
}
