use anyhow::{Context as _, Result};
use cosmrs::{
    proto::cosmwasm::wasm::v1::MsgExecuteContract, tx::Body as TxBody, Any,
};
use serde::Serialize;

/// Builder of single-message transaction bodies executing one contract on
/// behalf of one sender.
pub struct ExecuteTemplate(MsgExecuteContract);

impl ExecuteTemplate {
    #[must_use]
    pub const fn new(signer_address: String, contract_address: String) -> Self {
        Self(MsgExecuteContract {
            sender: signer_address,
            contract: contract_address,
            msg: vec![],
            funds: vec![],
        })
    }

    /// Serializes `message` as the contract's JSON payload and wraps it in a
    /// transaction body.
    pub fn apply<M>(&mut self, message: &M) -> Result<TxBody>
    where
        M: Serialize + ?Sized,
    {
        let payload = serde_json_wasm::to_vec(message)
            .context("Failed to serialize contract message!")?;

        self.apply_raw(payload)
    }

    /// Same as [`Self::apply`] for an already serialized payload. The
    /// template is left without a payload afterwards.
    pub fn apply_raw(&mut self, payload: Vec<u8>) -> Result<TxBody> {
        self.0.msg = payload;

        let encoded = Any::from_msg(&self.0);

        self.0.msg.clear();

        let message =
            encoded.context("Failed to encode contract execution message!")?;

        Ok(TxBody::new(vec![message], String::new(), 0_u32))
    }
}
