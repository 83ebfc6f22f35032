use cosmrs::proto::cosmwasm::wasm::v1::{
    query_client::QueryClient, QuerySmartContractStateRequest,
};
use thiserror::Error as ThisError;
use tonic::Status;

use super::{is_transport_failure, QueryWasm};

#[derive(Debug, ThisError)]
pub enum SmartQueryError {
    #[error("Failed to obtain connection to node! Cause: {0:#}")]
    Connection(anyhow::Error),
    #[error("Node could not be reached! Cause: {0}")]
    Transport(Status),
    #[error("Node or contract rejected the query! Cause: {0}")]
    Rejected(Status),
}

impl From<Status> for SmartQueryError {
    fn from(status: Status) -> Self {
        if is_transport_failure(status.code()) {
            Self::Transport(status)
        } else {
            Self::Rejected(status)
        }
    }
}

impl QueryWasm {
    /// Runs a smart query and returns the contract's raw JSON response.
    pub async fn smart_raw(
        &mut self,
        address: String,
        query_data: Vec<u8>,
    ) -> Result<Vec<u8>, SmartQueryError> {
        let mut client = self
            .connection
            .client(QueryClient::with_origin)
            .await
            .map_err(SmartQueryError::Connection)?;

        match client
            .smart_contract_state(QuerySmartContractStateRequest {
                address,
                query_data,
            })
            .await
        {
            Ok(response) => Ok(response.into_inner().data),
            Err(status) => {
                self.connection.observe(&status);

                Err(status.into())
            },
        }
    }
}
