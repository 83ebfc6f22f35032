use anyhow::{anyhow, Context as _, Result};
use cosmrs::{
    auth::BaseAccount,
    proto::cosmos::auth::v1beta1::{
        query_client::QueryClient, BaseAccount as ProtobufBaseAccount,
        QueryAccountRequest,
    },
};

use super::QueryAuth;

impl QueryAuth {
    /// Fetches the on-chain account record, which carries the account
    /// number and the next expected sequence number.
    pub async fn account(&mut self, address: String) -> Result<BaseAccount> {
        let mut client =
            self.connection.client(QueryClient::with_origin).await?;

        let account = client
            .account(QueryAccountRequest {
                address: address.clone(),
            })
            .await
            .inspect_err(|status| self.connection.observe(status))
            .with_context(|| format!("Failed to query account {address}!"))?
            .into_inner()
            .account
            .with_context(|| {
                format!("No account data for {address}! Is it funded?")
            })?
            .to_msg::<ProtobufBaseAccount>()
            .context("Failed to decode account data!")?;

        BaseAccount::try_from(account)
            .map_err(|error| anyhow!(error))
            .context("Account data is malformed!")
    }
}
