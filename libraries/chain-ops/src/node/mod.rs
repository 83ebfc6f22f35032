use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use anyhow::{Context as _, Result};
use tokio::sync::RwLock;
use tonic::{
    transport::{Channel as GrpcChannel, ClientTlsConfig, Endpoint, Uri},
    Code as TonicCode, Status,
};

pub use self::query_wasm::SmartQueryError;

mod broadcast_tx;
mod query_auth;
mod query_tendermint;
mod query_wasm;

/// Shared gRPC connection to a node. Cloning is cheap; every interface split
/// off a client uses the same underlying channel.
#[derive(Clone)]
#[must_use]
pub struct Client {
    connection: Arc<Connection>,
}

impl Client {
    /// Connects to `uri`. Plain `http` endpoints are used as-is, every other
    /// scheme goes through TLS with the bundled web PKI roots.
    pub async fn connect(uri: &str) -> Result<Self> {
        let uri: Uri = uri
            .parse()
            .with_context(|| format!("Failed to parse gRPC URI {uri:?}!"))?;

        let mut endpoint = Endpoint::from(uri.clone())
            .origin(uri.clone())
            .keep_alive_while_idle(true);

        if uri.scheme_str() != Some("http") {
            endpoint = endpoint
                .tls_config(
                    ClientTlsConfig::new()
                        .assume_http2(true)
                        .with_webpki_roots(),
                )
                .context("Failed to configure TLS for node's gRPC endpoint!")?;
        }

        let channel = endpoint
            .connect()
            .await
            .context("Failed to connect to node's gRPC endpoint!")?;

        Ok(Self {
            connection: Arc::new(Connection {
                uri,
                endpoint,
                channel: RwLock::new(channel),
                broken: AtomicBool::new(false),
            }),
        })
    }
}

macro_rules! define_interface {
    ($($method:ident => $interface:ident),+ $(,)?) => {
        $(
            #[derive(Clone)]
            #[must_use]
            pub struct $interface {
                connection: Arc<Connection>,
            }

            impl Client {
                #[inline]
                pub fn $method(self) -> $interface {
                    $interface {
                        connection: self.connection,
                    }
                }
            }
        )+
    };
}

define_interface![
    broadcast_tx => BroadcastTx,
    query_auth => QueryAuth,
    query_tendermint => QueryTendermint,
    query_wasm => QueryWasm,
];

struct Connection {
    uri: Uri,
    endpoint: Endpoint,
    channel: RwLock<GrpcChannel>,
    broken: AtomicBool,
}

impl Connection {
    /// Builds a generated service client on top of the shared channel,
    /// re-establishing the channel first if a previous call broke it.
    async fn client<T>(&self, new: fn(GrpcChannel, Uri) -> T) -> Result<T> {
        if self.broken.load(Ordering::Acquire) {
            self.reconnect().await?;
        }

        Ok(new(self.channel.read().await.clone(), self.uri.clone()))
    }

    async fn reconnect(&self) -> Result<()> {
        let mut channel = self.channel.write().await;

        if self.broken.load(Ordering::Acquire) {
            *channel = self
                .endpoint
                .connect()
                .await
                .context("Failed to reconnect to node's gRPC endpoint!")?;

            self.broken.store(false, Ordering::Release);
        }

        Ok(())
    }

    /// Marks the channel for re-establishment when `status` originates from
    /// the connection rather than from the node.
    fn observe(&self, status: &Status) {
        if is_transport_failure(status.code()) {
            self.broken.store(true, Ordering::Release);
        }
    }
}

/// Status codes produced by the connection itself, as opposed to the node or
/// a contract refusing the request.
#[must_use]
pub const fn is_transport_failure(code: TonicCode) -> bool {
    matches!(
        code,
        TonicCode::Unavailable
            | TonicCode::DeadlineExceeded
            | TonicCode::Cancelled
            | TonicCode::Aborted
            | TonicCode::ResourceExhausted
    )
}
