use std::str::FromStr;

use alloy::{
    network::EthereumWallet,
    providers::{DynProvider, Provider, ProviderBuilder, WsConnect},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use anyhow::{Error, anyhow};
use tracing::debug;

/// Creates a provider with a wallet attached, for code paths that submit
/// transactions. Accepts a single websocket or http(s) RPC URL.
pub async fn construct_alloy_provider(
    private_key: &str,
    execution_rpc_url: &str,
) -> Result<DynProvider, Error> {
    let signer = PrivateKeySigner::from_str(private_key)
        .map_err(|e| anyhow!("Failed to parse the private key: {e}"))?;
    debug!(
        "Creating alloy provider with URL: {} and private key signer.",
        execution_rpc_url
    );
    create_alloy_provider_with_wallet(signer.into(), execution_rpc_url).await
}

async fn create_alloy_provider_with_wallet(
    wallet: EthereumWallet,
    url: &str,
) -> Result<DynProvider, Error> {
    if url.starts_with("ws://") || url.starts_with("wss://") {
        let ws = WsConnect::new(url);
        Ok(ProviderBuilder::new()
            .wallet(wallet)
            .connect_ws(ws)
            .await
            .map_err(|e| Error::msg(format!("Failed to connect to WS: {e}")))?
            .erased())
    } else if url.starts_with("http://") || url.starts_with("https://") {
        Ok(ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(Url::from_str(url)?)
            .erased())
    } else {
        Err(anyhow!(
            "Invalid URL, only websocket and http are supported: {}",
            url
        ))
    }
}

/// Creates a read-only provider without a wallet, for call and log paths.
pub async fn create_alloy_provider_without_wallet(url: &str) -> Result<DynProvider, Error> {
    if url.starts_with("ws://") || url.starts_with("wss://") {
        let ws = WsConnect::new(url);
        Ok(ProviderBuilder::new()
            .connect_ws(ws)
            .await
            .map_err(|e| Error::msg(format!("Failed to connect to WS: {e}")))?
            .erased())
    } else if url.starts_with("http://") || url.starts_with("https://") {
        Ok(ProviderBuilder::new()
            .connect_http(Url::from_str(url)?)
            .erased())
    } else {
        Err(anyhow!(
            "Invalid URL, only websocket and http are supported: {}",
            url
        ))
    }
}
