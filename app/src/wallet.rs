use std::path::Path;

use anchor_lang::prelude::Pubkey;
use log::{error, info};
use solana_client::rpc_client::RpcClient;
use solana_sdk::signature::{read_keypair_file, Keypair, Signer};

use crate::{config::AppConfig, error::SwapError};

/// Holds the network selection and, once connected, the keypair that signs
/// for the user.
pub struct WalletProvider {
    config: AppConfig,
    keypair: Option<Keypair>,
}

impl WalletProvider {
    pub fn new(config: AppConfig) -> Self {
        Self { config, keypair: None }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replaces any wallet that is already connected.
    pub fn connect(&mut self, keypair: Keypair) -> Pubkey {
        let public_key = keypair.pubkey();
        info!("wallet {public_key} connected to {}", self.config.cluster.url());
        self.keypair = Some(keypair);
        public_key
    }

    /// Connects with a keypair file in the Solana CLI's JSON format.
    pub fn connect_from_file(&mut self, path: impl AsRef<Path>) -> Result<Pubkey, SwapError> {
        let path = path.as_ref();
        let keypair = read_keypair_file(path).map_err(|err| {
            error!("failed to load wallet from {}: {err}", path.display());
            SwapError::WalletLoad {
                path: path.display().to_string(),
                reason: err.to_string(),
            }
        })?;
        Ok(self.connect(keypair))
    }

    pub fn disconnect(&mut self) {
        if let Some(keypair) = self.keypair.take() {
            info!("wallet {} disconnected", keypair.pubkey());
        }
    }

    pub fn is_connected(&self) -> bool {
        self.keypair.is_some()
    }

    pub fn public_key(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|keypair| keypair.pubkey())
    }

    pub fn signer(&self) -> Option<&Keypair> {
        self.keypair.as_ref()
    }

    /// A fresh RPC client for the configured cluster and commitment.
    pub fn connection(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.config.cluster.url().to_string(), self.config.commitment)
    }
}
