use anchor_lang::prelude::Pubkey;
use solana_sdk::{commitment_config::CommitmentConfig, native_token::LAMPORTS_PER_SOL};

/// Network the wallet provider connects to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Cluster {
    #[default]
    Devnet,
    Testnet,
    Mainnet,
    Localnet,
    Custom(String),
}

impl Cluster {
    pub fn url(&self) -> &str {
        match self {
            Cluster::Devnet => "https://api.devnet.solana.com",
            Cluster::Testnet => "https://api.testnet.solana.com",
            Cluster::Mainnet => "https://api.mainnet-beta.solana.com",
            Cluster::Localnet => "http://127.0.0.1:8899",
            Cluster::Custom(url) => url.as_str(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cluster: Cluster,
    pub commitment: CommitmentConfig,
    pub program_id: Pubkey,
    // mints are expected to belong to this program, SPL Token or Token-2022
    pub token_program: Pubkey,
    /// Multiplier from the amount typed for token A to base units.
    pub token_a_scale: u64,
    /// Multiplier from the amount typed for token B to base units.
    pub token_b_scale: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cluster: Cluster::default(),
            commitment: CommitmentConfig::confirmed(),
            program_id: swap::ID,
            token_program: anchor_spl::token_2022::ID,
            token_a_scale: 100,
            token_b_scale: LAMPORTS_PER_SOL,
        }
    }
}

impl AppConfig {
    pub fn with_cluster(mut self, cluster: Cluster) -> Self {
        self.cluster = cluster;
        self
    }
}
