//! Client side of the swap program: a wallet provider, the make/take offer
//! form and the pieces it is built from.
//!
//! Address derivation ([`pda`]) and instruction building ([`instructions`])
//! are pure and never touch the network. Only a [`transport::Transport`]
//! sends anything.

pub mod config;
pub mod error;
pub mod form;
pub mod instructions;
pub mod notify;
pub mod pda;
pub mod transport;
pub mod wallet;

pub use config::{AppConfig, Cluster};
pub use error::SwapError;
pub use form::{Mode, SwapForm};
pub use notify::{LogNotifier, Notifier};
pub use transport::{Transport, TransportError};
pub use wallet::WalletProvider;
