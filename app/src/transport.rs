use anchor_lang::solana_program::instruction::Instruction;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to fetch a recent blockhash: {0}")]
    Blockhash(String),
    #[error("transaction was rejected: {0}")]
    Rejected(String),
}

/// Sends signed transactions to a cluster and waits for them to land.
pub trait Transport {
    /// Signs `instructions` with `signer`, who also pays the fee, and returns
    /// the transaction signature once it is confirmed.
    fn send(&mut self, instructions: &[Instruction], signer: &Keypair) -> Result<Signature, TransportError>;
}

impl Transport for RpcClient {
    fn send(&mut self, instructions: &[Instruction], signer: &Keypair) -> Result<Signature, TransportError> {
        let blockhash = self
            .get_latest_blockhash()
            .map_err(|err| TransportError::Blockhash(err.to_string()))?;

        let transaction =
            Transaction::new_signed_with_payer(instructions, Some(&signer.pubkey()), &[signer], blockhash);

        self.send_and_confirm_transaction(&transaction)
            .map_err(|err| TransportError::Rejected(err.to_string()))
    }
}
