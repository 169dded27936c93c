use std::str::FromStr;

use anchor_lang::{prelude::Pubkey, solana_program::instruction::Instruction};
use log::{error, info};
use rand::Rng;
use solana_sdk::signature::{Keypair, Signature, Signer};

use crate::{
    config::AppConfig,
    error::SwapError,
    instructions::{make_offer_instruction, take_offer_instruction},
    notify::Notifier,
    transport::Transport,
    wallet::WalletProvider,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Make,
    Take,
}

/// The make/take offer form.
///
/// Fields hold what the user typed. Nothing is parsed until [`SwapForm::submit`],
/// which checks the wallet and the offer id first, then the inputs, and only
/// then sends a single transaction.
#[derive(Debug, Clone)]
pub struct SwapForm {
    mode: Mode,
    // generated per session, shown to the maker so they can hand it to a taker
    offer_id: Option<u64>,
    pub token_mint_a: String,
    pub token_mint_b: String,
    pub token_a_amount: f64,
    pub token_b_amount: f64,
    pub offer_maker_account: String,
    pub maker_offer_id: String,
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SwapForm {
    pub fn new() -> Self {
        Self {
            mode: Mode::default(),
            offer_id: Some(new_offer_id()),
            token_mint_a: String::new(),
            token_mint_b: String::new(),
            token_a_amount: 0.0,
            token_b_amount: 0.0,
            offer_maker_account: String::new(),
            maker_offer_id: String::new(),
        }
    }

    pub fn with_offer_id(mut self, offer_id: Option<u64>) -> Self {
        self.offer_id = offer_id;
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn offer_id(&self) -> Option<u64> {
        self.offer_id
    }

    /// Builds the instruction for the current mode without sending it.
    pub fn prepare<'w>(&self, wallet: &'w WalletProvider) -> Result<(Instruction, &'w Keypair), SwapError> {
        let signer = wallet.signer().ok_or(SwapError::WalletNotConnected)?;
        let instruction = match self.mode {
            Mode::Make => self.prepare_make_offer(wallet.config(), &signer.pubkey())?,
            Mode::Take => self.prepare_take_offer(wallet.config(), &signer.pubkey())?,
        };
        Ok((instruction, signer))
    }

    /// Sends the current mode's instruction and reports the outcome through
    /// `notifier`: an alert when the submit is refused up front, a success
    /// with the signature, or an error when the cluster rejects it.
    pub fn submit<T, N>(
        &mut self,
        wallet: &WalletProvider,
        transport: &mut T,
        notifier: &mut N,
    ) -> Result<Signature, SwapError>
    where
        T: Transport + ?Sized,
        N: Notifier + ?Sized,
    {
        let sent = match self.prepare(wallet) {
            Ok((instruction, signer)) => {
                match self.mode {
                    Mode::Make => info!("making offer {:?}", self.offer_id),
                    Mode::Take => info!("taking offer {} of {}", self.maker_offer_id, self.offer_maker_account),
                }
                transport.send(&[instruction], signer).map_err(SwapError::from)
            }
            Err(err) => Err(err),
        };

        match sent {
            Ok(signature) => {
                info!("transaction confirmed: {signature}");
                notifier.success(&format!("Transaction Signature: {signature}"));
                if self.mode == Mode::Make {
                    // the id is spent, the next offer needs its own
                    self.offer_id = Some(new_offer_id());
                }
                Ok(signature)
            }
            Err(err) if err.is_precondition() => {
                notifier.alert(&err.to_string());
                Err(err)
            }
            Err(err) => {
                error!("transaction failed: {err}");
                notifier.error(&format!("Transaction failed: {err}"));
                Err(err)
            }
        }
    }

    fn prepare_make_offer(&self, config: &AppConfig, maker: &Pubkey) -> Result<Instruction, SwapError> {
        // zero reads as "no id", the same as an empty id field
        let offer_id = self.offer_id.filter(|id| *id != 0).ok_or(SwapError::MissingOfferId)?;
        let token_mint_a = parse_address("Token Mint A", &self.token_mint_a)?;
        let token_mint_b = parse_address("Token Mint B", &self.token_mint_b)?;
        let token_a_offered_amount = scale_amount("TokenA Swap Amount", self.token_a_amount, config.token_a_scale)?;
        let token_b_wanted_amount = scale_amount("TokenB Swap Amount", self.token_b_amount, config.token_b_scale)?;

        Ok(make_offer_instruction(
            config,
            maker,
            &token_mint_a,
            &token_mint_b,
            offer_id,
            token_a_offered_amount,
            token_b_wanted_amount,
        ))
    }

    fn prepare_take_offer(&self, config: &AppConfig, taker: &Pubkey) -> Result<Instruction, SwapError> {
        let offer_id = parse_offer_id("Offer Id", &self.maker_offer_id)?;
        let maker = parse_address("Offer Maker Account", &self.offer_maker_account)?;
        let token_mint_a = parse_address("Token Mint A", &self.token_mint_a)?;
        let token_mint_b = parse_address("Token Mint B", &self.token_mint_b)?;

        Ok(take_offer_instruction(
            config,
            taker,
            &maker,
            &token_mint_a,
            &token_mint_b,
            offer_id,
        ))
    }
}

fn parse_address(field: &'static str, value: &str) -> Result<Pubkey, SwapError> {
    Pubkey::from_str(value.trim()).map_err(|_| SwapError::InvalidAddress {
        field,
        value: value.to_string(),
    })
}

fn parse_offer_id(field: &'static str, value: &str) -> Result<u64, SwapError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(SwapError::MissingOfferId);
    }
    match value.parse() {
        Ok(0) => Err(SwapError::MissingOfferId),
        Ok(id) => Ok(id),
        Err(_) => Err(SwapError::InvalidOfferId {
            field,
            value: value.to_string(),
        }),
    }
}

fn new_offer_id() -> u64 {
    rand::thread_rng().gen_range(1..=u64::MAX)
}

/// Converts a typed amount to base units, rounding to the nearest unit.
fn scale_amount(field: &'static str, amount: f64, scale: u64) -> Result<u64, SwapError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(SwapError::InvalidAmount { field });
    }
    let scaled = (amount * scale as f64).round();
    // u64::MAX as f64 rounds up to 2^64, which is already out of range
    if scaled >= u64::MAX as f64 {
        return Err(SwapError::AmountOverflow { field });
    }
    Ok(scaled as u64)
}
