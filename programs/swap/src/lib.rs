#![allow(unexpected_cfgs)]
use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

#[cfg(test)]
mod tests;

declare_id!("9qv82dgWeM3HMGjL78SJh8vCgdzjT5o17CYxU68ogeEy");

#[program]
pub mod swap {
    use super::*;

    pub fn make_offer(
        ctx: Context<MakeOffer>,
        id: u64,
        token_a_offered_amount: u64,
        token_b_wanted_amount: u64,
    ) -> Result<()> {
        ctx.accounts.check_offer_terms(token_a_offered_amount, token_b_wanted_amount)?;
        // the vault is created by the accounts constraints, fill it before saving the offer
        ctx.accounts.send_offered_tokens_to_vault(token_a_offered_amount)?;
        ctx.accounts.save_offer(id, token_b_wanted_amount, &ctx.bumps)
    }

    pub fn take_offer(ctx: Context<TakeOffer>) -> Result<()> {
        ctx.accounts.send_wanted_tokens_to_maker()?;
        ctx.accounts.withdraw_and_close_vault()
    }

    pub fn refund_offer(ctx: Context<RefundOffer>) -> Result<()> {
        ctx.accounts.refund_and_close_vault()
    }
}
