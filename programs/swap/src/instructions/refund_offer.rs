use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{Mint, TokenAccount, TokenInterface},
};

use super::shared::drain_and_close_vault;
use crate::{Offer, OFFER_SEED};

// the maker cancels an offer nobody has taken yet
#[derive(Accounts)]
pub struct RefundOffer<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    pub token_mint_a: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_a: InterfaceAccount<'info, TokenAccount>,

    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = token_mint_a,
        seeds = [OFFER_SEED, maker.key().as_ref(), offer.id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> RefundOffer<'info> {
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        msg!(
            "Refunding {} of mint {} to maker {}",
            self.vault.amount,
            self.token_mint_a.key(),
            self.maker.key()
        );

        drain_and_close_vault(
            &self.offer,
            &self.vault,
            &self.maker_token_account_a,
            &self.token_mint_a,
            &self.maker.to_account_info(),
            &self.token_program,
        )
    }
}
