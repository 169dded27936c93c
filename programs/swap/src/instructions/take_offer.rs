use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use super::shared::drain_and_close_vault;
use crate::{error::SwapError, Offer, OFFER_SEED};

#[derive(Accounts)]
pub struct TakeOffer<'info> {
    // pays for any token account that has to be created
    #[account(mut)]
    pub taker: Signer<'info>,

    #[account(mut)]
    pub maker: SystemAccount<'info>,

    pub token_mint_a: InterfaceAccount<'info, Mint>,
    pub token_mint_b: InterfaceAccount<'info, Mint>,

    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_token_account_a: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program,
    )]
    pub taker_token_account_b: Box<InterfaceAccount<'info, TokenAccount>>,

    // the maker may never have held token B before
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = token_mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_b: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        close = maker,
        has_one = maker,
        has_one = token_mint_a,
        has_one = token_mint_b,
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
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> TakeOffer<'info> {
    pub fn send_wanted_tokens_to_maker(&mut self) -> Result<()> {
        msg!(
            "Taker {} sends {} of mint {} to maker {}",
            self.taker.key(),
            self.offer.token_b_wanted_amount,
            self.token_mint_b.key(),
            self.maker.key()
        );

        let transfer_accounts = TransferChecked {
            from: self.taker_token_account_b.to_account_info(),
            mint: self.token_mint_b.to_account_info(),
            to: self.maker_token_account_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);
        transfer_checked(
            cpi_ctx,
            self.offer.token_b_wanted_amount,
            self.token_mint_b.decimals,
        )
        .map_err(|_| SwapError::InsufficientTakerBalance)?;
        Ok(())
    }

    pub fn withdraw_and_close_vault(&mut self) -> Result<()> {
        msg!(
            "Releasing {} of mint {} from vault {} to taker",
            self.vault.amount,
            self.token_mint_a.key(),
            self.vault.key()
        );

        drain_and_close_vault(
            &self.offer,
            &self.vault,
            &self.taker_token_account_a,
            &self.token_mint_a,
            &self.maker.to_account_info(),
            &self.token_program,
        )
    }
}
