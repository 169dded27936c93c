use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{error::SwapError, Offer, ANCHOR_DISCRIMINATOR, OFFER_SEED};

#[derive(Accounts)]
// the id is part of the offer seeds, so one maker can have many open offers
#[instruction(id: u64)]
pub struct MakeOffer<'info> {
    #[account(mut)]
    pub maker: Signer<'info>,

    // both mints must belong to the token program passed in, SPL Token or Token-2022
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint_a: InterfaceAccount<'info, Mint>,
    #[account(
        mint::token_program = token_program,
    )]
    pub token_mint_b: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        associated_token::mint = token_mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program,
    )]
    pub maker_token_account_a: InterfaceAccount<'info, TokenAccount>,

    #[account(
        init,
        payer = maker,
        seeds = [OFFER_SEED, maker.key().as_ref(), id.to_le_bytes().as_ref()],
        space = ANCHOR_DISCRIMINATOR + Offer::INIT_SPACE,
        bump,
    )]
    pub offer: Account<'info, Offer>,

    // vault is the offer's token account, it holds token A until the offer is taken or refunded
    #[account(
        init,
        payer = maker,
        associated_token::mint = token_mint_a,
        associated_token::authority = offer,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> MakeOffer<'info> {
    pub fn check_offer_terms(&self, token_a_offered_amount: u64, token_b_wanted_amount: u64) -> Result<()> {
        require!(token_a_offered_amount > 0, SwapError::ZeroOfferedAmount);
        require!(token_b_wanted_amount > 0, SwapError::ZeroWantedAmount);
        require_keys_neq!(
            self.token_mint_a.key(),
            self.token_mint_b.key(),
            SwapError::SameTokenMints
        );
        Ok(())
    }

    pub fn send_offered_tokens_to_vault(&mut self, token_a_offered_amount: u64) -> Result<()> {
        msg!(
            "Moving {} of mint {} into vault {}",
            token_a_offered_amount,
            self.token_mint_a.key(),
            self.vault.key()
        );

        let transfer_accounts = TransferChecked {
            from: self.maker_token_account_a.to_account_info(),
            mint: self.token_mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };

        // the maker signed the transaction, no PDA seeds needed here
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);
        transfer_checked(cpi_ctx, token_a_offered_amount, self.token_mint_a.decimals)
            .map_err(|_| SwapError::InsufficientMakerBalance)?;
        Ok(())
    }

    pub fn save_offer(&mut self, id: u64, token_b_wanted_amount: u64, bumps: &MakeOfferBumps) -> Result<()> {
        self.offer.set_inner(Offer {
            id,
            maker: self.maker.key(),
            token_mint_a: self.token_mint_a.key(),
            token_mint_b: self.token_mint_b.key(),
            token_b_wanted_amount,
            bump: bumps.offer,
        });
        msg!("Offer {} saved at {}", id, self.offer.key());
        Ok(())
    }
}
