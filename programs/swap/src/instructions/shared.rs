use anchor_lang::prelude::*;

use anchor_spl::token_interface::{
    close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
    TransferChecked,
};

use crate::{error::SwapError, Offer, OFFER_SEED};

/// Empties the vault into `destination` and closes it, returning the rent to
/// `rent_receiver`. The offer PDA owns the vault, so both CPIs are signed with
/// the offer seeds.
pub fn drain_and_close_vault<'info>(
    offer: &Account<'info, Offer>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    destination: &InterfaceAccount<'info, TokenAccount>,
    token_mint_a: &InterfaceAccount<'info, Mint>,
    rent_receiver: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
) -> Result<()> {
    let id_bytes = offer.id.to_le_bytes();
    let seeds = &[
        OFFER_SEED,
        offer.maker.as_ref(),
        &id_bytes[..],
        &[offer.bump],
    ];
    let signer_seeds = [&seeds[..]];

    let transfer_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: token_mint_a.to_account_info(),
        to: destination.to_account_info(),
        authority: offer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        transfer_accounts,
        &signer_seeds,
    );
    transfer_checked(cpi_ctx, vault.amount, token_mint_a.decimals)
        .map_err(|_| SwapError::FailedVaultWithdrawal)?;

    let close_accounts = CloseAccount {
        account: vault.to_account_info(),
        destination: rent_receiver.clone(),
        authority: offer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        close_accounts,
        &signer_seeds,
    );
    close_account(cpi_ctx).map_err(|_| SwapError::FailedVaultClosure)?;

    Ok(())
}
