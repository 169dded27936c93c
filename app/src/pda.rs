use anchor_lang::prelude::Pubkey;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;
use swap::OFFER_SEED;

/// Offer PDA for one maker's offer id, with its bump.
pub fn offer_address(program_id: &Pubkey, maker: &Pubkey, id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[OFFER_SEED, maker.as_ref(), &id.to_le_bytes()], program_id)
}

/// The vault is the offer's associated token account for mint A.
pub fn vault_address(offer: &Pubkey, token_mint_a: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(offer, token_mint_a, token_program)
}

pub fn token_account_address(owner: &Pubkey, mint: &Pubkey, token_program: &Pubkey) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program)
}
