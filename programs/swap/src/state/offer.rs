use anchor_lang::prelude::*;

#[account]
// space is derived from the field types, see Offer::INIT_SPACE
#[derive(InitSpace)]
pub struct Offer {
    pub id: u64,
    pub maker: Pubkey,
    // token the maker put in the vault
    pub token_mint_a: Pubkey,
    // token the maker wants back
    pub token_mint_b: Pubkey,
    pub token_b_wanted_amount: u64,
    pub bump: u8,
}
