use anchor_lang::{
    prelude::Pubkey, solana_program::instruction::Instruction, system_program, InstructionData,
    ToAccountMetas,
};
use anchor_spl::associated_token;

use crate::{
    config::AppConfig,
    pda::{offer_address, token_account_address, vault_address},
};

pub fn make_offer_instruction(
    config: &AppConfig,
    maker: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    id: u64,
    token_a_offered_amount: u64,
    token_b_wanted_amount: u64,
) -> Instruction {
    let (offer, _) = offer_address(&config.program_id, maker, id);

    Instruction {
        program_id: config.program_id,
        accounts: swap::accounts::MakeOffer {
            maker: *maker,
            token_mint_a: *token_mint_a,
            token_mint_b: *token_mint_b,
            maker_token_account_a: token_account_address(maker, token_mint_a, &config.token_program),
            offer,
            vault: vault_address(&offer, token_mint_a, &config.token_program),
            associated_token_program: associated_token::ID,
            token_program: config.token_program,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: swap::instruction::MakeOffer {
            id,
            token_a_offered_amount,
            token_b_wanted_amount,
        }
        .data(),
    }
}

pub fn take_offer_instruction(
    config: &AppConfig,
    taker: &Pubkey,
    maker: &Pubkey,
    token_mint_a: &Pubkey,
    token_mint_b: &Pubkey,
    id: u64,
) -> Instruction {
    let (offer, _) = offer_address(&config.program_id, maker, id);

    Instruction {
        program_id: config.program_id,
        accounts: swap::accounts::TakeOffer {
            taker: *taker,
            maker: *maker,
            token_mint_a: *token_mint_a,
            token_mint_b: *token_mint_b,
            taker_token_account_a: token_account_address(taker, token_mint_a, &config.token_program),
            taker_token_account_b: token_account_address(taker, token_mint_b, &config.token_program),
            maker_token_account_b: token_account_address(maker, token_mint_b, &config.token_program),
            offer,
            vault: vault_address(&offer, token_mint_a, &config.token_program),
            associated_token_program: associated_token::ID,
            token_program: config.token_program,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: swap::instruction::TakeOffer {}.data(),
    }
}

pub fn refund_offer_instruction(config: &AppConfig, maker: &Pubkey, token_mint_a: &Pubkey, id: u64) -> Instruction {
    let (offer, _) = offer_address(&config.program_id, maker, id);

    Instruction {
        program_id: config.program_id,
        accounts: swap::accounts::RefundOffer {
            maker: *maker,
            token_mint_a: *token_mint_a,
            maker_token_account_a: token_account_address(maker, token_mint_a, &config.token_program),
            offer,
            vault: vault_address(&offer, token_mint_a, &config.token_program),
            associated_token_program: associated_token::ID,
            token_program: config.token_program,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: swap::instruction::RefundOffer {}.data(),
    }
}
