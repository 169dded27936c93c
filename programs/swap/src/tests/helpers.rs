use std::path::PathBuf;
use std::time::{Duration, Instant};

use anchor_lang::{
    prelude::Pubkey,
    solana_program::{instruction::Instruction, program_pack::Pack},
    AccountDeserialize, InstructionData, ToAccountMetas,
};
use anchor_spl::{
    associated_token::{
        get_associated_token_address_with_program_id,
        spl_associated_token_account::instruction::create_associated_token_account,
    },
    token_2022::spl_token_2022,
    token_interface::TokenAccount,
};
use litesvm::LiteSVM;
use solana_sdk::{
    native_token::LAMPORTS_PER_SOL,
    signature::{Keypair, Signature, Signer},
    system_instruction,
    transaction::Transaction,
};

use crate::{Offer, OFFER_SEED};

/// Token-2022 is what the client uses by default, so the tests do too.
pub const TOKEN_PROGRAM: Pubkey = spl_token_2022::ID;

pub const TOKEN_DECIMALS: u8 = 6;

/// Opening balance of token A for Alice and token B for Bob.
pub const STARTING_BALANCE: u64 = 1_000_000_000;

/// Calls slower than this are reported, never failed.
pub const SLOW_CALL_THRESHOLD: Duration = Duration::from_secs(40);

/// Everything a make/take scenario needs: the VM with the swap program loaded,
/// two funded users and two mints with opening balances.
pub struct SwapTestEnvironment {
    pub svm: LiteSVM,
    pub alice: Keypair,
    pub bob: Keypair,
    pub token_mint_a: Pubkey,
    pub token_mint_b: Pubkey,
    pub alice_token_account_a: Pubkey,
    pub alice_token_account_b: Pubkey,
    pub bob_token_account_a: Pubkey,
    pub bob_token_account_b: Pubkey,
}

/// Offer and vault addresses for one (maker, id) pair.
pub struct OfferAccounts {
    pub id: u64,
    pub offer: Pubkey,
    pub vault: Pubkey,
}

fn program_so_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/deploy/swap.so")
}

/// Builds the test environment. Panics when the program has not been compiled
/// with `anchor build` yet.
pub fn setup_swap_test() -> SwapTestEnvironment {
    let so_path = program_so_path();
    assert!(
        so_path.exists(),
        "{} not found, run `anchor build` first",
        so_path.display()
    );

    let mut svm = LiteSVM::new();
    svm.add_program_from_file(crate::ID, &so_path)
        .expect("swap program loads");

    let mint_authority = Keypair::new();
    let alice = Keypair::new();
    let bob = Keypair::new();
    for user in [&mint_authority, &alice, &bob] {
        svm.airdrop(&user.pubkey(), LAMPORTS_PER_SOL)
            .expect("airdrop succeeds");
    }

    let token_mint_a = create_mint(&mut svm, &mint_authority);
    let token_mint_b = create_mint(&mut svm, &mint_authority);

    let alice_token_account_a = create_token_account(&mut svm, &mint_authority, &alice.pubkey(), &token_mint_a);
    let alice_token_account_b = create_token_account(&mut svm, &mint_authority, &alice.pubkey(), &token_mint_b);
    let bob_token_account_a = create_token_account(&mut svm, &mint_authority, &bob.pubkey(), &token_mint_a);
    let bob_token_account_b = create_token_account(&mut svm, &mint_authority, &bob.pubkey(), &token_mint_b);

    mint_tokens(&mut svm, &mint_authority, &token_mint_a, &alice_token_account_a, STARTING_BALANCE);
    mint_tokens(&mut svm, &mint_authority, &token_mint_b, &bob_token_account_b, STARTING_BALANCE);

    SwapTestEnvironment {
        svm,
        alice,
        bob,
        token_mint_a,
        token_mint_b,
        alice_token_account_a,
        alice_token_account_b,
        bob_token_account_a,
        bob_token_account_b,
    }
}

fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    let mint = Keypair::new();
    let space = spl_token_2022::state::Mint::LEN;
    let rent = svm.minimum_balance_for_rent_exemption(space);

    let instructions = vec![
        system_instruction::create_account(
            &authority.pubkey(),
            &mint.pubkey(),
            rent,
            space as u64,
            &TOKEN_PROGRAM,
        ),
        spl_token_2022::instruction::initialize_mint2(
            &TOKEN_PROGRAM,
            &mint.pubkey(),
            &authority.pubkey(),
            None,
            TOKEN_DECIMALS,
        )
        .expect("initialize_mint2 instruction"),
    ];
    send_transaction(svm, instructions, &[authority, &mint], &authority.pubkey())
        .expect("mint is created");
    mint.pubkey()
}

pub fn create_token_account(svm: &mut LiteSVM, payer: &Keypair, owner: &Pubkey, mint: &Pubkey) -> Pubkey {
    let instruction = create_associated_token_account(&payer.pubkey(), owner, mint, &TOKEN_PROGRAM);
    send_transaction(svm, vec![instruction], &[payer], &payer.pubkey())
        .expect("token account is created");
    get_associated_token_address_with_program_id(owner, mint, &TOKEN_PROGRAM)
}

fn mint_tokens(svm: &mut LiteSVM, authority: &Keypair, mint: &Pubkey, destination: &Pubkey, amount: u64) {
    let instruction = spl_token_2022::instruction::mint_to(
        &TOKEN_PROGRAM,
        mint,
        destination,
        &authority.pubkey(),
        &[],
        amount,
    )
    .expect("mint_to instruction");
    send_transaction(svm, vec![instruction], &[authority], &authority.pubkey())
        .expect("tokens are minted");
}

pub fn send_transaction(
    svm: &mut LiteSVM,
    instructions: Vec<Instruction>,
    signers: &[&Keypair],
    payer: &Pubkey,
) -> Result<Signature, String> {
    let transaction = Transaction::new_signed_with_payer(
        &instructions,
        Some(payer),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(transaction)
        .map(|meta| meta.signature)
        .map_err(|failed| format!("{:?}: {:?}", failed.err, failed.meta.logs))
}

/// Runs `call`, printing a notice when it takes longer than the slow threshold.
pub fn timed<T>(label: &str, call: impl FnOnce() -> T) -> T {
    let started = Instant::now();
    let result = call();
    let elapsed = started.elapsed();
    if elapsed > SLOW_CALL_THRESHOLD {
        println!("slow: {label} took {elapsed:?}");
    }
    result
}

pub fn offer_accounts(maker: &Pubkey, id: u64, token_mint_a: &Pubkey) -> OfferAccounts {
    let (offer, _bump) = Pubkey::find_program_address(
        &[OFFER_SEED, maker.as_ref(), &id.to_le_bytes()],
        &crate::ID,
    );
    let vault = get_associated_token_address_with_program_id(&offer, token_mint_a, &TOKEN_PROGRAM);
    OfferAccounts { id, offer, vault }
}

pub fn build_make_offer_instruction(
    env: &SwapTestEnvironment,
    accounts: &OfferAccounts,
    token_a_offered_amount: u64,
    token_b_wanted_amount: u64,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::MakeOffer {
            maker: env.alice.pubkey(),
            token_mint_a: env.token_mint_a,
            token_mint_b: env.token_mint_b,
            maker_token_account_a: env.alice_token_account_a,
            offer: accounts.offer,
            vault: accounts.vault,
            associated_token_program: anchor_spl::associated_token::ID,
            token_program: TOKEN_PROGRAM,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::MakeOffer {
            id: accounts.id,
            token_a_offered_amount,
            token_b_wanted_amount,
        }
        .data(),
    }
}

pub fn build_take_offer_instruction(env: &SwapTestEnvironment, accounts: &OfferAccounts) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::TakeOffer {
            taker: env.bob.pubkey(),
            maker: env.alice.pubkey(),
            token_mint_a: env.token_mint_a,
            token_mint_b: env.token_mint_b,
            taker_token_account_a: env.bob_token_account_a,
            taker_token_account_b: env.bob_token_account_b,
            maker_token_account_b: env.alice_token_account_b,
            offer: accounts.offer,
            vault: accounts.vault,
            associated_token_program: anchor_spl::associated_token::ID,
            token_program: TOKEN_PROGRAM,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::TakeOffer {}.data(),
    }
}

pub fn build_refund_offer_instruction(
    env: &SwapTestEnvironment,
    maker: &Pubkey,
    accounts: &OfferAccounts,
) -> Instruction {
    Instruction {
        program_id: crate::ID,
        accounts: crate::accounts::RefundOffer {
            maker: *maker,
            token_mint_a: env.token_mint_a,
            maker_token_account_a: get_associated_token_address_with_program_id(
                maker,
                &env.token_mint_a,
                &TOKEN_PROGRAM,
            ),
            offer: accounts.offer,
            vault: accounts.vault,
            associated_token_program: anchor_spl::associated_token::ID,
            token_program: TOKEN_PROGRAM,
            system_program: anchor_lang::system_program::ID,
        }
        .to_account_metas(None),
        data: crate::instruction::RefundOffer {}.data(),
    }
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account = svm
        .get_account(token_account)
        .expect("token account exists");
    TokenAccount::try_deserialize(&mut account.data.as_slice())
        .expect("token account data")
        .amount
}

pub fn fetch_offer(svm: &LiteSVM, offer: &Pubkey) -> Option<Offer> {
    let account = svm.get_account(offer)?;
    if account.data.is_empty() {
        return None;
    }
    Offer::try_deserialize(&mut account.data.as_slice()).ok()
}

pub fn account_closed(svm: &LiteSVM, address: &Pubkey) -> bool {
    svm.get_account(address)
        .map_or(true, |account| account.lamports == 0 || account.data.is_empty())
}
