use anchor_lang::prelude::*;

#[constant]
pub const OFFER_SEED: &[u8] = b"offer";

pub const ANCHOR_DISCRIMINATOR: usize = 8;
