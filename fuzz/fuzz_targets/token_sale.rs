#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};
use token_sale::{SaleStatus, TokenSaleContract, TokenSaleContractClient};

const SCALE: i128 = 10_000_000;
const INVENTORY: i128 = 1_000_000 * SCALE;
const BUYER_FUNDS: i128 = 1_000_000_000;

/// Actions modelling every sale entry point.
///
/// Quantities are split into whole tokens and a sub-token remainder so the
/// floor pricing path is hit on most inputs.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Purchase { whole: u16, fraction: u32, offset: i8 },
    ReceivePayment { amount: u32 },
    SetPrice { price: u16 },
    Finalize,
    StrangerFinalize,
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let sale_tok = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let pay_tok = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(TokenSaleContract, ());
    let client = TokenSaleContractClient::new(&env, &contract_id);

    if client
        .try_initialize(
            &owner,
            &sale_tok.address(),
            &pay_tok.address(),
            &5i128,
            &INVENTORY,
            &Some(7u32),
        )
        .is_err()
    {
        return;
    }

    StellarAssetClient::new(&env, &sale_tok.address()).mint(&contract_id, &INVENTORY);

    let mut users = Vec::new();
    for _ in 0..4 {
        let u = Address::generate(&env);
        StellarAssetClient::new(&env, &pay_tok.address()).mint(&u, &BUYER_FUNDS);
        users.push(u);
    }

    let sale = TokenClient::new(&env, &sale_tok.address());
    let pay = TokenClient::new(&env, &pay_tok.address());
    let minted = BUYER_FUNDS * users.len() as i128;

    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        let sold_before = client.total_sold();

        match action {
            FuzzAction::Purchase { whole, fraction, offset } => {
                let quantity = whole as i128 * SCALE + (fraction as i128 % SCALE);
                let cost = client.try_quote(&quantity).ok().and_then(|r| r.ok()).unwrap_or(0);
                let paid = cost + offset as i128;
                let result = client.try_purchase(caller, &quantity, &paid);
                if offset != 0 {
                    assert!(result.is_err(), "mispaid purchase accepted: {:?}", result);
                }
            }
            FuzzAction::ReceivePayment { amount } => {
                let _ = client.try_receive_payment(caller, &(amount as i128));
            }
            FuzzAction::SetPrice { price } => {
                let _ = client.try_set_price(&owner, &(price as i128));
            }
            FuzzAction::Finalize => {
                let _ = client.try_finalize(&owner);
            }
            FuzzAction::StrangerFinalize => {
                assert!(client.try_finalize(caller).is_err());
            }
        }

        // ── Post-action invariant checks ──
        let sold = client.total_sold();
        assert!(sold >= sold_before, "INVARIANT VIOLATION: total_sold decreased");

        let delivered: i128 = users.iter().map(|u| sale.balance(u)).sum();
        assert_eq!(sold, delivered, "INVARIANT VIOLATION: sold != delivered");

        let tokens = sale.balance(&contract_id) + delivered + sale.balance(&owner);
        assert_eq!(tokens, INVENTORY, "INVARIANT VIOLATION: sale tokens not conserved");

        let currency: i128 = users.iter().map(|u| pay.balance(u)).sum::<i128>()
            + pay.balance(&contract_id)
            + pay.balance(&owner);
        assert_eq!(currency, minted, "INVARIANT VIOLATION: payment not conserved");

        if client.status() == SaleStatus::Finalized {
            assert_eq!(sale.balance(&contract_id), 0);
            assert_eq!(pay.balance(&contract_id), 0);
        }
    }
});
