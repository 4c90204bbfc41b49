//! Events emitted by the token sale contract.

use soroban_sdk::{symbol_short, Address, Env};

// ── Internal helper ───────────────────────────────────────────────────────────

fn emit<T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>>(env: &Env, topic: &str, data: T) {
    #[allow(deprecated)]
    env.events()
        .publish((symbol_short!("SALE"), soroban_sdk::Symbol::new(env, topic)), data);
}

// ── Event structs ─────────────────────────────────────────────────────────────

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleInitializedEvent {
    pub owner: Address,
    pub sale_token: Address,
    pub payment_token: Address,
    pub unit_price: i128,
    pub max_supply: i128,
    pub timestamp: u64,
}

/// One per successful `purchase` or `receive_payment`.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseEvent {
    pub buyer: Address,
    pub quantity: i128,
    pub paid: i128,
    pub total_sold: i128,
    pub timestamp: u64,
}

/// One per `finalize` call, including calls that sweep nothing.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizeEvent {
    pub owner: Address,
    pub total_sold: i128,
    pub currency_raised: i128,
    pub tokens_returned: i128,
    pub timestamp: u64,
}

// ── Publishers ────────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    owner: Address,
    sale_token: Address,
    payment_token: Address,
    unit_price: i128,
    max_supply: i128,
) {
    emit(
        env,
        "Init",
        SaleInitializedEvent {
            owner,
            sale_token,
            payment_token,
            unit_price,
            max_supply,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_purchase(env: &Env, buyer: Address, quantity: i128, paid: i128, total_sold: i128) {
    emit(
        env,
        "Purchase",
        PurchaseEvent {
            buyer,
            quantity,
            paid,
            total_sold,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_finalize(
    env: &Env,
    owner: Address,
    total_sold: i128,
    currency_raised: i128,
    tokens_returned: i128,
) {
    emit(
        env,
        "Finalize",
        FinalizeEvent {
            owner,
            total_sold,
            currency_raised,
            tokens_returned,
            timestamp: env.ledger().timestamp(),
        },
    );
}
