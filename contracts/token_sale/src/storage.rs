//! Instance-storage accessors for the sale state.

use common::extend_instance_ttl;
use soroban_sdk::{symbol_short, Env, Symbol};

use crate::{SaleConfig, SaleError, SaleStatus};

// ── Storage keys ──────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const PRICE: Symbol = symbol_short!("PRICE");
const SOLD: Symbol = symbol_short!("SOLD");
const STATUS: Symbol = symbol_short!("STATUS");

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&CONFIG)
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&CONFIG, config);
    extend_instance_ttl(env);
}

pub fn get_config(env: &Env) -> Result<SaleConfig, SaleError> {
    let config = env
        .storage()
        .instance()
        .get(&CONFIG)
        .ok_or(SaleError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_unit_price(env: &Env, price: i128) {
    env.storage().instance().set(&PRICE, &price);
}

pub fn get_unit_price(env: &Env) -> i128 {
    env.storage().instance().get(&PRICE).unwrap_or(0)
}

pub fn set_total_sold(env: &Env, total: i128) {
    env.storage().instance().set(&SOLD, &total);
}

pub fn get_total_sold(env: &Env) -> i128 {
    env.storage().instance().get(&SOLD).unwrap_or(0)
}

pub fn set_status(env: &Env, status: &SaleStatus) {
    env.storage().instance().set(&STATUS, status);
}

pub fn get_status(env: &Env) -> SaleStatus {
    env.storage()
        .instance()
        .get(&STATUS)
        .unwrap_or(SaleStatus::Active)
}
