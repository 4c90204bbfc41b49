//! # Fixed-Price Token Sale Contract
//!
//! Sells a fungible token held by this contract for a payment token at an
//! owner-set price, keeps a running total of base units sold, and lets the
//! owner sweep proceeds and unsold inventory back out when the sale ends.
//!
//! ## Pricing
//! Prices are quoted per whole token (`scale` base units, `10^18` unless
//! configured otherwise). A purchase of `q` base units costs
//! `(q / scale) * unit_price` payment units, with floor division.
//!
//! ## Lifecycle
//! ```text
//! initialize ──► Active ──finalize──► Finalized
//!                  │  ▲                  │  ▲
//!          purchase└──┘          finalize└──┘
//! ```
//! `finalize` may be called repeatedly; once it has run, further purchases
//! are rejected with [`SaleError::SaleFinalized`].
//!
//! ## Custody
//! The sale token contract is the source of truth for inventory and the
//! payment token contract for proceeds. This contract only stores the price,
//! the sold counter and the sale status.
#![no_std]

pub mod events;
pub mod pricing;
mod storage;

use common::{reentrancy_guard, CommonError};
use pricing::PricingError;

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, log, token, Address, Env};

// ── Types ─────────────────────────────────────────────────────────────────────

/// Immutable sale parameters, fixed at initialisation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub owner: Address,
    /// Token being sold. Inventory is this contract's balance here.
    pub sale_token: Address,
    /// Token buyers pay with. Proceeds are this contract's balance here.
    pub payment_token: Address,
    /// Advisory cap on total sales; not enforced beyond available inventory.
    pub max_supply: i128,
    /// Base units per whole token.
    pub scale: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SaleStatus {
    Active,
    Finalized,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseReceipt {
    pub buyer: Address,
    pub quantity: i128,
    pub paid: i128,
    pub total_sold: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FinalizeReceipt {
    pub owner: Address,
    pub total_sold: i128,
    pub currency_raised: i128,
    pub tokens_returned: i128,
}

// ── Contract errors ───────────────────────────────────────────────────────────

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SaleError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    PaymentMismatch = 5,
    InsufficientInventory = 6,
    TransferFailed = 7,
    SaleFinalized = 8,
    InvalidPrice = 9,
    Overflow = 10,
    InvalidConfig = 11,
    Reentrant = 12,
}

impl From<CommonError> for SaleError {
    fn from(e: CommonError) -> Self {
        match e {
            CommonError::NotInitialized => SaleError::NotInitialized,
            CommonError::AlreadyInitialized => SaleError::AlreadyInitialized,
            CommonError::AccessDenied => SaleError::Unauthorized,
            CommonError::InvalidInput => SaleError::InvalidAmount,
            CommonError::Reentrant => SaleError::Reentrant,
        }
    }
}

fn map_pricing_error(e: PricingError) -> SaleError {
    match e {
        PricingError::UnsupportedDecimals => SaleError::InvalidConfig,
        PricingError::ZeroPrice => SaleError::InvalidPrice,
        PricingError::Overflow => SaleError::Overflow,
    }
}

// ── Token helpers ─────────────────────────────────────────────────────────────

fn balance_of(env: &Env, token: &Address, holder: &Address) -> i128 {
    token::TokenClient::new(env, token).balance(holder)
}

/// Move `amount` of `token`, surfacing any rejection by the token contract as
/// `TransferFailed`. Zero amounts are skipped.
fn transfer(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), SaleError> {
    if amount == 0 {
        return Ok(());
    }
    match token::TokenClient::new(env, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer rejected", token.clone(), amount);
            Err(SaleError::TransferFailed)
        }
    }
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Configure the sale. `decimals` selects the whole-token scale and
    /// defaults to [`pricing::REFERENCE_DECIMALS`].
    ///
    /// The sale token inventory is whatever balance this contract holds in
    /// `sale_token`; fund it by transferring tokens to the contract address.
    pub fn initialize(
        env: Env,
        owner: Address,
        sale_token: Address,
        payment_token: Address,
        unit_price: i128,
        max_supply: i128,
        decimals: Option<u32>,
    ) -> Result<(), SaleError> {
        if storage::is_initialized(&env) {
            return Err(SaleError::AlreadyInitialized);
        }

        owner.require_auth();

        if unit_price < 0 || max_supply < 0 {
            return Err(SaleError::InvalidAmount);
        }
        if sale_token == payment_token {
            return Err(SaleError::InvalidConfig);
        }

        let scale =
            pricing::scale_for_decimals(decimals.unwrap_or(pricing::REFERENCE_DECIMALS))
                .map_err(map_pricing_error)?;

        let config = SaleConfig {
            owner: owner.clone(),
            sale_token: sale_token.clone(),
            payment_token: payment_token.clone(),
            max_supply,
            scale,
        };
        storage::set_config(&env, &config);
        storage::set_unit_price(&env, unit_price);
        storage::set_total_sold(&env, 0);
        storage::set_status(&env, &SaleStatus::Active);

        events::publish_initialized(&env, owner, sale_token, payment_token, unit_price, max_supply);

        Ok(())
    }

    // ── Guards ────────────────────────────────────────────────────────────────

    fn require_owner(config: &SaleConfig, caller: &Address) -> Result<(), SaleError> {
        if *caller != config.owner {
            return Err(SaleError::Unauthorized);
        }
        Ok(())
    }

    fn require_active(env: &Env) -> Result<SaleConfig, SaleError> {
        let config = storage::get_config(env)?;
        if storage::get_status(env) == SaleStatus::Finalized {
            return Err(SaleError::SaleFinalized);
        }
        Ok(config)
    }

    // ── Purchasing ────────────────────────────────────────────────────────────

    /// Buy `quantity` base units for exactly `paid_amount` payment units.
    ///
    /// `paid_amount` must equal `(quantity / scale) * unit_price`.
    pub fn purchase(
        env: Env,
        buyer: Address,
        quantity: i128,
        paid_amount: i128,
    ) -> Result<PurchaseReceipt, SaleError> {
        buyer.require_auth();

        reentrancy_guard::guarded(&env, || {
            let config = Self::require_active(&env)?;

            if quantity <= 0 || paid_amount < 0 {
                return Err(SaleError::InvalidAmount);
            }

            let unit_price = storage::get_unit_price(&env);
            let expected =
                pricing::cost_of(quantity, unit_price, config.scale).map_err(map_pricing_error)?;
            if paid_amount != expected {
                log!(&env, "payment mismatch", paid_amount, expected);
                return Err(SaleError::PaymentMismatch);
            }

            Self::execute_sale(&env, &config, &buyer, quantity, paid_amount)
        })
    }

    /// Spend `paid_amount` on as many whole tokens as it covers.
    ///
    /// The whole payment is collected. Any remainder smaller than the unit
    /// price stays with the contract and is swept by `finalize`.
    pub fn receive_payment(
        env: Env,
        buyer: Address,
        paid_amount: i128,
    ) -> Result<PurchaseReceipt, SaleError> {
        buyer.require_auth();

        reentrancy_guard::guarded(&env, || {
            let config = Self::require_active(&env)?;

            if paid_amount < 0 {
                return Err(SaleError::InvalidAmount);
            }

            let unit_price = storage::get_unit_price(&env);
            let quantity = pricing::quantity_for(paid_amount, unit_price, config.scale)
                .map_err(map_pricing_error)?;
            if quantity == 0 {
                return Err(SaleError::InvalidAmount);
            }

            Self::execute_sale(&env, &config, &buyer, quantity, paid_amount)
        })
    }

    /// Shared settlement path. Accounting is committed before either token
    /// contract is called.
    fn execute_sale(
        env: &Env,
        config: &SaleConfig,
        buyer: &Address,
        quantity: i128,
        paid: i128,
    ) -> Result<PurchaseReceipt, SaleError> {
        let ledger = env.current_contract_address();

        let inventory = balance_of(env, &config.sale_token, &ledger);
        if inventory < quantity {
            log!(env, "insufficient inventory", inventory, quantity);
            return Err(SaleError::InsufficientInventory);
        }

        let total_sold = storage::get_total_sold(env)
            .checked_add(quantity)
            .ok_or(SaleError::Overflow)?;
        storage::set_total_sold(env, total_sold);

        transfer(env, &config.payment_token, buyer, &ledger, paid)?;
        transfer(env, &config.sale_token, &ledger, buyer, quantity)?;

        events::publish_purchase(env, buyer.clone(), quantity, paid, total_sold);

        Ok(PurchaseReceipt {
            buyer: buyer.clone(),
            quantity,
            paid,
            total_sold,
        })
    }

    // ── Owner operations ──────────────────────────────────────────────────────

    /// Replace the unit price. Owner only. Zero is accepted.
    pub fn set_price(env: Env, caller: Address, new_price: i128) -> Result<(), SaleError> {
        caller.require_auth();
        let config = storage::get_config(&env)?;
        Self::require_owner(&config, &caller)?;

        if new_price < 0 {
            return Err(SaleError::InvalidAmount);
        }

        storage::set_unit_price(&env, new_price);
        Ok(())
    }

    /// Sweep the contract's entire sale-token and payment-token balances to
    /// the owner and close the sale. Owner only; safe to call repeatedly.
    pub fn finalize(env: Env, caller: Address) -> Result<FinalizeReceipt, SaleError> {
        caller.require_auth();

        reentrancy_guard::guarded(&env, || {
            let config = storage::get_config(&env)?;
            Self::require_owner(&config, &caller)?;

            let ledger = env.current_contract_address();
            let tokens_returned = balance_of(&env, &config.sale_token, &ledger);
            let currency_raised = balance_of(&env, &config.payment_token, &ledger);

            storage::set_status(&env, &SaleStatus::Finalized);

            transfer(&env, &config.sale_token, &ledger, &config.owner, tokens_returned)?;
            transfer(&env, &config.payment_token, &ledger, &config.owner, currency_raised)?;

            let total_sold = storage::get_total_sold(&env);
            events::publish_finalize(
                &env,
                config.owner.clone(),
                total_sold,
                currency_raised,
                tokens_returned,
            );

            Ok(FinalizeReceipt {
                owner: config.owner,
                total_sold,
                currency_raised,
                tokens_returned,
            })
        })
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn get_config(env: Env) -> Result<SaleConfig, SaleError> {
        storage::get_config(&env)
    }

    pub fn get_owner(env: Env) -> Result<Address, SaleError> {
        Ok(storage::get_config(&env)?.owner)
    }

    pub fn unit_price(env: Env) -> i128 {
        storage::get_unit_price(&env)
    }

    pub fn max_supply(env: Env) -> Result<i128, SaleError> {
        Ok(storage::get_config(&env)?.max_supply)
    }

    pub fn total_sold(env: Env) -> i128 {
        storage::get_total_sold(&env)
    }

    pub fn status(env: Env) -> SaleStatus {
        storage::get_status(&env)
    }

    /// Sale tokens currently held by the contract.
    pub fn inventory(env: Env) -> Result<i128, SaleError> {
        let config = storage::get_config(&env)?;
        Ok(balance_of(&env, &config.sale_token, &env.current_contract_address()))
    }

    /// Payment tokens currently held by the contract.
    pub fn currency_balance(env: Env) -> Result<i128, SaleError> {
        let config = storage::get_config(&env)?;
        Ok(balance_of(&env, &config.payment_token, &env.current_contract_address()))
    }

    /// Payment owed for `quantity` base units at the current price.
    pub fn quote(env: Env, quantity: i128) -> Result<i128, SaleError> {
        let config = storage::get_config(&env)?;
        if quantity < 0 {
            return Err(SaleError::InvalidAmount);
        }
        pricing::cost_of(quantity, storage::get_unit_price(&env), config.scale)
            .map_err(map_pricing_error)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
