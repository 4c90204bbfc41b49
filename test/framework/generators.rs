//! # Property-Based Test Generators
//!
//! Composable `proptest` strategies for generating valid and adversarial
//! inputs for the token sale contract.
//!
//! ## Design Decisions
//!
//! - Quantities are generated as whole tokens plus a sub-token fraction, so
//!   floor-division pricing is exercised on every run.
//! - Edge-case weights are tuned: a share of values are boundary cases
//!   (0, 1, the largest realistic value).

extern crate std;

use proptest::prelude::*;
use std::vec::Vec;

// ── Scalar Generators ────────────────────────────────────────────────────────

/// Strategy for unit prices in payment base units, biased toward edge cases.
pub fn price_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        1 => Just(0i128),
        2 => Just(1i128),
        4 => (1i128..=1_000i128),
        2 => (1i128..=10_000_000i128),      // 1 XLM in stroops
        1 => Just(1_000_000_000_000i128),
    ]
}

/// Strategy for strictly positive unit prices.
pub fn positive_price_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        2 => Just(1i128),
        6 => (1i128..=1_000i128),
        2 => (1i128..=10_000_000i128),
    ]
}

/// Strategy for whole-token purchase sizes.
pub fn whole_tokens_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        2 => Just(1i128),
        6 => (1i128..=100i128),
        2 => (100i128..=10_000i128),
    ]
}

/// Strategy for the sub-token part of a quantity, as a fraction of `scale`.
pub fn fraction_strategy(scale: i128) -> impl Strategy<Value = i128> {
    prop_oneof![
        5 => Just(0i128),
        1 => Just(1i128),
        1 => Just(scale - 1),
        3 => (0i128..scale),
    ]
}

/// Strategy for a non-zero offset applied to a correct payment.
pub fn payment_error_strategy() -> impl Strategy<Value = i128> {
    prop_oneof![
        3 => Just(1i128),
        3 => Just(-1i128),
        2 => (2i128..=1_000_000i128),
        2 => (-1_000_000i128..=-2i128),
    ]
}

// ── Action Generators ────────────────────────────────────────────────────────

/// Enumeration of sale contract actions for state exploration.
///
/// `user_index` selects from a pool of test buyers (modular indexing).
#[derive(Debug, Clone)]
pub enum SaleAction {
    /// Exact-quantity purchase. `payment_offset` is added to the correct
    /// payment; non-zero values must be rejected.
    Purchase {
        user_index: usize,
        whole: i128,
        fraction: i128,
        payment_offset: i128,
    },
    /// Direct payment converted to whole tokens at the current price.
    ReceivePayment { user_index: usize, payment: i128 },
    /// Owner reprices.
    SetPrice { new_price: i128 },
    /// A buyer attempts to reprice.
    UnauthorizedSetPrice { user_index: usize, new_price: i128 },
    /// Owner finalizes.
    Finalize,
    /// A buyer attempts to finalize.
    UnauthorizedFinalize { user_index: usize },
}

/// Strategy for individual sale actions.
///
/// Weights model realistic usage: purchases dominate, owner actions are rare.
pub fn sale_action_strategy(num_users: usize, scale: i128) -> impl Strategy<Value = SaleAction> {
    let user_idx = 0..num_users;

    prop_oneof![
        40 => (user_idx.clone(), whole_tokens_strategy(), fraction_strategy(scale))
            .prop_map(|(u, w, f)| SaleAction::Purchase {
                user_index: u,
                whole: w,
                fraction: f,
                payment_offset: 0,
            }),
        10 => (user_idx.clone(), whole_tokens_strategy(), payment_error_strategy())
            .prop_map(|(u, w, o)| SaleAction::Purchase {
                user_index: u,
                whole: w,
                fraction: 0,
                payment_offset: o,
            }),
        20 => (user_idx.clone(), 0i128..=100_000i128)
            .prop_map(|(u, p)| SaleAction::ReceivePayment { user_index: u, payment: p }),
        8 => price_strategy().prop_map(|p| SaleAction::SetPrice { new_price: p }),
        4 => (user_idx.clone(), price_strategy())
            .prop_map(|(u, p)| SaleAction::UnauthorizedSetPrice { user_index: u, new_price: p }),
        2 => Just(SaleAction::Finalize),
        2 => user_idx.prop_map(|u| SaleAction::UnauthorizedFinalize { user_index: u }),
    ]
}

/// Strategy for a sequence of sale actions of length 1–`max_len`.
pub fn sale_action_sequence(
    num_users: usize,
    scale: i128,
    max_len: usize,
) -> impl Strategy<Value = Vec<SaleAction>> {
    prop::collection::vec(sale_action_strategy(num_users, scale), 1..=max_len)
}

// ── Mutation Testing Support ─────────────────────────────────────────────────

/// A semantic mutation applied to a correct payment amount.
///
/// Every mutation of a non-zero payment yields a different value, so the
/// contract must reject all of them.
#[derive(Debug, Clone)]
pub enum Mutation {
    ZeroAmount,
    NegateAmount,
    MaxAmount,
    DoubleAmount,
    OffByOne,
}

/// Strategy for selecting a mutation.
pub fn mutation_strategy() -> impl Strategy<Value = Mutation> {
    prop_oneof![
        Just(Mutation::ZeroAmount),
        Just(Mutation::NegateAmount),
        Just(Mutation::MaxAmount),
        Just(Mutation::DoubleAmount),
        Just(Mutation::OffByOne),
    ]
}

/// Apply a mutation to an amount.
pub fn mutate_amount(amount: i128, mutation: &Mutation) -> i128 {
    match mutation {
        Mutation::ZeroAmount => 0,
        Mutation::NegateAmount => amount.checked_neg().unwrap_or(i128::MAX),
        Mutation::MaxAmount => i128::MAX,
        Mutation::DoubleAmount => amount.saturating_mul(2),
        Mutation::OffByOne => amount.saturating_add(1),
    }
}

// ── Scripted Patterns ────────────────────────────────────────────────────────

/// Common sale patterns as concrete action sequences.
#[derive(Debug, Clone)]
pub enum SalePattern {
    /// Several buyers purchase, then the owner finalizes.
    SellThenFinalize,
    /// Owner reprices between purchases.
    RepriceUnderLoad,
    /// Buyers keep trying after the sale has closed.
    LateBuyers,
    /// Direct payments that leave rounding remainders.
    RoundingRemainders,
}

/// Generate a concrete action sequence from a sale pattern.
pub fn pattern_to_actions(pattern: &SalePattern, num_users: usize) -> Vec<SaleAction> {
    let purchase = |user_index: usize, whole: i128| SaleAction::Purchase {
        user_index,
        whole,
        fraction: 0,
        payment_offset: 0,
    };

    match pattern {
        SalePattern::SellThenFinalize => {
            let mut actions: Vec<SaleAction> =
                (0..num_users.min(4)).map(|i| purchase(i, (i as i128 + 1) * 10)).collect();
            actions.push(SaleAction::Finalize);
            actions
        }
        SalePattern::RepriceUnderLoad => {
            std::vec![
                purchase(0, 5),
                SaleAction::SetPrice { new_price: 7 },
                purchase(1 % num_users, 5),
                SaleAction::UnauthorizedSetPrice { user_index: 0, new_price: 0 },
                SaleAction::SetPrice { new_price: 0 },
                purchase(0, 3),
            ]
        }
        SalePattern::LateBuyers => {
            std::vec![
                purchase(0, 1),
                SaleAction::Finalize,
                purchase(0, 1),
                SaleAction::ReceivePayment { user_index: 1 % num_users, payment: 100 },
                SaleAction::Finalize,
            ]
        }
        SalePattern::RoundingRemainders => {
            std::vec![
                SaleAction::SetPrice { new_price: 10 },
                SaleAction::ReceivePayment { user_index: 0, payment: 25 },
                SaleAction::ReceivePayment { user_index: 1 % num_users, payment: 9 },
                SaleAction::ReceivePayment { user_index: 0, payment: 99 },
                SaleAction::Finalize,
            ]
        }
    }
}

/// Strategy that selects a sale pattern.
pub fn sale_pattern_strategy() -> impl Strategy<Value = SalePattern> {
    prop_oneof![
        Just(SalePattern::SellThenFinalize),
        Just(SalePattern::RepriceUnderLoad),
        Just(SalePattern::LateBuyers),
        Just(SalePattern::RoundingRemainders),
    ]
}
