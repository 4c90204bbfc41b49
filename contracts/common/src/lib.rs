//! Shared utilities and error types for the token sale contracts.
//!
//! This crate provides:
//! - [`CommonError`] — standardised error codes shared across contracts.
//! - [`reentrancy_guard`] — an invocation-scoped lock for sections that call
//!   out to other contracts.
//! - [`ttl`] — storage time-to-live constants and helpers.
//!
//! Contracts keep their own error enums and convert from [`CommonError`] at
//! the boundary.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod reentrancy_guard;
pub mod ttl;

pub use ttl::*;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Standardised error codes shared by every contract in the workspace.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 10 – 19 | Authentication & authorisation|
/// | 30 – 39 | Validation / input            |
/// | 40 – 49 | Contract state                |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AccessDenied = 10,
    InvalidInput = 30,
    /// A guarded section was entered while already executing.
    Reentrant = 41,
}
