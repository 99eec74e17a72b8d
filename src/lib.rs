/// Monetary value type shared by balances and movement amounts.
pub mod money;

/// Timestamp source injected into the core.
pub mod clock;

/// Append-only transaction log and its record type.
pub mod history;

/// Deposit/withdrawal movements that apply themselves to an account.
pub mod transaction;

/// Account state machine: balance mutation and withdrawal limits.
pub mod account;

/// Customers and the entry point through which movements reach accounts.
pub mod customer;

/// Teller interface over the customer directory, plus the "in memory"
/// implementation that owns the directory and the account allocator.
pub mod teller;

/// Ideally, this module should exist on its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration test
/// so I put it here.
pub mod bin_utils;
