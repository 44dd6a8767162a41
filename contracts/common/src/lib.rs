//! Shared helpers for the stake escrow contract suite.
//!
//! This crate provides:
//! - [`admin`] — a single stored administrator with a two-step transfer.
//! - [`ttl`] — storage TTL bumping constants and helpers.
//!
//! Each contract keeps its own `ContractError` enum; the helpers here report
//! failure through `bool`/`Option` so callers can map it onto their codes.

#![no_std]

pub mod admin;
pub mod ttl;
