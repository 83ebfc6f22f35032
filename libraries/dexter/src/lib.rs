//! Wire types of the Dexter vault, pool and CW20 contracts.
//!
//! Every request type serializes with exactly one top-level key naming the
//! operation. Unset optional fields are serialized as `null`.

pub mod amount;
pub mod asset;
pub mod binary;
pub mod cw20;
pub mod pool;
pub mod vault;
