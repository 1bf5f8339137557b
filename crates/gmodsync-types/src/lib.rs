//! Wire types for the GmodSync status relay.
//!
//! The game server pushes an open JSON document; this crate wraps it in
//! [`StatusRecord`] without imposing a schema and offers lenient,
//! read-only views over the fields the relay actually interprets.
//! [`DarkRpStats`] flows downstream to `TypeScript` via `ts-rs` for the
//! dashboards.
//!
//! # Modules
//!
//! - [`record`] -- The open status document and its write-log summary
//! - [`player`] -- Lenient player view with JavaScript-style coercion
//! - [`stats`] -- Aggregate `DarkRP` economy statistics

pub mod player;
pub mod record;
pub mod stats;

pub use player::{Player, coerce_number, is_truthy};
pub use record::{StatusRecord, UpdateSummary};
pub use stats::{Amount, DarkRpStats};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::stats::DarkRpStats::export_all();
    }
}
