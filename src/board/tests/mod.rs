//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Move generation, capture chains, blocking
//! - `make_move.rs` - Move application, removal, promotion, winner
//! - `snapshot.rs` - Export/import and malformed snapshots
//! - `proptest.rs` - Property-based tests over random playouts

mod movegen;
