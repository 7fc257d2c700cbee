//! Piezas engine library.
//!
//! Exposes the board representation, the protocol modules, and the engine
//! session for use by integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod protocol;
