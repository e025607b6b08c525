//! Concrete [Board](crate::board::Board) implementations.
pub mod dummy;
pub mod ttt;
