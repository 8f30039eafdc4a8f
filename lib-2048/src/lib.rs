pub use core_2048::*;

pub mod ai;
pub mod board;
pub mod logic;
pub mod rules;

pub use board::Board;
pub use rules::{Rules, RulesError};
