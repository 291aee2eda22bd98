mod board;
mod movegen;
mod moves;
mod piece;

#[cfg(test)]
mod tests;

pub use board::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
