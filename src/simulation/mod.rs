pub mod board;
pub mod cell;
pub mod history;
pub mod patterns;
pub mod region;
pub mod rules;

pub use board::Board;
pub use cell::Cell;
pub use history::{History, Repeat};
pub use region::Region;
pub use rules::apply_rules;
