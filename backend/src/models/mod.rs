pub mod ticket;
pub mod time;

pub use ticket::*;
pub use time::*;
