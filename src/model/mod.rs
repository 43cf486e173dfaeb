mod club;
mod event;
mod query;

pub use club::*;
pub use event::*;
pub use query::*;
