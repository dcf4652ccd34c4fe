mod date;
mod event;
mod grid;
mod index;
mod navigator;
mod selection;
mod state;

pub mod api;
pub mod store;

pub use date::*;
pub use event::*;
pub use grid::*;
pub use index::*;
pub use navigator::*;
pub use selection::*;
pub use state::*;
