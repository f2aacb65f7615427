//! Loading / Message / Content state of the account screen.

mod intent;
mod reducer;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{Banner, Pending, ScreenState, Work};
