use crate::ui::mvi::Intent;

use super::state::{Banner, Work};

#[derive(Debug, Clone)]
pub enum ScreenIntent {
    /// Screen became active; items and session are being fetched.
    Mount,
    Settled(Work),
    Raise(Banner),
    /// Leave the Message state; items are fetched again.
    Dismiss,
}

impl Intent for ScreenIntent {}
