//! Write-side port: fire-and-forget input actions
//!
//! No action returns confirmation. The sole correction mechanism for an
//! action that silently failed is the next reconciliation pass.

use crate::core::types::Vec2;

/// Input surface of the game client
///
/// Implementations own their input latency: a live actuator is expected to
/// pace its clicks to the client's animation speed, a scripted one does
/// nothing between calls.
pub trait Actuation {
    fn click(&mut self, pos: Vec2);

    fn right_click(&mut self, pos: Vec2);

    fn move_cursor(&mut self, pos: Vec2);

    /// Sell the unit under the given position
    fn press_sell(&mut self, pos: Vec2);

    /// Reroll the shop
    fn reroll(&mut self);

    /// Purchase experience
    fn buy_xp(&mut self);

    /// Leave a finished match
    fn exit_match(&mut self);

    /// Surrender the current match
    fn forfeit(&mut self);
}
