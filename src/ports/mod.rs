//! External collaborator seams
//!
//! The pilot core never touches the screen directly: all state enters
//! through [`Perception`] and all effects leave through [`Actuation`] or
//! the one-way [`display`] channel. Scripted implementations in [`replay`]
//! drive the integration tests and the replay binary.

pub mod actuation;
pub mod display;
pub mod layout;
pub mod perception;
pub mod replay;

pub use actuation::Actuation;
pub use display::{DisplaySink, DisplayUpdate};
pub use layout::ScreenLayout;
pub use perception::Perception;

/// The bundle of collaborators every decision step works through
///
/// Groups the two ports with the click-target layout so operations take
/// one parameter instead of three.
pub struct GameIo<'a, P: Perception, A: Actuation> {
    pub perception: &'a mut P,
    pub actuation: &'a mut A,
    pub layout: &'a ScreenLayout,
}
