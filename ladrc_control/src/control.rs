//! Control engine root.
//!
//! TD → LESO → control law, composed by [`ladrc::Ladrc`].

pub mod ladrc;
pub mod law;
pub mod leso;
pub mod state;
pub mod td;
