//! Movement domain: messages from input to the grapple.

use bevy::ecs::message::Message;

/// Grapple action issued by the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrappleCommand {
    Fire,
    Release,
}

impl Message for GrappleCommand {}
