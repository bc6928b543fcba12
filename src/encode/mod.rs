//! Frame sinks for recorded animations.

pub(crate) mod sink;
