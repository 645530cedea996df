pub(crate) mod compose;
pub(crate) mod config;
pub(crate) mod eval;
pub(crate) mod fingerprint;
pub(crate) mod offsets;
pub(crate) mod sequencer;
