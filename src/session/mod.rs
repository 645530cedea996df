//! Host boundary: what to ask the highlight backend for, how to fetch it, and which
//! answer ends up on screen.

pub(crate) mod playback;
pub(crate) mod request;
pub(crate) mod retry;
pub(crate) mod source;
