/// `HH:MM:SS` timestamps and their frame conversion.
pub(crate) mod timestamp;
