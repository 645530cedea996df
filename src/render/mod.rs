pub(crate) mod dispatch;
pub(crate) mod hooks;
pub(crate) mod node;
