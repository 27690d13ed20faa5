//! Interactive props: the candle toggle, the proximity door, and the door animator.
pub mod animation;
pub mod candle;
pub mod door;
pub mod plugin;

pub use plugin::PropsPlugin;
