pub mod events;
pub mod factory;
pub mod logs;
#[cfg(test)]
pub(crate) mod recording;
