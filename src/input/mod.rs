pub mod binder;
pub mod events;
