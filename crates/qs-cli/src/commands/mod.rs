pub mod save;
pub mod target;
pub mod watch;
