pub mod command;

pub use command::{NavigationAction, NavigationCommand, UnknownNavigationAction};
