pub mod controller_hook;
pub mod error;
pub mod loading;
pub mod toast;
