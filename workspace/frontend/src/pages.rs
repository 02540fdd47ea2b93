pub mod charts;
pub mod home;
pub mod predictions;
pub mod settings;
