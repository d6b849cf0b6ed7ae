mod contact;
mod health_check;
mod home;
mod not_found;

pub use contact::*;
pub use health_check::*;
pub use home::*;
pub use not_found::*;
