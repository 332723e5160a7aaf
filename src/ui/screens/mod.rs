mod about;
mod dashboard;
mod home;
mod login;
mod signup;

pub use about::AboutScreen;
pub use dashboard::DashboardScreen;
pub use home::{HomeButton, HomeScreen};
pub use login::{LoginField, LoginScreen};
pub use signup::{SignupField, SignupScreen};
