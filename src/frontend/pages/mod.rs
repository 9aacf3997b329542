//! Routed pages.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod pricing;
pub mod signup;

pub use dashboard::Dashboard;
pub use landing::Landing;
pub use login::Login;
pub use pricing::Pricing;
pub use signup::Signup;
