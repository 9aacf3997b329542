pub mod footer;
pub mod navbar;
pub mod shell;

pub use footer::Footer;
pub use navbar::Navbar;
pub use shell::Shell;
