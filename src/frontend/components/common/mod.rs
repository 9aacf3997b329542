pub mod back_to_top;
pub mod scroll_reveal;

pub use back_to_top::BackToTop;
pub use scroll_reveal::ScrollReveal;
