pub mod notice;
pub mod toast;
