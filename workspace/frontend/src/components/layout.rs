mod navbar;
mod sidebar;
mod layout;

pub use layout::Layout;
