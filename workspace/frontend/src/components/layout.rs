pub mod breadcrumb;
pub mod layout;
pub mod navbar;
pub mod sidebar;
