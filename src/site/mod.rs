pub mod booking;
pub mod navbar;
pub mod pages;
pub mod popup;
