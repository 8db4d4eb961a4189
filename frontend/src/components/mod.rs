pub mod backdrop;
pub mod header;
pub mod icons;
