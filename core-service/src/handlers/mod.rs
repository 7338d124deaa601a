pub mod appearances;
pub mod episodes;
pub mod guests;
pub mod index;
