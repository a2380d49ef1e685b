pub mod entity;

pub use entity::Chapter;
