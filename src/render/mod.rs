pub mod compositor;
pub mod image;
pub mod layout;
pub mod text;
