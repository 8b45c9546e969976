pub mod html;
pub mod unicode;
