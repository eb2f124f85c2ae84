pub mod add;
pub mod render;
pub mod tags;
