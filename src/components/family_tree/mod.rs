mod component;
mod layout;
mod render;
mod state;
mod types;

pub use component::FamilyTreeCanvas;
pub use types::FamilyNode;
