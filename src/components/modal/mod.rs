mod component;
mod state;

pub use component::{Modal, ModalController};
pub use state::PopupKind;
