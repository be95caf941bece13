pub mod components;
pub mod drawer;
pub mod icons;
pub mod modal;
