pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;
pub mod radio;
pub mod select;
pub mod typography;

pub use badge::{Badge, StatusBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use input::Input;
pub use radio::{Radio, RadioGroup};
pub use select::Select;
pub use typography::{Heading, Text};
