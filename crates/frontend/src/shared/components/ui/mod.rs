pub mod badge;
pub mod button;
pub mod checkbox;
pub mod file_input;
pub mod input;
pub mod radio;
pub mod select;
pub mod textarea;

pub use badge::{Badge, PaymentBadge};
pub use button::Button;
pub use checkbox::Checkbox;
pub use file_input::FileInput;
pub use input::Input;
pub use radio::RadioGroup;
pub use select::{options, Select};
pub use textarea::Textarea;
