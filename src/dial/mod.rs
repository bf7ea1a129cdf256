pub mod config;
pub mod hands;
pub mod indices;
pub mod layout;
pub mod templates;

pub use config::DialConfig;
pub use hands::hand_angles;
pub use indices::{classify_position, enumerate_ticks, placement_angle, TickClass, TickPlacement};
pub use layout::{hand_transform, index_transform, track_transform, TemplateTransform};
pub use templates::TickTemplates;
