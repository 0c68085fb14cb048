pub mod button;
pub mod gradient;
pub mod image;
pub mod widget;

pub use button::{Appearance, ButtonStyle, ButtonViews, ClickCallback, DynamicButton};
pub use gradient::{Background, Gradient, GradientDirection, UnitPoint};
pub use image::{ButtonImage, ImageSource};
pub use widget::{Color, EdgeInsets, Event, EventResponse, MouseButton, Rect, Widget};
