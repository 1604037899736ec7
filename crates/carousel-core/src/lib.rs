pub mod config;
pub mod error;
pub mod geometry;
pub mod slider;
pub mod surface;

pub use config::{AppConfig, CardConfig, EasingType, SliderConfig, TransitionConfig};
pub use error::{Error, MissingPart, Result};
pub use geometry::{GeometryModel, GeometrySnapshot, Slide};
pub use slider::{
    Carousel, Control, ControlState, KeyOutcome, ResizeDebouncer, Slider, SliderKey,
    SliderOptions, SliderState,
};
pub use surface::{ChildRole, FixedChild, FixedSurface, Surface};
