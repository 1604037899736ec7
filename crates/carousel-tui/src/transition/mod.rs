//! Track transitions for the terminal host
//!
//! The slider only says where the track should be and whether the move may
//! be animated. This module turns that into per-frame positions.
//!
//! - `easing` - pure easing curves
//! - `timing` - progress and interpolation helpers
//! - `config` - helpers over [`TransitionConfig`]
//! - `animation` - the animator combining the above

pub mod animation;
pub mod config;
pub mod easing;
pub mod timing;

pub use animation::TransitionAnimator;
pub use config::{TransitionConfig, TransitionConfigExt};
pub use easing::{EasingType, EasingTypeExt};
