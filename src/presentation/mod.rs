//! Presentation helpers
//!
//! A small retained view tree with conditional display, gradient styling,
//! keyboard shortcuts and snapshot rendering.

mod color;
mod gradient;
mod render;
mod shortcut;
mod view;

pub use color::{Color, ColorParseError, ENCHANT_COLORS, MOVING_ENCHANT_COLORS};
pub use gradient::{
    phase_at, GradientAnimation, GradientDirection, UnitPoint, ANIMATION_PERIOD, FRAME_INTERVAL,
};
pub use render::{RenderError, Snapshot, MAX_SNAPSHOT_EDGE, MAX_SNAPSHOT_PIXELS};
pub use shortcut::{Key, KeyEvent, KeyboardShortcut, Modifiers, ShortcutAction, ShortcutParseError};
pub use view::{Shape, Size, View};
