//! Declarative view tree and its styling modifiers
//!
//! Views are values: every modifier consumes a view and returns the wrapped
//! result, so helpers compose by chaining.

use tracing::trace;

use super::color::{Color, ENCHANT_COLORS, MOVING_ENCHANT_COLORS};
use super::gradient::GradientAnimation;
use super::shortcut::{KeyEvent, KeyboardShortcut, ShortcutAction};

/// Width and height in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle,
    Ellipse,
}

#[derive(Debug, Clone)]
pub enum View {
    /// Renders nothing and takes no space
    Empty,
    Shape {
        shape: Shape,
        size: Size,
        color: Color,
    },
    /// Children drawn on top of each other
    Stack(Vec<View>),
    Row {
        spacing: f32,
        children: Vec<View>,
    },
    Column {
        spacing: f32,
        children: Vec<View>,
    },
    Padding {
        amount: f32,
        content: Box<View>,
    },
    /// Keeps its layout space but is not drawn
    Hidden(Box<View>),
    /// Content painted with a gradient instead of its own colors
    GradientForeground {
        colors: Vec<Color>,
        content: Box<View>,
    },
    /// Animated gradient drawn over the content, clipped to its shape
    MovingGradientOverlay {
        colors: Vec<Color>,
        animation: GradientAnimation,
        content: Box<View>,
    },
    Shortcut {
        shortcut: KeyboardShortcut,
        action: ShortcutAction,
        content: Box<View>,
    },
}

impl View {
    pub fn rect(width: f32, height: f32, color: Color) -> Self {
        Self::Shape {
            shape: Shape::Rectangle,
            size: Size::new(width, height),
            color,
        }
    }

    pub fn ellipse(width: f32, height: f32, color: Color) -> Self {
        Self::Shape {
            shape: Shape::Ellipse,
            size: Size::new(width, height),
            color,
        }
    }

    pub fn stack(children: Vec<View>) -> Self {
        Self::Stack(children)
    }

    pub fn row(spacing: f32, children: Vec<View>) -> Self {
        Self::Row { spacing, children }
    }

    pub fn column(spacing: f32, children: Vec<View>) -> Self {
        Self::Column { spacing, children }
    }

    pub fn padding(self, amount: f32) -> Self {
        Self::Padding {
            amount: amount.max(0.0),
            content: Box::new(self),
        }
    }

    pub fn hidden(self) -> Self {
        Self::Hidden(Box::new(self))
    }

    /// Keep the view only if every condition holds.
    ///
    /// An empty condition list keeps the view.
    pub fn show_if(self, conditions: &[bool]) -> Self {
        if conditions.iter().all(|c| *c) {
            self
        } else {
            Self::Empty
        }
    }

    /// Apply `transform` when `condition` holds, otherwise return the view
    /// unchanged.
    pub fn if_then(self, condition: bool, transform: impl FnOnce(Self) -> Self) -> Self {
        if condition {
            transform(self)
        } else {
            self
        }
    }

    /// Paint the view with the static blue → purple → red gradient,
    /// leading edge to trailing edge.
    pub fn enchantify(self) -> Self {
        Self::GradientForeground {
            colors: ENCHANT_COLORS.to_vec(),
            content: Box::new(self),
        }
    }

    /// Overlay the animated blue ↔ purple gradient, masked by the view.
    ///
    /// The animation starts when the view appears.
    pub fn enchantify_moving(self) -> Self {
        self.enchantify_moving_with(GradientAnimation::new())
    }

    /// Like [`enchantify_moving`](Self::enchantify_moving) with a caller-owned
    /// animation
    pub fn enchantify_moving_with(self, animation: GradientAnimation) -> Self {
        Self::MovingGradientOverlay {
            colors: MOVING_ENCHANT_COLORS.to_vec(),
            animation,
            content: Box::new(self),
        }
    }

    /// Run `action` when `shortcut` is pressed while the view is present,
    /// even if it is hidden.
    pub fn on_keyboard_shortcut(
        self,
        shortcut: KeyboardShortcut,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self::Shortcut {
            shortcut,
            action: ShortcutAction::new(action),
            content: Box::new(self),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Layout size in points
    pub fn size(&self) -> Size {
        match self {
            Self::Empty => Size::ZERO,
            Self::Shape { size, .. } => *size,
            Self::Stack(children) => children.iter().fold(Size::ZERO, |acc, child| {
                let s = child.size();
                Size::new(acc.width.max(s.width), acc.height.max(s.height))
            }),
            Self::Row { spacing, children } => {
                let (along, across) = linear_size(children, *spacing, |s| (s.width, s.height));
                Size::new(along, across)
            }
            Self::Column { spacing, children } => {
                let (along, across) = linear_size(children, *spacing, |s| (s.height, s.width));
                Size::new(across, along)
            }
            Self::Padding { amount, content } => {
                let s = content.size();
                Size::new(s.width + 2.0 * amount, s.height + 2.0 * amount)
            }
            Self::Hidden(content)
            | Self::GradientForeground { content, .. }
            | Self::MovingGradientOverlay { content, .. }
            | Self::Shortcut { content, .. } => content.size(),
        }
    }

    /// Start the animations in this tree.
    ///
    /// # Returns
    /// Number of animations started by this call
    pub fn appear(&self) -> usize {
        let mut started = 0;
        self.visit(&mut |view| {
            if let Self::MovingGradientOverlay { animation, .. } = view {
                if animation.start() {
                    started += 1;
                }
            }
        });
        started
    }

    /// Deliver a key press to the first matching shortcut, depth first.
    ///
    /// # Returns
    /// `true` if an action ran
    pub fn dispatch_key(&self, event: &KeyEvent) -> bool {
        match self {
            Self::Shortcut {
                shortcut,
                action,
                content,
            } => {
                if content.dispatch_key(event) {
                    return true;
                }
                if shortcut.matches(event) {
                    trace!(shortcut = %shortcut, "Shortcut triggered");
                    action.perform();
                    return true;
                }
                false
            }
            _ => self.children().any(|child| child.dispatch_key(event)),
        }
    }

    fn children(&self) -> Box<dyn Iterator<Item = &View> + '_> {
        match self {
            Self::Empty | Self::Shape { .. } => Box::new(std::iter::empty()),
            Self::Stack(children)
            | Self::Row { children, .. }
            | Self::Column { children, .. } => Box::new(children.iter()),
            Self::Padding { content, .. }
            | Self::Hidden(content)
            | Self::GradientForeground { content, .. }
            | Self::MovingGradientOverlay { content, .. }
            | Self::Shortcut { content, .. } => Box::new(std::iter::once(content.as_ref())),
        }
    }

    fn visit(&self, f: &mut impl FnMut(&View)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }
}

/// Extent along the main axis and across it. Empty children take no spacing.
fn linear_size(children: &[View], spacing: f32, axes: impl Fn(Size) -> (f32, f32)) -> (f32, f32) {
    let mut along = 0.0_f32;
    let mut across = 0.0_f32;
    let mut count = 0;
    for child in children.iter().filter(|c| !c.is_empty()) {
        let (a, b) = axes(child.size());
        along += a;
        across = across.max(b);
        count += 1;
    }
    if count > 1 {
        along += spacing * (count - 1) as f32;
    }
    (along, across)
}
