//! Stack navigator for SmartWeb screens.
//!
//! The root is always `Screen::Home`. `back()` never pops it.

use tracing::debug;

use crate::types::navigation::Screen;

/// Trait defining navigation operations.
pub trait NavigatorTrait {
    fn navigate(&mut self, screen: Screen);
    fn back(&mut self) -> bool;
    fn current(&self) -> &Screen;
    fn title(&self) -> &str;
    fn depth(&self) -> usize;
}

/// Navigation stack with `Home` at the bottom.
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Home],
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigatorTrait for Navigator {
    fn navigate(&mut self, screen: Screen) {
        debug!(title = screen.title(), "navigate");
        self.stack.push(screen);
    }

    /// Pops the current screen. Returns `false` when already at the root.
    fn back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }

    fn current(&self) -> &Screen {
        // The constructor seeds Home and back() never removes it.
        self.stack.last().unwrap_or(&Screen::Home)
    }

    fn title(&self) -> &str {
        self.current().title()
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }
}
