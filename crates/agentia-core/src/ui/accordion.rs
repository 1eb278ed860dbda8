/// FAQ accordion: at most one entry expanded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accordion {
    #[default]
    Collapsed,
    Expanded(usize),
}

impl Accordion {
    /// Clicking the open entry closes it; clicking another one switches to it.
    #[must_use]
    pub const fn toggle(self, index: usize) -> Self {
        match self {
            Self::Expanded(open) if open == index => Self::Collapsed,
            _ => Self::Expanded(index),
        }
    }

    pub const fn is_expanded(self, index: usize) -> bool {
        matches!(self, Self::Expanded(open) if open == index)
    }
}

/// Which pricing tier is highlighted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierHighlight {
    active: usize,
    default: usize,
}

impl TierHighlight {
    /// Starts on `default` (the plan flagged popular)
    pub const fn new(default: usize) -> Self {
        Self { active: default, default }
    }

    pub const fn active(self) -> usize {
        self.active
    }

    pub const fn is_active(self, index: usize) -> bool {
        self.active == index
    }

    #[must_use]
    pub const fn hover(self, index: usize) -> Self {
        Self { active: index, ..self }
    }

    /// Pointer left the plans grid
    #[must_use]
    pub const fn leave(self) -> Self {
        Self { active: self.default, ..self }
    }
}

/// Open/closed state of an overlay such as the chat widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidgetVisibility {
    #[default]
    Closed,
    Open,
}

impl WidgetVisibility {
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}
