/// Scroll line (px from the viewport top) used for hiding and section tracking
pub const NAV_OFFSET: f64 = 100.0;

/// Mobile menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
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

/// Viewport-relative vertical extent of a section
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

/// Visibility, mobile menu, and active anchor of the fixed navbar
#[derive(Clone, Debug, PartialEq)]
pub struct NavbarState {
    visible: bool,
    last_scroll_y: f64,
    menu: MenuState,
    active: &'static str,
}

impl Default for NavbarState {
    fn default() -> Self {
        Self {
            visible: true,
            last_scroll_y: 0.0,
            menu: MenuState::Closed,
            active: "home",
        }
    }
}

impl NavbarState {
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub const fn menu(&self) -> MenuState {
        self.menu
    }

    pub const fn active_section(&self) -> &'static str {
        self.active
    }

    pub fn toggle_menu(&mut self) {
        self.menu = self.menu.toggle();
    }

    /// Following a menu link closes the menu.
    pub fn navigate(&mut self, section: &'static str) {
        self.menu = MenuState::Closed;
        self.active = section;
    }

    /// Hide while scrolling down past the offset, unless the menu is open.
    pub fn on_scroll(&mut self, scroll_y: f64) {
        let scrolling_down = scroll_y > self.last_scroll_y;
        self.visible = !(scrolling_down && scroll_y > NAV_OFFSET && !self.menu.is_open());
        self.last_scroll_y = scroll_y;
    }

    /// First section straddling the offset line becomes active.
    pub fn track_sections<I>(&mut self, sections: I)
    where
        I: IntoIterator<Item = (&'static str, SectionBounds)>,
    {
        if let Some((id, _)) = sections
            .into_iter()
            .find(|(_, b)| b.top <= NAV_OFFSET && b.bottom >= NAV_OFFSET)
        {
            self.active = id;
        }
    }
}
