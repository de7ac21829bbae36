use gloo_utils::window;

pub const NARROW_QUERY: &str = "(max-width: 900px)";

/// Whether the narrow (stacked) layout applies right now.
pub fn is_narrow() -> bool {
    window()
        .match_media(NARROW_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Sidebar visibility. In the narrow layout the sidebar starts hidden and,
/// once opened, sits above an overlay that closes it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sidebar {
    open: bool,
    narrow: bool,
}

impl Sidebar {
    pub fn new(narrow: bool) -> Self {
        Self { open: !narrow, narrow }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn shows_overlay(&self) -> bool {
        self.narrow && self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_starts_open_without_overlay() {
        let mut sidebar = Sidebar::new(false);
        assert!(sidebar.is_open());
        assert!(!sidebar.shows_overlay());

        sidebar.toggle();
        assert!(!sidebar.is_open());
    }

    #[test]
    fn narrow_layout_overlay_closes_sidebar() {
        let mut sidebar = Sidebar::new(true);
        assert!(!sidebar.is_open());
        assert!(!sidebar.shows_overlay());

        sidebar.toggle();
        assert!(sidebar.is_open());
        assert!(sidebar.shows_overlay());

        sidebar.close();
        assert!(!sidebar.is_open());
        assert!(!sidebar.shows_overlay());
    }
}
