use crate::config;

/// Which section is displayed and which nav link is highlighted.
///
/// Nav links carry no state of their own: a link is active exactly when
/// `is_active` holds for the section it targets.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    sections: Vec<String>,
    active: Option<String>,
    scroll_to: Option<String>,
    scroll_seq: u64,
}

impl ViewState {
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            active: None,
            scroll_to: None,
            scroll_seq: 0,
        }
    }

    /// Initial state for a page loaded with the given `location.hash`.
    pub fn from_hash<I, S>(sections: I, hash: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self::new(sections);
        state.show_section(&initial_section(hash));
        state
    }

    /// Activates the section `id` and deactivates every other one. An id
    /// that names no section leaves nothing active.
    pub fn show_section(&mut self, id: &str) {
        self.active = self
            .sections
            .iter()
            .find(|section| section.as_str() == id)
            .cloned();
        if self.active.is_none() {
            log::warn!("No section with id '{}', hiding all sections", id);
        } else {
            log::info!("Showing section '{}'", id);
        }
    }

    /// Handles a nav link click: shows the target and queues a scroll to it.
    pub fn navigate(&mut self, href: &str) {
        let target = target_from_href(href);
        self.show_section(target);
        self.scroll_to = Some(target.to_string());
        self.scroll_seq += 1;
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn sections(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub fn active_count(&self) -> usize {
        self.sections().filter(|id| self.is_active(id)).count()
    }

    /// The pending scroll target together with its sequence number, so two
    /// clicks on the same link are told apart.
    pub fn scroll_request(&self) -> (Option<&str>, u64) {
        (self.scroll_to.as_deref(), self.scroll_seq)
    }
}

/// Open/closed state of the mobile menu panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// A nav link was followed. Returns true when the panel had to close.
    pub fn close_after_navigation(&mut self) -> bool {
        let was_open = self.open;
        self.close();
        was_open
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn panel_class(&self) -> &'static str {
        if self.open {
            ""
        } else {
            "hidden"
        }
    }
}

/// Section id a link points at: everything after the first `#`.
pub fn target_from_href(href: &str) -> &str {
    match href.split_once('#') {
        Some((_, fragment)) => fragment,
        None => href,
    }
}

/// Section to show on page load for a `location.hash` value.
pub fn initial_section(hash: &str) -> String {
    let fragment = hash.strip_prefix('#').unwrap_or(hash);
    if fragment.is_empty() {
        config::HOME_SECTION.to_string()
    } else {
        fragment.to_string()
    }
}

/// Document offset to scroll to so a section starts just under the fixed
/// header.
pub fn scroll_top_below_header(rect_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    rect_top + scroll_y - header_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> ViewState {
        ViewState::new(["home", "services", "about", "insights", "contact"])
    }

    #[test]
    fn show_section_activates_exactly_one() {
        let mut state = page();
        for id in ["home", "services", "about", "insights", "contact"] {
            state.show_section(id);
            assert_eq!(state.active_count(), 1);
            assert!(state.is_active(id));
            for other in state.sections().filter(|other| *other != id) {
                assert!(!state.is_active(other));
            }
        }
    }

    #[test]
    fn unknown_id_hides_everything() {
        let mut state = page();
        state.show_section("about");
        state.show_section("careers");
        assert_eq!(state.active_count(), 0);
        assert_eq!(state.active(), None);
        assert!(!state.is_active("careers"));
    }

    #[test]
    fn nav_click_shows_and_queues_scroll() {
        let mut state = page();
        state.navigate("#about");
        assert!(state.is_active("about"));
        assert_eq!(state.scroll_request(), (Some("about"), 1));

        state.navigate("#about");
        assert_eq!(state.scroll_request(), (Some("about"), 2));
    }

    #[test]
    fn href_fragment_parsing() {
        assert_eq!(target_from_href("#about"), "about");
        assert_eq!(target_from_href("/index.html#contact"), "contact");
        assert_eq!(target_from_href("services"), "services");
        assert_eq!(target_from_href("#"), "");
    }

    #[test]
    fn initial_hash_defaults_to_home() {
        assert_eq!(initial_section(""), "home");
        assert_eq!(initial_section("#"), "home");
        assert_eq!(initial_section("#services"), "services");

        let state = ViewState::from_hash(["home", "services"], "#services");
        assert!(state.is_active("services"));
        assert_eq!(state.scroll_request(), (None, 0));
    }

    #[test]
    fn unknown_initial_hash_shows_nothing() {
        let state = ViewState::from_hash(["home", "services"], "#missing");
        assert_eq!(state.active_count(), 0);
    }

    #[test]
    fn scroll_offset_subtracts_header() {
        assert_eq!(scroll_top_below_header(250.0, 1000.0, 80.0), 1170.0);
        assert_eq!(scroll_top_below_header(-40.0, 500.0, 64.0), 396.0);
    }

    #[test]
    fn nav_click_closes_open_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.close_after_navigation());
        assert!(!menu.is_open());
        assert_eq!(menu.panel_class(), "hidden");

        assert!(!menu.close_after_navigation());
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut menu = MenuState::default();
        assert_eq!(menu.panel_class(), "hidden");
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.panel_class(), "");
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }
}
