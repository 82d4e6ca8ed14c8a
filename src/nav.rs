use std::fmt;

const OVERLAY_TRANSITION_MS: u32 = 300;

/// Entries of the nav bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavLabel {
    About,
    Skills,
    Experience,
    Projects,
    Resume,
    Contact,
}

impl NavLabel {
    pub const ALL: [NavLabel; 6] = [
        NavLabel::About,
        NavLabel::Skills,
        NavLabel::Experience,
        NavLabel::Projects,
        NavLabel::Resume,
        NavLabel::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavLabel::About => "About",
            NavLabel::Skills => "Skills",
            NavLabel::Experience => "Experience",
            NavLabel::Projects => "Projects",
            NavLabel::Resume => "Resume",
            NavLabel::Contact => "Contact",
        }
    }

    /// Where a label leads. "About" is the hero section and "Resume" is the
    /// document, not the resume section.
    pub fn target(self) -> NavTarget {
        match self {
            NavLabel::About => NavTarget::Section(SectionId::Home),
            NavLabel::Skills => NavTarget::Section(SectionId::Skills),
            NavLabel::Experience => NavTarget::Section(SectionId::Experience),
            NavLabel::Projects => NavTarget::Section(SectionId::Projects),
            NavLabel::Resume => NavTarget::Document,
            NavLabel::Contact => NavTarget::Section(SectionId::Contact),
        }
    }
}

impl fmt::Display for NavLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// In-page anchors, one per page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Skills,
    Experience,
    Projects,
    Resume,
    Contact,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Resume => "resume",
            SectionId::Contact => "contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Section(SectionId),
    /// The resume document, opened outside the page.
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    /// Inline style for the mobile overlay: collapsed and transparent when
    /// closed.
    pub fn overlay_style(self) -> String {
        let (max_height, opacity, events) = match self {
            MenuState::Open => ("24rem", 1, "auto"),
            MenuState::Closed => ("0", 0, "none"),
        };
        format!(
            "max-height: {max_height}; opacity: {opacity}; pointer-events: {events}; \
             transition: max-height {OVERLAY_TRANSITION_MS}ms ease-in-out, opacity {OVERLAY_TRANSITION_MS}ms ease-in-out;"
        )
    }
}

impl From<bool> for MenuState {
    fn from(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }
}

/// Browser side of navigation.
pub trait Viewport {
    /// Smoothly scrolls the element with the section's id into view.
    /// Returns `false` if no such element is on the page.
    fn scroll_to(&self, section: SectionId) -> bool;

    /// Opens `path` in a new browsing context.
    fn open_document(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Scrolled(SectionId),
    OpenedDocument,
    /// Nothing on the page has the section's id, so nothing scrolled.
    TargetMissing(SectionId),
}

/// Owns the mobile menu state and turns nav labels into viewport actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    menu: MenuState,
    resume: String,
}

impl Navigator {
    pub fn new(resume: impl Into<String>) -> Self {
        Self {
            menu: MenuState::Closed,
            resume: resume.into(),
        }
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = self.menu.toggled();
        self.menu
    }

    pub fn navigate(&mut self, label: NavLabel, viewport: &impl Viewport) -> NavOutcome {
        let outcome = match label.target() {
            NavTarget::Document => {
                viewport.open_document(&self.resume);
                NavOutcome::OpenedDocument
            }
            NavTarget::Section(section) => {
                if viewport.scroll_to(section) {
                    NavOutcome::Scrolled(section)
                } else {
                    NavOutcome::TargetMissing(section)
                }
            }
        };
        self.menu = MenuState::Closed;
        log::debug!("nav {label}: {outcome:?}");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct RecordingViewport {
        missing: Vec<SectionId>,
        scrolls: RefCell<Vec<SectionId>>,
        opened: RefCell<Vec<String>>,
    }

    impl RecordingViewport {
        fn without(missing: &[SectionId]) -> Self {
            Self {
                missing: missing.to_vec(),
                ..Default::default()
            }
        }
    }

    impl Viewport for RecordingViewport {
        fn scroll_to(&self, section: SectionId) -> bool {
            if self.missing.contains(&section) {
                return false;
            }
            self.scrolls.borrow_mut().push(section);
            true
        }

        fn open_document(&self, path: &str) {
            self.opened.borrow_mut().push(path.to_string());
        }
    }

    #[test]
    fn test_sections_match_lowercase_labels() {
        for label in NavLabel::ALL {
            match (label, label.target()) {
                (NavLabel::About, NavTarget::Section(id)) => assert_eq!(id, SectionId::Home),
                (NavLabel::Resume, target) => assert_eq!(target, NavTarget::Document),
                (label, NavTarget::Section(id)) => {
                    assert_eq!(id.as_str(), label.as_str().to_lowercase())
                }
                (label, target) => panic!("unexpected target for {label}: {target:?}"),
            }
        }
    }

    #[test]
    fn test_projects_scrolls_to_projects() {
        let viewport = RecordingViewport::default();
        let mut nav = Navigator::new("/resume.pdf");
        assert_eq!(
            nav.navigate(NavLabel::Projects, &viewport),
            NavOutcome::Scrolled(SectionId::Projects)
        );
        assert_eq!(*viewport.scrolls.borrow(), vec![SectionId::Projects]);
        assert_eq!(SectionId::Projects.as_str(), "projects");
    }

    #[test]
    fn test_about_scrolls_to_home() {
        let viewport = RecordingViewport::default();
        let mut nav = Navigator::new("/resume.pdf");
        nav.navigate(NavLabel::About, &viewport);
        assert_eq!(*viewport.scrolls.borrow(), vec![SectionId::Home]);
        assert_eq!(SectionId::Home.as_str(), "home");
    }

    #[test]
    fn test_resume_opens_document_without_scrolling() {
        let viewport = RecordingViewport::default();
        let mut nav = Navigator::new("/resume.pdf");
        nav.toggle_menu();
        assert!(nav.menu().is_open());

        let outcome = nav.navigate(NavLabel::Resume, &viewport);
        assert_eq!(outcome, NavOutcome::OpenedDocument);
        assert!(viewport.scrolls.borrow().is_empty());
        assert_eq!(*viewport.opened.borrow(), vec!["/resume.pdf".to_string()]);
        assert_eq!(nav.menu(), MenuState::Closed);
    }

    #[test]
    fn test_navigation_closes_menu() {
        for label in NavLabel::ALL {
            for open in [false, true] {
                let viewport = RecordingViewport::default();
                let mut nav = Navigator::new("/resume.pdf");
                if open {
                    nav.toggle_menu();
                }
                nav.navigate(label, &viewport);
                assert_eq!(nav.menu(), MenuState::Closed, "after {label}");
            }
        }
    }

    #[test]
    fn test_missing_target_still_closes_menu() {
        let viewport = RecordingViewport::without(&[SectionId::Skills, SectionId::Contact]);
        let mut nav = Navigator::new("/resume.pdf");
        nav.toggle_menu();

        let outcome = nav.navigate(NavLabel::Contact, &viewport);
        assert_eq!(outcome, NavOutcome::TargetMissing(SectionId::Contact));
        assert!(viewport.scrolls.borrow().is_empty());
        assert!(viewport.opened.borrow().is_empty());
        assert_eq!(nav.menu(), MenuState::Closed);
    }

    #[test]
    fn test_menu_toggle() {
        let mut nav = Navigator::new("/resume.pdf");
        assert_eq!(nav.menu(), MenuState::Closed);
        assert_eq!(nav.toggle_menu(), MenuState::Open);
        assert_eq!(nav.toggle_menu(), MenuState::Closed);
    }

    #[test]
    fn test_overlay_style() {
        let open = MenuState::Open.overlay_style();
        assert!(open.contains("opacity: 1"));
        assert!(open.contains("max-height: 24rem"));

        let closed = MenuState::from(false).overlay_style();
        assert!(closed.contains("opacity: 0"));
        assert!(closed.contains("pointer-events: none"));
    }
}
