//! Highlights the navigation link of the section currently on screen.

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f32,
    pub height: f32,
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    margin: f32,
}

impl ScrollSpy {
    pub fn new(sections: Vec<Section>, margin: f32) -> Self {
        Self { sections, margin }
    }

    /// Later sections win when windows overlap.
    pub fn active_section(&self, scroll_y: f32, navbar_height: f32) -> Option<&str> {
        self.sections
            .iter()
            .rev()
            .find(|section| {
                let top = section.top - navbar_height - self.margin;
                scroll_y >= top && scroll_y < top + section.height
            })
            .map(|section| section.id.as_str())
    }

    /// Active flag per link, in the order given.
    pub fn nav_link_states<'a>(
        &self,
        hrefs: impl IntoIterator<Item = &'a str>,
        scroll_y: f32,
        navbar_height: f32,
    ) -> Vec<bool> {
        let wanted = self
            .active_section(scroll_y, navbar_height)
            .map(|id| format!("#{id}"));
        hrefs
            .into_iter()
            .map(|href| wanted.as_deref() == Some(href))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spy() -> ScrollSpy {
        ScrollSpy::new(
            vec![
                Section {
                    id: "home".into(),
                    top: 0.0,
                    height: 600.0,
                },
                Section {
                    id: "features".into(),
                    top: 600.0,
                    height: 800.0,
                },
            ],
            100.0,
        )
    }

    #[test]
    fn section_becomes_active_ahead_of_its_top() {
        let spy = spy();
        assert_eq!(spy.active_section(0.0, 80.0), Some("home"));
        assert_eq!(spy.active_section(419.0, 80.0), Some("home"));
        assert_eq!(spy.active_section(420.0, 80.0), Some("features"));
        assert_eq!(spy.active_section(1300.0, 80.0), None);
    }

    #[test]
    fn link_matching_active_section_is_marked() {
        let spy = spy();
        let states = spy.nav_link_states(["#home", "#features", "#faq"], 500.0, 80.0);
        assert_eq!(states, vec![false, true, false]);
    }

    #[test]
    fn no_active_section_marks_nothing() {
        let spy = spy();
        let states = spy.nav_link_states(["#home", "#"], 5000.0, 80.0);
        assert_eq!(states, vec![false, false]);
    }
}
