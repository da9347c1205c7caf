//! FAQ accordion: at most one answer expanded at a time.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerChange {
    pub item: usize,
    pub active: bool,
    /// Inline `max-height` for the answer panel.
    pub max_height: f32,
}

#[derive(Debug, Clone)]
pub struct Accordion {
    // Natural (scroll) height of each answer.
    answer_heights: Vec<f32>,
    open: Option<usize>,
}

impl Accordion {
    /// Builds the accordion and expands the first item. Returns `None` when
    /// the page has no FAQ items.
    pub fn new(answer_heights: Vec<f32>) -> Option<(Self, AnswerChange)> {
        let first_height = *answer_heights.first()?;
        let accordion = Self {
            answer_heights,
            open: Some(0),
        };
        let change = AnswerChange {
            item: 0,
            active: true,
            max_height: first_height,
        };
        Some((accordion, change))
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    /// Question `item` was clicked. Every other item collapses; `item`
    /// flips. Out-of-range items are ignored.
    pub fn toggle(&mut self, item: usize) -> Vec<AnswerChange> {
        let Some(&height) = self.answer_heights.get(item) else {
            return Vec::new();
        };
        let was_open = self.open == Some(item);

        let mut changes = (0..self.answer_heights.len())
            .filter(|other| *other != item)
            .map(|other| AnswerChange {
                item: other,
                active: false,
                max_height: 0.0,
            })
            .collect::<Vec<_>>();

        if was_open {
            self.open = None;
            changes.push(AnswerChange {
                item,
                active: false,
                max_height: 0.0,
            });
        } else {
            self.open = Some(item);
            changes.push(AnswerChange {
                item,
                active: true,
                max_height: height,
            });
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_starts_expanded() {
        let (accordion, change) = Accordion::new(vec![120.0, 80.0]).expect("accordion");
        assert_eq!(accordion.open_item(), Some(0));
        assert_eq!(change.max_height, 120.0);
        assert!(Accordion::new(Vec::new()).is_none());
    }

    #[test]
    fn opening_one_collapses_the_rest() {
        let (mut accordion, _) = Accordion::new(vec![120.0, 80.0, 40.0]).expect("accordion");
        let changes = accordion.toggle(2);
        assert_eq!(accordion.open_item(), Some(2));
        let expanded = changes.iter().filter(|c| c.active).collect::<Vec<_>>();
        assert_eq!(expanded.len(), 1);
        assert_eq!(expanded[0].item, 2);
        assert_eq!(expanded[0].max_height, 40.0);
        assert!(changes.iter().filter(|c| !c.active).all(|c| c.max_height == 0.0));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let (mut accordion, _) = Accordion::new(vec![120.0, 80.0]).expect("accordion");
        let changes = accordion.toggle(0);
        assert_eq!(accordion.open_item(), None);
        assert!(changes.iter().all(|c| !c.active));
    }

    #[test]
    fn unknown_item_is_ignored() {
        let (mut accordion, _) = Accordion::new(vec![120.0]).expect("accordion");
        assert!(accordion.toggle(5).is_empty());
        assert_eq!(accordion.open_item(), Some(0));
    }
}
