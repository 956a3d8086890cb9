/// Expanded/collapsed state for each FAQ entry. Entries toggle independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    expanded: Vec<bool>,
}

impl FaqAccordion {
    pub fn new(item_count: usize) -> Self {
        Self {
            expanded: vec![false; item_count],
        }
    }

    /// Start from the states already present in markup
    pub fn with_states(expanded: Vec<bool>) -> Self {
        Self { expanded }
    }

    /// Flip entry `index`. Returns its new state, or `None` if there is no such entry.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let entry = self.expanded.get_mut(index)?;
        *entry = !*entry;
        Some(*entry)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.iter().filter(|e| **e).count()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_expand_independently() {
        let mut faq = FaqAccordion::new(3);
        assert_eq!(faq.toggle(0), Some(true));
        assert_eq!(faq.toggle(2), Some(true));

        assert!(faq.is_expanded(0));
        assert!(!faq.is_expanded(1));
        assert_eq!(faq.expanded_count(), 2);

        assert_eq!(faq.toggle(0), Some(false));
        assert_eq!(faq.expanded_count(), 1);
    }

    #[test]
    fn test_with_states_keeps_markup_state() {
        let mut faq = FaqAccordion::with_states(vec![true, false]);
        assert_eq!(faq.toggle(0), Some(false));
        assert_eq!(faq.expanded_count(), 0);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut faq = FaqAccordion::new(1);
        assert_eq!(faq.toggle(4), None);
        assert!(!faq.is_expanded(4));
    }
}
