use crate::dom::{listen, query_all, set_class};
use crate::error::PageError;
use coastline_shared::markup::{class, selector};
use coastline_widgets::FaqAccordion;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Document;

/// Make each `.faq-question` toggle its entry
pub fn init_faq(document: &Document) -> Result<(), PageError> {
    let items = query_all(document, selector::FAQ_ITEM);
    let accordion = FaqAccordion::with_states(
        items
            .iter()
            .map(|item| item.class_list().contains(class::ACTIVE))
            .collect(),
    );
    let accordion = Rc::new(RefCell::new(accordion));

    for (index, item) in items.into_iter().enumerate() {
        let Some(question) = item.query_selector(selector::FAQ_QUESTION)? else {
            tracing::warn!(index, "FAQ entry without a question");
            continue;
        };
        let accordion = accordion.clone();
        listen(&question, "click", move |_| {
            if let Some(expanded) = accordion.borrow_mut().toggle(index) {
                set_class(&item, class::ACTIVE, expanded);
            }
        })?;
    }

    tracing::info!(entries = accordion.borrow().len(), "FAQ accordion ready");
    Ok(())
}
