use crate::controller::{BookingController, BookingTrigger};
use crate::dom::{by_id, input_value, listen, query_all, DomSurface};
use crate::error::PageError;
use coastline_booking::BookingWizard;
use coastline_catalog::TransportOption;
use coastline_core::app_config::BookingConfig;
use coastline_core::TripSearch;
use coastline_shared::markup::{data, id, selector};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{Document, Element, EventTarget, HtmlElement};

type SharedController = Rc<RefCell<BookingController<DomSurface>>>;

fn read_trip(document: &Document) -> TripSearch {
    TripSearch::from_inputs(
        &input_value(document, id::CHECK_IN),
        &input_value(document, id::CHECK_OUT),
        &input_value(document, id::GUESTS),
    )
}

fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{}", name))
}

/// Transport options declared in markup, in document order
fn transport_catalog(document: &Document) -> Vec<TransportOption> {
    query_all(document, selector::TRANSPORT_OPTION)
        .iter()
        .filter_map(|option| {
            TransportOption::from_attributes(
                data_attr(option, data::TRANSPORT_KEY),
                data_attr(option, data::TRANSPORT_PRICE),
            )
            .map_err(|e| tracing::warn!("Skipping transport option: {}", e))
            .ok()
        })
        .collect()
}

fn on_click<F>(
    target: Option<impl AsRef<EventTarget>>,
    trigger: BookingTrigger,
    controller: &SharedController,
    mut handler: F,
) -> Result<(), PageError>
where
    F: FnMut(&mut BookingController<DomSurface>) + 'static,
{
    let Some(target) = target else {
        return Ok(());
    };
    let controller = controller.clone();
    listen(target.as_ref(), "click", move |event| {
        if trigger.suppresses_default() {
            event.prevent_default();
        }
        handler(&mut controller.borrow_mut());
    })
}

/// Wire the booking flow. Each handler is attached only if its element exists.
pub fn init_booking(
    document: &Document,
    config: &BookingConfig,
    surface: DomSurface,
) -> Result<(), PageError> {
    let wizard = BookingWizard::from_config(config, transport_catalog(document));
    tracing::info!(
        transport_options = wizard.catalog().transport_count(),
        "Booking wizard ready"
    );
    let controller = Rc::new(RefCell::new(BookingController::new(wizard, surface)));

    on_click(
        by_id::<HtmlElement>(document, id::START_BOOKING),
        BookingTrigger::StartBooking,
        &controller,
        |c| c.start_booking(),
    )?;

    let search_document = document.clone();
    on_click(
        by_id::<HtmlElement>(document, id::SEARCH_LODGING),
        BookingTrigger::SearchLodging,
        &controller,
        move |c| {
            c.search(read_trip(&search_document));
        },
    )?;

    for card in query_all(document, selector::LODGING_CARD) {
        let Some(room_type) = data_attr(&card, data::ROOM_TYPE) else {
            tracing::warn!("Lodging card without a room type");
            continue;
        };
        let button = card.query_selector(selector::LODGING_BOOK_BUTTON)?;
        on_click(button, BookingTrigger::BookRoom, &controller, move |c| {
            c.select_room(&room_type)
        })?;
    }

    for option in query_all(document, selector::TRANSPORT_OPTION) {
        let Some(key) = data_attr(&option, data::TRANSPORT_KEY) else {
            continue;
        };
        let clicked = option.clone();
        on_click(Some(option), BookingTrigger::TransportOption, &controller, move |c| {
            c.surface_mut().set_origin(clicked.clone());
            c.toggle_transport(&key);
        })?;
    }

    on_click(
        by_id::<HtmlElement>(document, id::COMPLETE_BOOKING),
        BookingTrigger::CompleteBooking,
        &controller,
        |c| {
            c.complete();
        },
    )?;
    on_click(
        by_id::<HtmlElement>(document, id::RETURN_HOME),
        BookingTrigger::ReturnHome,
        &controller,
        |c| c.return_home(),
    )?;

    for field in [id::CHECK_IN, id::CHECK_OUT, id::GUESTS] {
        let Some(input) = document.get_element_by_id(field) else {
            continue;
        };
        let controller = controller.clone();
        let document = document.clone();
        listen(&input, "change", move |_| {
            controller.borrow_mut().edit_trip(read_trip(&document));
        })?;
    }

    Ok(())
}
