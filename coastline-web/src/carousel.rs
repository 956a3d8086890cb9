use crate::dom::{listen, set_class};
use crate::error::PageError;
use crate::timer::IntervalTimer;
use coastline_core::app_config::CarouselConfig;
use coastline_shared::markup::{class, selector};
use coastline_widgets::{GridCarousel, HeroCarousel};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

struct GridView {
    track: HtmlElement,
    first_slide: Element,
    dots: Vec<Element>,
}

impl GridView {
    fn show(&self, carousel: &GridCarousel<IntervalTimer>) {
        // measured per move, the layout may have resized the slides
        let width = self.first_slide.get_bounding_client_rect().width();
        if let Err(e) = self.track.style().set_property("transform", &carousel.transform(width)) {
            tracing::warn!("Failed to move grid carousel: {:?}", e);
        }
        for (dot, active) in self.dots.iter().zip(carousel.indicator_states()) {
            set_class(dot, class::ACTIVE, active);
        }
    }
}

/// Wire the three-up trip carousel and its indicator dots
pub fn init_grid(document: &Document, config: &CarouselConfig) -> Result<(), PageError> {
    let (Some(track), Some(dots_nav)) = (
        document.query_selector(selector::GRID_TRACK)?,
        document.query_selector(selector::GRID_DOTS)?,
    ) else {
        return Ok(());
    };
    let track = track
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::ElementType(selector::GRID_TRACK.to_string()))?;

    let slides = track.children();
    let Some(first_slide) = slides.item(0) else {
        return Ok(());
    };
    let Some(carousel) = GridCarousel::new(
        slides.length() as usize,
        config.grid_visible_slides,
        IntervalTimer::new(),
        Duration::from_millis(u64::from(config.grid_interval_ms)),
    ) else {
        return Ok(());
    };

    let mut dots = Vec::with_capacity(carousel.slide_count());
    for active in carousel.indicator_states() {
        let dot = document.create_element("button")?;
        set_class(&dot, class::ACTIVE, active);
        dots_nav.append_child(&dot)?;
        dots.push(dot);
    }

    let view = Rc::new(GridView {
        track,
        first_slide,
        dots,
    });
    let carousel = Rc::new(RefCell::new(carousel));

    let tick = {
        let carousel = carousel.clone();
        let view = view.clone();
        Closure::<dyn FnMut()>::new(move || {
            let mut carousel = carousel.borrow_mut();
            carousel.tick();
            view.show(&carousel);
        })
    };
    carousel.borrow_mut().task_mut().timer_mut().bind(tick);

    for (index, dot) in view.dots.iter().enumerate() {
        let carousel = carousel.clone();
        let view = view.clone();
        listen(dot, "click", move |_| {
            let mut carousel = carousel.borrow_mut();
            if carousel.select(index).is_some() {
                view.show(&carousel);
            }
        })?;
    }

    carousel.borrow_mut().start();
    tracing::info!(slides = view.dots.len(), "Grid carousel started");
    Ok(())
}

/// Wire the full-width hero slides on the About page
pub fn init_hero(document: &Document, config: &CarouselConfig) -> Result<(), PageError> {
    let Some(track) = document.query_selector(selector::HERO_TRACK)? else {
        return Ok(());
    };
    let track = track
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::ElementType(selector::HERO_TRACK.to_string()))?;

    let children = track.children();
    let slides: Vec<HtmlElement> = (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|slide| slide.dyn_into::<HtmlElement>().ok())
        .collect();

    let Some(hero) = HeroCarousel::new(
        slides.len(),
        IntervalTimer::new(),
        Duration::from_millis(u64::from(config.hero_interval_ms)),
    ) else {
        return Ok(());
    };

    for (slide, active) in slides.iter().zip(hero.initial_states()) {
        set_class(slide, class::ACTIVE, active);
        slide.style().set_property("min-width", "100%")?;
    }

    let slides = Rc::new(slides);
    let hero = Rc::new(RefCell::new(hero));

    let tick = {
        let hero = hero.clone();
        let slides = slides.clone();
        let track = track.clone();
        Closure::<dyn FnMut()>::new(move || {
            let step = hero.borrow_mut().tick();
            set_class(&slides[step.deactivate], class::ACTIVE, false);
            set_class(&slides[step.activate], class::ACTIVE, true);
            if let Err(e) = track.style().set_property("transform", &step.transform()) {
                tracing::warn!("Failed to move hero carousel: {:?}", e);
            }
        })
    };
    hero.borrow_mut().task_mut().timer_mut().bind(tick);

    {
        let hero = hero.clone();
        listen(&track, "mouseenter", move |_| hero.borrow_mut().pointer_entered())?;
    }

    hero.borrow_mut().start();
    tracing::info!(slides = slides.len(), "Hero carousel started");
    Ok(())
}
