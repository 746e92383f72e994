// Binds the effects to the portfolio page: theme toggle, canvas resize,
// hero and card tilt, cursor glow, scroll effects, stat counters. Missing
// elements just skip their effect.

use crate::canvas::Canvas2d;
use crate::counter::{StatCounter, Tick, INTERVAL_MS};
use crate::error::Error;
use crate::field::ParticleField;
use crate::frames::{BrowserFrames, FrameLoop};
use crate::scroll::{cursor_glow_position, hero_scale, hero_scale_transform, navbar_shadow};
use crate::theme::{image_source, Theme, ThemePreference, ThemeStore};
use crate::tilt::{glow_position, hero_rotation, hero_transform, CardTilt, Rotation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, MouseEvent, Storage, Window,
};

const CANVAS_ID: &str = "particles";
const TOGGLE_ID: &str = "theme-toggle";
const HERO_ID: &str = "hero-image";
const CURSOR_GLOW_ID: &str = "cursor-glow";
const THEME_ATTRIBUTE: &str = "data-theme";

type PageField = ParticleField<Canvas2d, BrowserFrames>;

pub fn mount(window: &Window) -> Result<(), Error> {
    let document = window.document().ok_or(Error::NoDocument)?;

    let prefs = ThemePreference::new(LocalStore::new(window));
    let theme = prefs.load();
    set_theme_attribute(&document, theme);

    let field = mount_field(window);
    field.borrow_mut().init(theme);
    update_theme_images(&document, theme);

    bind_theme_toggle(&document, field.clone(), prefs)?;
    bind_resize(window, field)?;
    bind_hero_tilt(&document)?;
    bind_tilt_cards(window, &document)?;
    bind_cursor_glow(&document)?;
    bind_scroll_effects(window, &document)?;
    bind_stat_counters(window, &document)?;
    log::info!("portfolio effects mounted with {} theme", theme.as_str());
    Ok(())
}

// localStorage may be missing or throw (e.g. disabled cookies); reads then
// fall back to the default theme and writes are dropped.
struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    fn new(window: &Window) -> Self {
        LocalStore {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl ThemeStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("could not persist {}={}: {:?}", key, value, err);
            }
        }
    }
}

fn mount_field(window: &Window) -> Rc<RefCell<PageField>> {
    let surface = match Canvas2d::acquire(window, CANVAS_ID) {
        Ok(surface) => Some(surface),
        Err(err) => {
            log::warn!("particle canvas unavailable: {}", err);
            None
        }
    };
    let frames = BrowserFrames::new(window.clone());
    let callback = frames.callback();
    let field = Rc::new(RefCell::new(ParticleField::new(surface, frames)));

    let weak = Rc::downgrade(&field);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(field) = weak.upgrade() {
            field.borrow_mut().step_frame();
        }
    }) as Box<dyn FnMut()>));
    field
}

fn current_theme(document: &Document) -> Theme {
    document
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTRIBUTE))
        .map(|name| Theme::parse(&name))
        .unwrap_or_default()
}

fn set_theme_attribute(document: &Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            log::warn!("could not set {}: {:?}", THEME_ATTRIBUTE, err);
        }
    }
}

fn update_theme_images(document: &Document, theme: Theme) {
    let images = match document.query_selector_all(".theme-image") {
        Ok(images) => images,
        Err(err) => {
            log::warn!("theme image lookup failed: {:?}", err);
            return;
        }
    };
    for i in 0..images.length() {
        let image = match images
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlImageElement>().ok())
        {
            Some(image) => image,
            None => continue,
        };
        let light = image.get_attribute("data-light");
        let dark = image.get_attribute("data-dark");
        if let Some(src) = image_source(theme, light.as_deref(), dark.as_deref()) {
            image.set_src(src);
        }
    }
}

fn bind_theme_toggle(
    document: &Document,
    field: Rc<RefCell<PageField>>,
    mut prefs: ThemePreference<LocalStore>,
) -> Result<(), Error> {
    let button = match document.get_element_by_id(TOGGLE_ID) {
        Some(button) => button,
        None => return Ok(()),
    };
    let document = document.clone();
    let on_click = Closure::wrap(Box::new(move || {
        let next = current_theme(&document).toggled();
        set_theme_attribute(&document, next);
        prefs.save(next);
        field.borrow_mut().restart(next);
        update_theme_images(&document, next);
        log::debug!("theme switched to {}", next.as_str());
    }) as Box<dyn FnMut()>);
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn bind_resize(window: &Window, field: Rc<RefCell<PageField>>) -> Result<(), Error> {
    let on_resize = Closure::wrap(Box::new(move || {
        field.borrow_mut().resize_surface();
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();
    Ok(())
}

// Pointer position relative to the element, and the element's size
fn pointer_in(element: &Element, event: &MouseEvent) -> ([f64; 2], [f64; 2]) {
    let rect = element.get_bounding_client_rect();
    (
        [
            f64::from(event.client_x()) - rect.left(),
            f64::from(event.client_y()) - rect.top(),
        ],
        [rect.width(), rect.height()],
    )
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("could not set {}: {:?}", property, err);
    }
}

fn bind_hero_tilt(document: &Document) -> Result<(), Error> {
    let hero = match document
        .get_element_by_id(HERO_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(hero) => hero,
        None => return Ok(()),
    };

    let target = hero.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let (pointer, size) = pointer_in(&target, &event);
        set_style(&target, "transform", &hero_transform(hero_rotation(pointer, size)));
    }) as Box<dyn FnMut(MouseEvent)>);
    hero.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let target = hero.clone();
    let on_leave = Closure::wrap(Box::new(move || {
        set_style(&target, "transform", &hero_transform(Rotation::ZERO));
    }) as Box<dyn FnMut()>);
    hero.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();
    Ok(())
}

fn bind_tilt_cards(window: &Window, document: &Document) -> Result<(), Error> {
    let cards = document.query_selector_all("[data-tilt]")?;
    for i in 0..cards.length() {
        if let Some(card) = cards
            .item(i)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            bind_tilt_card(window, card)?;
        }
    }
    Ok(())
}

fn bind_tilt_card(window: &Window, card: HtmlElement) -> Result<(), Error> {
    let tilt = Rc::new(RefCell::new(CardTilt::default()));

    let hover = {
        let tilt = tilt.clone();
        let card = card.clone();
        FrameLoop::new(window.clone(), move || {
            let mut tilt = tilt.borrow_mut();
            let more = tilt.ease();
            set_style(&card, "transform", &tilt.hover_transform());
            more
        })
    };
    let settle = {
        let tilt = tilt.clone();
        let card = card.clone();
        FrameLoop::new(window.clone(), move || settle_step(&tilt, &card))
    };
    let has_glow = matches!(card.query_selector(".card-glow"), Ok(Some(_)));

    let on_move = {
        let tilt = tilt.clone();
        let card = card.clone();
        let hover = hover.clone();
        let settle = settle.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            let (pointer, size) = pointer_in(&card, &event);
            tilt.borrow_mut().aim(pointer, size);
            if has_glow {
                if let Some((x, y)) = glow_position(pointer, size) {
                    set_style(&card, "--mouse-x", &format!("{}%", x));
                    set_style(&card, "--mouse-y", &format!("{}%", y));
                }
            }
            settle.stop();
            hover.start();
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();

    let card_for_leave = card.clone();
    let on_leave = Closure::wrap(Box::new(move || {
        tilt.borrow_mut().release();
        hover.stop();
        // first settling step lands before the next frame
        if settle_step(&tilt, &card_for_leave) {
            settle.start();
        }
    }) as Box<dyn FnMut()>);
    card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref())?;
    on_leave.forget();
    Ok(())
}

// One settling frame; returns whether another is needed
fn settle_step(tilt: &RefCell<CardTilt>, card: &HtmlElement) -> bool {
    let mut tilt = tilt.borrow_mut();
    if tilt.settle() {
        set_style(card, "transform", &tilt.settling_transform());
        true
    } else {
        set_style(card, "transform", CardTilt::REST_TRANSFORM);
        false
    }
}

fn bind_cursor_glow(document: &Document) -> Result<(), Error> {
    let glow = match document
        .get_element_by_id(CURSOR_GLOW_ID)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        Some(glow) => glow,
        None => return Ok(()),
    };

    let source = document.clone();
    let on_move = Closure::wrap(Box::new(move |event: MouseEvent| {
        let client = [event.client_x(), event.client_y()];
        if let Some((left, top)) = cursor_glow_position(current_theme(&source), client) {
            set_style(&glow, "left", &left);
            set_style(&glow, "top", &top);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    document.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())?;
    on_move.forget();
    Ok(())
}

fn query_html(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(err) => {
            log::warn!("lookup of {} failed: {:?}", selector, err);
            return Vec::new();
        }
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn bind_scroll_effects(window: &Window, document: &Document) -> Result<(), Error> {
    let scroller = window.clone();
    let document = document.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        let scroll_y = match scroller.scroll_y() {
            Ok(y) => y,
            Err(_) => return,
        };
        if let Ok(Some(navbar)) = document.query_selector(".navbar") {
            if let Ok(navbar) = navbar.dyn_into::<HtmlElement>() {
                set_style(&navbar, "box-shadow", navbar_shadow(scroll_y));
            }
        }
        if let Some(scale) = hero_scale(scroll_y) {
            let transform = hero_scale_transform(scale);
            for image in query_html(&document, ".hero-img") {
                set_style(&image, "transform", &transform);
            }
        }
    }) as Box<dyn FnMut()>);
    window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;
    on_scroll.forget();
    Ok(())
}

fn bind_stat_counters(window: &Window, document: &Document) -> Result<(), Error> {
    let stats = document.query_selector_all(".stat-flow-number")?;
    if stats.length() == 0 {
        return Ok(());
    }

    let window = window.clone();
    let on_visible = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = match entry.dyn_into::<IntersectionObserverEntry>() {
                    Ok(entry) => entry,
                    Err(_) => continue,
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let text = target.text_content().unwrap_or_default();
                let counter = match StatCounter::new(&text) {
                    Some(counter) => counter,
                    None => continue,
                };
                observer.unobserve(&target);
                if let Err(err) = start_counter(&window, target, counter) {
                    log::warn!("stat counter failed: {}", err);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(0.5));
    let observer =
        IntersectionObserver::new_with_options(on_visible.as_ref().unchecked_ref(), &options)?;
    on_visible.forget();

    for i in 0..stats.length() {
        if let Some(stat) = stats
            .item(i)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            observer.observe(&stat);
        }
    }
    Ok(())
}

fn start_counter(window: &Window, target: Element, mut counter: StatCounter) -> Result<(), Error> {
    let interval = Rc::new(Cell::new(None));
    let handle = interval.clone();
    let timers = window.clone();
    let on_tick = Closure::wrap(Box::new(move || match counter.tick() {
        Tick::Show(text) => target.set_text_content(Some(&text)),
        Tick::Done(text) => {
            target.set_text_content(Some(&text));
            if let Some(id) = handle.take() {
                timers.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        on_tick.as_ref().unchecked_ref(),
        INTERVAL_MS,
    )?;
    interval.set(Some(id));
    // the interval may tick again before clearing lands, so the closure lives on
    on_tick.forget();
    Ok(())
}
