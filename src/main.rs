//! bento-fx entry point
//!
//! The browser build wires the effects engine into the page and drives it
//! from one animation-frame loop. The native build runs a short headless
//! pass over the engine and prints what it produces.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Document, Event, PointerEvent};

    use bento_fx::clipboard::{CopyEmail, EMAIL};
    use bento_fx::consts::MARQUEE_PERIOD;
    use bento_fx::fx::{Avatar, CardId, Marquee, SpotlightTracker, StaggerReveal, Typewriter};
    use bento_fx::platform::cards::CARD_SELECTOR;
    use bento_fx::platform::page::COPY_BUTTON_ID;
    use bento_fx::platform::{
        self, CardView, PageText, PlatformError, SpotlightView, TrailView, pointer_client,
    };
    use bento_fx::{Language, LanguageContext, Route, Settings};

    #[wasm_bindgen(inline_js = "
        export function copy_text(text) {
            if (!navigator.clipboard) {
                throw new Error('clipboard API unavailable');
            }
            return navigator.clipboard.writeText(text);
        }
    ")]
    extern "C" {
        #[wasm_bindgen(catch)]
        fn copy_text(text: &str) -> Result<js_sys::Promise, JsValue>;
    }

    type PointerClosure = Closure<dyn FnMut(PointerEvent)>;

    /// Everything the page animates, owned by the frame loop
    struct App {
        document: Document,
        language: LanguageContext,
        route: Route,
        cards: Vec<CardView>,
        spotlight: SpotlightTracker,
        spotlight_view: Option<SpotlightView>,
        /// Window pointermove listener, present while the spotlight is attached
        spotlight_listener: Option<PointerClosure>,
        typewriter: Typewriter,
        marquee: Marquee,
        avatar: Avatar,
        /// Hero entrance, replayed each time the home view opens
        reveal: StaggerReveal,
        reduced_motion: bool,
        copy_email: CopyEmail,
        trail: Option<TrailView>,
        page: PageText,
        last_time: f64,
    }

    impl App {
        fn new(
            document: Document,
            settings: Settings,
            trail: Option<TrailView>,
        ) -> Result<Self, PlatformError> {
            let seed = js_sys::Date::now() as u64;
            let language = LanguageContext::new(settings.language);

            let mut cards = Vec::new();
            for (i, element) in platform::query_all(&document, CARD_SELECTOR)
                .into_iter()
                .enumerate()
            {
                let id = CardId(i as u32);
                cards.push(CardView::new(id, element, &settings, seed ^ i as u64)?);
            }

            let mut spotlight = SpotlightTracker::new(settings.spotlight_config());
            for card in &cards {
                spotlight.register_card(card.id(), card.card.rect());
            }
            let spotlight_view = if settings.spotlight {
                match SpotlightView::new(&document, spotlight.config()) {
                    Ok(view) => Some(view),
                    Err(e) => {
                        log::warn!("spotlight overlay unavailable: {}", e);
                        None
                    }
                }
            } else {
                None
            };

            let typewriter = Typewriter::new(language.t().roles(), settings.typewriter_timing());
            let route = Route::from_hash(&platform::window()?.location().hash().unwrap_or_default());
            let page = PageText::new(&document);
            page.set_avatar_status(settings.avatar_status);

            let mut reveal = StaggerReveal::new(page.reveal_count());
            if settings.reduced_motion {
                reveal.finish();
            }

            log::info!("{} cards, seed {}", spotlight.card_count(), seed);

            Ok(Self {
                document,
                language,
                route,
                cards,
                spotlight,
                spotlight_view,
                spotlight_listener: None,
                typewriter,
                marquee: Marquee::new(MARQUEE_PERIOD),
                avatar: Avatar::new(settings.avatar_status),
                reveal,
                reduced_motion: settings.reduced_motion,
                copy_email: CopyEmail::new(),
                trail,
                page,
                last_time: 0.0,
            })
        }

        fn update(&mut self, dt: f32) {
            let dt = dt.clamp(0.0, 0.1);

            for card in &mut self.cards {
                card.advance(dt);
            }
            self.spotlight.advance(dt);
            self.typewriter.advance(dt);
            self.marquee.advance(dt);
            self.avatar.advance(dt);
            self.reveal.advance(dt);
            if self.copy_email.advance(dt) {
                self.refresh_copy_label();
            }
            if let Some(trail) = &mut self.trail {
                trail.frame(dt);
            }
        }

        fn render(&mut self) {
            for card in &mut self.cards {
                let glow = self.spotlight.glow_for(card.id());
                card.apply(&self.document, glow);
            }
            if let Some(view) = &self.spotlight_view {
                if self.spotlight.is_attached() {
                    view.apply(self.spotlight.state());
                }
            }
            self.page.set_typed(self.typewriter.displayed_text());
            self.page.set_marquee(&self.marquee.transform_css());
            self.page.set_avatar(self.avatar.state());
            self.page.set_reveal(&self.reveal);
        }

        fn refresh_copy_label(&self) {
            self.page.set_copy_label(
                self.copy_email.label(self.language.t()),
                self.copy_email.is_copied(),
            );
        }

        fn set_language(&mut self, language: Language) {
            if !self.language.set_language(language) {
                return;
            }
            self.page.apply_language(language);
            self.typewriter.set_words(self.language.t().roles());
            self.refresh_copy_label();
        }

        /// Re-read card geometry; layout shifts on scroll and resize
        fn refresh_card_rects(&mut self) {
            for card in &mut self.cards {
                card.refresh_rect();
                self.spotlight.update_card_rect(card.id(), card.card.rect());
            }
        }

        fn spotlight_move(&mut self, ev: &PointerEvent) {
            self.refresh_card_rects();
            self.spotlight.pointer_move(pointer_client(ev));
        }

        fn pointer_left_page(&mut self) {
            self.spotlight.pointer_leave();
            if let Some(trail) = &mut self.trail {
                trail.pointer_leave();
            }
        }
    }

    /// Show `route` and attach or tear down the home-only effects
    fn apply_route(app: &Rc<RefCell<App>>, route: Route) {
        let mut a = app.borrow_mut();
        a.route = route;
        a.page.show_route(route);

        if route.has_effects() {
            if !a.typewriter.is_mounted() {
                a.typewriter.mount();
            }
            a.avatar.restart();
            if !a.reduced_motion {
                a.reveal.restart();
            }
            if a.spotlight_listener.is_none() && a.spotlight.attach() {
                a.spotlight_listener = attach_spotlight_listener(Rc::downgrade(app));
            }
        } else {
            a.typewriter.unmount();
            for card in &mut a.cards {
                card.clear();
            }
            a.spotlight.detach();
            if let Some(view) = &a.spotlight_view {
                view.hide();
            }
            if let Some(closure) = a.spotlight_listener.take() {
                if let Ok(window) = platform::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "pointermove",
                        closure.as_ref().unchecked_ref(),
                    );
                }
            }
        }
        log::info!("route: {:?}", route);
    }

    fn attach_spotlight_listener(app: Weak<RefCell<App>>) -> Option<PointerClosure> {
        let window = platform::window().ok()?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
            if let Some(app) = app.upgrade() {
                app.borrow_mut().spotlight_move(&event);
            }
        });
        window
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }

    pub async fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"logger already initialized".into());
        }

        log::info!("bento-fx starting...");

        let document = platform::document()?;
        let settings = Settings::load();
        if settings.reduced_motion {
            log::info!("reduced motion: tilt, magnetism, particles, trail and hero entrance off");
        }

        let trail = if settings.effective_pixel_trail() {
            match TrailView::new(&document, &settings).await {
                Ok(trail) => Some(trail),
                Err(e) => {
                    log::error!("pixel trail disabled: {}", e);
                    None
                }
            }
        } else {
            None
        };

        let app = Rc::new(RefCell::new(App::new(document, settings, trail)?));
        {
            let a = app.borrow();
            a.page.apply_language(a.language.language());
            a.refresh_copy_label();
        }

        setup_card_handlers(&app);
        setup_pointer_handlers(&app)?;
        setup_language_buttons(&app);
        setup_copy_button(&app);
        setup_routing(&app)?;

        let route = app.borrow().route;
        apply_route(&app, route);

        request_animation_frame(app);

        log::info!("bento-fx running");
        Ok(())
    }

    fn setup_card_handlers(app: &Rc<RefCell<App>>) {
        let elements: Vec<_> = app
            .borrow()
            .cards
            .iter()
            .map(|card| card.element.clone())
            .collect();

        for (i, element) in elements.into_iter().enumerate() {
            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                    let mut a = app.borrow_mut();
                    if a.route.has_effects() {
                        a.cards[i].pointer_enter();
                    }
                });
                let _ = element.add_event_listener_with_callback(
                    "pointerenter",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                    let mut a = app.borrow_mut();
                    if a.route.has_effects() {
                        a.cards[i].pointer_move(pointer_client(&event));
                    }
                });
                let _ = element.add_event_listener_with_callback(
                    "pointermove",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
            {
                let app = app.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                    app.borrow_mut().cards[i].pointer_leave();
                });
                let _ = element.add_event_listener_with_callback(
                    "pointerleave",
                    closure.as_ref().unchecked_ref(),
                );
                closure.forget();
            }
        }
    }

    fn setup_pointer_handlers(app: &Rc<RefCell<App>>) -> Result<(), PlatformError> {
        let window = platform::window()?;
        let document = app.borrow().document.clone();

        // Trail follows the pointer anywhere over the hero
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let mut a = app.borrow_mut();
                if !a.route.has_effects() {
                    return;
                }
                if let Some(trail) = &mut a.trail {
                    trail.pointer_move(pointer_client(&event));
                }
            });
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                app.borrow_mut().pointer_left_page();
            });
            let _ = document
                .add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                let mut a = app.borrow_mut();
                a.refresh_card_rects();
                if let Some(trail) = &mut a.trail {
                    trail.resize();
                }
            });
            let _ = window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        Ok(())
    }

    fn setup_language_buttons(app: &Rc<RefCell<App>>) {
        let buttons: Vec<_> = app
            .borrow()
            .page
            .lang_buttons()
            .map(|(el, lang)| (el.clone(), lang))
            .collect();

        for (button, language) in buttons {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
                app.borrow_mut().set_language(language);
            });
            let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_copy_button(app: &Rc<RefCell<App>>) {
        let button = app.borrow().document.get_element_by_id(COPY_BUTTON_ID);
        let Some(button) = button else {
            log::warn!("no #{} button", COPY_BUTTON_ID);
            return;
        };

        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let app = app.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let ok = match copy_text(EMAIL) {
                    Ok(promise) => JsFuture::from(promise).await.is_ok(),
                    Err(_) => false,
                };
                let mut a = app.borrow_mut();
                a.copy_email.on_copy_result(ok);
                a.refresh_copy_label();
            });
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_routing(app: &Rc<RefCell<App>>) -> Result<(), PlatformError> {
        let window = platform::window()?;
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let Ok(window) = platform::window() else {
                return;
            };
            let route = Route::from_hash(&window.location().hash().unwrap_or_default());
            if route != app.borrow().route {
                apply_route(&app, route);
            }
        });
        let _ = window
            .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Ok(window) = platform::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            frame(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();

            let dt = if a.last_time > 0.0 {
                ((time - a.last_time) / 1000.0) as f32
            } else {
                0.0
            };
            a.last_time = time;

            a.update(dt);
            a.render();
        }

        request_animation_frame(app);
    }

}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_app::run().await {
        log::error!("bento-fx failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("bento-fx (native) starting...");
    log::info!("Native mode runs the engine headless - run with `trunk serve` for the page");

    headless::card_tilt();
    headless::particles();
    headless::spotlight();
    headless::typewriter();
    headless::trail();
    headless::hero();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use bento_fx::Language;
    use bento_fx::fx::{
        Avatar, AvatarStatus, CardId, CardRect, EmitterConfig, HoverCard, ParticleEmitter,
        SpotlightConfig, SpotlightTracker, StaggerReveal, TrailBuffer, TrailConfig, Typewriter,
        TypewriterTiming,
    };
    use bento_fx::settings::Settings;
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    pub fn card_tilt() {
        let mut card = HoverCard::new(
            CardId(0),
            Settings::default().card_physics(),
            CardRect::new(0.0, 0.0, 300.0, 200.0),
        );
        card.pointer_enter();
        card.pointer_move(Vec2::new(300.0, 0.0));
        for _ in 0..30 {
            card.advance(DT);
        }
        let s = card.visual_state();
        println!(
            "card: pointer at top-right -> rotate ({:.2}, {:.2}) deg, offset ({:.2}, {:.2}) px",
            s.rotate_x, s.rotate_y, s.offset_x, s.offset_y
        );
        card.pointer_leave();
        for _ in 0..40 {
            card.advance(DT);
        }
        println!("card: after leave neutral = {}", card.visual_state().is_neutral());
    }

    pub fn particles() {
        let mut emitter = ParticleEmitter::new(EmitterConfig::default(), 7);
        emitter.begin_hover(Vec2::new(300.0, 200.0));
        for step in 1..=15 {
            emitter.advance(0.1);
            if step % 5 == 0 {
                println!(
                    "particles: t={:.1}s active {} pending {}",
                    step as f32 * 0.1,
                    emitter.active_count(),
                    emitter.pending_count()
                );
            }
        }
        emitter.end_hover();
        emitter.advance(0.5);
        println!("particles: after leave active {}", emitter.active_count());
    }

    pub fn spotlight() {
        let mut tracker = SpotlightTracker::new(SpotlightConfig::default());
        let rect = CardRect::new(100.0, 100.0, 200.0, 200.0);
        tracker.register_card(CardId(0), rect);
        tracker.attach();
        for d in [0.0, 100.0, 200.0, 400.0, 600.0] {
            let p = rect.center() + Vec2::new(d, 0.0);
            let glows = tracker.pointer_move(p);
            let intensity = glows.first().map(|(_, g)| g.intensity).unwrap_or(0.0);
            println!("spotlight: distance {:>5.0} px -> intensity {:.2}", d, intensity);
        }
    }

    pub fn typewriter() {
        let words = Language::En.translations().roles();
        let mut tw = Typewriter::new(words, TypewriterTiming::HERO);
        let mut phase = tw.phase();
        for _ in 0..400 {
            tw.advance(0.05);
            if tw.phase() != phase {
                phase = tw.phase();
                println!("typewriter: {:?} at {:?}", phase, tw.displayed_text());
            }
        }
    }

    pub fn trail() {
        let mut trail = TrailBuffer::new(TrailConfig::default());
        trail.pointer_move(Vec2::new(0.3, 0.5));
        trail.pointer_move(Vec2::new(0.7, 0.5));
        let center = trail.size() / 2;
        for step in 0..6 {
            println!(
                "trail: t={:.2}s center intensity {:.2}",
                step as f32 * 0.1,
                trail.intensity_at(center, center)
            );
            trail.advance(0.1);
        }
        println!("trail: idle = {}", trail.is_idle());
    }

    pub fn hero() {
        let mut avatar = Avatar::new(AvatarStatus::Online);
        let mut reveal = StaggerReveal::new(4);
        for step in 0..=6 {
            let a = avatar.state();
            let items: Vec<String> = (0..reveal.count())
                .map(|i| format!("{:.2}", reveal.item(i).opacity))
                .collect();
            println!(
                "hero: t={:.2}s avatar scale {:.2} ring {:.2} | items [{}]",
                step as f32 * 0.1,
                a.scale,
                a.ring_opacity,
                items.join(", ")
            );
            avatar.advance(0.1);
            reveal.advance(0.1);
        }
    }
}
