//! Secret Santa entry point
//!
//! Handles platform-specific initialization. The wasm build drives the DOM
//! directly; the native build runs a logged smoke demo of the draw.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rand::SeedableRng;
    use rand_pcg::Pcg32;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement, HtmlSelectElement};

    use secret_santa::consts::*;
    use secret_santa::exchange::{DrawError, ExchangePhase, draw};
    use secret_santa::i18n::{LanguageCode, Translation};
    use secret_santa::messaging;
    use secret_santa::{ExchangeState, Roster, Settings};

    /// Application instance holding all state
    struct App {
        roster: Roster,
        exchange: ExchangeState,
        settings: Settings,
    }

    impl App {
        fn new() -> Self {
            Self {
                roster: Roster::load(),
                exchange: ExchangeState::new(),
                settings: Settings::load(),
            }
        }

        /// Strings for the selected language
        fn t(&self) -> &'static Translation {
            self.settings.language.translation()
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Secret Santa starting...");

        let document = web_sys::window()
            .expect("no window")
            .document()
            .expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.class_list().add_1("hidden");
        }

        let app = Rc::new(RefCell::new(App::new()));

        // Reflect the persisted language in the selector
        if let Some(select) = document.get_element_by_id("lang-select") {
            if let Ok(select) = select.dyn_into::<HtmlSelectElement>() {
                select.set_value(app.borrow().settings.language.as_str());
            }
        }

        apply_static_text(&document, app.borrow().t());
        render_participants(&document, &app.borrow());
        update_draw_button(&document, &app.borrow());

        setup_add_form(app.clone());
        setup_participant_list(app.clone());
        setup_draw_button(app.clone());
        setup_result_grid(app.clone());
        setup_reset_button(app.clone());
        setup_language_select(app.clone());

        show_screen(&document, ExchangePhase::Input);

        log::info!("Secret Santa running!");
    }

    /// Write every static string for the current language into the DOM
    fn apply_static_text(document: &Document, t: &Translation) {
        let texts: [(&str, &str); 11] = [
            ("title", t.title),
            ("subtitle", t.subtitle),
            ("year-tag", t.year_tag),
            ("input-desc", t.input_desc),
            ("phone-note", t.phone_note),
            ("empty-list", t.empty_list),
            ("add-btn", t.add_button),
            ("draw-btn", t.raffle_button),
            ("results-title", t.matches_ready),
            ("results-desc", t.matches_desc),
            ("reset-btn", t.reset_button),
        ];
        for (id, text) in texts {
            if let Some(el) = document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        if let Some(input) = input_element(document, "name-input") {
            input.set_placeholder(t.placeholder_name);
        }
        if let Some(input) = input_element(document, "phone-input") {
            input.set_placeholder(t.placeholder_phone);
        }
    }

    fn input_element(document: &Document, id: &str) -> Option<HtmlInputElement> {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    /// Rebuild the participant list
    fn render_participants(document: &Document, app: &App) {
        let Some(list) = document.get_element_by_id("participant-list") else {
            return;
        };
        list.set_inner_html("");

        if let Some(empty) = document.get_element_by_id("empty-list") {
            if app.roster.is_empty() {
                let _ = empty.class_list().remove_1("hidden");
            } else {
                let _ = empty.class_list().add_1("hidden");
            }
        }

        for p in app.roster.entries() {
            let row = create_element(document, "div", "participant-row");

            let avatar = create_element(document, "span", "avatar");
            let initial: String = p
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().collect())
                .unwrap_or_default();
            avatar.set_text_content(Some(&initial));
            let _ = row.append_child(&avatar);

            let info = create_element(document, "div", "participant-info");
            let name = create_element(document, "span", "participant-name");
            name.set_text_content(Some(&p.name));
            let _ = info.append_child(&name);
            if let Some(phone) = &p.phone_number {
                let phone_el = create_element(document, "span", "participant-phone");
                phone_el.set_text_content(Some(&format!("📞 {phone}")));
                let _ = info.append_child(&phone_el);
            }
            let _ = row.append_child(&info);

            let remove = create_element(document, "button", "remove-btn");
            remove.set_text_content(Some("✕"));
            let _ = remove.set_attribute("data-id", &p.id.to_string());
            let _ = row.append_child(&remove);

            let _ = list.append_child(&row);
        }
    }

    /// Rebuild the result card grid
    fn render_results(document: &Document, app: &App) {
        let Some(grid) = document.get_element_by_id("result-grid") else {
            return;
        };
        grid.set_inner_html("");

        let t = app.t();
        for (index, m) in app.exchange.matches.iter().enumerate() {
            let card = create_element(document, "div", "card");
            let _ = card.set_attribute("data-index", &index.to_string());
            let _ = card.set_attribute("title", t.click_to_reveal);

            let inner = create_element(document, "div", "card-inner");

            // Front: who is gifting, hidden receiver behind a flip
            let front = create_element(document, "div", "card-face card-front");
            let giver_label = create_element(document, "p", "card-label");
            giver_label.set_text_content(Some(t.giver_label));
            let _ = front.append_child(&giver_label);
            let giver_name = create_element(document, "h3", "card-name");
            giver_name.set_text_content(Some(&m.giver.name));
            let _ = front.append_child(&giver_name);
            let gift = create_element(document, "div", "card-gift");
            gift.set_text_content(Some("🎁"));
            let _ = front.append_child(&gift);
            let hint = create_element(document, "div", "card-hint");
            hint.set_text_content(Some(t.receiver_label));
            let _ = front.append_child(&hint);
            if m.giver.phone_number.is_some() {
                let send = create_element(document, "button", "whatsapp-btn");
                send.set_text_content(Some(t.whatsapp_button));
                let _ = send.set_attribute("data-index", &index.to_string());
                let _ = front.append_child(&send);
            }
            let _ = inner.append_child(&front);

            // Back: the revealed receiver
            let back = create_element(document, "div", "card-face card-back");
            let lucky = create_element(document, "p", "card-label");
            lucky.set_text_content(Some(t.lucky_person));
            let _ = back.append_child(&lucky);
            let receiver_name = create_element(document, "h3", "card-name");
            receiver_name.set_text_content(Some(&m.receiver.name));
            let _ = back.append_child(&receiver_name);
            let gift = create_element(document, "div", "card-gift");
            gift.set_text_content(Some("🎁"));
            let _ = back.append_child(&gift);
            let _ = inner.append_child(&back);

            let _ = card.append_child(&inner);
            let _ = grid.append_child(&card);
        }
    }

    fn create_element(document: &Document, tag: &str, class: &str) -> Element {
        let el = document.create_element(tag).expect("create element");
        el.set_class_name(class);
        el
    }

    /// Enable the draw control only when a draw could actually run
    fn update_draw_button(document: &Document, app: &App) {
        let Some(btn) = document.get_element_by_id("draw-btn") else {
            return;
        };
        if app.exchange.is_drawing() {
            let _ = btn.class_list().add_1("loading");
        } else {
            let _ = btn.class_list().remove_1("loading");
        }
        if let Ok(btn) = btn.dyn_into::<HtmlButtonElement>() {
            btn.set_disabled(app.roster.len() < MIN_PARTICIPANTS || app.exchange.is_drawing());
        }
    }

    /// Toggle between the input and result screens
    fn show_screen(document: &Document, phase: ExchangePhase) {
        let screens = [
            ("input-screen", ExchangePhase::Input),
            ("result-screen", ExchangePhase::Result),
        ];
        for (id, screen_phase) in screens {
            if let Some(el) = document.get_element_by_id(id) {
                if screen_phase == phase {
                    let _ = el.class_list().remove_1("hidden");
                } else {
                    let _ = el.class_list().add_1("hidden");
                }
            }
        }
    }

    /// Read the form, add the participant, clear the form on success. An
    /// empty name is rejected silently and the inputs are left as they are.
    fn submit_add_form(app: &Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(name_input) = input_element(&document, "name-input") else {
            return;
        };
        let Some(phone_input) = input_element(&document, "phone-input") else {
            return;
        };

        let added = app
            .borrow_mut()
            .roster
            .add(&name_input.value(), &phone_input.value());
        if added.is_ok() {
            name_input.set_value("");
            phone_input.set_value("");
            render_participants(&document, &app.borrow());
            update_draw_button(&document, &app.borrow());
        }
    }

    fn setup_add_form(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("add-btn") {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                submit_add_form(&app);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in either field submits too
        for id in ["name-input", "phone-input"] {
            if let Some(input) = document.get_element_by_id(id) {
                let app = app.clone();
                let closure =
                    Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                        if event.key() == "Enter" {
                            submit_add_form(&app);
                        }
                    });
                let _ = input
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    /// One delegated listener handles every remove button in the list
    fn setup_participant_list(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(list) = document.get_element_by_id("participant-list") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            let Ok(Some(btn)) = target.closest(".remove-btn") else {
                return;
            };
            let Some(id) = btn
                .get_attribute("data-id")
                .and_then(|v| v.parse::<u64>().ok())
            else {
                return;
            };

            app.borrow_mut().roster.remove(id);
            let document = web_sys::window().unwrap().document().unwrap();
            render_participants(&document, &app.borrow());
            update_draw_button(&document, &app.borrow());
        });
        let _ = list.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_draw_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(btn) = document.get_element_by_id("draw-btn") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let count = app.borrow().roster.len();
            let started = app.borrow_mut().exchange.begin_draw(count);
            match started {
                Ok(()) => {}
                Err(DrawError::NotEnoughParticipants) => {
                    let t = app.borrow().t();
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(t.alert_min_participants);
                    }
                    return;
                }
                Err(DrawError::AlreadyDrawing) => return,
            }

            let document = web_sys::window().unwrap().document().unwrap();
            update_draw_button(&document, &app.borrow());

            // Suspense delay before the matches appear
            let app = app.clone();
            let timeout = Closure::once(move || {
                let seed = js_sys::Date::now() as u64;
                let mut rng = Pcg32::seed_from_u64(seed);
                {
                    let mut a = app.borrow_mut();
                    let matches = draw(a.roster.entries(), &mut rng);
                    a.exchange.complete_draw(matches);
                }
                log::info!(
                    "Draw complete ({} matches, seed {seed})",
                    app.borrow().exchange.matches.len()
                );

                let document = web_sys::window().unwrap().document().unwrap();
                render_results(&document, &app.borrow());
                update_draw_button(&document, &app.borrow());
                show_screen(&document, ExchangePhase::Result);
            });
            if let Some(window) = web_sys::window() {
                let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                    timeout.as_ref().unchecked_ref(),
                    DRAW_SUSPENSE_MS,
                );
            }
            timeout.forget();
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// One delegated listener covers card flips and WhatsApp buttons
    fn setup_result_grid(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(grid) = document.get_element_by_id("result-grid") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };

            // WhatsApp button first so the card underneath does not flip
            if let Ok(Some(btn)) = target.closest(".whatsapp-btn") {
                let Some(index) = btn
                    .get_attribute("data-index")
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    return;
                };
                send_whatsapp(&app.borrow(), index);
                return;
            }

            // Anywhere else on a card reveals it (one-way)
            if let Ok(Some(card)) = target.closest(".card") {
                let _ = card.class_list().add_1("flipped");
            }
        });
        let _ = grid.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Open the notification deep link for one match. Fire-and-forget: a
    /// blocked pop-up or unreachable target is not observable here.
    fn send_whatsapp(app: &App, index: usize) {
        let Some(m) = app.exchange.matches.get(index) else {
            return;
        };
        let Some(phone) = &m.giver.phone_number else {
            return;
        };

        let t = app.t();
        let message = (t.whatsapp_message)(&m.giver.name, &m.receiver.name);
        match messaging::whatsapp_link(phone, &message) {
            Ok(url) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(url.as_str(), "_blank");
                }
            }
            Err(err) => log::warn!("Could not build WhatsApp link: {err}"),
        }
    }

    fn setup_reset_button(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(btn) = document.get_element_by_id("reset-btn") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            app.borrow_mut().exchange.reset();
            let document = web_sys::window().unwrap().document().unwrap();
            update_draw_button(&document, &app.borrow());
            show_screen(&document, ExchangePhase::Input);
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_language_select(app: Rc<RefCell<App>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(select) = document.get_element_by_id("lang-select") else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::Event| {
            let Some(select) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                return;
            };
            let Some(lang) = LanguageCode::from_str(&select.value()) else {
                return;
            };

            {
                let mut a = app.borrow_mut();
                a.settings.language = lang;
                a.settings.save();
            }
            log::info!("Language switched to {}", lang.as_str());

            let document = web_sys::window().unwrap().document().unwrap();
            let a = app.borrow();
            apply_static_text(&document, a.t());
            render_participants(&document, &a);
            if a.exchange.phase == ExchangePhase::Result {
                render_results(&document, &a);
            }
        });
        let _ = select.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Secret Santa (native) starting...");
    log::info!("The UI is browser-only - run with `trunk serve` for the web version");

    println!("\nRunning draw demo...");
    demo_draw();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_draw() {
    use secret_santa::Roster;
    use secret_santa::exchange::draw;

    let mut roster = Roster::new();
    for name in ["Alice", "Bob", "Carol", "Dave"] {
        assert!(roster.add(name, "").is_ok());
    }

    let mut rng = rand::rng();
    let matches = draw(roster.entries(), &mut rng);

    assert_eq!(matches.len(), roster.len());
    for m in &matches {
        assert_ne!(m.giver.id, m.receiver.id);
        println!("  {} → {}", m.giver.name, m.receiver.name);
    }
    println!("✓ Draw demo produced a valid match set!");
}
