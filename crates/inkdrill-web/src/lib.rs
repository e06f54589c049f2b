pub mod runner;
pub mod speech;

pub use inkdrill;
pub use runner::DrillRunner;

/// Generate all `#[wasm_bindgen]` exports for a drill app.
///
/// Generates:
/// - `thread_local!` storage for the DrillRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, pointer/touch handlers, buttons, data accessors)
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod words;
/// use words::MyWords;
///
/// inkdrill_web::export_drill!(MyWords, "my-drill");
/// ```
///
/// # Arguments
///
/// - `$source_type`: A type implementing `inkdrill::WordSource` with a `new()` constructor
/// - `$drill_name`: A string literal used in log messages
#[macro_export]
macro_rules! export_drill {
    ($source_type:ty, $drill_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::DrillRunner<$source_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::DrillRunner<$source_type>) -> R) -> R {
            RUNNER.with(|cell| {
                let mut borrow = cell.borrow_mut();
                let runner = borrow.as_mut().expect("Drill not initialized. Call drill_init() first.");
                f(runner)
            })
        }

        /// Speak whatever the last call queued.
        fn flush_speech(r: &mut $crate::DrillRunner<$source_type>) {
            let lang = r.speech_lang().to_owned();
            for word in r.take_utterances() {
                $crate::speech::speak(&word, &lang);
            }
        }

        #[wasm_bindgen]
        pub fn drill_init() -> bool {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            match $crate::DrillRunner::new(<$source_type>::new()) {
                Ok(runner) => {
                    RUNNER.with(|cell| {
                        *cell.borrow_mut() = Some(runner);
                    });
                    log::info!("{}: initialized", $drill_name);
                    true
                }
                Err(e) => {
                    log::error!("{}: failed to initialize: {}", $drill_name, e);
                    false
                }
            }
        }

        #[wasm_bindgen]
        pub fn drill_load_config(json: &str) -> bool {
            with_runner(|r| match r.load_config(json) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("{}: config rejected: {}", $drill_name, e);
                    false
                }
            })
        }

        #[wasm_bindgen]
        pub fn drill_tick() {
            with_runner(|r| r.tick());
        }

        // ---- Input ----

        #[wasm_bindgen]
        pub fn drill_set_surface(left: f32, top: f32, width: f32, height: f32) {
            with_runner(|r| r.set_surface($crate::inkdrill::SurfaceRect::new(left, top, width, height)));
        }

        #[wasm_bindgen]
        pub fn drill_mouse_down(client_x: f32, client_y: f32) {
            with_runner(|r| r.push_raw($crate::inkdrill::RawPointerEvent::Mouse {
                phase: $crate::inkdrill::MousePhase::Down,
                client: Some($crate::inkdrill::Point::new(client_x, client_y)),
            }));
        }

        #[wasm_bindgen]
        pub fn drill_mouse_move(client_x: f32, client_y: f32) {
            with_runner(|r| r.push_raw($crate::inkdrill::RawPointerEvent::Mouse {
                phase: $crate::inkdrill::MousePhase::Move,
                client: Some($crate::inkdrill::Point::new(client_x, client_y)),
            }));
        }

        #[wasm_bindgen]
        pub fn drill_mouse_up() {
            with_runner(|r| r.push_raw($crate::inkdrill::RawPointerEvent::Mouse {
                phase: $crate::inkdrill::MousePhase::Up,
                client: None,
            }));
        }

        #[wasm_bindgen]
        pub fn drill_mouse_leave() {
            with_runner(|r| r.push_raw($crate::inkdrill::RawPointerEvent::Mouse {
                phase: $crate::inkdrill::MousePhase::Leave,
                client: None,
            }));
        }

        /// `touches` holds client coordinates as x0, y0, x1, y1, ...
        /// `phase`: 0 = start, 1 = move, 2 = end, 3 = cancel.
        #[wasm_bindgen]
        pub fn drill_touch(phase: u32, touches: &[f32]) {
            let phase = match phase {
                0 => $crate::inkdrill::TouchPhase::Start,
                1 => $crate::inkdrill::TouchPhase::Move,
                2 => $crate::inkdrill::TouchPhase::End,
                3 => $crate::inkdrill::TouchPhase::Cancel,
                other => {
                    log::debug!("{}: unknown touch phase {}", $drill_name, other);
                    return;
                }
            };
            let touches = touches
                .chunks_exact(2)
                .map(|xy| $crate::inkdrill::Point::new(xy[0], xy[1]))
                .collect();
            with_runner(|r| r.push_raw($crate::inkdrill::RawPointerEvent::Touch { phase, touches }));
        }

        // ---- Buttons ----

        #[wasm_bindgen]
        pub fn drill_play() {
            with_runner(|r| {
                r.play();
                flush_speech(r);
            });
        }

        #[wasm_bindgen]
        pub fn drill_next() {
            with_runner(|r| {
                r.next_word();
                flush_speech(r);
            });
        }

        #[wasm_bindgen]
        pub fn drill_previous() {
            with_runner(|r| {
                r.previous_word();
                flush_speech(r);
            });
        }

        #[wasm_bindgen]
        pub fn drill_toggle_reveal() -> bool {
            with_runner(|r| r.toggle_reveal())
        }

        #[wasm_bindgen]
        pub fn drill_mark_success() {
            with_runner(|r| {
                r.mark_success();
                flush_speech(r);
            });
        }

        #[wasm_bindgen]
        pub fn drill_mark_error() {
            with_runner(|r| {
                r.mark_error();
                flush_speech(r);
            });
        }

        #[wasm_bindgen]
        pub fn drill_clear() {
            with_runner(|r| r.clear_surface());
        }

        /// Returns the accuracy (0-100), or -1 when no word is up.
        #[wasm_bindgen]
        pub fn drill_check_writing() -> i32 {
            with_runner(|r| {
                let result = r.check_writing();
                flush_speech(r);
                match result {
                    Ok(report) => report.accuracy() as i32,
                    Err(e) => {
                        log::warn!("{}: check failed: {}", $drill_name, e);
                        -1
                    }
                }
            })
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_current_word() -> Option<String> {
            with_runner(|r| r.current_word().map(str::to_owned))
        }

        #[wasm_bindgen]
        pub fn get_vertices_ptr() -> *const f32 {
            with_runner(|r| r.vertices_ptr())
        }

        #[wasm_bindgen]
        pub fn get_vertex_count() -> u32 {
            with_runner(|r| r.vertex_count())
        }

        /// Events stay in the buffer until `clear_events()`; call it after
        /// every read of `get_events_len()` events.
        #[wasm_bindgen]
        pub fn get_events_ptr() -> *const f32 {
            with_runner(|r| r.events_ptr())
        }

        #[wasm_bindgen]
        pub fn get_events_len() -> u32 {
            with_runner(|r| r.events_len())
        }

        #[wasm_bindgen]
        pub fn clear_events() {
            with_runner(|r| r.clear_events());
        }

        #[wasm_bindgen]
        pub fn get_feedback_delay_ms() -> u32 {
            with_runner(|r| r.feedback_delay_ms())
        }

        #[wasm_bindgen]
        pub fn get_protocol_version() -> f32 {
            $crate::inkdrill::PROTOCOL_VERSION
        }
    };
}
