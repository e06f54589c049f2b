use inkdrill::{
    normalize, Drill, DrillError, DrillEvent, InputQueue, RawPointerEvent, ScoreReport,
    StrokeBuffer, SurfaceRect, WireEvent, WordSource,
};

/// Generic drill runner that wires host callbacks to the drill.
///
/// Each app creates a `thread_local!` DrillRunner and exports free functions
/// via `#[wasm_bindgen]` (see [`export_drill!`](crate::export_drill)), because
/// wasm-bindgen cannot export generic structs directly.
pub struct DrillRunner<W: WordSource> {
    source: W,
    drill: Drill,
    input: InputQueue,
    surface: SurfaceRect,
    stroke_buffer: StrokeBuffer,
    /// Flat buffer of wire events for host reads.
    event_buffer: Vec<WireEvent>,
    /// Words the host should speak, oldest first.
    utterances: Vec<String>,
}

impl<W: WordSource> DrillRunner<W> {
    pub fn new(source: W) -> Result<Self, DrillError> {
        let drill = Drill::from_source(&source)?;
        Ok(Self {
            source,
            drill,
            input: InputQueue::new(),
            surface: SurfaceRect::default(),
            stroke_buffer: StrokeBuffer::new(),
            event_buffer: Vec::with_capacity(16),
            utterances: Vec::new(),
        })
    }

    /// Replace the drill configuration, keeping the word source.
    /// Session progress and strokes start over.
    pub fn load_config(&mut self, json: &str) -> Result<(), DrillError> {
        let config = inkdrill::DrillConfig::from_json(json)?;
        self.drill = Drill::new(config, self.source.words())?;
        self.input.drain();
        self.refresh();
        Ok(())
    }

    pub fn drill(&self) -> &Drill {
        &self.drill
    }

    /// Record the drawing surface's current bounding rectangle.
    pub fn set_surface(&mut self, rect: SurfaceRect) {
        self.surface = rect;
    }

    /// Normalize a raw device event and queue it. Malformed events are dropped.
    pub fn push_raw(&mut self, raw: RawPointerEvent) {
        match normalize(&raw, &self.surface) {
            Some(event) => self.input.push(event),
            None => log::debug!("runner: ignored malformed input {:?}", raw),
        }
    }

    /// Apply queued input and rebuild the buffers the host reads.
    pub fn tick(&mut self) {
        self.drill.drain_input(&mut self.input);
        self.refresh();
    }

    /// Speak the current word, presenting one first if none is up.
    pub fn play(&mut self) {
        if self.drill.session().current_index().is_some() {
            self.run(|d| d.play());
        } else {
            self.change_word(|d| d.play());
        }
    }

    pub fn next_word(&mut self) {
        self.change_word(|d| d.next_word().map(|_| ()));
    }

    pub fn previous_word(&mut self) {
        self.change_word(|d| {
            d.previous_word();
            Ok(())
        });
    }

    pub fn toggle_reveal(&mut self) -> bool {
        let revealed = self.drill.toggle_reveal();
        self.refresh();
        revealed
    }

    pub fn mark_success(&mut self) {
        self.change_word(|d| {
            d.mark_success();
            Ok(())
        });
    }

    pub fn mark_error(&mut self) {
        self.change_word(|d| {
            d.mark_error();
            Ok(())
        });
    }

    pub fn clear_surface(&mut self) {
        self.change_word(|d| {
            d.clear_surface();
            Ok(())
        });
    }

    /// Score the writing. Pending input is applied first so every point counts.
    pub fn check_writing(&mut self) -> Result<ScoreReport, DrillError> {
        self.drill.drain_input(&mut self.input);
        let report = self.drill.check_writing();
        self.refresh();
        report
    }

    /// Take the words queued for speech since the last call.
    pub fn take_utterances(&mut self) -> Vec<String> {
        std::mem::take(&mut self.utterances)
    }

    pub fn current_word(&self) -> Option<&str> {
        self.drill.session().current_word()
    }

    pub fn speech_lang(&self) -> &str {
        &self.drill.config().speech_lang
    }

    /// Run an operation that resets the surface. Input queued for the old
    /// surface is dropped so it cannot land on the new one.
    fn change_word(&mut self, op: impl FnOnce(&mut Drill) -> Result<(), DrillError>) {
        let dropped = self.input.drain();
        if !dropped.is_empty() {
            log::debug!("runner: dropped {} pending input events", dropped.len());
        }
        self.run(op);
    }

    fn run(&mut self, op: impl FnOnce(&mut Drill) -> Result<(), DrillError>) {
        if let Err(e) = op(&mut self.drill) {
            log::warn!("runner: {}", e);
        }
        self.refresh();
    }

    /// Flatten pending drill events into the wire buffer and rebuild strokes.
    fn refresh(&mut self) {
        for event in self.drill.events() {
            if let DrillEvent::Speak { index } = *event {
                if let Some(word) = self.drill.session().words().get(index) {
                    self.utterances.push(word.to_owned());
                }
            }
            self.event_buffer.push((*event).into());
        }
        self.drill.clear_frame_data();
        self.stroke_buffer.rebuild(self.drill.capture());
    }

    /// Drop wire events the host has consumed.
    ///
    /// Wire events accumulate across ticks and button calls until this is
    /// called; a host that reads events must clear them after each read.
    pub fn clear_events(&mut self) {
        self.event_buffer.clear();
    }

    // ---- Pointer accessors for host reads ----

    pub fn vertices_ptr(&self) -> *const f32 {
        self.stroke_buffer.vertices_ptr()
    }

    pub fn vertex_count(&self) -> u32 {
        self.stroke_buffer.vertex_count()
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.event_buffer.as_ptr() as *const f32
    }

    pub fn events_len(&self) -> u32 {
        self.event_buffer.len() as u32
    }

    pub fn events(&self) -> &[WireEvent] {
        &self.event_buffer
    }

    pub fn feedback_delay_ms(&self) -> u32 {
        self.drill.config().feedback_delay_ms
    }

    pub fn last_accuracy(&self) -> Option<u8> {
        self.drill.last_score().map(|b| b.accuracy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkdrill::api::types::kind;
    use inkdrill::{DrillConfig, MousePhase, TouchPhase, WordList};
    use inkdrill::Point;

    struct Animals;

    impl WordSource for Animals {
        fn config(&self) -> DrillConfig {
            DrillConfig { seed: 3, ..DrillConfig::default() }
        }

        fn words(&self) -> WordList {
            WordList::parse("H\nHund\nK\nKatze")
        }
    }

    struct Nothing;

    impl WordSource for Nothing {
        fn words(&self) -> WordList {
            WordList::default()
        }
    }

    fn touch(phase: TouchPhase, x: f32, y: f32) -> RawPointerEvent {
        RawPointerEvent::Touch { phase, touches: vec![Point::new(x, y)] }
    }

    #[test]
    fn empty_source_fails_to_start() {
        assert!(DrillRunner::new(Nothing).is_err());
    }

    #[test]
    fn touch_stroke_relative_to_surface() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.set_surface(SurfaceRect::new(100.0, 200.0, 600.0, 300.0));
        r.push_raw(touch(TouchPhase::Start, 150.0, 250.0));
        r.push_raw(touch(TouchPhase::Move, 160.0, 260.0));
        r.push_raw(RawPointerEvent::Touch { phase: TouchPhase::End, touches: vec![] });
        r.tick();

        let strokes = r.drill().capture().strokes();
        assert_eq!(strokes.len(), 1);
        assert_eq!(
            strokes.iter().next().unwrap().points(),
            &[Point::new(50.0, 50.0), Point::new(60.0, 60.0)]
        );
        assert_eq!(r.vertex_count(), 2);
    }

    #[test]
    fn malformed_input_is_dropped() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.push_raw(RawPointerEvent::Touch { phase: TouchPhase::Start, touches: vec![] });
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Move, client: None });
        r.tick();
        assert!(r.drill().capture().strokes().is_empty());
    }

    #[test]
    fn play_queues_speech_and_events() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.play();
        let word = r.current_word().unwrap().to_owned();
        assert_eq!(r.take_utterances(), vec![word]);
        assert!(r.take_utterances().is_empty());
        assert_eq!(r.events()[0].kind, kind::WORD_PRESENTED);
        assert_eq!(r.events_len(), 3);
        r.clear_events();
        assert_eq!(r.events_len(), 0);
    }

    #[test]
    fn check_sees_pending_input() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.next_word();
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Down, client: Some(Point::new(0.0, 0.0)) });
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Move, client: Some(Point::new(120.0, 0.0)) });
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Up, client: None });

        let report = r.check_writing().unwrap();
        assert!(report.breakdown.stroke_count > 0.0);
        assert_eq!(r.last_accuracy(), Some(report.accuracy()));
    }

    #[test]
    fn check_before_any_word_is_an_error() {
        let mut r = DrillRunner::new(Animals).unwrap();
        assert!(matches!(r.check_writing(), Err(DrillError::NoCurrentWord)));
    }

    #[test]
    fn clear_surface_drops_queued_input() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.next_word();
        r.push_raw(touch(TouchPhase::Start, 10.0, 10.0));
        r.clear_surface();
        r.tick();
        assert_eq!(r.vertex_count(), 0);
    }

    #[test]
    fn word_change_drops_queued_input() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.next_word();
        r.tick();
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Down, client: Some(Point::new(0.0, 0.0)) });
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Move, client: Some(Point::new(120.0, 0.0)) });
        r.push_raw(RawPointerEvent::Mouse { phase: MousePhase::Up, client: None });
        r.next_word();
        r.tick();
        assert!(r.drill().capture().strokes().is_empty());
        assert_eq!(r.vertex_count(), 0);

        let ops: [fn(&mut DrillRunner<Animals>); 3] =
            [DrillRunner::previous_word, DrillRunner::mark_success, DrillRunner::mark_error];
        for op in ops {
            r.push_raw(touch(TouchPhase::Start, 10.0, 10.0));
            r.push_raw(touch(TouchPhase::Move, 40.0, 10.0));
            r.push_raw(RawPointerEvent::Touch { phase: TouchPhase::End, touches: vec![] });
            op(&mut r);
            r.tick();
            assert!(r.drill().capture().strokes().is_empty());
        }
    }

    #[test]
    fn play_on_current_word_keeps_queued_input() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.next_word();
        r.push_raw(touch(TouchPhase::Start, 10.0, 10.0));
        r.push_raw(RawPointerEvent::Touch { phase: TouchPhase::End, touches: vec![] });
        r.play();
        r.tick();
        assert_eq!(r.drill().capture().strokes().len(), 1);
    }

    #[test]
    fn events_accumulate_until_cleared() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.next_word();
        let after_first = r.events_len();
        r.tick();
        r.toggle_reveal();
        assert_eq!(r.events_len(), after_first + 1);
        r.clear_events();
        r.tick();
        assert_eq!(r.events_len(), 0);
    }

    #[test]
    fn load_config_overrides_thresholds() {
        let mut r = DrillRunner::new(Animals).unwrap();
        r.load_config(r#"{ "feedback_delay_ms": 750, "speech_lang": "en-GB" }"#).unwrap();
        assert_eq!(r.feedback_delay_ms(), 750);
        assert_eq!(r.speech_lang(), "en-GB");
        assert!(r.load_config("not json").is_err());
    }
}
