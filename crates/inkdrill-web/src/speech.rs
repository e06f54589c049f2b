use wasm_bindgen::JsValue;
use web_sys::SpeechSynthesisUtterance;

/// Speak `word` through the browser's speech synthesis, cancelling anything
/// still queued. Errors are logged; speech is never essential to the drill.
pub fn speak(word: &str, lang: &str) {
    if let Err(e) = try_speak(word, lang) {
        log::warn!("speech: could not speak '{}': {:?}", word, e);
    }
}

fn try_speak(word: &str, lang: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let synth = window.speech_synthesis()?;
    synth.cancel();
    let utterance = SpeechSynthesisUtterance::new_with_text(word)?;
    utterance.set_lang(lang);
    synth.speak(&utterance);
    Ok(())
}
