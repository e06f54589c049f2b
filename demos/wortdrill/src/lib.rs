use wasm_bindgen::prelude::*;

mod words;
use words::GermanWords;

inkdrill_web::export_drill!(GermanWords, "wortdrill");
