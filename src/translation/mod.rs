mod client;
mod formality;
mod translator;

pub use client::DeepLClient;
pub use formality::Formality;
pub use translator::{
    TextResult, TextResults, TranslateTextOptions, TranslationRequest, Translator, translate,
};
