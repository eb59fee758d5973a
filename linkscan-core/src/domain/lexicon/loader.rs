use super::Lexicon;
use std::sync::OnceLock;

static DEFAULT_LEXICON: OnceLock<Lexicon> = OnceLock::new();

/// The lexicon embedded in the crate, parsed once on first use.
pub fn default_lexicon() -> &'static Lexicon {
    DEFAULT_LEXICON.get_or_init(|| {
        Lexicon::from_toml_str(include_str!("../../../configs/default.toml"))
            .expect("embedded default lexicon should always parse and validate")
    })
}
