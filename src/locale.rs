//! Input/output encoding selection.
//!
//! By default text is treated as UTF-8 whatever the environment says. With
//! `-l` the locale named by the environment decides the encoding through its
//! codeset suffix (`en_US.UTF-8`, `de_DE.ISO-8859-1@euro`).

use crate::error::LolcatError;
use crate::text::Encoding;

/// Locale variables in POSIX precedence order for character handling.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Pick the encoding for this run.
///
/// # Errors
///
/// Returns [`LolcatError::Locale`] when the system locale was requested but
/// names an unusable locale. Callers warn and fall back to UTF-8.
pub fn resolve_encoding(use_system_locale: bool) -> Result<Encoding, LolcatError> {
    if !use_system_locale {
        return Ok(Encoding::Utf8);
    }
    let locale = requested_locale();
    let encoding = encoding_for_locale(&locale)?;
    tracing::debug!(%locale, ?encoding, "using system locale");
    Ok(encoding)
}

/// Encoding implied by a locale name of the form `language[_territory][.codeset][@modifier]`.
///
/// `C`, `POSIX` and names without a codeset are single-byte.
///
/// # Errors
///
/// Returns [`LolcatError::Locale`] for malformed names and unknown codesets.
pub fn encoding_for_locale(name: &str) -> Result<Encoding, LolcatError> {
    let unavailable = || LolcatError::Locale(format!("locale '{}' is not available", name));

    let without_modifier = name.split('@').next().unwrap_or_default();
    if matches!(without_modifier, "" | "C" | "POSIX") {
        return Ok(Encoding::SingleByte);
    }

    let (language, codeset) = match without_modifier.split_once('.') {
        Some((language, codeset)) => (language, Some(codeset)),
        None => (without_modifier, None),
    };

    let valid_language = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid_language {
        return Err(unavailable());
    }

    match codeset {
        None => Ok(Encoding::SingleByte),
        Some(codeset) => Encoding::from_codeset(codeset).ok_or_else(unavailable),
    }
}

/// The locale name the environment asks for.
fn requested_locale() -> String {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .unwrap_or_else(|| "C".to_string())
}
