use aviation_helper_rs::phonetics;
use log::trace;

use crate::normalize::normalize_text;

/// Whether `keyword` counts as spoken in `transcript`.
///
/// Both sides are normalized first. A keyword is present when it occurs as a
/// substring of the transcript, or when it is a spelling/number word whose
/// symbol occurs in the transcript, or a symbol whose spoken word occurs.
/// Keywords are checked independently; matched spans are not consumed.
pub fn keyword_exists(keyword: &str, transcript: &str) -> bool {
    let keyword = normalize_text(keyword);
    let transcript = normalize_text(transcript);
    normalized_keyword_exists(&keyword, &transcript)
}

pub(crate) fn normalized_keyword_exists(keyword: &str, transcript: &str) -> bool {
    if transcript.contains(keyword) {
        return true;
    }

    if let Some(symbol) = phonetics::symbol_for(keyword) {
        if transcript.contains(symbol) {
            trace!("'{keyword}' matched by symbol '{symbol}'");
            return true;
        }
    }

    if let Some(word) = phonetics::words_for(keyword).find(|word| transcript.contains(word)) {
        trace!("'{keyword}' matched by spoken word '{word}'");
        return true;
    }

    false
}
