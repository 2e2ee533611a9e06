//! Data types flowing through the resolution pipeline.

/// File extensions treated as audio when filtering media references.
pub const AUDIO_EXTENSIONS: &[&str] = &["ogg", "oga", "mp3", "wav", "m4a", "flac"];

/// One article returned by the search service, in its ranking order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub page_id: u64,
    pub title: String,
    /// Highlighted excerpt, already reduced to plain text.
    pub snippet: Option<String>,
}

/// A named media attachment of an article, not yet resolved to a URL.
/// The title keeps its namespace prefix ("File:...") so it can be handed
/// straight back to the resolution backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaReference {
    pub title: String,
}

/// A media reference after backend lookup. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedMedia {
    pub title: String,
    pub url: String,
    pub mime_type: Option<String>,
}

impl ResolvedMedia {
    /// Authoritative audio check, independent of the filename-based filter:
    /// the declared mime type wins, the URL extension is the fallback for
    /// backends that omit mime information.
    pub fn is_audio(&self) -> bool {
        if let Some(mime) = &self.mime_type {
            if mime.starts_with("audio/") {
                return true;
            }
        }
        has_audio_extension(&self.url)
    }
}

/// One search hit together with the playable clips that survived resolution.
#[derive(Clone, Debug)]
pub struct ResultEntry {
    pub hit: SearchHit,
    pub audio_files: Vec<ResolvedMedia>,
}

/// Case-insensitive match of the final extension against [`AUDIO_EXTENSIONS`].
/// Query strings and fragments are ignored so the check works on URLs too.
pub fn has_audio_extension(name: &str) -> bool {
    let path = name.split(['?', '#']).next().unwrap_or(name);
    match path.rsplit_once('.') {
        Some((_, ext)) => AUDIO_EXTENSIONS.iter().any(|a| ext.eq_ignore_ascii_case(a)),
        None => false,
    }
}

/// Reduce a highlighted search snippet to plain text. Snippets come from a
/// shared public corpus and must never be interpreted as markup: tags are
/// dropped and the common entities unescaped.
pub fn plain_text_snippet(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;
    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_filter_is_case_insensitive() {
        assert!(has_audio_extension("File:Clip.OGG"));
        assert!(has_audio_extension("File:song.Mp3"));
        assert!(has_audio_extension("file.flac"));
        assert!(!has_audio_extension("File:Cover.jpg"));
        assert!(!has_audio_extension("File:notes.pdf"));
        assert!(!has_audio_extension("no_extension"));
    }

    #[test]
    fn extension_filter_ignores_query_strings() {
        assert!(has_audio_extension("https://host/a/b/clip.ogg?download=1"));
        assert!(has_audio_extension("https://host/clip.m4a#t=10"));
        assert!(!has_audio_extension("https://host/page.html?name=clip.ogg"));
    }

    #[test]
    fn mime_type_overrides_missing_extension() {
        let media = ResolvedMedia {
            title: "File:stream".to_string(),
            url: "https://host/stream".to_string(),
            mime_type: Some("audio/ogg".to_string()),
        };
        assert!(media.is_audio());
    }

    #[test]
    fn non_audio_mime_with_audio_extension_still_passes() {
        // The extension check is the fallback arm of the OR.
        let media = ResolvedMedia {
            title: "File:clip.ogg".to_string(),
            url: "https://host/clip.ogg".to_string(),
            mime_type: Some("application/octet-stream".to_string()),
        };
        assert!(media.is_audio());
    }

    #[test]
    fn neither_mime_nor_extension_fails() {
        let media = ResolvedMedia {
            title: "File:clip.ogg".to_string(),
            url: "https://host/derived.bin".to_string(),
            mime_type: Some("application/octet-stream".to_string()),
        };
        assert!(!media.is_audio());
    }

    #[test]
    fn snippet_markup_is_stripped() {
        assert_eq!(
            plain_text_snippet("<span class=\"searchmatch\">Bohemian</span> Rhapsody"),
            "Bohemian Rhapsody"
        );
        assert_eq!(plain_text_snippet("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(plain_text_snippet("plain text"), "plain text");
    }
}
