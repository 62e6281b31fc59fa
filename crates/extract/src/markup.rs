//! Helpers for pulling plain text out of oEmbed embed markup.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// First `<p>` element of an embed blockquote; X puts the post body there.
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").expect("valid regex"));

/// A `t.co` anchor at the very end of the post body (media or permalink).
static TRAILING_PERMALINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)\s*<a\b[^>]*href\s*=\s*["']https?://t\.co/[^"']*["'][^>]*>[^<]*</a>\s*$"#)
        .expect("valid regex")
});

static BR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"));

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-zA-Z]+);").expect("valid regex")
});

/// Isolate the human-written text of an X embed.
///
/// Takes the inner markup of the first `<p>`, drops a trailing `t.co`
/// anchor, turns `<br>` into newlines, strips the remaining tags and
/// decodes entities. Without a `<p>` the text before the `&mdash;` byline
/// is used instead.
pub fn tweet_text(html: &str) -> String {
    let body = match PARAGRAPH_RE.captures(html) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()).to_string(),
        None => html.split("&mdash;").next().unwrap_or("").to_string(),
    };

    let body = TRAILING_PERMALINK_RE.replace(&body, "");
    let body = BR_RE.replace_all(&body, "\n");
    decode_entities(&strip_tags(&body)).trim().to_string()
}

/// Remove every markup tag, keeping the text between them.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Decode the named and numeric HTML entities that show up in embeds.
///
/// Unknown named entities are left untouched.
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = if let Some(hex) = entity
                .strip_prefix("#x")
                .or_else(|| entity.strip_prefix("#X"))
            {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            } else {
                named_entity(entity)
            };
            decoded.map_or_else(|| caps[0].to_string(), |c| c.to_string())
        })
        .into_owned()
}

fn named_entity(name: &str) -> Option<char> {
    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "mdash" => '\u{2014}',
        "ndash" => '\u{2013}',
        "hellip" => '\u{2026}',
        "rsquo" => '\u{2019}',
        "lsquo" => '\u{2018}',
        "rdquo" => '\u{201d}',
        "ldquo" => '\u{201c}',
        _ => return None,
    };
    Some(c)
}

/// Derive an `@handle` from a profile URL such as
/// `https://twitter.com/jane` or `https://www.instagram.com/jane/`.
pub fn handle_from_profile_url(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_query = without_scheme.split(['?', '#']).next().unwrap_or("");
    let (_host, path) = without_query.split_once('/')?;
    let segment = path.trim_end_matches('/').rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    Some(format!("@{}", segment.trim_start_matches('@')))
}
