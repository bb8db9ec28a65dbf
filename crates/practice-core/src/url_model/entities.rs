//! Single-pass HTML entity decoding.

/// Longest entity body we try to interpret (between `&` and `;`).
const MAX_ENTITY_LEN: usize = 10;

fn named_entity(name: &str) -> Option<char> {
    Some(match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        _ => return None,
    })
}

fn numeric_entity(body: &str) -> Option<char> {
    let code = if let Some(hex) = body.strip_prefix('x').or_else(|| body.strip_prefix('X')) {
        u32::from_str_radix(hex, 16).ok()?
    } else {
        body.parse::<u32>().ok()?
    };
    char::from_u32(code).filter(|c| *c != '\0')
}

/// Decodes named and numeric HTML entities (quotes included) in one pass.
///
/// Unknown or malformed references are kept verbatim. The output is not
/// re-scanned, so `&amp;lt;` becomes `&lt;`, not `<`.
pub fn decode_html_entities(input: &str) -> String {
    if !input.contains('&') {
        return input.to_string();
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        let decoded = tail
            .find(';')
            .filter(|end| *end > 0 && *end <= MAX_ENTITY_LEN)
            .and_then(|end| {
                let body = &tail[..end];
                let c = match body.strip_prefix('#') {
                    Some(num) => numeric_entity(num),
                    None => named_entity(body),
                }?;
                Some((c, end))
            });
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numeric() {
        assert_eq!(
            decode_html_entities("a=1&amp;b=&quot;x&quot;&#39;&#x41;"),
            "a=1&b=\"x\"'A"
        );
    }

    #[test]
    fn single_pass_only() {
        assert_eq!(decode_html_entities("&amp;lt;"), "&lt;");
    }

    #[test]
    fn unknown_and_bare_ampersands_kept() {
        assert_eq!(decode_html_entities("a&b=c&bogus;&"), "a&b=c&bogus;&");
        assert_eq!(decode_html_entities("&#0;"), "&#0;");
    }
}
