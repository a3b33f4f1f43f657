// src/core/sanitize.rs

/// First character title-cased, the rest lowercased. No per-word logic:
/// "UNITED STATES" → "United states".
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            push_titlecase(&mut out, first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => s!(),
    }
}

// std only has upper/lower; these are the chars whose titlecase differs from uppercase.
fn push_titlecase(out: &mut String, c: char) {
    let title = match c {
        'ß' => "Ss",
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        _ => {
            out.extend(c.to_uppercase());
            return;
        }
    };
    out.push_str(title);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_is_first_letter_only() {
        assert_eq!(capitalize("UNITED STATES"), "United states");
        assert_eq!(capitalize("usa"), "Usa");
        assert_eq!(capitalize("us"), "Us");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ñu"), "Ñu");
    }

    #[test]
    fn capitalize_uses_titlecase_not_uppercase() {
        assert_eq!(capitalize("ßa"), "Ssa");
        assert_eq!(capitalize("ǆungla"), "ǅungla");
        assert_eq!(capitalize("ǄUNGLA"), "ǅungla");
        assert_eq!(capitalize("ﬁji"), "Fiji");
    }
}
