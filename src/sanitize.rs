/// Cleans a raw statement payload before any structural parsing.
///
/// Bank exports show up with stray NUL bytes, C1 controls from bad encoding
/// round-trips, mixed line endings and private-use garbage. Everything here
/// is applied in order; the whitespace collapse at the end assumes the
/// earlier passes already normalized line endings.
///
/// Lossy on purpose: line structure is sacrificed, the tag parser only
/// cares about `<` / `>` delimiters.
pub fn sanitize(raw: &str) -> String {
    // C0/C1 controls except tab, LF and CR; NUL goes with them. The two
    // non-characters U+FFFE/U+FFFF show up after bad UTF-16 round-trips.
    let stripped: String = raw
        .chars()
        .filter(|&c| {
            !(c.is_control() && !matches!(c, '\t' | '\n' | '\r'))
                && c != '\u{FEFF}'
                && c != '\u{FFFE}'
                && c != '\u{FFFF}'
        })
        .collect();

    // CRLF and lone CR both become LF.
    let unix_newlines = stripped.replace("\r\n", "\n").replace('\r', "\n");

    // Second pass: anything control-ish or private-use that survived.
    let clean: String = unix_newlines
        .chars()
        .filter(|&c| {
            (!c.is_control() || matches!(c, '\t' | '\n'))
                && !('\u{E000}'..='\u{F8FF}').contains(&c)
        })
        .collect();

    // Collapse every whitespace run (newlines included) to a single space
    // and trim the ends.
    clean.split_whitespace().collect::<Vec<_>>().join(" ")
}
