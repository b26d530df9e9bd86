/// Document preamble: charset, font table and paragraph defaults.
pub const HEADER: &str = concat!(
    r"{\rtf1\ansi\ansicpg1252\deff0\nouicompat\deflang1036",
    r"{\fonttbl{\f0\fnil\fcharset0 Arial;}}",
    r"\viewkind4\uc1\pard\sa200\sl276\slmult1\f0\fs24\lang12 ",
);

/// Closes the group opened by [`HEADER`].
pub const FOOTER: &str = "}";

/// Paragraph break emitted for each `\n`.
pub const PARAGRAPH: &str = r"\par ";

pub fn render(content: &str) -> String {
    let body = escape_body(content);
    let mut out = String::with_capacity(HEADER.len() + body.len() + FOOTER.len());
    out.push_str(HEADER);
    out.push_str(&body);
    out.push_str(FOOTER);
    out
}

/// Convert plain text into a single RTF text run.
///
/// Non-ASCII characters become `\uN?` per UTF-16 code unit, with `N` written as
/// a signed 16-bit value and `?` as the fallback glyph (`\uc1`).
pub fn escape_body(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut units = [0u16; 2];

    for ch in content.chars() {
        match ch {
            '\n' => out.push_str(PARAGRAPH),
            '\\' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            c if (c as u32) > 127 => {
                for unit in c.encode_utf16(&mut units) {
                    out.push_str(&format!("\\u{}?", *unit as i16));
                }
            }
            c => out.push(c),
        }
    }

    out
}
