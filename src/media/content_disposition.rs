//! `Content-Disposition` header value rendering.
//!
//! The filename is always a quoted-string (`filename="a b.png"`), with `"` and `\` escaped.
//! Non-ASCII names also get an RFC 5987 `filename*` parameter, the quoted one keeping an ASCII fallback.

/// Render the `Content-Disposition` value, e.g., `attachment; filename="report 1.pdf"`.
pub fn content_disposition(disposition_type: Option<&str>, filename: &str) -> String {
	let mut value = String::new();

	if let Some(disposition_type) = disposition_type {
		value.push_str(disposition_type);
		value.push_str("; ");
	}

	value.push_str("filename=\"");
	value.push_str(&quote_escape(filename));
	value.push('"');

	if !filename.is_ascii() {
		value.push_str("; filename*=UTF-8''");
		value.push_str(&ext_value_encode(filename));
	}

	value
}

/// Escape for a quoted-string. Control characters would break the header line, so they are dropped,
/// and non-ASCII characters are replaced by `_` (the `filename*` parameter carries the real name).
fn quote_escape(filename: &str) -> String {
	let mut out = String::with_capacity(filename.len());
	for c in filename.chars() {
		match c {
			'"' | '\\' => {
				out.push('\\');
				out.push(c);
			}
			c if c.is_control() => {}
			c if !c.is_ascii() => out.push('_'),
			c => out.push(c),
		}
	}
	out
}

/// Percent-encode everything but the RFC 5987 `attr-char` set.
fn ext_value_encode(filename: &str) -> String {
	let mut out = String::with_capacity(filename.len() * 3);
	for b in filename.bytes() {
		let is_attr_char = b.is_ascii_alphanumeric()
			|| matches!(
				b,
				b'!' | b'#' | b'$' | b'&' | b'+' | b'-' | b'.' | b'^' | b'_' | b'`' | b'|' | b'~'
			);
		if is_attr_char {
			out.push(b as char);
		} else {
			out.push_str(&format!("%{b:02X}"));
		}
	}
	out
}

// region:    --- Tests


// endregion: --- Tests
