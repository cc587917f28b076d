use std::io;

use serde_json::ser::Formatter;

/// A [`Formatter`] adding markup-safe escaping on top of another
/// formatter.
///
/// When enabled, `<`, `>` and `&` are written as `\u003c`, `\u003e` and
/// `\u0026`. The line and paragraph separators U+2028 and U+2029 are always
/// escaped so the output can be embedded in script text.
pub(crate) struct MarkupFormatter<F> {
    inner: F,
    escape_markup: bool,
}

impl<F: Formatter> MarkupFormatter<F> {
    pub(crate) const fn new(inner: F, escape_markup: bool) -> Self {
        Self {
            inner,
            escape_markup,
        }
    }

    fn escape_of(&self, ch: char) -> Option<&'static [u8]> {
        match ch {
            '<' if self.escape_markup => Some(b"\\u003c"),
            '>' if self.escape_markup => Some(b"\\u003e"),
            '&' if self.escape_markup => Some(b"\\u0026"),
            '\u{2028}' => Some(b"\\u2028"),
            '\u{2029}' => Some(b"\\u2029"),
            _ => None,
        }
    }
}

impl<F: Formatter> Formatter for MarkupFormatter<F> {
    fn write_string_fragment<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        fragment: &str,
    ) -> io::Result<()> {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if let Some(escape) = self.escape_of(ch) {
                if start < index {
                    self.inner
                        .write_string_fragment(writer, &fragment[start..index])?;
                }
                writer.write_all(escape)?;
                start = index + ch.len_utf8();
            }
        }
        if start < fragment.len() {
            self.inner.write_string_fragment(writer, &fragment[start..])?;
        }
        Ok(())
    }

    #[inline]
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_array(writer)
    }

    #[inline]
    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array(writer)
    }

    #[inline]
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_array_value(writer, first)
    }

    #[inline]
    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_array_value(writer)
    }

    #[inline]
    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object(writer)
    }

    #[inline]
    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object(writer)
    }

    #[inline]
    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        self.inner.begin_object_key(writer, first)
    }

    #[inline]
    fn end_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_key(writer)
    }

    #[inline]
    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.begin_object_value(writer)
    }

    #[inline]
    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.inner.end_object_value(writer)
    }
}

#[cfg(test)]
mod tests {
    use serde_core::Serialize;
    use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};

    use super::*;

    fn write<F: Formatter>(formatter: F, escape: bool, value: &impl Serialize) -> String {
        let mut out = Vec::new();
        let mut ser = Serializer::with_formatter(&mut out, MarkupFormatter::new(formatter, escape));
        value.serialize(&mut ser).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn escapes_markup() {
        let out = write(CompactFormatter, true, &"a<b>&c");
        assert_eq!(out, "\"a\\u003cb\\u003e\\u0026c\"");

        let out = write(CompactFormatter, false, &"a<b>&c");
        assert_eq!(out, "\"a<b>&c\"");
    }

    #[test]
    fn always_escapes_separators() {
        let out = write(CompactFormatter, false, &"x\u{2028}y\u{2029}");
        assert_eq!(out, "\"x\\u2028y\\u2029\"");
    }

    #[test]
    fn keeps_builtin_escapes() {
        let out = write(CompactFormatter, true, &"\"<\n");
        assert_eq!(out, "\"\\\"\\u003c\\n\"");
    }

    #[test]
    fn forwards_layout() {
        let out = write(PrettyFormatter::with_indent(b"\t"), true, &[1, 2]);
        assert_eq!(out, "[\n\t1,\n\t2\n]");
    }
}
