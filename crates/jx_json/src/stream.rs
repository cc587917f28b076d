//! Stream encoder and decoder.

use alloc::sync::Arc;
use core::sync::atomic::{AtomicUsize, Ordering};
use std::io::{self, BufReader};

use jx_reflect::Reflect;
use serde_json::de::IoRead;
use serde_json::{StreamDeserializer, Value};

use crate::Json;
use crate::error::{Error, SyntaxError};
use crate::{de, ser};

// -----------------------------------------------------------------------------
// Encoder

/// Writes a sequence of JSON values, one per line.
///
/// Each value is encoded in full before anything reaches the writer, so a
/// failed [`encode`](Encoder::encode) writes nothing.
///
/// ```
/// use jx_json::Json;
///
/// let mut encoder = Json::new().new_encoder(Vec::new());
/// encoder.encode(&"<b>".to_owned()).unwrap();
/// encoder.set_escape_markup(false);
/// encoder.encode(&"<b>".to_owned()).unwrap();
///
/// let out = String::from_utf8(encoder.into_inner()).unwrap();
/// assert_eq!(out, "\"\\u003cb\\u003e\"\n\"<b>\"\n");
/// ```
pub struct Encoder<W> {
    json: Json,
    writer: W,
    indent: Option<String>,
    escape_markup: bool,
    buf: Vec<u8>,
}

impl<W: io::Write> Encoder<W> {
    pub(crate) fn new(json: Json, writer: W) -> Self {
        Self {
            escape_markup: json.escapes_markup(),
            json,
            writer,
            indent: None,
            buf: Vec::new(),
        }
    }

    /// Encodes `value` followed by a newline.
    pub fn encode(&mut self, value: &dyn Reflect) -> Result<(), Error> {
        self.buf.clear();
        ser::write_value(
            &self.json,
            &mut self.buf,
            value,
            self.indent.as_deref(),
            self.escape_markup,
        )?;
        self.buf.push(b'\n');
        self.writer.write_all(&self.buf)?;
        Ok(())
    }

    /// Indents nested values by `indent`; an empty string restores compact
    /// output.
    pub fn set_indent(&mut self, indent: &str) {
        self.indent = (!indent.is_empty()).then(|| indent.to_owned());
    }

    /// Overrides the configuration's markup escaping for this stream.
    pub fn set_escape_markup(&mut self, escape: bool) {
        self.escape_markup = escape;
    }

    #[inline]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

// -----------------------------------------------------------------------------
// Decoder

/// Counts the bytes handed to the parser.
struct CountingReader<R> {
    inner: R,
    consumed: Arc<AtomicUsize>,
}

impl<R: io::Read> io::Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.inner.read(buf)?;
        self.consumed.fetch_add(read, Ordering::Relaxed);
        Ok(read)
    }
}

type ValueStream<R> = StreamDeserializer<'static, IoRead<CountingReader<BufReader<R>>>, Value>;

/// Reads a sequence of whitespace-separated JSON values.
///
/// Reaching the end of input between two values yields an error for which
/// [`Error::is_eof`] returns `true`.
///
/// ```
/// use jx_json::Json;
/// use jx_reflect::ops::Dynamic;
///
/// let mut decoder = Json::new().new_decoder(&b"1 [true]"[..]);
///
/// let mut value = Dynamic::Null;
/// decoder.decode(&mut value).unwrap();
/// assert_eq!(value, Dynamic::Float(1.0));
///
/// decoder.decode(&mut value).unwrap();
/// assert_eq!(value, Dynamic::List(vec![Dynamic::Bool(true)]));
///
/// assert!(decoder.decode(&mut value).unwrap_err().is_eof());
/// ```
pub struct Decoder<R: io::Read> {
    json: Json,
    stream: ValueStream<R>,
    consumed: Arc<AtomicUsize>,
}

impl<R: io::Read> Decoder<R> {
    pub(crate) fn new(json: Json, reader: R) -> Self {
        let consumed = Arc::new(AtomicUsize::new(0));
        let reader = CountingReader {
            inner: BufReader::new(reader),
            consumed: Arc::clone(&consumed),
        };
        Self {
            json,
            stream: serde_json::Deserializer::from_reader(reader).into_iter(),
            consumed,
        }
    }

    /// Decodes the next value into `target`.
    pub fn decode(&mut self, target: &mut dyn Reflect) -> Result<(), Error> {
        match self.stream.next() {
            None => Err(Error::eof()),
            Some(Err(err)) if err.is_io() => Err(Error::Io(err.into())),
            Some(Err(err)) => {
                let offset = self.consumed.load(Ordering::Relaxed);
                Err(SyntaxError::from_stream(&err, offset).into())
            }
            Some(Ok(input)) => de::decode_root(&self.json, &input, target),
        }
    }

    /// Decodes the next value into a fresh `T`.
    pub fn decode_into<T: Reflect + Default>(&mut self) -> Result<T, Error> {
        let mut value = T::default();
        self.decode(&mut value)?;
        Ok(value)
    }

    /// Decodes numbers in dynamically typed slots as exact text from now
    /// on.
    pub fn use_number(&mut self) {
        self.json = self.json.use_number();
    }

    /// Fails on unknown object keys from now on.
    pub fn disallow_unknown_fields(&mut self) {
        self.json = self.json.disallow_unknown_fields();
    }

    /// The number of input bytes making up the values decoded so far.
    #[inline]
    pub fn byte_offset(&self) -> usize {
        self.stream.byte_offset()
    }
}
