use reqwest::blocking::multipart::{Form, Part};
use std::io::{self, Read};

/// Form field name the cover endpoints read the upload from.
const FIELD_NAME: &str = "cover";
/// Placeholder filename declared for every upload; the API ignores it.
const FILE_NAME: &str = "cover image";
const PART_MIME: &str = "application/octet-stream";

/// A fully encoded `multipart/form-data` body with its matching content type.
///
/// The boundary inside `content_type` is the one written into `body`, so the
/// two must always be sent together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    body: Vec<u8>,
    content_type: String,
    boundary: String,
}

impl CoverImage {
    /// Read `image` to exhaustion and wrap it in a single `cover` form part.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if reading `image` fails. No
    /// partially encoded body is produced in that case.
    pub fn encode<R: Read>(mut image: R) -> io::Result<Self> {
        let mut data = Vec::new();
        image.read_to_end(&mut data)?;
        let image_bytes = data.len();

        let form = form_for(&data);
        let boundary = form.boundary().to_string();

        let part = Part::bytes(data)
            .file_name(FILE_NAME)
            .mime_str(PART_MIME)
            .map_err(io::Error::other)?;

        let mut body = Vec::with_capacity(image_bytes + 256);
        form.part(FIELD_NAME, part)
            .into_reader()
            .read_to_end(&mut body)?;

        tracing::trace!(
            image_bytes,
            body_bytes = body.len(),
            "Encoded cover image as multipart form"
        );

        Ok(Self {
            body,
            content_type: format!("multipart/form-data; boundary={boundary}"),
            boundary,
        })
    }

    /// Value for the request's `Content-Type` header.
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the encoder output, returning `(body, content_type)`.
    pub fn into_parts(self) -> (Vec<u8>, String) {
        (self.body, self.content_type)
    }
}

/// Start empty forms until one's random boundary does not occur inside `data`.
fn form_for(data: &[u8]) -> Form {
    loop {
        let form = Form::new();
        let boundary = form.boundary().as_bytes();
        if !data.windows(boundary.len()).any(|w| w == boundary) {
            return form;
        }
        tracing::debug!("Multipart boundary collided with image data, drawing another");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Reader that fails after yielding a few bytes.
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.served {
                self.served = true;
                buf[..3].copy_from_slice(b"PNG");
                return Ok(3);
            }
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stream reset"))
        }
    }

    fn occurs_in(haystack: &[u8], needle: &str) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle.as_bytes())
    }

    /// Split a body into `(headers, content)` for the single part it holds.
    fn parse_single_part(image: &CoverImage) -> (String, Vec<u8>) {
        let body = image.body();
        let opening = format!("--{}\r\n", image.boundary());
        let closing = format!("\r\n--{}--\r\n", image.boundary());

        assert!(body.starts_with(opening.as_bytes()), "missing opening delimiter");
        assert!(body.ends_with(closing.as_bytes()), "missing closing delimiter");

        let inner = &body[opening.len()..body.len() - closing.len()];
        let split = inner
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("part headers terminator");
        let headers = String::from_utf8(inner[..split].to_vec()).unwrap();
        (headers, inner[split + 4..].to_vec())
    }

    #[test]
    fn test_empty_stream_yields_empty_cover_part() {
        let image = CoverImage::encode(io::empty()).unwrap();
        let (headers, content) = parse_single_part(&image);

        assert!(headers.contains(r#"name="cover""#));
        assert!(headers.contains(r#"filename="cover image""#));
        assert!(headers.to_lowercase().contains("content-type: application/octet-stream"));
        assert!(content.is_empty());
    }

    #[test]
    fn test_content_copied_verbatim() {
        let data: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
        let image = CoverImage::encode(data.as_slice()).unwrap();
        let (_, content) = parse_single_part(&image);
        assert_eq!(content, data);
    }

    #[test]
    fn test_content_type_matches_body_boundary() {
        let image = CoverImage::encode(&b"\x89PNG\r\n\x1a\n"[..]).unwrap();
        let expected = format!("multipart/form-data; boundary={}", image.boundary());
        assert_eq!(image.content_type(), expected);
        assert!(!occurs_in(b"\x89PNG\r\n\x1a\n", image.boundary()));
    }

    #[test]
    fn test_boundary_fresh_per_call() {
        let data = b"same image bytes";
        let first = CoverImage::encode(&data[..]).unwrap();
        let second = CoverImage::encode(&data[..]).unwrap();

        assert_ne!(first.boundary(), second.boundary());
        assert_eq!(parse_single_part(&first).1, parse_single_part(&second).1);
    }

    #[test]
    fn test_form_for_skips_colliding_boundary() {
        // Embed a boundary that a previous form drew; the next form must differ
        let taken = Form::new().boundary().to_string();
        let data = format!("prefix {taken} suffix").into_bytes();

        let form = form_for(&data);
        assert!(!occurs_in(&data, form.boundary()));
    }

    #[test]
    fn test_read_error_propagates() {
        let err = CoverImage::encode(FailingReader { served: false }).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_into_parts() {
        let image = CoverImage::encode(&b"abc"[..]).unwrap();
        let content_type = image.content_type().to_string();
        let (body, ct) = image.into_parts();
        assert_eq!(ct, content_type);
        assert!(body.windows(3).any(|w| w == b"abc"));
    }
}
