//! Conversion between commands, XML frames and parsed replies.

/// Frame builders, the document parser and error-frame detection.
pub mod encoder;
