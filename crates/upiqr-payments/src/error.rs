//! Payment rendering error types using thiserror.

/// Errors produced while turning a payload into a QR image.
#[derive(thiserror::Error, Debug)]
pub enum PaymentError {
    /// The payload could not be encoded as a QR symbol.
    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    /// The rendered image could not be serialized to PNG.
    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}
