// Accepted OCR image formats

/// Image formats accepted by the OCR endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
        }
    }

    /// Match a declared MIME type exactly (parameters such as `; charset` are ignored).
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence {
            "image/jpeg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Match a filename by extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".png") {
            Some(ImageFormat::Png)
        } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            Some(ImageFormat::Jpeg)
        } else if lower.ends_with(".webp") {
            Some(ImageFormat::WebP)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_type() {
        assert_eq!(ImageFormat::from_mime_type("image/png"), Some(ImageFormat::Png));
        assert_eq!(ImageFormat::from_mime_type("image/jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("image/webp; q=1"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_mime_type("image/jpg"), None);
        assert_eq!(ImageFormat::from_mime_type("image/gif"), None);
    }

    #[test]
    fn test_from_filename() {
        assert_eq!(ImageFormat::from_filename("a.JPG"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_filename("a.b.jpeg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_filename("x.WebP"), Some(ImageFormat::WebP));
        assert_eq!(ImageFormat::from_filename("png"), None);
        assert_eq!(ImageFormat::from_filename("a.png.exe"), None);
    }
}
