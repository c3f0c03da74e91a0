pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Strict UTF-8 decode; the bytes come back unchanged as text.
    pub fn extract_text(&self, content: Vec<u8>) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(content)
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}
