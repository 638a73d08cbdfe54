use std::convert::Infallible;

use crate::settings::ResizeSettings;

use super::resize_images_in_content;

/// A source of document text that can also accept a replacement.
///
/// Hosts (an editor buffer, a file on disk) implement this so the rewriter
/// never depends on where the text lives.
pub trait TextDocument {
    type Error;

    fn get_value(&self) -> Result<String, Self::Error>;

    fn set_value(&mut self, content: &str) -> Result<(), Self::Error>;
}

impl TextDocument for String {
    type Error = Infallible;

    fn get_value(&self) -> Result<String, Self::Error> {
        Ok(self.clone())
    }

    fn set_value(&mut self, content: &str) -> Result<(), Self::Error> {
        content.clone_into(self);
        Ok(())
    }
}

/// Resizes every image reference in `doc`.
///
/// The document is written back only when the text actually changed.
/// Returns whether a write happened.
pub fn resize_images_in_document<D>(
    doc: &mut D,
    settings: &ResizeSettings,
) -> Result<bool, D::Error>
where
    D: TextDocument + ?Sized,
{
    let content = doc.get_value()?;
    let new_content = resize_images_in_content(&content, settings);

    if content == new_content {
        return Ok(false);
    }

    doc.set_value(&new_content)?;
    Ok(true)
}
