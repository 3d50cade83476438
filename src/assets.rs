use crate::error::AssetError;
use macroquad::prelude::{Image, ImageFormat};
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Asset;

pub fn get_asset_bytes(name: &str) -> Option<Cow<'static, [u8]>> {
    Asset::get(name).map(|f| f.data)
}

/// Decode an embedded PNG. Does not touch the GPU, so it is safe to call before
/// the window exists.
pub fn load_image(name: &str) -> Result<Image, AssetError> {
    let bytes = get_asset_bytes(name).ok_or_else(|| AssetError::NotFound(name.to_string()))?;
    Image::from_file_with_format(&bytes, Some(ImageFormat::Png)).map_err(|e| AssetError::Decode {
        name: name.to_string(),
        reason: format!("{:?}", e),
    })
}
