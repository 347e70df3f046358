use std::fmt::Display;

use image::{DynamicImage, ImageBuffer, Pixel, Rgb};

/// Channel arrangement of a decoded raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl ChannelLayout {
    pub fn of(image: &DynamicImage) -> Self {
        match image.color().channel_count() {
            0 | 1 => Self::Gray,
            2 => Self::GrayAlpha,
            3 => Self::Rgb,
            _ => Self::Rgba,
        }
    }

    pub fn channel_count(&self) -> u8 {
        match self {
            Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Alpha on a gray raster is dropped, so both count as a single channel.
    pub fn conversion(&self) -> Conversion {
        match self {
            Self::Gray | Self::GrayAlpha => Conversion::Expanded,
            Self::Rgb => Conversion::AlreadyConformant,
            Self::Rgba => Conversion::Truncated,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// single channel replicated into three
    Expanded,
    /// three channels, left untouched
    AlreadyConformant,
    /// channels beyond the third discarded
    Truncated,
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expanded => write!(f, "expanded single channel image to three channels"),
            Self::AlreadyConformant => write!(f, "image already has three channels"),
            Self::Truncated => write!(f, "truncated multi channel image to three channels"),
        }
    }
}

/// Brings any decoded raster to exactly three channels, keeping its sample type.
pub fn to_three_channels(image: DynamicImage) -> (DynamicImage, Conversion) {
    let conversion = ChannelLayout::of(&image).conversion();
    let converted = match image {
        DynamicImage::ImageLuma8(buffer) => {
            DynamicImage::ImageRgb8(replicate_first_channel(&buffer))
        }
        DynamicImage::ImageLumaA8(buffer) => {
            DynamicImage::ImageRgb8(replicate_first_channel(&buffer))
        }
        DynamicImage::ImageLuma16(buffer) => {
            DynamicImage::ImageRgb16(replicate_first_channel(&buffer))
        }
        DynamicImage::ImageLumaA16(buffer) => {
            DynamicImage::ImageRgb16(replicate_first_channel(&buffer))
        }
        DynamicImage::ImageRgba8(buffer) => {
            DynamicImage::ImageRgb8(keep_first_three_channels(&buffer))
        }
        DynamicImage::ImageRgba16(buffer) => {
            DynamicImage::ImageRgb16(keep_first_three_channels(&buffer))
        }
        DynamicImage::ImageRgba32F(buffer) => {
            DynamicImage::ImageRgb32F(keep_first_three_channels(&buffer))
        }
        image @ (DynamicImage::ImageRgb8(_)
        | DynamicImage::ImageRgb16(_)
        | DynamicImage::ImageRgb32F(_)) => image,
        other => DynamicImage::ImageRgb32F(other.to_rgb32f()),
    };
    (converted, conversion)
}

/// Builds a three channel raster where every channel holds the first channel of the source.
pub fn replicate_first_channel<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> ImageBuffer<Rgb<P::Subpixel>, Vec<P::Subpixel>>
where
    P: Pixel,
    Rgb<P::Subpixel>: Pixel<Subpixel = P::Subpixel>,
{
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let value = image.get_pixel(x, y).channels()[0];
        Rgb([value, value, value])
    })
}

/// Builds a three channel raster from the first three channels of the source.
pub fn keep_first_three_channels<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
) -> ImageBuffer<Rgb<P::Subpixel>, Vec<P::Subpixel>>
where
    P: Pixel,
    Rgb<P::Subpixel>: Pixel<Subpixel = P::Subpixel>,
{
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let channels = image.get_pixel(x, y).channels();
        Rgb([channels[0], channels[1], channels[2]])
    })
}

#[cfg(test)]
mod tests {
    use image::{
        DynamicImage, GrayAlphaImage, GrayImage, ImageBuffer, Luma, LumaA, Rgb, RgbImage, Rgba,
        RgbaImage,
    };

    use super::{to_three_channels, ChannelLayout, Conversion};

    fn gradient_gray(width: u32, height: u32) -> GrayImage {
        ImageBuffer::from_fn(width, height, |x, y| Luma([((x * 7 + y * 13) % 256) as u8]))
    }

    #[test]
    fn classify_layouts() {
        assert_eq!(
            ChannelLayout::of(&DynamicImage::new_luma8(2, 2)),
            ChannelLayout::Gray
        );
        assert_eq!(
            ChannelLayout::of(&DynamicImage::new_luma_a16(2, 2)),
            ChannelLayout::GrayAlpha
        );
        assert_eq!(
            ChannelLayout::of(&DynamicImage::new_rgb32f(2, 2)),
            ChannelLayout::Rgb
        );
        assert_eq!(
            ChannelLayout::of(&DynamicImage::new_rgba8(2, 2)),
            ChannelLayout::Rgba
        );
    }

    #[test]
    fn layout_channel_count_matches_decoded_color() {
        let images = [
            DynamicImage::new_luma16(1, 1),
            DynamicImage::new_luma_a8(1, 1),
            DynamicImage::new_rgb8(1, 1),
            DynamicImage::new_rgba32f(1, 1),
        ];
        for image in images {
            assert_eq!(
                ChannelLayout::of(&image).channel_count(),
                image.color().channel_count()
            );
        }
    }

    #[test]
    fn gray_is_replicated_into_every_channel() {
        let gray = gradient_gray(5, 4);
        let (converted, conversion) = to_three_channels(DynamicImage::ImageLuma8(gray.clone()));
        assert_eq!(conversion, Conversion::Expanded);
        let rgb = converted.as_rgb8().expect("Expanded 8 bit gray must stay 8 bit");
        assert_eq!(rgb.dimensions(), (5, 4));
        for (x, y, pixel) in rgb.enumerate_pixels() {
            let value = gray.get_pixel(x, y)[0];
            assert_eq!(*pixel, Rgb([value, value, value]), "pixel {} {}", x, y);
        }
    }

    #[test]
    fn gray_alpha_drops_alpha() {
        let gray_alpha: GrayAlphaImage = ImageBuffer::from_fn(3, 3, |x, _| LumaA([x as u8 * 40, 7]));
        let (converted, conversion) = to_three_channels(DynamicImage::ImageLumaA8(gray_alpha));
        assert_eq!(conversion, Conversion::Expanded);
        let rgb = converted.as_rgb8().expect("8 bit gray alpha must become 8 bit rgb");
        assert_eq!(*rgb.get_pixel(2, 1), Rgb([80, 80, 80]));
    }

    #[test]
    fn sixteen_bit_gray_keeps_depth() {
        let gray: ImageBuffer<Luma<u16>, Vec<u16>> =
            ImageBuffer::from_fn(2, 2, |x, y| Luma([1000 + x as u16 * 300 + y as u16]));
        let (converted, _) = to_three_channels(DynamicImage::ImageLuma16(gray));
        let rgb = converted.as_rgb16().expect("16 bit gray must become 16 bit rgb");
        assert_eq!(*rgb.get_pixel(1, 1), Rgb([1301, 1301, 1301]));
    }

    #[test]
    fn rgb_passes_through_unchanged() {
        let rgb: RgbImage = ImageBuffer::from_fn(4, 2, |x, y| Rgb([x as u8, y as u8, 200]));
        let (converted, conversion) = to_three_channels(DynamicImage::ImageRgb8(rgb.clone()));
        assert_eq!(conversion, Conversion::AlreadyConformant);
        assert_eq!(converted.as_rgb8(), Some(&rgb));
    }

    #[test]
    fn rgba_keeps_first_three_channels_without_blending() {
        let rgba: RgbaImage = ImageBuffer::from_fn(3, 2, |x, y| Rgba([x as u8, y as u8, 9, 0]));
        let (converted, conversion) = to_three_channels(DynamicImage::ImageRgba8(rgba.clone()));
        assert_eq!(conversion, Conversion::Truncated);
        let rgb = converted.as_rgb8().expect("8 bit rgba must become 8 bit rgb");
        for (x, y, pixel) in rgb.enumerate_pixels() {
            let source = rgba.get_pixel(x, y);
            assert_eq!(pixel.0, [source[0], source[1], source[2]]);
        }
    }

    #[test]
    fn float_rgba_is_truncated() {
        let rgba: ImageBuffer<Rgba<f32>, Vec<f32>> =
            ImageBuffer::from_pixel(2, 2, Rgba([0.25, 0.5, 0.75, 0.0]));
        let (converted, _) = to_three_channels(DynamicImage::ImageRgba32F(rgba));
        let rgb = converted.as_rgb32f().expect("float rgba must become float rgb");
        assert_eq!(*rgb.get_pixel(0, 1), Rgb([0.25, 0.5, 0.75]));
    }

    #[test]
    fn converted_images_always_have_three_channels() {
        let images = [
            DynamicImage::new_luma8(3, 3),
            DynamicImage::new_luma_a8(3, 3),
            DynamicImage::new_luma16(3, 3),
            DynamicImage::new_rgb16(3, 3),
            DynamicImage::new_rgba16(3, 3),
            DynamicImage::new_rgba32f(3, 3),
        ];
        for image in images {
            let (converted, _) = to_three_channels(image);
            assert_eq!(converted.color().channel_count(), 3);
            assert_eq!((converted.width(), converted.height()), (3, 3));
        }
    }
}
