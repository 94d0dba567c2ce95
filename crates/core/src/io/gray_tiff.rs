//! Grayscale TIFF reading/writing
//!
//! Uses the `tiff` crate. Single-channel 8/16/32-bit integer and 32/64-bit
//! float images are decoded into `Image<f64>`; writing always produces
//! 32-bit float samples.

use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult};
use tiff::encoder::colortype::Gray32Float;
use tiff::encoder::TiffEncoder;
use tiff::ColorType;

use crate::error::{Error, Result};
use crate::image::{Image, Pixel};

/// Read a grayscale TIFF file into an image
pub fn read_image<P: AsRef<Path>>(path: P) -> Result<Image<f64>> {
    let file = File::open(path.as_ref())?;
    decode_tiff(BufReader::new(file))
}

/// Read a grayscale TIFF from an in-memory buffer
pub fn read_image_from_buffer(data: &[u8]) -> Result<Image<f64>> {
    decode_tiff(Cursor::new(data))
}

fn decode_tiff<R>(reader: R) -> Result<Image<f64>>
where
    R: std::io::Read + std::io::Seek,
{
    let mut decoder =
        Decoder::new(reader).map_err(|e| Error::Other(format!("TIFF decode error: {}", e)))?;

    let colortype = decoder
        .colortype()
        .map_err(|e| Error::Other(format!("Cannot read color type: {}", e)))?;
    if !matches!(colortype, ColorType::Gray(_)) {
        return Err(Error::UnsupportedDataType(format!(
            "expected a single-channel image, got {:?}",
            colortype
        )));
    }

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| Error::Other(format!("Cannot read dimensions: {}", e)))?;
    let rows = height as usize;
    let cols = width as usize;

    let result = decoder
        .read_image()
        .map_err(|e| Error::Other(format!("Cannot read image data: {}", e)))?;

    let data: Vec<f64> = match result {
        DecodingResult::U8(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::U16(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::U32(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::I8(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::I16(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::I32(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::F32(buf) => buf.into_iter().map(f64::from).collect(),
        DecodingResult::F64(buf) => buf,
        _ => {
            return Err(Error::UnsupportedDataType(
                "Unsupported TIFF sample format".to_string(),
            ));
        }
    };

    Image::from_vec(data, rows, cols)
}

/// Write an image to a 32-bit float TIFF file
pub fn write_image<T, P>(image: &Image<T>, path: P) -> Result<()>
where
    T: Pixel,
    P: AsRef<Path>,
{
    let file = File::create(path.as_ref())?;
    encode_tiff(image, file)
}

/// Write an image to an in-memory 32-bit float TIFF buffer
pub fn write_image_to_buffer<T: Pixel>(image: &Image<T>) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    encode_tiff(image, Cursor::new(&mut buf))?;
    Ok(buf)
}

fn encode_tiff<T, W>(image: &Image<T>, writer: W) -> Result<()>
where
    T: Pixel,
    W: std::io::Write + std::io::Seek,
{
    let mut encoder =
        TiffEncoder::new(writer).map_err(|e| Error::Other(format!("TIFF encoder error: {}", e)))?;

    let (rows, cols) = image.shape();
    let data: Vec<f32> = image
        .data()
        .iter()
        .map(|&v| num_traits::cast(v).unwrap_or(f32::NAN))
        .collect();

    encoder
        .write_image::<Gray32Float>(cols as u32, rows as u32, &data)
        .map_err(|e| Error::Other(format!("Cannot write image data: {}", e)))?;

    Ok(())
}
