//! Lazy, pull-based sequential frame decoder.
//!
//! [`FrameDecoder`] implements [`Iterator`] and decodes frames in stream
//! order — each call to [`next()`](Iterator::next) reads and decodes just
//! enough packets to produce the next frame. No seeking is performed: the
//! sampler consumes every frame from index 0 and decides per frame whether
//! to persist it.
//!
//! # Example
//!
//! ```no_run
//! use framesift::{FrameDecoder, VideoSource};
//!
//! let source = VideoSource::open("clip.mp4")?;
//! for (index, frame) in FrameDecoder::new(source)?.enumerate() {
//!     let image = frame?;
//!     image.save(format!("frame_{index:04}.png"))?;
//! }
//! # Ok::<(), framesift::SiftError>(())
//! ```

use ffmpeg_next::{
    Error as FfmpegError, Packet,
    codec::context::Context as CodecContext,
    decoder::Video as VideoDecoder,
    format::Pixel,
    frame::Video as VideoFrame,
    software::scaling::{Context as ScalingContext, Flags as ScalingFlags},
};
use image::{DynamicImage, RgbImage};

use crate::{error::SiftError, source::VideoSource};

/// Decodes every frame of a [`VideoSource`] in order, as RGB8 images.
///
/// The decoder owns the source; drop it to release the demuxer and codec
/// handles. Iteration ends at the container's end of stream, after the
/// codec's buffered frames have been drained.
pub struct FrameDecoder {
    source: VideoSource,
    decoder: VideoDecoder,
    scaler: ScalingContext,
    width: u32,
    height: u32,
    decoded_frame: VideoFrame,
    rgb_frame: VideoFrame,
    eof_sent: bool,
    done: bool,
}

impl FrameDecoder {
    /// Build a decoder for the given source.
    ///
    /// # Errors
    ///
    /// Returns [`SiftError::Ffmpeg`] if the codec or the pixel-format
    /// converter cannot be set up.
    pub fn new(source: VideoSource) -> Result<Self, SiftError> {
        let stream = source
            .input
            .stream(source.stream_index)
            .ok_or(SiftError::NoVideoStream)?;
        let decoder_context = CodecContext::from_parameters(stream.parameters())?;
        let decoder = decoder_context.decoder().video()?;

        let width = decoder.width();
        let height = decoder.height();

        // Source pixel format → RGB24 at the source resolution.
        let scaler = ScalingContext::get(
            decoder.format(),
            width,
            height,
            Pixel::RGB24,
            width,
            height,
            ScalingFlags::BILINEAR,
        )?;

        Ok(Self {
            source,
            decoder,
            scaler,
            width,
            height,
            decoded_frame: VideoFrame::empty(),
            rgb_frame: VideoFrame::empty(),
            eof_sent: false,
            done: false,
        })
    }

    /// Scale and convert the current `decoded_frame` to a [`DynamicImage`].
    fn convert_current_frame(&mut self) -> Result<DynamicImage, SiftError> {
        self.scaler.run(&self.decoded_frame, &mut self.rgb_frame)?;
        let buffer = tight_rgb_buffer(&self.rgb_frame, self.width, self.height);
        let image = RgbImage::from_raw(self.width, self.height, buffer).ok_or_else(|| {
            SiftError::VideoDecode(
                "Failed to construct RGB image from decoded frame data".to_string(),
            )
        })?;
        Ok(DynamicImage::ImageRgb8(image))
    }
}

impl Iterator for FrameDecoder {
    type Item = Result<DynamicImage, SiftError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            // Try to receive a frame the codec has already produced.
            if self.decoder.receive_frame(&mut self.decoded_frame).is_ok() {
                match self.convert_current_frame() {
                    Ok(image) => return Some(Ok(image)),
                    Err(error) => {
                        self.done = true;
                        return Some(Err(error));
                    }
                }
            }

            // Codec has no buffered frames. Feed it more packets.
            if self.eof_sent {
                self.done = true;
                return None;
            }

            let mut packet = Packet::empty();
            match packet.read(&mut self.source.input) {
                Ok(()) => {
                    if packet.stream() == self.source.stream_index {
                        if let Err(error) = self.decoder.send_packet(&packet) {
                            self.done = true;
                            return Some(Err(SiftError::from(error)));
                        }
                    }
                    // Non-video packets are silently skipped.
                }
                Err(FfmpegError::Eof) => {
                    if let Err(error) = self.decoder.send_eof() {
                        self.done = true;
                        return Some(Err(SiftError::from(error)));
                    }
                    self.eof_sent = true;
                }
                Err(_) => {
                    // Non-fatal read error — try the next packet.
                }
            }
        }
    }
}

/// Copy pixel data from a scaled frame into a tightly-packed RGB buffer.
///
/// FFmpeg frames frequently carry per-row padding (stride > width × 3); the
/// padding must be stripped before handing the bytes to
/// [`image::RgbImage::from_raw`].
fn tight_rgb_buffer(rgb_frame: &VideoFrame, width: u32, height: u32) -> Vec<u8> {
    let stride = rgb_frame.stride(0);
    let row_bytes = (width as usize) * 3;
    let data = rgb_frame.data(0);

    if stride == row_bytes {
        data[..row_bytes * (height as usize)].to_vec()
    } else {
        let mut buffer = Vec::with_capacity(row_bytes * (height as usize));
        for row in 0..(height as usize) {
            let row_start = row * stride;
            buffer.extend_from_slice(&data[row_start..row_start + row_bytes]);
        }
        buffer
    }
}
