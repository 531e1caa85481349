//! cmyka provides a CMYK-with-alpha pixel format and an in-memory image storing it, for codecs
//! (such as TIFF readers and writers) that need a CMYK color space with transparency. It's
//! internally organized into two small crates; this crate re-exports both.
//!
//! # Reading and writing pixels
//!
//! Allocate an image with [`CmykaImage::new`], then write pixels with [`set`][ImageMut::set],
//! which goes through [`CmykaModel`], or with [`CmykaImage::set_cmyka`]:
//!
//! ```
//! use cmyka::{Cmyka, CmykaImage, Image, ImageMut, Rectangle, Rgba};
//!
//! let mut image = CmykaImage::new(Rectangle::new(0, 0, 4, 4));
//! image.set(0, 0, Rgba::new(0xff, 0, 0, 0xff));
//! image.set_cmyka(1, 0, Cmyka::new(0, 0, 0, 0xff, 0xff));
//!
//! assert_eq!(image.at(0, 0), Cmyka::new(0, 0xff, 0xff, 0, 0xff));
//! // Out-of-bounds reads return the zero color.
//! assert_eq!(image.at(10, 10), Cmyka::default());
//! ```
//!
//! # Sub-images
//!
//! [`CmykaImage::sub_image`] and [`CmykaImage::sub_image_mut`] return views sharing the buffer
//! of the parent image:
//!
//! ```
//! use cmyka::{Cmyka, CmykaImage, Image, Rectangle};
//!
//! let mut image = CmykaImage::new(Rectangle::new(0, 0, 8, 8));
//! let mut view = image.sub_image_mut(Rectangle::new(4, 4, 16, 16));
//! assert_eq!(view.bounds(), Rectangle::new(4, 4, 8, 8));
//! view.set_cmyka(5, 5, Cmyka::new(1, 2, 3, 4, 5));
//!
//! assert_eq!(image.at(5, 5), Cmyka::new(1, 2, 3, 4, 5));
//! ```
//!
//! # Raw buffer access
//!
//! Codecs may read and write the buffer directly. The pixel at `(x, y)` starts at
//! [`pix_offset(x, y)`][CmykaImage::pix_offset] and takes five bytes in C, M, Y, K, A order:
//!
//! ```
//! use cmyka::{Cmyka, CmykaImage, Rectangle};
//!
//! let buf = vec![10, 20, 30, 40, 50];
//! let image = CmykaImage::from_raw(buf, 5, Rectangle::new(0, 0, 1, 1))?;
//! assert_eq!(image.cmyka_at(0, 0), Cmyka::new(10, 20, 30, 40, 50));
//! # Ok::<_, cmyka::Error>(())
//! ```
pub use cmyka_color::*;
pub use cmyka_grid::*;

pub mod integration;
