//! Image I/O for darkicon.
//!
//! Decoding the source file, encoding the recoloured result, and scaling
//! preview thumbnails. The recolouring core never touches the filesystem.

mod codec;
mod thumbnail;

pub use codec::{default_output_path, load_image, resolve_output, save_image, OutputFormat};
pub use thumbnail::{preview, preview_dimensions, DEFAULT_PREVIEW_SIZE};
