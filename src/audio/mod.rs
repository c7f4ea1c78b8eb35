//! Audio buffer type and WAV file I/O

pub mod buffer;
pub mod io;

pub use buffer::AudioBuffer;
pub use io::{load_wav, save_wav};
