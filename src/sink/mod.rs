// Concrete chart sinks (the GUI surface lives in `ui`)
pub mod image_sink;
pub mod palette;

pub use image_sink::ImageSink;
