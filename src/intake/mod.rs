pub mod frame_reader;
pub mod json_lines_reader;

pub use frame_reader::FrameReader;
pub use json_lines_reader::JsonLinesReader;
