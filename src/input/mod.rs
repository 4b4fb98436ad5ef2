mod reader;

pub use reader::{InputReader, STDIN_FIRST_CHUNK_TIMEOUT};
