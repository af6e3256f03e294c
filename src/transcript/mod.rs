//! Time-stamped word tokens derived from a video's audio, plus the wire
//! format of the external transcription service that produces them.

pub mod model;
pub mod wire;
