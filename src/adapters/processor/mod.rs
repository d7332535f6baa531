//! Payload processor adapters.
//!
//! - `ScriptProcessor` - Runs the external text-processing script
//! - `RecordingProcessor` - Captures jobs (tests, dry runs)

mod recording;
mod script;

pub use recording::RecordingProcessor;
pub use script::ScriptProcessor;
