pub mod synthesize_speech;
