#[derive(Debug, Clone)]
pub struct SynthesizeSpeechInput {
    pub text: String,
}
