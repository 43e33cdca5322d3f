use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    speech::{
        entities::SpeechClip,
        ports::{SpeechService, SpeechSynthesizer},
        value_objects::SynthesizeSpeechInput,
    },
};

impl<SR, LLM, SP> SpeechService for Service<SR, LLM, SP>
where
    SR: Send + Sync,
    LLM: Send + Sync,
    SP: SpeechSynthesizer,
{
    async fn synthesize_step(
        &self,
        input: SynthesizeSpeechInput,
    ) -> Result<Option<SpeechClip>, CoreError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let clip = self.speech_synthesizer.synthesize(text.to_string()).await?;
        if clip.is_none() {
            tracing::warn!("Speech synthesizer returned no audio");
        }

        Ok(clip)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        recipe::ports::MockLLMClient, saved_recipe::ports::MockSavedRecipeRepository,
        speech::ports::MockSpeechSynthesizer,
    };

    #[tokio::test]
    async fn test_blank_text_skips_synthesizer() {
        let mut synthesizer = MockSpeechSynthesizer::new();
        synthesizer.expect_synthesize().never();

        let service = Service::new(
            MockSavedRecipeRepository::new(),
            MockLLMClient::new(),
            synthesizer,
        );

        let clip = service
            .synthesize_step(SynthesizeSpeechInput {
                text: "  ".to_string(),
            })
            .await
            .unwrap();
        assert!(clip.is_none());
    }

    #[tokio::test]
    async fn test_synthesizes_trimmed_text() {
        let mut synthesizer = MockSpeechSynthesizer::new();
        synthesizer
            .expect_synthesize()
            .withf(|text| text == "Boil pasta")
            .returning(|_| {
                Box::pin(async { Ok(Some(SpeechClip::new(Bytes::from_static(&[0, 0, 1, 0])))) })
            });

        let service = Service::new(
            MockSavedRecipeRepository::new(),
            MockLLMClient::new(),
            synthesizer,
        );

        let clip = service
            .synthesize_step(SynthesizeSpeechInput {
                text: " Boil pasta\n".to_string(),
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(clip.frame_count(), 2);
        assert_eq!(clip.sample_rate, 24_000);
    }
}
