/// Aggregate service holding every port implementation.
///
/// Each domain module implements its service trait for this struct, so the
/// HTTP layer only ever needs a single cloneable handle.
#[derive(Debug, Clone)]
pub struct Service<SR, LLM, SP> {
    pub(crate) saved_recipe_repository: SR,
    pub(crate) llm_client: LLM,
    pub(crate) speech_synthesizer: SP,
}

impl<SR, LLM, SP> Service<SR, LLM, SP> {
    pub fn new(saved_recipe_repository: SR, llm_client: LLM, speech_synthesizer: SP) -> Self {
        Self {
            saved_recipe_repository,
            llm_client,
            speech_synthesizer,
        }
    }
}
