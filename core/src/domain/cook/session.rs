use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Instruction, Recipe},
};

/// Step-by-step walk through a recipe's instructions.
#[derive(Debug, Clone, PartialEq)]
pub struct CookSession {
    instructions: Vec<Instruction>,
    current: usize,
}

impl CookSession {
    pub fn start(recipe: &Recipe) -> Result<Self, CoreError> {
        if recipe.instructions.is_empty() {
            return Err(CoreError::Invalid(
                "recipe has no instructions to cook".to_string(),
            ));
        }

        Ok(Self {
            instructions: recipe.instructions.clone(),
            current: 0,
        })
    }

    pub fn current_step(&self) -> usize {
        self.current
    }

    pub fn total_steps(&self) -> usize {
        self.instructions.len()
    }

    pub fn current_instruction(&self) -> &Instruction {
        &self.instructions[self.current]
    }

    pub fn current_text(&self) -> &str {
        self.current_instruction().text()
    }

    pub fn is_first_step(&self) -> bool {
        self.current == 0
    }

    pub fn is_last_step(&self) -> bool {
        self.current + 1 == self.instructions.len()
    }

    /// Returns `true` when the step changed
    pub fn next(&mut self) -> bool {
        if self.is_last_step() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.is_first_step() {
            return false;
        }
        self.current -= 1;
        true
    }

    pub fn progress_percent(&self) -> f32 {
        (self.current + 1) as f32 / self.instructions.len() as f32 * 100.0
    }
}
