//! @acp:module "Oracles"
//! @acp:summary "Answer sources for the guessing game"
//! @acp:domain core
//! @acp:layer model

use std::collections::VecDeque;

use super::Question;
use crate::error::{NumtrioError, Result};

/// Something that answers yes/no questions about the hidden number
pub trait Oracle {
    fn answer(&mut self, question: &Question) -> Result<bool>;
}

/// Adapter for a plain `prompt -> bool` callback
pub struct FnOracle<F> {
    callback: F,
}

/// Wrap a callback that receives the rendered prompt text
pub fn oracle_fn<F>(callback: F) -> FnOracle<F>
where
    F: FnMut(&str) -> bool,
{
    FnOracle { callback }
}

impl<F> Oracle for FnOracle<F>
where
    F: FnMut(&str) -> bool,
{
    fn answer(&mut self, question: &Question) -> Result<bool> {
        Ok((self.callback)(&question.to_string()))
    }
}

/// Replays a fixed list of answers in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    answers: VecDeque<bool>,
}

impl ScriptedOracle {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    /// Parse a comma or whitespace separated list of y/n/yes/no
    pub fn parse(script: &str) -> Result<Self> {
        let answers = script
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| match token.to_lowercase().as_str() {
                "y" | "yes" => Ok(true),
                "n" | "no" => Ok(false),
                _ => Err(NumtrioError::InvalidAnswer(token.to_string())),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(answers))
    }

    /// Answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Oracle for ScriptedOracle {
    fn answer(&mut self, question: &Question) -> Result<bool> {
        self.answers
            .pop_front()
            .ok_or_else(|| NumtrioError::OracleExhausted(question.to_string()))
    }
}

/// Answers honestly for a known target
#[derive(Debug, Clone, Copy)]
pub struct TruthfulOracle {
    target: i64,
    asked: u32,
}

impl TruthfulOracle {
    pub fn new(target: i64) -> Self {
        Self { target, asked: 0 }
    }

    /// Questions answered so far
    pub fn asked(&self) -> u32 {
        self.asked
    }
}

impl Oracle for TruthfulOracle {
    fn answer(&mut self, question: &Question) -> Result<bool> {
        self.asked += 1;
        Ok(match *question {
            Question::IsIt(n) => self.target == n,
            Question::IsGreaterThan(n) => self.target > n,
        })
    }
}
