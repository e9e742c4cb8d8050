use crate::core::errors::Infeasible;
use crate::core::token::Token;

pub trait Segmenter {
    fn segment(&mut self, input: &str) -> Result<Vec<Token>, Infeasible>;
    fn name(&self) -> &str;
}
