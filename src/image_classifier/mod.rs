pub mod classify;
pub mod prediction;
pub mod tensor;

#[cfg(test)]
mod tests;
