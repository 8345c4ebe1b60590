pub mod label_set;
pub mod load;
pub mod normalization;

#[cfg(test)]
mod tests;
