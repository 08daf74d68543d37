pub mod gemini;
#[cfg(test)]
pub mod mock;
