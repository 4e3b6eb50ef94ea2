pub mod encounter;
pub mod sprites;
pub mod state;

#[cfg(test)]
mod tests;
