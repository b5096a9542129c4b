#[cfg(test)]
mod resolver;
