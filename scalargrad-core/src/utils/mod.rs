#[cfg(test)]
pub(crate) mod log_capture;
pub mod testing;
