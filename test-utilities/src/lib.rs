pub mod clock;

#[cfg(feature = "test_log")]
mod logging;
