pub mod batch;
pub mod new;
pub mod progress;
pub mod show;
