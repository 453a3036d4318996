pub mod email;
pub mod form;
pub mod jobs;
pub mod probes;
pub mod ui;
