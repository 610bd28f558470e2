pub mod config;
pub mod factor;
pub mod record;
pub mod report;
pub mod scored;
pub mod validation;
