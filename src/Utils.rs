/// logger set-up from the settings file
pub mod logging;
