mod auth;
mod browse;
mod config;
mod feedback;

pub use auth::{cmd_login, cmd_logout, cmd_whoami};
pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use feedback::cmd_feedback;
