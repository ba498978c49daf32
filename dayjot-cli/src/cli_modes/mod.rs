mod calendar_mode;
mod cli_mode;
mod editor_utils;
mod info_mode;
mod read_mode;
mod session;
mod session_mode;

pub use calendar_mode::calendar_mode;
pub use cli_mode::CliModeResult;
pub use info_mode::info_mode;
pub use read_mode::read_mode;
pub use session_mode::session_mode;
