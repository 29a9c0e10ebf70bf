//! Log output shared by the command-line and desktop front-ends.
use log::LevelFilter;
use std::io;

/// Installs a [`fern`] logger writing to stderr at `level`.
///
/// Messages at info level are printed bare, everything else is prefixed with
/// its level.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            if record.level() == log::Level::Info {
                out.finish(format_args!("{message}"))
            } else {
                out.finish(format_args!(
                    "{}: {message}",
                    record.level().as_str().to_ascii_lowercase()
                ))
            }
        })
        .level(LevelFilter::Off)
        .level_for("libwamap", level)
        .level_for("wa_map_maker", level)
        .level_for("wa_map_maker_gui", level)
        .chain(io::stderr())
        .apply()
}
