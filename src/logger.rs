use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

const CONFIG_FILE: &str = "log4rs.yaml";
const CONSOLE_APPENDER_NAME: &str = "console";
const CONSOLE_PATTERN: &str = "{d(%H:%M:%S)} {h({l:<5})} {m}{n}";

#[ctor::ctor]
fn init() {
    if std::path::Path::new(CONFIG_FILE).is_file()
        && log4rs::init_file(CONFIG_FILE, Default::default()).is_ok()
    {
        return;
    }
    if let Err(e) = init_console_logger() {
        eprintln!("Logger initialization failed: {}", e);
    }
}

fn init_console_logger() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let console = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build(CONSOLE_APPENDER_NAME, Box::new(console)))
        .build(
            Root::builder()
                .appender(CONSOLE_APPENDER_NAME)
                .build(LevelFilter::Info),
        )?;
    log4rs::init_config(config)?;
    Ok(())
}
