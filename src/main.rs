use kisan_drishti::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap(),
        api_base: args.opt_value_from_str("--api-base").unwrap(),
    };

    app::run(flags)
}
