use clap::Parser;

use crate::{constants::game, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Width of the playing field in columns
    #[arg(value_name = "WIDTH", default_value_t = game::DEFAULT_WIDTH, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Height of the playing field in rows
    #[arg(value_name = "HEIGHT", default_value_t = game::DEFAULT_HEIGHT, value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Game ticks per second
    #[arg(
        value_name = "FPS",
        default_value_t = game::DEFAULT_FPS,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(game::MAX_FPS))
    )]
    pub fps: u32,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["flappy-term"]).unwrap();
        assert_eq!((cli.width, cli.height, cli.fps), (100, 20, 10));
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["flappy-term", "60", "15"]).unwrap();
        assert_eq!((cli.width, cli.height, cli.fps), (60, 15, 10));
    }

    #[test]
    fn test_rejects_non_positive_and_non_numeric() {
        for args in [["flappy-term", "0"], ["flappy-term", "-3"], ["flappy-term", "wide"]] {
            assert!(Cli::try_parse_from(args).is_err(), "{args:?}");
        }
        let err = Cli::try_parse_from(["flappy-term", "100", "20", "0"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_rejects_extra_arguments() {
        assert!(Cli::try_parse_from(["flappy-term", "1", "2", "3", "4"]).is_err());
    }
}
