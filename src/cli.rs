use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use person_names::NameStyle;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the arguments ask for a configuration change rather than formatting
pub fn is_config_update(args: &Args) -> bool {
    args.new_style.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// Determines if the arguments name a person directly on the command line
pub fn has_inline_name(args: &Args) -> bool {
    args.first.is_some() || args.middle.is_some() || args.last.is_some()
}

/// Person name formatter
///
/// Formats a person's name as a full name, a full name with middle initial,
/// or initials. Names come either from --first/--middle/--last or from a JSON
/// file holding an array of {"firstName", "middleName", "lastName"} records.
#[derive(Parser, Debug)]
#[command(about, version, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// First name of the person to format.
    #[arg(long, short = 'f', help_heading = "Name")]
    pub first: Option<String>,

    /// Middle name. Leave out entirely when the person has none.
    #[arg(long, short = 'm', help_heading = "Name")]
    pub middle: Option<String>,

    /// Last name of the person to format.
    #[arg(long, short = 'l', help_heading = "Name")]
    pub last: Option<String>,

    /// Read people from a JSON file containing an array of person records.
    #[arg(long, short = 'i', help_heading = "Name", value_name = "FILE")]
    pub input: Option<String>,

    /// Output style: full, middle-initial or initials. Defaults to the configured style.
    #[arg(long, short = 's', help_heading = "Output")]
    pub style: Option<NameStyle>,

    /// Print every style for each person instead of a single one.
    #[arg(long, short = 'a', help_heading = "Output", conflicts_with = "style")]
    pub all: bool,

    /// Update the default output style in config.
    #[arg(long = "set-style", help_heading = "Configuration", value_name = "STYLE")]
    pub new_style: Option<NameStyle>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Mirror log output to stderr in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_inline_name() {
        let args = Args::try_parse_from([
            "person_names",
            "--first",
            "John",
            "--middle",
            "Junior",
            "--last",
            "Smith",
        ])
        .unwrap();

        assert_eq!(args.first.as_deref(), Some("John"));
        assert_eq!(args.middle.as_deref(), Some("Junior"));
        assert_eq!(args.last.as_deref(), Some("Smith"));
        assert!(has_inline_name(&args));
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_parse_style() {
        let args =
            Args::try_parse_from(["person_names", "-f", "John", "-l", "Smith", "-s", "initials"])
                .unwrap();
        assert_eq!(args.style, Some(NameStyle::Initials));
    }

    #[test]
    fn test_parse_unknown_style_fails() {
        let result = Args::try_parse_from(["person_names", "--style", "nickname"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_all_conflicts_with_style() {
        let result = Args::try_parse_from(["person_names", "--all", "--style", "full"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_update_flags() {
        let args = Args::try_parse_from(["person_names", "--set-style", "middle-initial"]).unwrap();
        assert_eq!(args.new_style, Some(NameStyle::MiddleInitial));
        assert!(is_config_update(&args));

        let args = Args::try_parse_from(["person_names", "--clear-log-file"]).unwrap();
        assert!(is_config_update(&args));
        assert!(!has_inline_name(&args));
    }
}
