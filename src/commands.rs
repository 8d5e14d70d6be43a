use crate::cli::{Args, has_inline_name, is_config_update};
use person_names::{AppError, Config, NameStyle, PersonName};
use tracing::{info, warn};

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together or no name
/// source was given for a formatting run.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.input.is_some() && has_inline_name(args) {
        return Err(AppError::config_error(
            "Cannot use --input together with --first/--middle/--last",
        ));
    }

    if has_inline_name(args) && (args.first.is_none() || args.last.is_none()) {
        return Err(AppError::config_error(
            "Both --first and --last are required when naming a person inline",
        ));
    }

    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }

    let is_config_command = args.list_config || is_config_update(args);
    if !is_config_command && args.input.is_none() && !has_inline_name(args) {
        return Err(AppError::config_error(
            "Nothing to format: provide --first and --last, or --input <FILE>",
        ));
    }

    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-style, --set-log-file, --clear-log-file).
///
/// Starts from the stored config file as written, so environment overrides
/// never end up persisted. Defaults are used only when no file exists.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    update_config_at(&Config::get_config_path(), args).await?;

    if args.clear_log_file_path {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");
    Ok(())
}

async fn update_config_at(path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_stored(path).await.inspect_err(|e| {
        warn!("Refusing to overwrite unreadable config at {path}: {e}");
    })?;

    apply_config_updates(&mut config, args);
    config.validate()?;
    config.save_to_path(path).await?;
    Ok(config)
}

fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(style) = args.new_style {
        config.default_style = style;
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }
}

/// Handles a formatting run: resolves the people and styles, then prints one
/// line per person and style to stdout.
pub async fn handle_format_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let styles = resolve_styles(args, &config);

    let people = match &args.input {
        Some(path) => read_people(path).await?,
        None => vec![inline_person(args)?],
    };

    info!(
        "Formatting {} name(s) with styles {:?}",
        people.len(),
        styles
    );

    for line in render_lines(&people, &styles) {
        println!("{line}");
    }

    Ok(())
}

fn resolve_styles(args: &Args, config: &Config) -> Vec<NameStyle> {
    if args.all {
        NameStyle::ALL.to_vec()
    } else {
        vec![args.style.unwrap_or(config.default_style)]
    }
}

fn inline_person(args: &Args) -> Result<PersonName, AppError> {
    PersonName::new(
        args.first.as_deref().unwrap_or_default(),
        args.middle.as_deref(),
        args.last.as_deref().unwrap_or_default(),
    )
}

/// Reads a JSON array of person records from `path`.
async fn read_people(path: &str) -> Result<Vec<PersonName>, AppError> {
    let content = tokio::fs::read_to_string(path).await?;
    let people: Vec<PersonName> = serde_json::from_str(&content)?;
    info!("Read {} person record(s) from {path}", people.len());
    Ok(people)
}

/// Renders each person in each style. With a single style the bare name is
/// printed; with several, every line is prefixed by its style.
fn render_lines(people: &[PersonName], styles: &[NameStyle]) -> Vec<String> {
    let labelled = styles.len() > 1;
    people
        .iter()
        .flat_map(|person| {
            styles.iter().map(move |&style| {
                let formatted = person.format(style);
                if labelled {
                    format!("{style}: {formatted}")
                } else {
                    formatted
                }
            })
        })
        .collect()
}
