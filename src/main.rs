use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;
use user_registry::{ErrorReport, RegistryError, RegistryStore};

/// Read and write values under HKEY_CURRENT_USER
#[derive(Debug, Parser)]
#[command(name = "user-registry")]
#[command(about = "Read and write string and DWORD values under HKEY_CURRENT_USER", long_about = None)]
struct Cli {
    /// Print one JSON object instead of the plain value
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Read a REG_SZ value
    GetString {
        /// Key path relative to the hive, e.g. Software\YourGame\Settings
        key_path: String,
        value_name: String,
    },
    /// Write a REG_SZ value, creating the key when missing
    SetString {
        /// Key path relative to the hive, e.g. Software\YourGame\Settings
        key_path: String,
        value_name: String,
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
    /// Read a REG_DWORD value
    GetDword {
        /// Key path relative to the hive, e.g. Software\YourGame\Settings
        key_path: String,
        value_name: String,
    },
    /// Write a REG_DWORD value, creating the key when missing
    SetDword {
        /// Key path relative to the hive, e.g. Software\YourGame\Settings
        key_path: String,
        value_name: String,
        number: u32,
    },
}

impl Command {
    fn location(&self) -> (&str, &str) {
        match self {
            Self::GetString {
                key_path,
                value_name,
            }
            | Self::SetString {
                key_path,
                value_name,
                ..
            }
            | Self::GetDword {
                key_path,
                value_name,
            }
            | Self::SetDword {
                key_path,
                value_name,
                ..
            } => (key_path.as_str(), value_name.as_str()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Value {
    Text(String),
    Number(u32),
}

#[derive(Debug, Serialize)]
struct Outcome {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorReport>,
}

fn execute(store: &impl RegistryStore, command: &Command) -> Result<Option<Value>, RegistryError> {
    let (key, name) = command.location();
    match command {
        Command::GetString { .. } => store.read_string(key, name).map(|t| Some(Value::Text(t))),
        Command::GetDword { .. } => store.read_dword(key, name).map(|n| Some(Value::Number(n))),
        Command::SetString { text, .. } => store.write_string(key, name, text).map(|()| None),
        Command::SetDword { number, .. } => store.write_dword(key, name, *number).map(|()| None),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let result = execute(&user_registry::current_user(), &cli.command);

    if cli.json {
        let outcome = match result {
            Ok(value) => Outcome {
                success: true,
                value,
                error: None,
            },
            Err(e) => Outcome {
                success: false,
                value: None,
                error: Some(e.report()),
            },
        };
        println!("{}", serde_json::to_string(&outcome)?);
        if !outcome.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    let (key_path, value_name) = cli.command.location();
    match result.with_context(|| format!("{}\\{}", key_path, value_name))? {
        Some(Value::Text(text)) => println!("{}", text),
        Some(Value::Number(number)) => println!("{}", number),
        None => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use user_registry::MemoryStore;

    fn parse(list: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("user-registry").chain(list.iter().copied()))
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_dword() {
        let cli = parse(&["set-dword", r"Software\Game", "Level", "4294967295"]).unwrap();
        assert!(!cli.json);
        assert!(matches!(cli.command, Command::SetDword { number: u32::MAX, .. }));
        assert_eq!(cli.command.location(), (r"Software\Game", "Level"));
    }

    #[test]
    fn test_parse_json_flag_after_subcommand() {
        let cli = parse(&["get-string", "--json", r"Software\Game", "Name"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Command::GetString { .. }));
    }

    #[test]
    fn test_parse_text_starting_with_dashes() {
        let cli = parse(&["set-string", r"Software\Game", "Motto", "--never-give-up"]).unwrap();
        match cli.command {
            Command::SetString { text, .. } => assert_eq!(text, "--never-give-up"),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_names_after_separator() {
        let cli = parse(&["get-dword", "--", r"Software\Game", "--level"]).unwrap();
        assert_eq!(cli.command.location(), (r"Software\Game", "--level"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse(&["set-dword", r"Software\Game", "Level", "-1"]).is_err());
        assert!(parse(&["set-dword", r"Software\Game", "Level", "4294967296"]).is_err());
        assert!(parse(&["get-string", r"Software\Game"]).is_err());
        assert!(parse(&["get-string", r"Software\Game", "Name", "extra"]).is_err());
        assert!(parse(&["set-string", r"Software\Game", "Name"]).is_err());
        assert!(parse(&["--verbose", "get-dword", r"Software\Game", "Level"]).is_err());
    }

    #[test]
    fn test_execute_against_memory_store() {
        let store = MemoryStore::new();
        let set = parse(&["set-string", r"Software\Game", "Name", "Ada Lovelace"]).unwrap();
        assert!(execute(&store, &set.command).unwrap().is_none());

        let get = parse(&["get-string", r"Software\Game", "Name"]).unwrap();
        match execute(&store, &get.command).unwrap() {
            Some(Value::Text(text)) => assert_eq!(text, "Ada Lovelace"),
            other => panic!("expected text, got {:?}", other),
        }

        let wrong_type = parse(&["get-dword", r"Software\Game", "Name"]).unwrap();
        let err = execute(&store, &wrong_type.command).unwrap_err();
        assert!(matches!(err, RegistryError::TypeMismatch(_)));
    }

    #[test]
    fn test_outcome_json_shape() {
        let outcome = Outcome {
            success: true,
            value: Some(Value::Number(7)),
            error: None,
        };
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"success":true,"value":7}"#
        );
    }
}
