use clap::Parser;
use notekeep::cli::args::{Args, Command};

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notekeep"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notekeep", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { json } => assert_eq!(json, false),
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.config, None);
}

#[test]
fn given_json_flag_when_parsing_list_then_json_is_true() {
    // Arrange
    let args = vec!["notekeep", "list", "--json"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List { json } => assert_eq!(json, true),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_create_command_when_parsing_then_captures_fields() {
    // Arrange
    let args = vec!["notekeep", "create", "Groceries", "Milk and eggs"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Create {
            name,
            description,
            image,
        } => {
            assert_eq!(name, "Groceries");
            assert_eq!(description, "Milk and eggs");
            assert_eq!(image, None);
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn given_create_with_image_flag_when_parsing_then_captures_path() {
    // Arrange
    let args = vec![
        "notekeep",
        "create",
        "Trip",
        "Beach photos",
        "--image",
        "/tmp/beach.png",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Create { image, .. } => {
            assert_eq!(image, Some(std::path::PathBuf::from("/tmp/beach.png")));
        }
        _ => panic!("Expected Create command"),
    }
}

#[test]
fn given_create_without_description_when_parsing_then_fails() {
    // Arrange - both text fields are required, like the form
    let args = vec!["notekeep", "create", "Groceries"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_delete_command_when_parsing_then_captures_id() {
    // Arrange
    let args = vec!["notekeep", "delete", "note-123"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Delete { note_id } => assert_eq!(note_id, "note-123"),
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn given_login_command_when_parsing_then_captures_credentials() {
    // Arrange
    let args = vec![
        "notekeep",
        "login",
        "alice",
        "--token",
        "secret",
        "--identity",
        "identity-abc",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Login {
            username,
            token,
            identity,
        } => {
            assert_eq!(username, "alice");
            assert_eq!(token, "secret");
            assert_eq!(identity, "identity-abc");
        }
        _ => panic!("Expected Login command"),
    }
}

#[test]
fn given_global_config_flag_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec!["notekeep", "list", "-c", "/path/to/notekeep.toml"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(
        parsed.config,
        Some(std::path::PathBuf::from("/path/to/notekeep.toml"))
    );
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["notekeep", "-vv", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}
