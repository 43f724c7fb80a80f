use super::*;

mod test_helpers {
    use super::*;

    pub(super) fn parse_args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv)
            .unwrap_or_else(|err| panic!("argv={argv:?} should parse successfully: {err}"))
    }
}

use test_helpers::parse_args;

#[test]
fn no_subcommand_means_translator() {
    let args = parse_args(&["autotranslate"]);
    assert!(args.command.is_none());
    assert_eq!(args.verbose, 0);
    assert!(args.log_file.is_none());
}

#[test]
fn verbosity_and_log_file_are_global() {
    let args = parse_args(&["autotranslate", "serve", "-vv", "--log-file", "/tmp/at.log"]);
    assert_eq!(args.verbose, 2);
    assert_eq!(
        args.log_file.as_deref(),
        Some(std::path::Path::new("/tmp/at.log"))
    );
    match args.command {
        Some(Commands::Serve { listen }) => assert_eq!(listen, None),
        _ => panic!("expected serve"),
    }
}

#[test]
fn serve_accepts_listen_override() {
    let argv = ["autotranslate", "serve", "--listen", "0.0.0.0:8080"];
    match parse_args(&argv).command {
        Some(Commands::Serve { listen }) => assert_eq!(listen.as_deref(), Some("0.0.0.0:8080")),
        _ => panic!("argv={argv:?} should parse as serve"),
    }
}

#[test]
fn tui_takes_languages_and_backend() {
    let argv = [
        "autotranslate",
        "tui",
        "--from",
        "de",
        "--to",
        "ja",
        "--proxy-url",
        "http://10.0.0.2:3000",
    ];
    match parse_args(&argv).command {
        Some(Commands::Tui { from, to, backend }) => {
            assert_eq!(from.as_deref(), Some("de"));
            assert_eq!(to.as_deref(), Some("ja"));
            assert_eq!(backend.proxy_url.as_deref(), Some("http://10.0.0.2:3000"));
            assert!(!backend.embedded);
        }
        _ => panic!("argv={argv:?} should parse as tui"),
    }
}

#[test]
fn embedded_conflicts_with_proxy_url() {
    let result = Args::try_parse_from([
        "autotranslate",
        "tui",
        "--embedded",
        "--proxy-url",
        "http://x",
    ]);
    assert!(result.is_err());
}

#[test]
fn translate_collects_text_words() {
    let argv = [
        "autotranslate",
        "translate",
        "--to",
        "fr",
        "Where",
        "is",
        "-the-",
        "station?",
    ];
    match parse_args(&argv).command {
        Some(Commands::Translate {
            from,
            to,
            backend,
            text,
        }) => {
            assert_eq!(from, None);
            assert_eq!(to.as_deref(), Some("fr"));
            assert!(!backend.embedded);
            assert_eq!(text.join(" "), "Where is -the- station?");
        }
        _ => panic!("argv={argv:?} should parse as translate"),
    }
}

#[test]
fn set_without_key_shows_config() {
    match parse_args(&["autotranslate", "set"]).command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key, None);
            assert!(value.is_empty());
        }
        _ => panic!("expected set"),
    }

    match parse_args(&["autotranslate", "set", "model", "org/model", "v2"]).command {
        Some(Commands::Set { key, value }) => {
            assert_eq!(key.as_deref(), Some("model"));
            assert_eq!(value, vec!["org/model", "v2"]);
        }
        _ => panic!("expected set"),
    }
}

#[test]
fn unset_requires_key() {
    assert!(Args::try_parse_from(["autotranslate", "unset"]).is_err());
    assert!(matches!(
        parse_args(&["autotranslate", "unset", "listen"]).command,
        Some(Commands::Unset { .. })
    ));
}
