use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["trendscope"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_report_with_defaults() {
    let cli = Cli::try_parse_from(["trendscope", "report"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            sources: SourceArgs {
                sample: false,
                no_youtube: false,
                no_google_trends: false,
            },
            json: false,
        })
    ));
}

#[test]
fn parses_report_with_all_flags() {
    let cli = Cli::try_parse_from([
        "trendscope",
        "report",
        "--json",
        "--sample",
        "--no-youtube",
        "--no-google-trends",
    ])
    .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Report {
            sources: SourceArgs {
                sample: true,
                no_youtube: true,
                no_google_trends: true,
            },
            json: true,
        })
    ));
}

#[test]
fn parses_posts_command() {
    let cli = Cli::try_parse_from(["trendscope", "posts", "--no-youtube"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Posts {
            sources: SourceArgs {
                sample: false,
                no_youtube: true,
                no_google_trends: false,
            },
            json: false,
        })
    ));
}

#[test]
fn parses_posts_json() {
    let cli =
        Cli::try_parse_from(["trendscope", "posts", "--json"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Posts { json: true, .. })));
}

#[test]
fn rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["trendscope", "collect"]).is_err());
}

#[test]
fn rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["trendscope", "report", "--verbose-ish"]).is_err());
}

#[test]
fn help_is_handled_by_clap_before_any_config_is_read() {
    let err = Cli::try_parse_from(["trendscope", "--help"]).expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn subcommand_help_is_handled_by_clap() {
    let err = Cli::try_parse_from(["trendscope", "report", "--help"])
        .expect_err("help exits early");
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}
