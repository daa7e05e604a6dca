#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_parse_command_arguments() {
        let cli = Cli::try_parse_from([
            "compdoc",
            "parse",
            "src/components",
            "Extra.vue",
            "--out",
            "docs/components.json",
            "--jsx",
            "--compact",
        ])
        .unwrap();

        let Command::Parse(args) = cli.command;
        assert_eq!(
            args.inputs,
            [PathBuf::from("src/components"), PathBuf::from("Extra.vue")]
        );
        assert_eq!(args.out, Some(PathBuf::from("docs/components.json")));
        assert!(args.jsx);
        assert!(args.compact);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["compdoc", "parse", "a.vue", "--verbose", "--no-color"])
            .unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["compdoc", "-v", "-q", "parse", "a.vue"]).is_err());
    }

    #[test]
    fn test_inputs_may_come_from_config() {
        let cli = Cli::try_parse_from(["compdoc", "parse", "--config", "custom.json"]).unwrap();
        let Command::Parse(args) = cli.command;
        assert!(args.inputs.is_empty());
        assert_eq!(args.config, Some(PathBuf::from("custom.json")));
    }
}
